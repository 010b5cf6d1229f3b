/// Token amounts in the trial dumps are 18-decimal fixed point
pub const TOKEN_DECIMALS: u32 = 18;
/// `10^TOKEN_DECIMALS`
pub const WEI_PER_TOKEN: u64 = 10_u64.pow(TOKEN_DECIMALS);
/// Where the dashboard is written when nothing else is configured
pub const DEFAULT_DASHBOARD_PATH: &str = "./offchain/files/output.html";
/// Market label stored with uploaded trials
pub const DEFAULT_MARKET: &str = "swETH";
/// AMM provider label stored with uploaded trials
pub const DEFAULT_AMM_PROVIDER: &str = "Uniswap";
/// Postgres port used when `DB_PORT` is not set
pub const DEFAULT_DB_PORT: u16 = 5432;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wei_per_token() {
        assert_eq!(WEI_PER_TOKEN, 1_000_000_000_000_000_000);
    }
}
