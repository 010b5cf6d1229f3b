use super::loader::{AMOUNT_SPECIFIED, NEW_PRICE, OLD_PRICE, SWAP_RECEIVED};
use super::types::{PoolBalances, SwapTrial, TrialDump};
use std::path::{Path, PathBuf};

/// Raw row: amountSpecified, oldPrice, newPrice, swapReceived
pub type RawRow<'a> = (&'a str, &'a str, &'a str, &'a str);

#[allow(dead_code)]
pub fn dump_text(balances: Option<(&str, &str)>, rows: &[RawRow]) -> String {
    let mut text = String::new();
    if let Some((sweth, eth)) = balances {
        text.push_str(&format!("{sweth},{eth}\n"));
    }
    text.push_str(&format!(
        "{AMOUNT_SPECIFIED},{OLD_PRICE},{NEW_PRICE},{SWAP_RECEIVED}\n"
    ));
    for (amount, old, new, received) in rows {
        text.push_str(&format!("{amount},{old},{new},{received}\n"));
    }
    text
}

#[allow(dead_code)]
#[allow(clippy::unwrap_used)]
pub fn write_dump(dir: &Path, balances: Option<(&str, &str)>, rows: &[RawRow]) -> PathBuf {
    let path = dir.join("trials.csv");
    std::fs::write(&path, dump_text(balances, rows)).unwrap();
    path
}

#[allow(dead_code)]
pub fn trial(amount_specified: f64, old_price: f64, new_price: f64, swap_received: f64) -> SwapTrial {
    SwapTrial {
        amount_specified,
        old_price,
        new_price,
        swap_received,
    }
}

#[allow(dead_code)]
pub fn dump(balances: Option<(f64, f64)>, trials: &[(f64, f64, f64, f64)]) -> TrialDump {
    TrialDump {
        balances: balances.map(|(sweth, eth)| PoolBalances { sweth, eth }),
        trials: trials
            .iter()
            .map(|(amount, old, new, received)| trial(*amount, *old, *new, *received))
            .collect(),
    }
}
