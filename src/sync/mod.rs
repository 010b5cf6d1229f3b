/// Etherscan client
///
/// Maps unix timestamps onto block numbers.
pub mod etherscan;
/// Exchange rate history
///
/// Reads a week of daily exchange rates from the liquid staking token
/// contracts.
///
/// # Errors
/// Returns an error if a block lookup or contract call fails
pub mod exchange_rates;
/// Sampling schedule
pub mod schedule;

pub use exchange_rates::exchange_rates;
