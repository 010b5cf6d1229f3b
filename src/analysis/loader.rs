//! Reading trial dumps.
//!
//! A dump is a CSV file written by the fork simulation. It may start with a
//! single `swETH,ETH` balance line ahead of the column header. All amounts are
//! 18-decimal fixed point and are converted to whole tokens on the way in.

use super::types::{PoolBalances, SwapTrial, TrialDump};
use crate::utils::constants::WEI_PER_TOKEN;
use bigdecimal::{BigDecimal, ToPrimitive};
use csv::{ReaderBuilder, StringRecord, Trim};
use eyre::{bail, Result, WrapErr};
use itertools::Itertools;
use log::debug;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Largest decimal exponent scaled exactly; beyond it `f64` saturates anyway
const MAX_EXACT_EXPONENT: i64 = 1_000;

/// Column holding the ETH sent into each swap
pub const AMOUNT_SPECIFIED: &str = "amountSpecified";
/// Column holding the price before each swap
pub const OLD_PRICE: &str = "oldPrice";
/// Column holding the price after each swap
pub const NEW_PRICE: &str = "newPrice";
/// Column holding the tokens received from each swap
pub const SWAP_RECEIVED: &str = "swapReceived";

/// Loads a trial dump from disk.
///
/// # Returns
/// * `Ok(None)` if the file is empty, e.g. it was already consumed
/// * `Ok(Some(dump))` otherwise
///
/// # Errors
/// * If the file cannot be read
/// * If the column header lacks one of the required columns
/// * If the CSV body is malformed
pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<TrialDump>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read trial dump {}", path.display()))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let dump =
        parse(&contents).wrap_err_with(|| format!("Failed to parse trial dump {}", path.display()))?;
    debug!(
        "analysis::load: {} trials from {} (balances: {})",
        dump.len(),
        path.display(),
        dump.balances.is_some()
    );
    Ok(Some(dump))
}

/// Parses the text of a non-empty trial dump.
///
/// # Errors
/// * If the column header lacks one of the required columns
/// * If the CSV body is malformed
pub fn parse(contents: &str) -> Result<TrialDump> {
    let (balances, body) = split_balance_line(contents);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers)?;

    let mut trials = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        trials.push(columns.trial(&record));
    }

    Ok(TrialDump { balances, trials })
}

/// Converts one raw 18-decimal amount into whole tokens.
///
/// Integer and decimal strings are scaled exactly before the conversion to
/// `f64`. Anything else `f64` can read (`inf`, `NaN`, exponents far outside
/// the `f64` range) is scaled as a float, saturating to `0` or `inf`.
///
/// # Returns
/// `None` when the text is not a number
#[must_use]
pub fn to_token_units(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(value) = exact_decimal(raw) {
        // Round once, from the exact quotient
        let tokens = value / BigDecimal::from(WEI_PER_TOKEN);
        return tokens.to_string().parse::<f64>().ok().or_else(|| tokens.to_f64());
    }

    #[allow(clippy::cast_precision_loss)]
    raw.parse::<f64>()
        .ok()
        .map(|value| value / WEI_PER_TOKEN as f64)
}

/// `raw` as a `BigDecimal`, unless its exponent is out of the exact range
fn exact_decimal(raw: &str) -> Option<BigDecimal> {
    if let Some((_, exponent)) = raw.split_once(['e', 'E']) {
        let exponent = exponent.parse::<i64>().ok()?;
        if exponent.abs() > MAX_EXACT_EXPONENT {
            return None;
        }
    }
    BigDecimal::from_str(raw).ok()
}

/// Splits off the leading balance line when there is one.
///
/// The first line counts as a balance line only if it holds exactly two
/// numeric fields; a column header never does.
fn split_balance_line(contents: &str) -> (Option<PoolBalances>, &str) {
    let (first, rest) = contents.split_once('\n').unwrap_or((contents, ""));

    let balances = first
        .trim()
        .split(',')
        .map(to_token_units)
        .collect_tuple::<(_, _)>()
        .and_then(|(sweth, eth)| Some(PoolBalances { sweth: sweth?, eth: eth? }));

    match balances {
        Some(balances) => (Some(balances), rest),
        None => (None, contents),
    }
}

/// Positions of the required columns in the header
struct Columns {
    /// Index of `amountSpecified`
    amount_specified: usize,
    /// Index of `oldPrice`
    old_price: usize,
    /// Index of `newPrice`
    new_price: usize,
    /// Index of `swapReceived`
    swap_received: usize,
}

impl Columns {
    /// Finds every required column, failing on the first one missing
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            match headers.iter().position(|header| header == name) {
                Some(index) => Ok(index),
                None => bail!("missing required column `{name}`"),
            }
        };

        Ok(Self {
            amount_specified: find(AMOUNT_SPECIFIED)?,
            old_price: find(OLD_PRICE)?,
            new_price: find(NEW_PRICE)?,
            swap_received: find(SWAP_RECEIVED)?,
        })
    }

    /// Reads one row, coercing unreadable or absent cells to `NaN`
    fn trial(&self, record: &StringRecord) -> SwapTrial {
        let cell = |index: usize| {
            record
                .get(index)
                .and_then(to_token_units)
                .unwrap_or(f64::NAN)
        };

        SwapTrial {
            amount_specified: cell(self.amount_specified),
            old_price: cell(self.old_price),
            new_price: cell(self.new_price),
            swap_received: cell(self.swap_received),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::analysis::test_helpers::{dump_text, write_dump};

    #[test]
    fn test_to_token_units() {
        for (raw, expected) in [
            ("1000000000000000000", 1.0),
            ("2500000000000000000", 2.5),
            ("1e18", 1.0),
            (" 500000000000000000 ", 0.5),
            ("0", 0.0),
            ("-3000000000000000000", -3.0),
        ] {
            assert_eq!(to_token_units(raw), Some(expected), "{raw}");
        }

        assert_eq!(to_token_units(""), None);
        assert_eq!(to_token_units("abc"), None);
        assert!(to_token_units("NaN").unwrap().is_nan());
        assert_eq!(to_token_units("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_to_token_units_extreme_exponents() {
        assert_eq!(to_token_units("1e-9223372036854775807"), Some(0.0));
        assert_eq!(to_token_units("1e9223372036854775807"), Some(f64::INFINITY));
        assert_eq!(to_token_units("-2.5E400000"), Some(f64::NEG_INFINITY));
        assert_eq!(to_token_units("2.5e+18"), Some(2.5));
    }

    #[test]
    fn test_parse_with_balance_line() {
        let text = dump_text(
            Some(("4000000000000000000000", "3500000000000000000000")),
            &[
                ("1000000000000000000", "1000000000000000000", "1100000000000000000", "900000000000000000"),
                ("2000000000000000000", "1000000000000000000", "1200000000000000000", "1700000000000000000"),
            ],
        );

        let dump = parse(&text).unwrap();
        assert_eq!(
            dump.balances,
            Some(PoolBalances {
                sweth: 4000.0,
                eth: 3500.0
            })
        );
        assert_eq!(dump.len(), 2);
        assert_eq!(
            dump.trials[1],
            SwapTrial {
                amount_specified: 2.0,
                old_price: 1.0,
                new_price: 1.2,
                swap_received: 1.7,
            }
        );
    }

    #[test]
    fn test_parse_without_balance_line() {
        let text = dump_text(
            None,
            &[("1000000000000000000", "1000000000000000000", "1000000000000000000", "1000000000000000000")],
        );

        let dump = parse(&text).unwrap();
        assert_eq!(dump.balances, None);
        assert_eq!(dump.len(), 1);
    }

    #[test]
    fn test_parse_column_order_and_extra_columns() {
        let text = "swapReceived,blockNumber,newPrice,amountSpecified,oldPrice\n\
                    3000000000000000000,17000000,2000000000000000000,4000000000000000000,1000000000000000000\n";

        let dump = parse(text).unwrap();
        assert_eq!(
            dump.trials,
            vec![SwapTrial {
                amount_specified: 4.0,
                old_price: 1.0,
                new_price: 2.0,
                swap_received: 3.0,
            }]
        );
    }

    #[test]
    fn test_parse_coerces_bad_cells() {
        let text = "amountSpecified,oldPrice,newPrice,swapReceived\n\
                    1000000000000000000,oops,,2000000000000000000\n\
                    1000000000000000000\n";

        let dump = parse(text).unwrap();
        assert_eq!(dump.len(), 2);
        assert_eq!(dump.trials[0].amount_specified, 1.0);
        assert!(dump.trials[0].old_price.is_nan());
        assert!(dump.trials[0].new_price.is_nan());
        assert_eq!(dump.trials[0].swap_received, 2.0);
        // short row
        assert!(dump.trials[1].swap_received.is_nan());
    }

    #[test]
    fn test_parse_header_only() {
        let dump = parse("1,2\namountSpecified,oldPrice,newPrice,swapReceived\n").unwrap();
        assert!(dump.is_empty());
        assert!(dump.balances.is_some());
    }

    #[test]
    fn test_parse_missing_column() {
        let err = parse("amountSpecified,oldPrice,swapReceived\n1,2,3\n").unwrap_err();
        assert_eq!(err.to_string(), "missing required column `newPrice`");
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trials.csv");
        std::fs::write(&path, "").unwrap();

        assert_eq!(load(&path).unwrap(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.csv")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read trial dump"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dump(
            dir.path(),
            Some(("1000000000000000000", "2000000000000000000")),
            &[("1000000000000000000", "1000000000000000000", "1010000000000000000", "990000000000000000")],
        );

        let dump = load(&path).unwrap().unwrap();
        assert_eq!(dump.len(), 1);
        assert_eq!(
            dump.balances,
            Some(PoolBalances {
                sweth: 1.0,
                eth: 2.0
            })
        );
    }
}
