use crate::analysis::SwapTrial;
use diesel::Insertable;

/// A swap trial ready to be inserted.
///
/// Amounts are whole tokens; cells that were not numbers become `NULL`.
#[derive(Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schemas::amm_cost_of_attack_data)]
pub struct NewAttackData {
    /// Pool price before the swap
    pub old_price: Option<f64>,
    /// Pool price after the swap
    pub new_price: Option<f64>,
    /// Tokens received from the swap
    pub swap_received: Option<f64>,
    /// ETH sent into the swap
    pub eth_sent: Option<f64>,
    /// Market label
    pub market: String,
    /// AMM label
    pub amm_provider: String,
    /// Unix seconds of the upload batch
    pub recorded_at: i64,
}

impl NewAttackData {
    /// Builds a row for one trial of an upload batch
    #[must_use]
    pub fn from_trial(trial: &SwapTrial, market: &str, amm_provider: &str, recorded_at: i64) -> Self {
        Self {
            old_price: finite(trial.old_price),
            new_price: finite(trial.new_price),
            swap_received: finite(trial.swap_received),
            eth_sent: finite(trial.amount_specified),
            market: market.to_string(),
            amm_provider: amm_provider.to_string(),
            recorded_at,
        }
    }
}

/// Non-finite values are stored as NULL
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
