use super::types::{PoolBalances, RateOrientation, SwapTrial, TrialDump};

/// Price move caused by a swap, in percent of the old price.
///
/// A zero old price gives `±inf` or `NaN`, same as any float column maths.
#[must_use]
pub fn percent_difference(old_price: f64, new_price: f64) -> f64 {
    (new_price - old_price) / old_price * 100.0
}

/// Ratio between what a swap returned and what was put in
#[must_use]
pub fn effective_swap_rate(trial: &SwapTrial, orientation: RateOrientation) -> f64 {
    match orientation {
        RateOrientation::ReceivedPerSpecified => trial.swap_received / trial.amount_specified,
        RateOrientation::SpecifiedPerReceived => trial.amount_specified / trial.swap_received,
    }
}

/// A trial dump with its derived columns.
///
/// The derived columns are index aligned with `trials`.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Pool balances from the dump, if any
    pub balances: Option<PoolBalances>,
    /// Trials in file order
    pub trials: Vec<SwapTrial>,
    /// `percentDifference` for each trial
    pub percent_difference: Vec<f64>,
    /// `effectiveSwapRate` for each trial
    pub effective_swap_rate: Vec<f64>,
    /// How `effective_swap_rate` was computed
    pub orientation: RateOrientation,
}

impl Analysis {
    /// Derives the metric columns for every trial in the dump
    #[must_use]
    pub fn derive(dump: TrialDump, orientation: RateOrientation) -> Self {
        let percent_difference = dump
            .trials
            .iter()
            .map(|trial| percent_difference(trial.old_price, trial.new_price))
            .collect();
        let effective_swap_rate = dump
            .trials
            .iter()
            .map(|trial| effective_swap_rate(trial, orientation))
            .collect();

        Self {
            balances: dump.balances,
            trials: dump.trials,
            percent_difference,
            effective_swap_rate,
            orientation,
        }
    }

    /// `amountSpecified` column
    #[must_use]
    pub fn amount_specified(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.amount_specified).collect()
    }

    /// `swapReceived` column
    #[must_use]
    pub fn swap_received(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.swap_received).collect()
    }

    /// Number of analyzed trials
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether there is nothing to plot
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}
