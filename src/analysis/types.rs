use std::fmt::{self, Display};

/// Pool balances carried on the optional first line of a dump, in whole tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolBalances {
    /// swETH held by the pool
    pub sweth: f64,
    /// ETH held by the pool
    pub eth: f64,
}

/// One simulated swap against the forked pool, in whole tokens.
///
/// Cells that could not be read as numbers are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapTrial {
    /// ETH sent into the swap
    pub amount_specified: f64,
    /// Pool price before the swap
    pub old_price: f64,
    /// Pool price after the swap
    pub new_price: f64,
    /// Tokens received from the swap
    pub swap_received: f64,
}

/// Everything read from one trial dump
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialDump {
    /// Balances from the leading `swETH,ETH` line, if the dump had one
    pub balances: Option<PoolBalances>,
    /// Trials in file order
    pub trials: Vec<SwapTrial>,
}

impl TrialDump {
    /// Number of trials in the dump
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether the dump holds no trials
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

/// Which way round the effective swap rate is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateOrientation {
    /// `swapReceived / amountSpecified`: tokens out per ETH in
    #[default]
    ReceivedPerSpecified,
    /// `amountSpecified / swapReceived`: ETH in per token out
    SpecifiedPerReceived,
}

impl RateOrientation {
    /// Picks the orientation from the `--invert-rate` flag
    #[must_use]
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Self::SpecifiedPerReceived
        } else {
            Self::ReceivedPerSpecified
        }
    }
}

impl Display for RateOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReceivedPerSpecified => write!(f, "swapReceived/amountSpecified"),
            Self::SpecifiedPerReceived => write!(f, "amountSpecified/swapReceived"),
        }
    }
}
