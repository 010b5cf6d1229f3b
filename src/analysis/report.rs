use super::metrics::Analysis;
use crate::dashboard::{Dashboard, Trace};
use eyre::Result;

/// Figure title
pub const DASHBOARD_TITLE: &str = "Data Analysis Dashboard";
/// Panel (1, 1)
pub const PERCENT_DIFFERENCE_TITLE: &str = "ETH Swapped vs Price Change Percent Difference";
/// Panel (1, 2)
pub const SWAP_RATE_TITLE: &str = "ETH Swapped vs Effective Swap Rate";
/// Panel (2, 1)
pub const TOKENS_RETURNED_TITLE: &str = "ETH Swapped vs Swap Tokens Returned";
/// Panel (2, 2)
pub const BALANCES_TITLE: &str = "Current swETH Pool Balance & ETH Pool Balance";
/// Bar categories of the balance panel
pub const BALANCE_CATEGORIES: [&str; 2] = ["swETH Balance", "ETH Balance"];

/// Lays an analysis out on the 2x2 cost-of-attack dashboard.
///
/// The three scatter panels plot against the ETH swapped. The balance panel
/// is left empty when the dump carried no balance line.
///
/// # Errors
/// * If a panel cannot be placed on the grid
pub fn build_dashboard(analysis: &Analysis) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new(DASHBOARD_TITLE, 2, 2).with_legend(false);
    let amount_specified = analysis.amount_specified();

    dashboard
        .add_panel(1, 1, PERCENT_DIFFERENCE_TITLE)?
        .push(Trace::scatter(
            "Percent Difference",
            amount_specified.clone(),
            analysis.percent_difference.clone(),
        ));

    dashboard
        .add_panel(1, 2, SWAP_RATE_TITLE)?
        .push(Trace::scatter(
            "Effective Swap Rate",
            amount_specified.clone(),
            analysis.effective_swap_rate.clone(),
        ));

    dashboard
        .add_panel(2, 1, TOKENS_RETURNED_TITLE)?
        .push(Trace::scatter(
            "Swap Tokens Returned",
            amount_specified,
            analysis.swap_received(),
        ));

    let balances = dashboard.add_panel(2, 2, BALANCES_TITLE)?;
    if let Some(pool) = analysis.balances {
        balances.push(Trace::bar(&BALANCE_CATEGORIES, vec![pool.sweth, pool.eth]));
    }

    Ok(dashboard)
}
