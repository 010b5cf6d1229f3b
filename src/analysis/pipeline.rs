use super::loader;
use super::metrics::Analysis;
use super::report::build_dashboard;
use super::types::RateOrientation;
use crate::dashboard::html;
use crate::utils::file::truncate;
use eyre::Result;
use log::{info, warn};
use std::path::PathBuf;

/// Inputs of one `analyze` run
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Trial dump to read
    pub input: PathBuf,
    /// Where the dashboard goes
    pub output: PathBuf,
    /// How the effective swap rate is taken
    pub orientation: RateOrientation,
    /// Leave the input untouched after a successful run
    pub keep_input: bool,
}

/// Loads a trial dump, derives its metrics, writes the dashboard and then
/// empties the dump.
///
/// The input is only truncated once the dashboard is on disk.
///
/// # Returns
/// * `Ok(Some(path))` - the dashboard that was written
/// * `Ok(None)` - the dump was empty; nothing was written or truncated
///
/// # Errors
/// * If the dump cannot be read or parsed
/// * If the dashboard cannot be written
/// * If the dump cannot be truncated afterwards
pub fn run(options: &AnalyzeOptions) -> Result<Option<PathBuf>> {
    info!("analysis::run: Reading data from file: {}", options.input.display());

    let Some(dump) = loader::load(&options.input)? else {
        warn!(
            "analysis::run: {} is empty, nothing to analyze",
            options.input.display()
        );
        return Ok(None);
    };

    let analysis = Analysis::derive(dump, options.orientation);
    info!(
        "analysis::run: {} trials, effective swap rate as {}",
        analysis.len(),
        analysis.orientation
    );

    let dashboard = build_dashboard(&analysis)?;
    html::write(&dashboard, &options.output)?;
    info!(
        "analysis::run: Combined HTML file generated successfully: {}",
        options.output.display()
    );

    if !options.keep_input {
        truncate(&options.input)?;
    }

    Ok(Some(options.output.clone()))
}
