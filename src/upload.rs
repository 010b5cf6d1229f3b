//! Uploading trial dumps to Postgres.
//!
//! Uploading reads the same dumps as `analyze`. Every trial becomes one
//! `amm_cost_of_attack_data` row stamped with the upload time, and the dump is
//! emptied once the batch has been committed.

use crate::analysis::{loader, TrialDump};
use crate::db_service::AttackDataService;
use crate::models::attack_data::NewAttackData;
use crate::utils::file::truncate;
use chrono::Utc;
use diesel::pg::PgConnection;
use eyre::{Result, WrapErr};
use log::{info, warn};
use std::path::PathBuf;

/// Inputs of one `upload` run
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Trial dump to read
    pub input: PathBuf,
    /// Market label stored with every row
    pub market: String,
    /// AMM label stored with every row
    pub amm_provider: String,
    /// Leave the input untouched after a successful upload
    pub keep_input: bool,
}

/// Builds the rows of one upload batch; all rows share `recorded_at`
#[must_use]
pub fn rows_for(dump: &TrialDump, market: &str, amm_provider: &str, recorded_at: i64) -> Vec<NewAttackData> {
    dump.trials
        .iter()
        .map(|trial| NewAttackData::from_trial(trial, market, amm_provider, recorded_at))
        .collect()
}

/// Uploads a trial dump and empties it.
///
/// # Returns
/// Number of rows inserted (0 for an empty dump, which is left as is)
///
/// # Errors
/// * If the dump cannot be read or parsed
/// * If the insert transaction fails; the dump is not truncated then
/// * If the dump cannot be truncated afterwards
pub fn run(conn: &mut PgConnection, options: &UploadOptions) -> Result<usize> {
    let Some(dump) = loader::load(&options.input)? else {
        warn!(
            "upload::run: {} is empty, nothing to upload",
            options.input.display()
        );
        return Ok(0);
    };

    let rows = rows_for(
        &dump,
        &options.market,
        &options.amm_provider,
        Utc::now().timestamp(),
    );
    let inserted = AttackDataService::insert_batch(conn, &rows)
        .wrap_err("Error inserting rows")?;
    info!(
        "upload::run: All {inserted} rows inserted successfully ({} / {})",
        options.market, options.amm_provider
    );

    if !options.keep_input {
        truncate(&options.input)?;
    }

    Ok(inserted)
}
