/*!
 * # AMM Cost of Attack
 *
 * Offline tooling for the swETH cost-of-attack study. A forked simulation
 * pushes a series of swaps through an AMM pool and dumps every trial to CSV;
 * this crate turns those dumps into something people and contracts can use.
 *
 * ## Core Features
 *
 * - **Analysis**: Derives price impact and effective swap rate per trial and
 *   renders them as a four panel HTML dashboard
 * - **Upload**: Stores a trial dump in Postgres for later study
 * - **Solver**: Largest root of a quadratic in 27-decimal fixed point
 * - **Exchange Rates**: Scrapes a week of daily liquid staking token rates
 *
 * ## Module Structure
 *
 * - `analysis`: Trial dump loading, metrics and the dashboard report
 * - `config`: Configuration management for the system
 * - `dashboard`: Plotly figure model and HTML rendering
 * - `db_service`: Database interaction for persistent storage
 * - `math`: Fixed-point arithmetic
 * - `models`: Data models for the application
 * - `schemas`: Database schema definitions
 * - `sync`: Blockchain reads for exchange rate history
 * - `upload`: Trial dump upload job
 * - `utils`: Utility functions and helpers
 */

/// Cost-of-attack analysis
pub mod analysis;
/// Configuration management for the system
pub mod config;
/// Plotly dashboards
pub mod dashboard;
/// Database interaction for persistent storage
pub mod db_service;
/// Fixed-point arithmetic
pub mod math;
/// Data models for the application
pub mod models;
/// Database schema definitions
pub mod schemas;
/// Blockchain reads for exchange rate history
pub mod sync;
/// Trial dump upload
pub mod upload;
/// Utility functions and helpers
pub mod utils;
