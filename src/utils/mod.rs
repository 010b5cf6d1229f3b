/// App context
pub mod app_context;
/// Constants
pub mod constants;
/// Database connection
pub mod db_connect;
/// File helpers
pub mod file;
/// Logger
pub mod logger;
/// Providers
pub mod providers;
