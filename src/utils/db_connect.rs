use diesel::pg::PgConnection;
use diesel::prelude::*;
use eyre::{Error, Result};
use url::Url;

/// Establishes a connection to the Postgres database.
///
/// # Arguments
/// * `database_url` - Connection string, see [`crate::config::Config::database_url`]
///
/// # Returns
/// * `Result<PgConnection>` - The database connection
///
/// # Errors
/// * If database connection fails
pub fn establish_connection(database_url: &str) -> Result<PgConnection> {
    PgConnection::establish(database_url).map_err(|e| {
        Error::msg(format!(
            "Error connecting to {}: {e}",
            redact_password(database_url)
        ))
    })
}

/// Hides the password of a connection string so it can be logged
fn redact_password(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) if url.password().is_some() => {
            // Only fails for URLs that cannot carry credentials at all
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        Ok(url) => url.to_string(),
        Err(_) => "<unparseable database url>".to_string(),
    }
}
