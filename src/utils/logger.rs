use chrono::Local;
use eyre::Result;
use fern::Dispatch;

/// Sets up the application logger with console output.
///
/// Log lines go to stderr so that commands printing JSON on stdout
/// (`solve`, `rates`) stay machine readable.
///
/// # Returns
/// * `Result<()>` - Success or failure of logger setup
///
/// # Errors
/// * If a global logger was already installed
pub fn setup_logger() -> Result<()> {
    Dispatch::new()
        // Set logging level from RUST_LOG env var or default to Info
        .level(level_from_env(std::env::var("RUST_LOG").ok().as_deref()))
        .chain(std::io::stderr())
        // Format log messages with time and log level
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ));
        })
        .apply()?;
    Ok(())
}

/// Parses a `RUST_LOG` value into a level filter, defaulting to Info.
fn level_from_env(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}
