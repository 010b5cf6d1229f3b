use std::path::PathBuf;

use amm_coa::analysis::{self, AnalyzeOptions, RateOrientation};
use amm_coa::config::Config;
use amm_coa::math::quadratic::{largest_root, parse_int128};
use amm_coa::sync::exchange_rates;
use amm_coa::upload::{self, UploadOptions};
use amm_coa::utils::app_context::AppContext;
use amm_coa::utils::constants::{DEFAULT_AMM_PROVIDER, DEFAULT_MARKET};
use amm_coa::utils::db_connect::establish_connection;
use amm_coa::utils::logger::setup_logger;
use clap::{Parser, Subcommand};
use eyre::{Error, Result};
use log::info;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the cost-of-attack dashboard from a trial dump
    Analyze {
        /// Trial dump, defaults to UNISWAP_SWETH_FILE_PATH
        #[arg(long)]
        input: Option<PathBuf>,
        /// Dashboard file, defaults to DASHBOARD_OUTPUT_PATH
        #[arg(long)]
        output: Option<PathBuf>,
        /// Plot amountSpecified / swapReceived instead
        #[arg(long)]
        invert_rate: bool,
        /// Do not clear the trial dump afterwards
        #[arg(long)]
        keep_input: bool,
    },
    /// Store a trial dump in the database
    Upload {
        /// Trial dump, defaults to FILE_PATH
        #[arg(long)]
        input: Option<PathBuf>,
        /// Market label of the rows
        #[arg(long, default_value = DEFAULT_MARKET)]
        market: String,
        /// AMM label of the rows
        #[arg(long, default_value = DEFAULT_AMM_PROVIDER)]
        amm: String,
        /// Do not clear the trial dump afterwards
        #[arg(long)]
        keep_input: bool,
    },
    /// Largest root of a*x^2 + b*x + c in 27-decimal fixed point
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Quadratic coefficient
        a: String,
        /// Linear coefficient
        b: String,
        /// Constant
        c: String,
    },
    /// Print a week of daily liquid staking token exchange rates
    Rates {
        /// End the week this many days ago
        #[arg(long)]
        warp_days: Option<u32>,
    },
}

fn analyze(
    config: &Config,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    invert_rate: bool,
    keep_input: bool,
) -> Result<(), Error> {
    let options = AnalyzeOptions {
        input: input.map_or_else(|| config.sweth_file_path(), Ok)?,
        output: output.unwrap_or_else(|| config.dashboard_output_path.clone()),
        orientation: RateOrientation::from_inverted(invert_rate),
        keep_input,
    };
    analysis::run(&options)?;
    Ok(())
}

fn upload_dump(config: &Config, options: UploadOptions) -> Result<(), Error> {
    let mut conn = establish_connection(&config.database_url()?)?;
    let inserted = upload::run(&mut conn, &options)?;
    info!("main::upload_dump: Uploaded {inserted} trials from {}", options.input.display());
    Ok(())
}

fn solve(a: &str, b: &str, c: &str) -> Result<(), Error> {
    let root = largest_root(parse_int128(a)?, parse_int128(b)?, parse_int128(c)?)?;
    println!("{}", json!({ "root": root.to_string() }));
    Ok(())
}

async fn rates(config: &Config, warp_days: Option<u32>) -> Result<(), Error> {
    let ctx = AppContext::new(config)?;
    let output = exchange_rates(&ctx, warp_days).await?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    setup_logger()?;

    let config = Config::from_env();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            invert_rate,
            keep_input,
        }) => analyze(&config, input, output, invert_rate, keep_input)?,
        Some(Commands::Upload {
            input,
            market,
            amm,
            keep_input,
        }) => {
            let options = UploadOptions {
                input: input.map_or_else(|| config.upload_file_path(), Ok)?,
                market,
                amm_provider: amm,
                keep_input,
            };
            upload_dump(&config, options)?;
        }
        Some(Commands::Solve { a, b, c }) => solve(&a, &b, &c)?,
        Some(Commands::Rates { warp_days }) => rates(&config, warp_days).await?,
        None => {
            // Default behavior when no subcommand is provided
            analyze(&config, None, None, false, false)?;
        }
    }

    Ok(())
}
