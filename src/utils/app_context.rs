//! Application context for the exchange rate scraper.
//!
//! Holds the chain being read, an archive node connection and the Etherscan
//! client used to map timestamps onto blocks.

use crate::config::{Chain, Config};
use crate::sync::etherscan::EtherscanClient;
use crate::utils::providers::create_http_provider;
use alloy::{network::Ethereum, providers::RootProvider};
use eyre::{Error, Result};

/// Network connections shared by the scraper
pub struct AppContext {
    /// Chain the contracts are read on
    pub chain: Chain,
    /// Archive node connection
    pub provider: RootProvider<Ethereum>,
    /// Timestamp to block lookups
    pub etherscan: EtherscanClient,
}

impl AppContext {
    /// Creates a new application context from the configuration.
    ///
    /// # Returns
    /// * `Result<Self, Error>` - The initialized context or an error
    ///
    /// # Errors
    /// * If the chain's archive or Etherscan endpoint is missing
    /// * If `ETHERSCAN_API_KEY` is missing
    /// * If the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            chain: config.chain,
            provider: create_http_provider(config.archive_url()?),
            etherscan: EtherscanClient::new(config.etherscan_url()?, config.etherscan_api_key()?)?,
        })
    }
}
