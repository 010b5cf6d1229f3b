use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use url::Url;

/// Creates an HTTP provider for an archive node.
///
/// Only reads are issued, so the root provider is kept and the default
/// fillers are dropped.
///
/// # Arguments
/// * `url` - JSON-RPC endpoint
///
/// # Returns
/// The root provider
#[must_use]
pub fn create_http_provider(url: Url) -> RootProvider<Ethereum> {
    let provider = ProviderBuilder::new().on_http(url);
    (*provider.root()).clone()
}
