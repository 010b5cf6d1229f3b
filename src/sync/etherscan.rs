use eyre::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Reply of Etherscan's `block/getblocknobytime`
#[derive(Debug, Deserialize)]
struct BlockByTimeResponse {
    /// `"1"` on success, `"0"` otherwise
    status: String,
    /// Block number on success, an error message otherwise
    #[serde(default)]
    result: serde_json::Value,
}

/// Etherscan block lookups
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    /// API endpoint, e.g. `https://api.etherscan.io/api`
    url: Url,
    /// API key
    api_key: String,
    /// The HTTP client
    client: Client,
}

impl EtherscanClient {
    /// Creates a client for the given endpoint
    ///
    /// # Errors
    /// * If the HTTP client cannot be built
    pub fn new(url: Url, api_key: String) -> Result<Self> {
        // Create a client with a timeout
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            url,
            api_key,
            client,
        })
    }

    /// Number of the last block mined at or before `timestamp`.
    ///
    /// # Returns
    /// `None` when Etherscan has no answer, e.g. the timestamp is in the
    /// future or the rate limit was hit
    ///
    /// # Errors
    /// * If the request fails or the reply is not JSON
    pub async fn block_number_before(&self, timestamp: i64) -> Result<Option<u64>> {
        let timestamp = timestamp.to_string();
        let response = self
            .client
            .get(self.url.clone())
            .query(&[
                ("module", "block"),
                ("action", "getblocknobytime"),
                ("timestamp", timestamp.as_str()),
                ("closest", "before"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json::<BlockByTimeResponse>()
            .await?;

        Ok(parse_block_number(&response))
    }
}

/// Block number of a successful reply
fn parse_block_number(response: &BlockByTimeResponse) -> Option<u64> {
    if response.status != "1" {
        return None;
    }
    match &response.result {
        serde_json::Value::String(number) => number.trim().parse().ok(),
        serde_json::Value::Number(number) => number.as_u64(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response(json: &str) -> BlockByTimeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_block_number() {
        assert_eq!(
            parse_block_number(&response(r#"{"status":"1","message":"OK","result":"18283245"}"#)),
            Some(18_283_245)
        );
        assert_eq!(
            parse_block_number(&response(r#"{"status":"1","message":"OK","result":18283245}"#)),
            Some(18_283_245)
        );
    }

    #[test]
    fn test_parse_block_number_failure() {
        assert_eq!(
            parse_block_number(&response(
                r#"{"status":"0","message":"NOTOK","result":"Error! No closest block found"}"#
            )),
            None
        );
        assert_eq!(
            parse_block_number(&response(r#"{"status":"1","message":"OK","result":"soon"}"#)),
            None
        );
        assert_eq!(parse_block_number(&response(r#"{"status":"0"}"#)), None);
    }
}
