use crate::models::{ContractNameOutcome, Envelope};
use eyre::{Result, WrapErr};
use reqwest::Client;
use tracing::{debug, warn};

pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Etherscan client resolving contract addresses to contract names.
pub struct EtherscanClient {
    client: Client,
    base_url: String,
}

impl Default for EtherscanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EtherscanClient {
    pub fn new() -> Self {
        Self::with_base_url(ETHERSCAN_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Looks up the name of the contract deployed at `address`.
    ///
    /// Transport and API failures come back as outcomes. `Err` means the
    /// explorer answered with something that is not a `getsourcecode` reply.
    pub async fn fetch_contract_name(
        &self,
        address: &str,
        api_key: &str,
    ) -> Result<ContractNameOutcome> {
        let body = match self.get_source_code(address, api_key).await {
            Ok(body) => body,
            Err(e) => {
                // the cause lives in the source chain, not in the top-level message
                let reason = format!("{:#}", eyre::Report::new(e));
                warn!(address, error = %reason, "explorer request failed");
                return Ok(ContractNameOutcome::RequestFailed(reason));
            }
        };

        let envelope = Envelope::decode(&body)
            .wrap_err_with(|| format!("Malformed response for {}", address))?;

        if let Envelope::Failure { message } = &envelope {
            warn!(address, message = %message, "explorer returned an error");
        }

        Ok(envelope.into())
    }

    async fn get_source_code(&self, address: &str, api_key: &str) -> reqwest::Result<String> {
        debug!(address, url = %self.base_url, "requesting contract source code");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("module", "contract"),
                ("action", "getsourcecode"),
                ("address", address),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        debug!(status = %response.status(), "explorer responded");

        response.error_for_status()?.text().await
    }
}
