use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Status/message/result wrapper Etherscan puts around every reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct EtherscanResponse<T> {
    pub status: String,
    pub message: String,
    // failure replies carry a string here, or nothing at all
    #[serde(default)]
    pub result: T,
}

impl<T> EtherscanResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "1" && self.message == "OK"
    }
}

/// One entry of a `getsourcecode` result. Only the name is read.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContractSourceCode {
    #[serde(rename = "ContractName", deserialize_with = "nullable_string")]
    pub contract_name: Option<String>,
}

// Keeps `ContractName` required while still accepting an explicit null.
fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// A `getsourcecode` reply after its shape has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Success { contract_name: Option<String> },
    Failure { message: String },
}

impl Envelope {
    /// Decodes a raw response body.
    ///
    /// Bodies that are not JSON, or that claim success without a usable
    /// `result[0].ContractName`, are reported as errors.
    pub fn decode(body: &str) -> Result<Self> {
        let raw: EtherscanResponse<Value> =
            serde_json::from_str(body).wrap_err("body is not a valid explorer envelope")?;

        if !raw.is_ok() {
            return Ok(Envelope::Failure {
                message: raw.message,
            });
        }

        let entries: Vec<ContractSourceCode> = serde_json::from_value(raw.result)
            .wrap_err("unexpected `result` shape in successful response")?;

        let first = entries
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("successful response carried an empty `result`"))?;

        Ok(Envelope::Success {
            contract_name: first.contract_name.filter(|name| !name.is_empty()),
        })
    }
}

/// Everything a lookup can end in short of a malformed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractNameOutcome {
    Found(String),
    NameNotFound,
    ApiError(String),
    RequestFailed(String),
}

impl From<Envelope> for ContractNameOutcome {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::Success {
                contract_name: Some(name),
            } => ContractNameOutcome::Found(name),
            Envelope::Success {
                contract_name: None,
            } => ContractNameOutcome::NameNotFound,
            Envelope::Failure { message } => ContractNameOutcome::ApiError(message),
        }
    }
}

impl fmt::Display for ContractNameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractNameOutcome::Found(name) => f.write_str(name),
            ContractNameOutcome::NameNotFound => f.write_str("Contract name not found"),
            ContractNameOutcome::ApiError(message) => write!(f, "Error: {}", message),
            ContractNameOutcome::RequestFailed(reason) => write!(f, "Request failed: {}", reason),
        }
    }
}
