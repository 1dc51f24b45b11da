mod cli;
mod etherscan;

pub use cli::Cli;
pub use etherscan::{ContractNameOutcome, Envelope};
