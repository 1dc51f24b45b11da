use clap::Parser;

/// Look up the name of a verified contract on Etherscan.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Contract address
    pub address: String,

    /// Etherscan API key
    #[arg(long = "api-key")]
    pub api_key: String,
}
