use clap::Parser;

#[derive(Parser)]
#[command(name = "safe-calldata")]
#[command(about = "Fetch the calldata of a pending Safe multisig transaction")]
#[command(version)]
pub struct Cli {
    /// Network name (e.g., eth-mainnet, base-mainnet, arbitrum-one)
    pub network: String,
    /// Position in the pending queue (default: 0, the next transaction to execute)
    #[arg(allow_hyphen_values = true)]
    pub offset: Option<String>,
}
