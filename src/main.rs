mod cli;
mod commands;
mod service;
mod types;
mod utils;

use clap::Parser;
use cli::Cli;
use tokio::runtime::Runtime;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        // Diagnostics go to stdout as single lines, exit code 1.
        println!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    rt.block_on(commands::get_calldata(&cli.network, cli.offset))
}
