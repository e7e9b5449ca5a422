//! TSA CLI - export thread analyses as CSV and inspect chart configurations.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tsa-cli",
    version,
    about = "Thread sentiment analysis export toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tsa_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tsa_cmd::run(cli.command)
}
