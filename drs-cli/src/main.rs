//! drs-cli - Command line tool for dam release scheduling.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "drs-cli",
    version,
    about = "Dam release scheduling toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: drs_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    drs_cmd::run(cli.command)
}
