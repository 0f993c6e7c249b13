use anyhow::Result;
use clap::Parser;
use noleggio::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
