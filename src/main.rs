use anyhow::Result;
use clap::Parser;
use showroom::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    showroom::logging::init(cli.verbose);
    cli.run()
}
