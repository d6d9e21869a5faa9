//! hivectl CLI: ChitralHive catalog seeding and SEO maintenance.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hivectl",
    version,
    about = "Catalog seeding and SEO maintenance utilities for the ChitralHive storefront"
)]
struct Cli {
    #[command(subcommand)]
    command: hivectl::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = hivectl::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
