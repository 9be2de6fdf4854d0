//! Market game binary.
//!
//! A human market maker quotes a two-sided market on a hidden sum of values
//! while bot traders with private information trade against the quote.

use clap::Parser;
use pittrader::gameplay::Lobby;

#[derive(Parser)]
#[command(about = "Make a market on a hidden sum against bot traders")]
struct Args {
    /// Seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    pittrader::log();
    Lobby::new(Args::parse().seed).run()
}
