//! Dice table binary.
//!
//! Simulates a Kelly-criterion bettor against noisy posted payouts, or
//! deals the table interactively with --interactive.

use clap::Parser;
use pittrader::dice::Session;
use pittrader::dice::Simulation;

#[derive(Parser)]
#[command(about = "Dice table with noisy payouts and Kelly staking")]
struct Args {
    /// Hands to simulate.
    #[arg(long, default_value_t = pittrader::DEFAULT_HANDS)]
    hands: usize,
    /// Deal interactively instead of simulating.
    #[arg(long)]
    interactive: bool,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    pittrader::log();
    let args = Args::parse();
    match args.interactive {
        true => Session::new(args.seed).run(),
        false => {
            println!("{}", Simulation::new(args.seed).run(args.hands));
            Ok(())
        }
    }
}
