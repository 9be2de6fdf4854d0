/// Lowest total of two dice.
pub const LOW: Value = 2;
/// Highest total of two dice.
pub const HIGH: Value = 12;

/// Every total, in order.
pub fn totals() -> impl Iterator<Item = Value> {
    LOW..=HIGH
}

/// Ways two dice make a total.
pub fn ways(total: Value) -> Value {
    6 - (total - 7).abs()
}

/// Fair payout odds for a total.
pub fn fair(total: Value) -> f64 {
    36.0 / ways(total) as f64 - 1.0
}

/// The dice table: posts payouts, rolls dice.
#[derive(Debug, Clone)]
pub struct Table {
    sampler: Sampler,
}

impl Table {
    pub fn new(seed: Option<u64>) -> Self {
        let sampler = match seed {
            Some(seed) => Sampler::seeded(Distribution::Uniform, seed),
            None => Sampler::new(Distribution::Uniform),
        };
        Self { sampler }
    }

    /// Post payouts for the coming roll: fair odds scaled by independent
    /// multiplicative noise, so some totals are briefly better than fair.
    pub fn payouts(&mut self) -> Payouts {
        let mut odds = [0.0; 13];
        for total in totals() {
            odds[total as usize] = fair(total) * (1.0 + self.sampler.noise(PAYOUT_NOISE));
        }
        Payouts { odds }
    }

    /// Sum of two fair dice.
    pub fn roll(&mut self) -> Value {
        self.sampler.roll(6) + self.sampler.roll(6)
    }
}

/// Posted payout odds per total, indexed 2 through 12.
#[derive(Debug, Clone, Copy)]
pub struct Payouts {
    odds: [f64; 13],
}

impl Payouts {
    pub fn at(&self, total: Value) -> f64 {
        self.odds[total as usize]
    }
}

impl std::fmt::Display for Payouts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for total in totals() {
            writeln!(f, "{:>2} pays {:>6.2} to 1", total, self.at(total))?;
        }
        Ok(())
    }
}


use crate::PAYOUT_NOISE;
use crate::Value;
use crate::sampling::Distribution;
use crate::sampling::Sampler;
