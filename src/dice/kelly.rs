//! Kelly-criterion staking: bet the bankroll fraction that maximizes
//! long-run logarithmic growth given the perceived edge and odds.

/// Fraction of bankroll to stake on a bet paying `odds` to 1 that wins
/// with probability `p`. Zero when there is no edge.
pub fn fraction(p: f64, odds: f64) -> f64 {
    (p - (1.0 - p) / odds).max(0.0)
}

/// Stake for a total at posted odds. Nothing is bet at or below fair odds.
pub fn stake(bankroll: Bankroll, total: Value, odds: f64) -> Bankroll {
    match odds > fair(total) {
        true => bankroll * fraction(ways(total) as f64 / 36.0, odds),
        false => 0.0,
    }
}


use super::table::fair;
use super::table::ways;
use crate::Bankroll;
use crate::Value;
