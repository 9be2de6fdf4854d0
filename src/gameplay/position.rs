/// The human market maker's holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    credits: Credits,
    shares: Shares,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credits(&self) -> Credits {
        self.credits
    }

    pub fn shares(&self) -> Shares {
        self.shares
    }

    /// Net one round of trades into the position.
    pub fn apply(&mut self, delta: Delta) {
        self.credits += delta.credits;
        self.shares += delta.shares;
    }

    /// Mark the position against the target value.
    pub fn score(&self, target: Value) -> Credits {
        self.credits + self.shares * target
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} credits  {} shares", self.credits, self.shares)
    }
}

/// Net effect of all bot trades in one round.
///
/// Contributions are additive, so the order bots act in never changes the
/// resulting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta {
    pub credits: Credits,
    pub shares: Shares,
}

impl Delta {
    /// A bot sold to the human at the bid.
    pub fn sale(&mut self, size: Shares, bid: Value) {
        self.shares += size;
        self.credits -= size * bid;
    }

    /// A bot bought from the human at the ask.
    pub fn purchase(&mut self, size: Shares, ask: Value) {
        self.shares -= size;
        self.credits += size * ask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_without_drift() {
        let rounds = [(3, 40, 2, 60), (0, 50, 7, 55), (12, 45, 0, 80)];
        let mut position = Position::new();
        let mut credits = 0;
        let mut shares = 0;
        for (sold, bid, bought, ask) in rounds {
            let mut delta = Delta::default();
            delta.sale(sold, bid);
            delta.purchase(bought, ask);
            position.apply(delta);
            credits += bought * ask - sold * bid;
            shares += sold - bought;
        }
        assert!(position.credits() == credits);
        assert!(position.shares() == shares);
    }

    #[test]
    fn marks_against_the_target() {
        let mut position = Position::new();
        let mut delta = Delta::default();
        delta.sale(2, 30);
        position.apply(delta);
        assert!(position.credits() == -60);
        assert!(position.shares() == 2);
        assert!(position.score(100) == 140);
    }

    #[test]
    fn flat_positions_score_their_credits() {
        let mut position = Position::new();
        let mut delta = Delta::default();
        delta.sale(5, 10);
        delta.purchase(5, 25);
        position.apply(delta);
        assert!(position.shares() == 0);
        assert!(position.score(1_000_000) == 75);
    }
}

use crate::Credits;
use crate::Shares;
use crate::Value;
