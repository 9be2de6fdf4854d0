/// A bot trader holding one private value.
///
/// Bots assume every value they cannot see equals the distribution mean,
/// and size orders linearly in their perceived edge. The divisor is
/// jittered so the human cannot back a bot's exact estimate out of its
/// order sizes.
#[derive(Debug, Clone)]
pub struct Bot {
    id: usize,
    min: Value,
    max: Value,
    total: usize,
    sampler: Sampler,
    private: Value,
}

impl Bot {
    pub fn new(id: usize, min: Value, max: Value, total: usize, mut sampler: Sampler) -> Self {
        let private = sampler.draw(min, max);
        Self {
            id,
            min,
            max,
            total,
            sampler,
            private,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn private(&self) -> Value {
        self.private
    }

    /// Belief about a single unseen value.
    pub fn expected_value(&self) -> Value {
        self.min + (self.sampler.mean() * (self.max - self.min) as f64) as Value
    }

    /// Extrapolated target: every unseen value other than this bot's own is
    /// assumed average. Depends only on the board's sum and length.
    pub fn estimate(&self, board: &Board) -> Value {
        let unknown = (self.total - board.len() - 1) as Value;
        self.expected_value() * unknown + board.sum() + self.private
    }

    /// Shares to lift from the ask. Zero whenever the ask is at or above
    /// the estimate.
    pub fn buy(&mut self, ask: Value, board: &Board) -> Shares {
        let estimate = self.estimate(board);
        match ask < estimate {
            true => self.size(estimate - ask),
            false => 0,
        }
    }

    /// Shares to hit the bid with. Zero whenever the bid is at or below
    /// the estimate.
    pub fn sell(&mut self, bid: Value, board: &Board) -> Shares {
        let estimate = self.estimate(board);
        match bid > estimate {
            true => self.size(bid - estimate),
            false => 0,
        }
    }

    /// Linear in the edge, rounded up so a profitable quote is never
    /// ignored.
    fn size(&mut self, edge: Value) -> Shares {
        let divisor = SIZING_DIVISOR + self.sampler.below(SIZING_JITTER);
        (edge + divisor - 1) / divisor
    }

    /// Redraw the private value between games, optionally with new bounds
    /// and a new distribution.
    pub fn reset(&mut self, bounds: Option<(Value, Value, Distribution)>) {
        if let Some((min, max, distribution)) = bounds {
            self.min = min;
            self.max = max;
            self.sampler.retune(distribution);
        }
        self.private = self.sampler.draw(self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Private value lands exactly on 50 and the expected value is 50.
    fn pinned() -> Bot {
        let sampler = Sampler::seeded(Distribution::Gauss { sigma: 0.0 }, 1);
        Bot::new(1, 0, 100, 3, sampler)
    }

    fn board(values: &[Value]) -> Board {
        let mut board = Board::new();
        for &value in values {
            board.push(value);
        }
        board
    }

    #[test]
    fn estimate_matches_the_closed_form() {
        let bot = pinned();
        assert!(bot.private() == 50);
        assert!(bot.expected_value() == 50);
        assert!(bot.estimate(&board(&[])) == 50 * 2 + 50);
        assert!(bot.estimate(&board(&[10, 20])) == 50 * 0 + 30 + 50);
    }

    #[test]
    fn estimate_ignores_board_order() {
        let bot = pinned();
        assert!(bot.estimate(&board(&[10, 20])) == bot.estimate(&board(&[20, 10])));
    }

    #[test]
    fn no_trade_at_or_past_the_estimate() {
        let mut bot = pinned();
        let board = board(&[10, 20]);
        let estimate = bot.estimate(&board);
        assert!(bot.buy(estimate, &board) == 0);
        assert!(bot.buy(estimate + 1, &board) == 0);
        assert!(bot.sell(estimate, &board) == 0);
        assert!(bot.sell(estimate - 1, &board) == 0);
    }

    #[test]
    fn any_edge_trades_at_least_one_share() {
        let mut bot = pinned();
        let board = board(&[10, 20]);
        let estimate = bot.estimate(&board);
        assert!(bot.buy(estimate - 1, &board) == 1);
        assert!(bot.sell(estimate + 1, &board) == 1);
    }

    #[test]
    fn sizes_scale_with_the_edge_and_stay_bounded() {
        let mut bot = pinned();
        let board = board(&[]);
        let estimate = bot.estimate(&board);
        let edge = 850;
        for _ in 0..100 {
            let size = bot.sell(estimate + edge, &board);
            assert!(size >= (edge + 11) / 12);
            assert!(size <= (edge + 9) / 10);
        }
    }

    #[test]
    fn reset_redraws_inside_the_new_bounds() {
        let mut bot = pinned();
        bot.reset(Some((1000, 2000, Distribution::Uniform)));
        assert!(bot.private() >= 1000);
        assert!(bot.private() < 2000);
        assert!(bot.expected_value() == 1500);
    }
}

use crate::SIZING_DIVISOR;
use crate::SIZING_JITTER;
use crate::Shares;
use crate::Value;
use crate::gameplay::Board;
use crate::sampling::Distribution;
use crate::sampling::Sampler;
