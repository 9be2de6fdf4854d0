/// Live state of one market game.
///
/// Owns every mutable piece: the sampler, the bots, the revealed board, and
/// the human position. Private values are drawn once at construction and
/// the target is fixed from that moment, though it is only announced at
/// settlement.
#[derive(Debug)]
pub struct Game {
    config: Config,
    sampler: Sampler,
    bots: Vec<Bot>,
    board: Board,
    position: Position,
    private: Value,
    round: usize,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut sampler = config.sampler();
        let bots = (1..=config.bots)
            .map(|id| Bot::new(id, config.min, config.max, config.total_values(), sampler.fork()))
            .collect();
        let private = sampler.draw(config.min, config.max);
        Self {
            config,
            sampler,
            bots,
            board: Board::new(),
            position: Position::new(),
            private,
            round: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn private(&self) -> Value {
        self.private
    }
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn begin_round(&mut self) {
        self.round += 1;
    }
    pub fn has_rounds(&self) -> bool {
        self.round < self.config.rounds
    }
    pub fn is_last_round(&self) -> bool {
        self.round == self.config.rounds
    }

    /// Collect every bot's response to the quote. Bots are shuffled first;
    /// the delta is a sum, so the order only affects narration.
    pub fn orders(&mut self, quote: Quote) -> (Delta, Vec<Trade>) {
        let mut delta = Delta::default();
        let mut trades = Vec::new();
        self.sampler.shuffle(&mut self.bots);
        for bot in self.bots.iter_mut() {
            let sold = bot.sell(quote.bid.price, &self.board);
            let bought = bot.buy(quote.ask.price, &self.board);
            if sold > 0 {
                delta.sale(sold, quote.bid.price);
                trades.push(Trade::Sale {
                    bot: bot.id(),
                    size: sold,
                    price: quote.bid.price,
                });
            }
            if bought > 0 {
                delta.purchase(bought, quote.ask.price);
                trades.push(Trade::Purchase {
                    bot: bot.id(),
                    size: bought,
                    price: quote.ask.price,
                });
            }
        }
        (delta, trades)
    }

    pub fn apply(&mut self, delta: Delta) {
        self.position.apply(delta);
    }

    /// Draw and append the next shared value, if any remain to be revealed.
    pub fn reveal(&mut self) -> Option<Value> {
        match self.board.len() < self.config.cards {
            true => {
                let value = self.sampler.draw(self.config.min, self.config.max);
                self.board.push(value);
                Some(value)
            }
            false => None,
        }
    }

    /// The hidden sum the market has been pricing all along.
    pub fn target(&self) -> Value {
        self.board.sum() + self.bots.iter().map(|b| b.private()).sum::<Value>() + self.private
    }
}

use super::board::Board;
use super::config::Config;
use super::order::Quote;
use super::position::Delta;
use super::position::Position;
use super::trade::Trade;
use crate::Value;
use crate::players::Bot;
use crate::sampling::Sampler;
