/// Drives one game from first quote to settlement.
pub struct Engine {
    game: Game,
    trader: Rc<dyn Trader>,
}

impl Engine {
    pub fn new(config: Config, trader: Rc<dyn Trader>) -> Self {
        Self {
            game: Game::new(config),
            trader,
        }
    }

    pub fn play(&mut self) -> Result<Settlement> {
        self.begin();
        while self.game.has_rounds() {
            self.game.begin_round();
            self.announce();
            let quote = self.trader.quote(&self.game)?;
            let (delta, trades) = self.game.orders(quote);
            self.narrate(&trades);
            self.game.apply(delta);
            self.show_position();
            self.reveal();
        }
        Ok(self.settle())
    }

    fn begin(&self) {
        let config = self.game.config();
        println!("NEW GAME");
        println!("{}", "-".repeat(21));
        println!("players  {}", config.bots + 1);
        println!("cards    {}", config.cards);
        println!("range    [{}, {})", config.min, config.max);
        println!("secret   {}", self.game.private());
        log::debug!("target fixed at {}", self.game.target());
    }

    fn announce(&self) {
        println!("\n{}\nROUND  {}", "-".repeat(21), self.game.round());
    }

    fn narrate(&self, trades: &[Trade]) {
        for trade in trades {
            match self.game.config().difficulty.verbose() {
                true => println!("{} for {}", trade, trade.notional()),
                false => println!("{}", trade),
            }
        }
    }

    fn show_position(&self) {
        if self.game.config().difficulty.verbose() {
            println!("you hold {}", self.game.position());
        }
        log::debug!("position {}", self.game.position());
    }

    fn reveal(&mut self) {
        if self.game.is_last_round() {
            return;
        }
        if let Some(value) = self.game.reveal() {
            match self.game.config().difficulty.verbose() {
                true => println!("board    {}", self.game.board()),
                false => println!("card     {}", value),
            }
        }
    }

    fn settle(&self) -> Settlement {
        let settlement = Settlement::from(&self.game);
        println!("\n{}\nGAME OVER\n{}", "-".repeat(21), settlement);
        settlement
    }
}


use super::config::Config;
use super::game::Game;
use super::settlement::Settlement;
use super::trade::Trade;
use super::trader::Trader;
use anyhow::Result;
use std::rc::Rc;
