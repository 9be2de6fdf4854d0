/// Where the human quote comes from each round.
///
/// The console player is one implementation; tests script their own.
pub trait Trader: Debug {
    fn quote(&self, game: &Game) -> Result<Quote>;
}

use super::game::Game;
use super::order::Quote;
use anyhow::Result;
use std::fmt::Debug;
