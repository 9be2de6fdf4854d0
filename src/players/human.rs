/// The console market maker.
///
/// Prompts once per side each round; a quote line is a price and a size.
/// Malformed lines are rejected in place and the prompt repeats.
#[derive(Debug)]
pub struct Human;

impl Trader for Human {
    fn quote(&self, _: &Game) -> Result<Quote> {
        let bid = self.order("your bid and size")?;
        let ask = self.order("your ask and size")?;
        Ok(Quote { bid, ask })
    }
}

impl Human {
    fn order(&self, prompt: &str) -> Result<Order> {
        let line: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| -> Result<(), &'static str> {
                Order::try_from(s.as_str()).map(|_| ())
            })
            .interact_text()?;
        Ok(Order::try_from(line.as_str()).expect("validated"))
    }
}

use crate::gameplay::Game;
use crate::gameplay::Order;
use crate::gameplay::Quote;
use crate::gameplay::Trader;
use anyhow::Result;
use dialoguer::Input;
