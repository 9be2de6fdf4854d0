/// A single bot fill against the human quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trade {
    /// The bot hit the bid; the human bought.
    Sale { bot: usize, size: Shares, price: Value },
    /// The bot lifted the ask; the human sold.
    Purchase { bot: usize, size: Shares, price: Value },
}

impl Trade {
    pub fn notional(&self) -> Credits {
        match self {
            Self::Sale { size, price, .. } | Self::Purchase { size, price, .. } => size * price,
        }
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Sale { bot, size, .. } => {
                write!(f, "BOT {} {}", bot, format!("SELL {}", size).red())
            }
            Self::Purchase { bot, size, .. } => {
                write!(f, "BOT {} {}", bot, format!("BUY  {}", size).green())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notional_is_size_times_price() {
        let sale = Trade::Sale { bot: 1, size: 3, price: 40 };
        let purchase = Trade::Purchase { bot: 2, size: 2, price: 60 };
        assert!(sale.notional() == 120);
        assert!(purchase.notional() == 120);
    }
}

use crate::Credits;
use crate::Shares;
use crate::Value;
use colored::*;
use std::fmt::{Display, Formatter, Result};
