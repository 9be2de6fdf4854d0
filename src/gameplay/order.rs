/// One side of a quote: a price and the size offered at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub price: Value,
    pub size: Shares,
}

/// Parsed from a line of two whitespace-separated integers.
impl TryFrom<&str> for Order {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut fields = s.split_whitespace();
        let price = fields.next().ok_or("enter a price and a size")?;
        let size = fields.next().ok_or("enter a size after the price")?;
        if fields.next().is_some() {
            return Err("enter exactly two integers");
        }
        let price = price.parse::<Value>().map_err(|_| "price must be an integer")?;
        let size = size.parse::<Shares>().map_err(|_| "size must be an integer")?;
        Ok(Self { price, size })
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} x {}", self.size, self.price)
    }
}

/// The human's two-sided market for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub bid: Order,
    pub ask: Order,
}


use crate::Shares;
use crate::Value;
