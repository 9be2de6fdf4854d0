pub mod board;
pub use board::*;

pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod game;
pub use game::*;

pub mod lobby;
pub use lobby::*;

pub mod order;
pub use order::*;

pub mod position;
pub use position::*;

pub mod settlement;
pub use settlement::*;

pub mod trade;
pub use trade::*;

pub mod trader;
pub use trader::*;
