/// Terminal accounting: the revealed target and the human's marked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub target: Value,
    pub position: Position,
}

impl Settlement {
    pub fn score(&self) -> Credits {
        self.position.score(self.target)
    }
}

impl From<&Game> for Settlement {
    fn from(game: &Game) -> Self {
        Self {
            target: game.target(),
            position: game.position(),
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let score = self.score();
        let score = match score.cmp(&0) {
            Ordering::Greater => format!("{:+}", score).green(),
            Ordering::Less => format!("{}", score).red(),
            Ordering::Equal => "0".normal(),
        };
        write!(
            f,
            "target {}\nfinal  {}\nscore  {}",
            self.target, self.position, score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::position::Delta;

    #[test]
    fn score_marks_the_position_at_the_target() {
        let mut position = Position::new();
        let mut delta = Delta::default();
        delta.sale(3, 40);
        position.apply(delta);
        let settlement = Settlement { target: 50, position };
        assert!(settlement.score() == -120 + 3 * 50);
    }

    #[test]
    fn empty_positions_score_zero() {
        let settlement = Settlement {
            target: 123,
            position: Position::new(),
        };
        assert!(settlement.score() == 0);
    }
}

use super::game::Game;
use super::position::Position;
use crate::Credits;
use crate::Value;
use colored::Colorize;
use std::cmp::Ordering;
