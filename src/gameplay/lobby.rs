/// Outer menu around repeated games.
///
/// Collects parameters once, then loops: play a game, then replay, retune,
/// or quit. With a seed, each successive game perturbs it so replays are
/// reproducible without being identical.
pub struct Lobby {
    seed: Option<u64>,
    played: u64,
}

impl Lobby {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, played: 0 }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut config = self.params()?;
        loop {
            config.seed = self.seed.map(|s| s.wrapping_add(self.played));
            log::info!(
                "game {} with {} bots over {} rounds on [{}, {})",
                self.played + 1,
                config.bots,
                config.rounds,
                config.min,
                config.max
            );
            Engine::new(config, Rc::new(Human)).play()?;
            self.played += 1;
            match self.menu()? {
                Menu::Replay => continue,
                Menu::Settings => config = self.params()?,
                Menu::Quit => break,
            }
        }
        Ok(())
    }

    fn params(&self) -> Result<Config> {
        let line: String = Input::new()
            .with_prompt("bots, rounds, minimum, maximum")
            .validate_with(|s: &String| -> Result<(), &'static str> {
                Self::parse(s).map(|_| ())
            })
            .interact_text()?;
        let (bots, rounds, min, max) = Self::parse(&line).expect("validated");
        let mode: String = Input::new()
            .with_prompt("type hard for hard mode, anything else for easy")
            .allow_empty(true)
            .interact_text()?;
        let mut config = Config::new(bots, rounds, min, max);
        config.difficulty = Difficulty::from(mode.as_str());
        Ok(config)
    }

    /// Four whitespace-separated integers: bots, rounds, minimum, maximum.
    pub fn parse(s: &str) -> Result<(usize, usize, Value, Value), &'static str> {
        let fields = s.split_whitespace().collect::<Vec<_>>();
        if fields.len() != 4 {
            return Err("enter four integers separated by spaces");
        }
        let bots = fields[0].parse().map_err(|_| "bots must be an integer")?;
        let rounds = fields[1].parse().map_err(|_| "rounds must be an integer")?;
        let min = fields[2].parse().map_err(|_| "minimum must be an integer")?;
        let max = fields[3].parse().map_err(|_| "maximum must be an integer")?;
        if bots == 0 {
            return Err("at least one bot");
        }
        if rounds == 0 {
            return Err("at least one round");
        }
        if min >= max {
            return Err("minimum must be below maximum");
        }
        Ok((bots, rounds, min, max))
    }

    fn menu(&self) -> Result<Menu> {
        let choice: String = Input::new()
            .with_prompt("press enter to replay, s for settings, q to quit")
            .allow_empty(true)
            .interact_text()?;
        Ok(Menu::from(choice.as_str()))
    }
}

/// What to do after a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Replay,
    Settings,
    Quit,
}

impl From<&str> for Menu {
    fn from(s: &str) -> Self {
        match s.trim() {
            "q" => Self::Quit,
            "s" => Self::Settings,
            _ => Self::Replay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_reads_quit_settings_or_replay() {
        assert!(Menu::from("q") == Menu::Quit);
        assert!(Menu::from(" q ") == Menu::Quit);
        assert!(Menu::from("s") == Menu::Settings);
        assert!(Menu::from("") == Menu::Replay);
        assert!(Menu::from("anything else") == Menu::Replay);
    }

    #[test]
    fn parses_four_integers() {
        assert!(Lobby::parse("2 3 0 100") == Ok((2, 3, 0, 100)));
        assert!(Lobby::parse("  4  5  -10  10 ") == Ok((4, 5, -10, 10)));
    }

    #[test]
    fn rejects_malformed_params() {
        assert!(Lobby::parse("1 2 3").is_err());
        assert!(Lobby::parse("a b c d").is_err());
        assert!(Lobby::parse("0 2 0 9").is_err());
        assert!(Lobby::parse("1 0 0 9").is_err());
        assert!(Lobby::parse("1 2 9 9").is_err());
    }
}

use super::config::Config;
use super::config::Difficulty;
use super::engine::Engine;
use crate::Value;
use crate::players::Human;
use anyhow::Result;
use dialoguer::Input;
use std::rc::Rc;
