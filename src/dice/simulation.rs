/// Batch Kelly run: stake every positive-edge total each hand, roll,
/// settle, and record the bankroll.
#[derive(Debug, Clone)]
pub struct Simulation {
    table: Table,
    bankroll: Bankroll,
    history: Vec<Bankroll>,
}

impl Simulation {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            table: Table::new(seed),
            bankroll: BANKROLL,
            history: vec![BANKROLL],
        }
    }

    pub fn run(&mut self, hands: usize) -> Summary {
        for _ in 0..hands {
            self.hand();
        }
        log::info!("simulated {} hands", hands);
        Summary::from(self.history.as_slice())
    }

    pub fn history(&self) -> &[Bankroll] {
        &self.history
    }

    /// Stakes come off the bankroll as they are placed, so later totals
    /// bet a fraction of what remains.
    fn hand(&mut self) {
        let payouts = self.table.payouts();
        let mut stakes = [0.0; 13];
        for total in totals() {
            let stake = kelly::stake(self.bankroll, total, payouts.at(total));
            self.bankroll -= stake;
            stakes[total as usize] = stake;
        }
        let roll = self.table.roll();
        self.bankroll += (payouts.at(roll) + 1.0) * stakes[roll as usize];
        self.history.push(self.bankroll);
    }
}

/// Console stand-in for a bankroll chart.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub start: Bankroll,
    pub finish: Bankroll,
    pub peak: Bankroll,
    pub trough: Bankroll,
    /// Mean log growth per hand.
    pub growth: f64,
}

impl From<&[Bankroll]> for Summary {
    fn from(history: &[Bankroll]) -> Self {
        assert!(!history.is_empty());
        let start = history[0];
        let finish = history[history.len() - 1];
        let peak = history.iter().cloned().fold(f64::MIN, f64::max);
        let trough = history.iter().cloned().fold(f64::MAX, f64::min);
        let hands = (history.len() - 1).max(1) as f64;
        let growth = (finish / start).ln() / hands;
        Self {
            start,
            finish,
            peak,
            trough,
            growth,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let growth = match self.growth > 0.0 {
            true => format!("{:+.5}", self.growth).green(),
            false => format!("{:.5}", self.growth).red(),
        };
        write!(
            f,
            "start   {:>12.2}\nfinish  {:>12.2}\npeak    {:>12.2}\ntrough  {:>12.2}\ngrowth  {} log-credits per hand",
            self.start, self.finish, self.peak, self.trough, growth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_one_bankroll_per_hand() {
        let mut simulation = Simulation::new(Some(5));
        let summary = simulation.run(100);
        assert!(simulation.history().len() == 101);
        assert!(summary.start == BANKROLL);
    }

    #[test]
    fn fractional_stakes_never_go_bust() {
        let mut simulation = Simulation::new(Some(5));
        simulation.run(500);
        assert!(simulation.history().iter().all(|&b| b > 0.0));
    }

    #[test]
    fn seeded_runs_reproduce() {
        let mut a = Simulation::new(Some(8));
        let mut b = Simulation::new(Some(8));
        a.run(50);
        b.run(50);
        assert!(a.history() == b.history());
    }

    #[test]
    fn summary_brackets_the_history() {
        let history = [1000.0, 1200.0, 900.0, 1100.0];
        let summary = Summary::from(&history[..]);
        assert!(summary.start == 1000.0);
        assert!(summary.finish == 1100.0);
        assert!(summary.peak == 1200.0);
        assert!(summary.trough == 900.0);
        assert!(summary.growth > 0.0);
    }
}

use super::kelly;
use super::table::Table;
use super::table::totals;
use crate::BANKROLL;
use crate::Bankroll;
use colored::Colorize;
