/// The dice table played by hand: see the posted odds, choose stakes,
/// watch the roll.
pub struct Session {
    table: Table,
    bankroll: Bankroll,
}

impl Session {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            table: Table::new(seed),
            bankroll: BANKROLL,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            println!("\n{}\nbankroll {:.2}", "-".repeat(21), self.bankroll);
            let payouts = self.table.payouts();
            print!("{}", payouts);
            self.hand(payouts)?;
            if self.bankroll < 1.0 {
                println!("bust");
                break;
            }
            if self.done()? {
                break;
            }
        }
        Ok(())
    }

    fn hand(&mut self, payouts: Payouts) -> Result<()> {
        let mut stakes = [0.0; 13];
        for total in totals() {
            let stake = self.stake(total)?;
            self.bankroll -= stake;
            stakes[total as usize] = stake;
        }
        let roll = self.table.roll();
        let winnings = (payouts.at(roll) + 1.0) * stakes[roll as usize];
        self.bankroll += winnings;
        match winnings > 0.0 {
            true => println!("rolled {}  {}", roll, format!("+{:.2}", winnings).green()),
            false => println!("rolled {}", roll),
        }
        Ok(())
    }

    /// Integer stake between zero and whatever bankroll remains.
    fn stake(&self, total: Value) -> Result<Bankroll> {
        let limit = self.bankroll.floor() as i64;
        let line: String = Input::new()
            .with_prompt(format!("stake on {}", total))
            .default("0".to_string())
            .validate_with(move |s: &String| -> Result<(), &'static str> {
                match s.trim().parse::<i64>() {
                    Ok(n) if n < 0 => Err("stake cannot be negative"),
                    Ok(n) if n > limit => Err("stake exceeds bankroll"),
                    Ok(_) => Ok(()),
                    Err(_) => Err("stake must be an integer"),
                }
            })
            .interact_text()?;
        Ok(line.trim().parse::<i64>().expect("validated") as Bankroll)
    }

    fn done(&self) -> Result<bool> {
        let line: String = Input::new()
            .with_prompt("press enter to deal again, q to quit")
            .allow_empty(true)
            .interact_text()?;
        Ok(line.trim() == "q")
    }
}

use super::table::Payouts;
use super::table::Table;
use super::table::totals;
use crate::BANKROLL;
use crate::Bankroll;
use crate::Value;
use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
