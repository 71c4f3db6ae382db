//! Interactive terminal implementation of the console

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use rand::Rng;
use rpsls_match::{join, Console, Droid, Move};

pub struct Terminal;

/// Ask until a non-blank name is given
pub fn ask_name() -> Result<String> {
    let name = Input::<String>::new()
        .with_prompt("What's your name?")
        .validate_with(|s: &String| -> Result<(), &str> {
            match s.trim().is_empty() {
                true => Err("Sorry, must enter a value"),
                false => Ok(()),
            }
        })
        .interact_text()
        .context("reading name")?;
    Ok(name.trim().to_string())
}

/// Pick a droid from the roster, or let `rng` decide
pub fn ask_droid<R: Rng + ?Sized>(rng: &mut R) -> Result<Droid> {
    let mut items = Droid::ALL
        .iter()
        .map(|d| format!("{:<6} {}", d.name(), d.describe()))
        .collect::<Vec<String>>();
    items.push("Surprise me".to_string());
    let selection = Select::new()
        .with_prompt("Please choose a droid to play against")
        .items(&items)
        .default(0)
        .interact()
        .context("choosing droid")?;
    Ok(droid_for(selection, rng))
}

/// Roster entry at `selection`; anything past the roster is "Surprise me"
fn droid_for<R: Rng + ?Sized>(selection: usize, rng: &mut R) -> Droid {
    match Droid::ALL.get(selection) {
        Some(droid) => *droid,
        None => Droid::random(rng),
    }
}

/// Lowercased and trimmed; only legal tokens get past the prompt
fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

impl Console for Terminal {
    type Error = anyhow::Error;

    fn read_move(&mut self) -> Result<String> {
        let raw = Input::<String>::new()
            .with_prompt(format!("Please choose one: {}", join(&Move::ALL)))
            .validate_with(|s: &String| -> Result<(), &str> {
                match normalize(s).parse::<Move>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Sorry, that's not a valid choice."),
                }
            })
            .interact_text()
            .context("reading move")?;
        Ok(normalize(&raw))
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .interact()
            .context("reading answer")
    }

    fn display(&mut self, message: &str) {
        println!("{}", message);
    }

    fn announce(&mut self, message: &str) {
        println!("{}", message.bold().green());
    }
}
