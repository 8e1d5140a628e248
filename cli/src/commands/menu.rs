use std::io::{self, BufRead, Write};

use colored::*;
use netaudit_core::dispatch::{Action, DispatchTable};
use thiserror::Error;

use crate::nprint;
use crate::terminal::{colors, print};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please enter a number between 1 and {max}.")]
    OutOfRange { max: u8 },
}

/// Maps one line of user input to an action of `table`.
pub fn parse_choice(input: &str, table: &DispatchTable) -> Result<Action, ChoiceError> {
    let id: u8 = input
        .trim()
        .parse()
        .map_err(|_| ChoiceError::NotANumber)?;

    table.resolve(id).ok_or(ChoiceError::OutOfRange {
        max: table.max_id(),
    })
}

/// Shows the menu until a valid choice is entered. End of input counts as exit.
pub fn choose(table: &DispatchTable) -> anyhow::Result<Action> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        print_menu(table);

        print!("{} ", "Enter your choice:".color(colors::ACCENT));
        io::stdout().flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            nprint!();
            return Ok(Action::Exit);
        }

        match parse_choice(&line, table) {
            Ok(action) => return Ok(action),
            Err(err) => print::failure(&err.to_string()),
        }
    }
}

fn print_menu(table: &DispatchTable) {
    nprint!();
    print::print(&format!(
        "{}",
        "Network Configuration Audit Menu:".color(colors::PRIMARY)
    ));
    for entry in table.entries() {
        print::print(&format!(
            "{}{} {}",
            entry.id.to_string().color(colors::ACCENT),
            ".".color(colors::SEPARATOR),
            entry.action.label()
        ));
    }
}
