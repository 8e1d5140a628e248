use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use netaudit_core::credentials::CredentialSource;
use secrecy::SecretString;

const SUDO_PROMPT: &str = "Enter your sudo password";

/// Reads a line from the terminal without echoing it.
///
/// Ctrl-C aborts with [`io::ErrorKind::Interrupted`].
pub fn secret_input(prompt: &str) -> io::Result<SecretString> {
    let mut stdout = io::stdout();

    print!("{}: ", prompt);
    stdout.flush()?;

    terminal::enable_raw_mode()?;
    let result = read_secret_line();
    terminal::disable_raw_mode()?;

    writeln!(stdout)?;
    result
}

fn read_secret_line() -> io::Result<SecretString> {
    let mut input = String::new();

    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            match code {
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "Ctrl-C"));
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
        }
    }

    Ok(SecretString::from(input))
}

/// Prompts for the sudo password, unless the process already runs as root.
pub struct PromptCredential;

impl CredentialSource for PromptCredential {
    fn credential(&self) -> io::Result<Option<SecretString>> {
        if is_root::is_root() {
            return Ok(None);
        }
        secret_input(SUDO_PROMPT).map(Some)
    }
}
