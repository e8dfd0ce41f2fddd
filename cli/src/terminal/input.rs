use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

/// Reads a single `y`/`n` key press. Anything but `y` is a no, and so is a
/// non-interactive stdin.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, question: &str) -> bool {
        if !io::stdin().is_terminal() {
            return false;
        }

        print!("{question} [y/N] ");
        let _ = io::stdout().flush();

        let answer = read_answer().unwrap_or(false);
        println!("{}", if answer { "y" } else { "n" });
        answer
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn read_answer() -> io::Result<bool> {
    let _guard = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            return Ok(match key.code {
                _ if ctrl_c => false,
                KeyCode::Char('y') | KeyCode::Char('Y') => true,
                _ => false,
            });
        }
    }
}
