// ABOUTME: Yes/no confirmation capability for destructive operations
// Callers receive a Confirm implementation instead of reading the terminal directly

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Returns true only when the user explicitly agreed.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompts on stdout and reads one line from stdin. Only `y`/`Y` counts as yes.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} ", question.yellow());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::debug!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Confirmer with a fixed answer, used for `--force` style flows and tests.
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Y"));
        assert!(!is_yes(""));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n\n"));
    }

    #[test]
    fn test_fixed_answer() {
        assert!(Answer(true).confirm("anything?"));
        assert!(!Answer(false).confirm("anything?"));
    }
}
