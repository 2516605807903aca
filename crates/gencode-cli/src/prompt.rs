//! Overwrite confirmation on the terminal.

use std::io::{self, BufRead};
use std::path::Path;

use console::Term;
use tracing::debug;

use gencode_core::application::ApplicationError;
use gencode_core::prelude::{GenResult, OverwritePrompt};

/// Asks `Overwrite '<path>'? (y/n)` on stderr and reads the answer from stdin.
///
/// Only `y` and `yes` confirm; anything else, including end of input, keeps
/// the existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl OverwritePrompt for StdinPrompt {
    fn confirm_overwrite(&self, path: &Path) -> GenResult<bool> {
        Term::stderr()
            .write_str(&format!("Overwrite '{}'? (y/n) ", path.display()))
            .map_err(prompt_failed)?;

        let answer = read_answer(io::stdin().lock()).map_err(prompt_failed)?;
        debug!(path = %path.display(), answer = %answer, "overwrite prompt answered");
        Ok(is_yes(&answer))
    }
}

fn read_answer(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer, "y" | "yes")
}

fn prompt_failed(e: io::Error) -> gencode_core::error::GenError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
