//! Where the content root comes from.
//!
//! The scanner only needs a path. How the user supplies it is behind
//! [`RootSource`]: a command-line argument, or a terminal prompt when no
//! argument was given. Leaving the prompt blank cancels the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootError {
    #[error("Failed to read root directory from prompt: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Supplies the directory to scan.
pub trait RootSource {
    /// `Ok(None)` means the user declined to pick a directory.
    fn obtain(&self) -> Result<Option<PathBuf>, RootError>;

    /// Short label for diagnostics, e.g. "command-line argument".
    fn describe(&self) -> &'static str;
}

/// A root given on the command line.
#[derive(Debug, Clone)]
pub struct ArgRoot(pub PathBuf);

impl RootSource for ArgRoot {
    fn obtain(&self) -> Result<Option<PathBuf>, RootError> {
        Ok(Some(self.0.clone()))
    }

    fn describe(&self) -> &'static str {
        "command-line argument"
    }
}

/// Ask for the root interactively.
#[derive(Debug, Clone, Default)]
pub struct PromptRoot;

impl RootSource for PromptRoot {
    fn obtain(&self) -> Result<Option<PathBuf>, RootError> {
        let answer: String = dialoguer::Input::new()
            .with_prompt("Root directory to scan (blank to cancel)")
            .allow_empty(true)
            .interact_text()?;
        Ok(parse_answer(&answer))
    }

    fn describe(&self) -> &'static str {
        "prompt"
    }
}

/// Blank answers cancel; surrounding whitespace is not part of the path.
fn parse_answer(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
