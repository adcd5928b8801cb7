//! Batch files: many questions in one TOML document.
//!
//! ```toml
//! [[query]]
//! ask = "can_move"
//! piece = { kind = "queen", color = "white", at = "d1" }
//! to = "h5"
//!
//! [[query]]
//! ask = "can_kill"
//! piece = { kind = "pawn", color = "white", at = "e4" }
//! other = { kind = "knight", color = "black", at = "d5" }
//!
//! [[query]]
//! ask = "targets"
//! piece = { kind = "knight", color = "black", at = "g8" }
//! ```

use crate::query::{Answer, Question};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a batch file.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Failed to read the batch file from disk.
    #[error("Failed to read batch file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the batch file as valid TOML.
    #[error("Failed to parse batch file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A parsed batch file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchFile {
    #[serde(default, rename = "query")]
    pub queries: Vec<Question>,
}

/// The result of one question in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Position of the question in the file, starting at 1.
    pub index: usize,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, BatchError> {
        Ok(toml::from_str(content)?)
    }

    /// Answers every question. A question about an invalid piece yields an
    /// outcome carrying the error; the rest of the batch still runs.
    pub fn run(&self) -> Vec<Outcome> {
        self.queries
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let (answer, error) = match question.answer() {
                    Ok(answer) => (Some(answer), None),
                    Err(e) => {
                        tracing::warn!("query {} rejected: {}", i + 1, e);
                        (None, Some(e.to_string()))
                    }
                };
                Outcome {
                    index: i + 1,
                    question: question.to_string(),
                    answer,
                    error,
                }
            })
            .collect()
    }
}
