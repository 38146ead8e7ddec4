//! Error types for retrospeak

use std::io;
use thiserror::Error;

/// Main error type for retrospeak
#[derive(Error, Debug)]
pub enum RetroSpeakError {
    /// A character selected a rule bucket the table does not have
    #[error("No rules for '{key}' (in word '{word}')")]
    UnknownTrigger { key: String, word: String },

    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for retrospeak operations
pub type Result<T> = std::result::Result<T, RetroSpeakError>;

impl From<String> for RetroSpeakError {
    fn from(s: String) -> Self {
        RetroSpeakError::Other(s)
    }
}
