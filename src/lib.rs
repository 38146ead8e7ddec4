//! retroSpeak - English text to SP0256-AL2 allophones
//!
//! Translates English text with the NRL letter-to-sound rules, maps the
//! result onto the SP0256-AL2 allophone set and queues it for a speech
//! chip. Words in the vocabulary bypass the rules.

pub mod clock;
pub mod config;
pub mod error;
pub mod phonemes;
pub mod rules;
pub mod speech;
pub mod translate;
pub mod vocabulary;

pub use error::{Result, RetroSpeakError};
pub use translate::Translator;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "retrospeak";
