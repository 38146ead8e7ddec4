//! Letter-to-sound translation
//!
//! [`resolver`] picks the rule for one cursor position, [`word`] walks a
//! whole word, and [`text`] combines words with the vocabulary and the
//! phoneme map.

pub mod resolver;
pub mod text;
pub mod word;

pub use resolver::{find_rule, resolve, Resolution};
pub use text::{Source, Translator, WordTranslation, DEFAULT_SEPARATOR};
pub use word::{UnmatchedLetter, WordReport, WordTranslator};
