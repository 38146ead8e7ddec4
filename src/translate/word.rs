//! Word-level letter-to-sound translation

use super::resolver::{resolve, Resolution};
use crate::rules::{RuleTable, TriggerKey};
use crate::{Result, RetroSpeakError};
use log::debug;
use serde::Serialize;
use std::fmt;

/// A character no rule could translate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedLetter {
    pub letter: char,
    /// Index in the word, counting from 0
    pub position: usize,
    pub word: String,
}

impl fmt::Display for UnmatchedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no rule for '{}' at {} in '{}'",
            self.letter, self.position, self.word
        )
    }
}

/// Phonemes for one word plus anything that could not be translated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordReport {
    pub phonemes: Vec<String>,
    pub unmatched: Vec<UnmatchedLetter>,
}

/// Translates single words with a rule table
#[derive(Debug, Clone)]
pub struct WordTranslator {
    rules: RuleTable,
}

impl WordTranslator {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Translator using the NRL English rules
    pub fn english() -> Self {
        Self::new(RuleTable::english())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Translate a word into rule-engine phonemes
    ///
    /// Case is ignored. Letters no rule covers are skipped.
    pub fn translate_word(&self, word: &str) -> Result<Vec<String>> {
        Ok(self.translate_word_report(word)?.phonemes)
    }

    /// Translate a word, reporting skipped letters alongside the phonemes
    ///
    /// Fails only if a character selects a bucket the rule table lacks.
    pub fn translate_word_report(&self, word: &str) -> Result<WordReport> {
        let upper = word.to_uppercase();
        let padded: Vec<char> = std::iter::once(' ')
            .chain(upper.chars())
            .chain(std::iter::once(' '))
            .collect();
        let end = padded.len() - 1;

        let mut report = WordReport::default();
        let mut cursor = 1;
        while cursor < end {
            let key = TriggerKey::for_char(padded[cursor]);
            let rules = self
                .rules
                .rules_for(key)
                .ok_or_else(|| RetroSpeakError::UnknownTrigger {
                    key: key.to_string(),
                    word: upper.clone(),
                })?;

            let step = resolve(&padded, cursor, rules);
            if let Resolution::Unmatched { .. } = step {
                report.unmatched.push(UnmatchedLetter {
                    letter: padded[cursor],
                    position: cursor - 1,
                    word: upper.clone(),
                });
            }
            report.phonemes.extend(step.phonemes().iter().cloned());
            cursor = step.next();
        }

        debug!("{} -> {}", upper, report.phonemes.join(" "));
        Ok(report)
    }
}
