//! Rule resolution at a cursor position

use crate::rules::Rule;
use log::warn;

/// Outcome of resolving one cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'r> {
    /// `rule` applied; translation continues at `next`
    Matched { rule: &'r Rule, next: usize },
    /// No rule applied; the character is skipped
    Unmatched { next: usize },
}

impl<'r> Resolution<'r> {
    /// Cursor position after this step
    pub fn next(&self) -> usize {
        match self {
            Resolution::Matched { next, .. } | Resolution::Unmatched { next } => *next,
        }
    }

    /// Phonemes produced by this step
    pub fn phonemes(&self) -> &'r [String] {
        match self {
            Resolution::Matched { rule, .. } => rule.phonemes(),
            Resolution::Unmatched { .. } => &[],
        }
    }
}

/// Index of the first rule in `rules` that applies at `cursor`
///
/// `word` is the padded, uppercased word.
pub fn find_rule(word: &[char], cursor: usize, rules: &[Rule]) -> Option<usize> {
    rules
        .iter()
        .position(|rule| rule.applies_at(word, cursor).is_some())
}

/// Apply the first matching rule at `cursor`
///
/// When no rule applies the cursor moves on by one character and no
/// phonemes are produced.
pub fn resolve<'r>(word: &[char], cursor: usize, rules: &'r [Rule]) -> Resolution<'r> {
    if let Some(index) = find_rule(word, cursor, rules) {
        let rule = &rules[index];
        return Resolution::Matched {
            rule,
            next: cursor + rule.text_len(),
        };
    }

    let letter = word.get(cursor).copied().unwrap_or(' ');
    let text: String = word.iter().collect();
    warn!("Can't find rule for '{}' in '{}'", letter, text.trim());
    Resolution::Unmatched { next: cursor + 1 }
}
