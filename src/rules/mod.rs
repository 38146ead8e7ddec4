//! Letter-to-sound rule tables
//!
//! A rule rewrites a literal run of letters into phonemes when its left and
//! right context patterns both match. Rules are grouped into buckets keyed by
//! the letter they start with; punctuation and everything else that is not
//! an ASCII letter share one bucket. Within a bucket the first matching rule
//! wins, so authored order is significant.

pub mod english;
pub mod pattern;

use crate::{Result, RetroSpeakError};
use pattern::{ContextPattern, Side};
use std::collections::HashMap;
use std::fmt;

/// A rule as authored: (left pattern, matched text, right pattern, phonemes)
pub type RuleRow = (&'static str, &'static str, &'static str, &'static str);

/// Key selecting which rule bucket to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKey {
    /// An uppercase ASCII letter
    Letter(char),
    /// Anything that is not an uppercase ASCII letter
    Punctuation,
}

impl TriggerKey {
    /// Bucket for the character under the cursor
    pub fn for_char(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            TriggerKey::Letter(ch)
        } else {
            TriggerKey::Punctuation
        }
    }

    /// All 27 buckets a complete table provides
    pub fn all() -> impl Iterator<Item = TriggerKey> {
        ('A'..='Z')
            .map(TriggerKey::Letter)
            .chain(std::iter::once(TriggerKey::Punctuation))
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerKey::Letter(c) => write!(f, "{}", c),
            TriggerKey::Punctuation => write!(f, "punctuation"),
        }
    }
}

/// One letter-to-sound rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    left: ContextPattern,
    text: Vec<char>,
    right: ContextPattern,
    phonemes: Vec<String>,
}

impl Rule {
    /// Build a rule from its authored parts
    ///
    /// `phonemes` is a whitespace-separated list; an empty string makes the
    /// matched text silent.
    pub fn new(left: &str, text: &str, right: &str, phonemes: &str) -> Self {
        Self {
            left: ContextPattern::parse(left, Side::Left),
            text: text.chars().collect(),
            right: ContextPattern::parse(right, Side::Right),
            phonemes: phonemes.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn left(&self) -> &ContextPattern {
        &self.left
    }

    pub fn right(&self) -> &ContextPattern {
        &self.right
    }

    /// The literal text this rule consumes
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Number of characters the rule consumes when it applies
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    /// Does this rule apply at `cursor` in the padded `word`?
    ///
    /// Returns the cursor position after the matched text.
    pub fn applies_at(&self, word: &[char], cursor: usize) -> Option<usize> {
        if self.text.is_empty() {
            return None;
        }
        let end = cursor.checked_add(self.text.len())?;
        if word.get(cursor..end)? != self.text.as_slice() {
            return None;
        }
        (self.left.matches(&word[..cursor]) && self.right.matches(&word[end..])).then_some(end)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} [{}] -> '{}'",
            self.left.source(),
            self.text(),
            self.right.source(),
            self.phonemes.join(" ")
        )
    }
}

/// Immutable, bucketed collection of rules
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    buckets: HashMap<TriggerKey, Vec<Rule>>,
}

impl RuleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The NRL English rule set
    pub fn english() -> Self {
        english::BUCKETS
            .iter()
            .fold(Self::new(), |table, (key, rows)| table.with_rows(*key, rows))
    }

    /// Add a bucket of rules, keeping their order
    ///
    /// Rules for a key that already has a bucket are appended after it.
    pub fn with_rules(mut self, key: TriggerKey, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.buckets.entry(key).or_default().extend(rules);
        self
    }

    /// Add a bucket of authored rule rows
    pub fn with_rows(self, key: TriggerKey, rows: &[RuleRow]) -> Self {
        let rules = rows
            .iter()
            .map(|(left, text, right, out)| Rule::new(left, text, right, out));
        self.with_rules(key, rules)
    }

    /// Rules for a bucket in priority order
    pub fn rules_for(&self, key: TriggerKey) -> Option<&[Rule]> {
        self.buckets.get(&key).map(Vec::as_slice)
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the table is complete and well formed
    ///
    /// Every letter and the punctuation bucket must be present, every rule
    /// must consume at least one character, and no pattern may contain a
    /// character outside the pattern alphabet.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = TriggerKey::all()
            .filter(|key| !self.buckets.contains_key(key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(RetroSpeakError::InvalidRuleTable(format!(
                "missing rules for {}",
                missing.join(", ")
            )));
        }

        for (key, rules) in &self.buckets {
            for rule in rules {
                if rule.text.is_empty() {
                    return Err(RetroSpeakError::InvalidRuleTable(format!(
                        "{} rule {} matches no text",
                        key, rule
                    )));
                }
                for pattern in [rule.left(), rule.right()] {
                    if let Some(c) = pattern.invalid_symbol() {
                        return Err(RetroSpeakError::InvalidRuleTable(format!(
                            "bad char '{}' in {} pattern of {} rule {}",
                            c,
                            pattern.side(),
                            key,
                            rule
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
