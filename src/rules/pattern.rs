//! Context patterns for letter-to-sound rules
//!
//! A rule's left and right contexts are written in a small pattern language:
//!
//! | Symbol | Matches |
//! |---|---|
//! | letter, `'`, space | that exact character |
//! | `#` | one or more vowels |
//! | `:` | zero or more consonants |
//! | `^` | one consonant |
//! | `.` | one voiced consonant (B D V G J L M N R W Z) |
//! | `+` | one front vowel (E I Y) |
//! | `%` | a suffix: ING, ERY, ER, ES, ED or E (right context only) |
//!
//! Left patterns are read outward from the matched text toward the start of
//! the word, so both the pattern and the context are scanned in reverse.
//! Matching is greedy and never backtracks.

use log::warn;
use std::fmt;

/// Which side of the matched text a context pattern constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One symbol of a context pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSymbol {
    /// An exact letter, apostrophe or space
    Literal(char),
    /// `#`
    Vowels,
    /// `:`
    Consonants,
    /// `^`
    Consonant,
    /// `.`
    Voiced,
    /// `+`
    FrontVowel,
    /// `%`
    Suffix,
    /// Anything outside the pattern alphabet; never matches
    Invalid(char),
}

impl ContextSymbol {
    /// Classify a pattern character for the given side
    pub fn parse(ch: char, side: Side) -> Self {
        match ch {
            '#' => ContextSymbol::Vowels,
            ':' => ContextSymbol::Consonants,
            '^' => ContextSymbol::Consonant,
            '.' => ContextSymbol::Voiced,
            '+' => ContextSymbol::FrontVowel,
            '%' if side == Side::Right => ContextSymbol::Suffix,
            c if c.is_ascii_alphabetic() || c == '\'' || c == ' ' => ContextSymbol::Literal(c),
            c => ContextSymbol::Invalid(c),
        }
    }

    /// Consume this symbol from `scan` starting at `pos`
    ///
    /// Returns the position after the consumed characters, or `None` if the
    /// symbol does not match there.
    fn consume(&self, scan: &Scan<'_>, pos: usize) -> Option<usize> {
        match *self {
            ContextSymbol::Literal(c) => (scan.at(pos) == Some(c)).then_some(pos + 1),
            ContextSymbol::Vowels => {
                if !scan.at(pos).is_some_and(is_vowel) {
                    return None;
                }
                Some(scan.skip_while(pos + 1, is_vowel))
            }
            ContextSymbol::Consonants => Some(scan.skip_while(pos, is_consonant)),
            ContextSymbol::Consonant => scan.one_of(pos, is_consonant),
            ContextSymbol::Voiced => scan.one_of(pos, is_voiced),
            ContextSymbol::FrontVowel => scan.one_of(pos, is_front_vowel),
            // Each branch steps one past its literal.
            ContextSymbol::Suffix => {
                if scan.starts_with(pos, "ING") || scan.starts_with(pos, "ERY") {
                    Some(pos + 4)
                } else if ["ER", "ES", "ED"].iter().any(|s| scan.starts_with(pos, s)) {
                    Some(pos + 3)
                } else if scan.at(pos) == Some('E') {
                    Some(pos + 2)
                } else {
                    None
                }
            }
            ContextSymbol::Invalid(_) => None,
        }
    }
}

/// A parsed left or right context pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPattern {
    source: String,
    side: Side,
    /// Symbols in scan order (already reversed for left patterns)
    symbols: Vec<ContextSymbol>,
}

impl ContextPattern {
    /// Parse a pattern string as written in a rule
    pub fn parse(source: &str, side: Side) -> Self {
        let mut symbols: Vec<ContextSymbol> =
            source.chars().map(|c| ContextSymbol::parse(c, side)).collect();
        if side == Side::Left {
            symbols.reverse();
        }
        Self {
            source: source.to_string(),
            side,
            symbols,
        }
    }

    /// The pattern as written
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// True for the unconditional pattern
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The first character outside the pattern alphabet, if any
    pub fn invalid_symbol(&self) -> Option<char> {
        self.symbols.iter().find_map(|s| match s {
            ContextSymbol::Invalid(c) => Some(*c),
            _ => None,
        })
    }

    /// Run the pattern against `context`
    ///
    /// `context` is in word order: everything before the matched text for a
    /// left pattern, everything after it for a right pattern. Returns how
    /// many context characters the pattern consumed, counted outward from the
    /// matched text, or `None` on failure. The count may run past the end of
    /// the context when `%` is last.
    pub fn scan(&self, context: &[char]) -> Option<usize> {
        let scan = Scan {
            context,
            side: self.side,
        };
        let mut pos = 0;
        for symbol in &self.symbols {
            if let ContextSymbol::Invalid(c) = symbol {
                warn!(
                    "Bad char in {} pattern '{}': '{}'",
                    self.side, self.source, c
                );
                return None;
            }
            pos = symbol.consume(&scan, pos)?;
        }
        Some(pos)
    }

    /// True when the pattern matches `context`
    pub fn matches(&self, context: &[char]) -> bool {
        self.scan(context).is_some()
    }
}

/// Match a pattern string against a context string
///
/// Convenience form of [`ContextPattern::matches`] for one-off checks.
pub fn lr_match(pattern: &str, context: &str, side: Side) -> bool {
    let context: Vec<char> = context.chars().collect();
    ContextPattern::parse(pattern, side).matches(&context)
}

/// Bounds-checked view of a context, read outward from the matched text
struct Scan<'a> {
    context: &'a [char],
    side: Side,
}

impl Scan<'_> {
    fn at(&self, pos: usize) -> Option<char> {
        match self.side {
            Side::Right => self.context.get(pos).copied(),
            Side::Left => self
                .context
                .len()
                .checked_sub(pos + 1)
                .map(|i| self.context[i]),
        }
    }

    fn skip_while(&self, mut pos: usize, pred: fn(char) -> bool) -> usize {
        while self.at(pos).is_some_and(pred) {
            pos += 1;
        }
        pos
    }

    fn one_of(&self, pos: usize, pred: fn(char) -> bool) -> Option<usize> {
        self.at(pos).is_some_and(pred).then_some(pos + 1)
    }

    fn starts_with(&self, pos: usize, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.at(pos + i) == Some(c))
    }
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

pub fn is_consonant(c: char) -> bool {
    c.is_ascii_uppercase() && !is_vowel(c)
}

fn is_voiced(c: char) -> bool {
    matches!(
        c,
        'B' | 'D' | 'V' | 'G' | 'J' | 'L' | 'M' | 'N' | 'R' | 'W' | 'Z'
    )
}

fn is_front_vowel(c: char) -> bool {
    matches!(c, 'E' | 'I' | 'Y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn scan_right(pattern: &str, context: &str) -> Option<usize> {
        ContextPattern::parse(pattern, Side::Right).scan(&chars(context))
    }

    #[test]
    fn test_empty_pattern_matches_anything() {
        assert!(lr_match("", "", Side::Left));
        assert!(lr_match("", "", Side::Right));
        assert!(lr_match("", " CAT", Side::Left));
        assert!(lr_match("", "S ", Side::Right));
    }

    #[test]
    fn test_vowels_greedy() {
        assert_eq!(scan_right("#", "AEIOU"), Some(5));
        assert_eq!(scan_right("#", "AT "), Some(1));
        assert_eq!(scan_right("#", "TA "), None);
        assert_eq!(scan_right("#", ""), None);
    }

    #[test]
    fn test_consonants_zero_or_more() {
        assert_eq!(scan_right(":", "AB"), Some(0));
        assert_eq!(scan_right(":", "STRA"), Some(3));
        assert_eq!(scan_right(":", ""), Some(0));
    }

    #[test]
    fn test_no_backtracking() {
        // '#' takes both vowels, leaving none for the second '#'
        assert_eq!(scan_right("##", "AE "), None);
        // ':' takes every consonant, so a following literal consonant fails
        assert_eq!(scan_right(":T", "ST "), None);
    }

    #[test]
    fn test_single_classes() {
        assert_eq!(scan_right("^", "T"), Some(1));
        assert_eq!(scan_right("^", "A"), None);
        assert_eq!(scan_right("^", " "), None);
        assert_eq!(scan_right(".", "D"), Some(1));
        assert_eq!(scan_right(".", "T"), None);
        assert_eq!(scan_right("+", "Y"), Some(1));
        assert_eq!(scan_right("+", "A"), None);
    }

    #[test]
    fn test_suffix_advances_past_literal() {
        assert_eq!(scan_right("%", "ING "), Some(4));
        assert_eq!(scan_right("%", "ERY "), Some(4));
        assert_eq!(scan_right("%", "ER "), Some(3));
        assert_eq!(scan_right("%", "ES "), Some(3));
        assert_eq!(scan_right("%", "ED "), Some(3));
        assert_eq!(scan_right("%", "E "), Some(2));
        assert_eq!(scan_right("%", "XYZ"), None);
    }

    #[test]
    fn test_suffix_overrun_fails_following_symbol() {
        // "E" with no padding: '%' steps past the end, so ' ' cannot match
        assert_eq!(scan_right("% ", "E"), None);
        assert_eq!(scan_right("%", "E"), Some(2));
    }

    #[test]
    fn test_left_context_reads_outward() {
        // "AB" on the left means B directly before the match, A before that
        assert!(lr_match("AB", " XAB", Side::Left));
        assert!(!lr_match("AB", " XBA", Side::Left));
        assert!(lr_match(" :", " ST", Side::Left));
        assert!(!lr_match(" :", " STA", Side::Left));
        assert!(lr_match("#:", " CAST", Side::Left));
    }

    #[test]
    fn test_left_context_bounds() {
        assert!(!lr_match("  ", " ", Side::Left));
        assert!(lr_match(" ", " ", Side::Left));
    }

    #[test]
    fn test_suffix_invalid_on_left() {
        let pattern = ContextPattern::parse("%", Side::Left);
        assert_eq!(pattern.invalid_symbol(), Some('%'));
        assert!(!pattern.matches(&chars("ING ")));
    }

    #[test]
    fn test_invalid_symbol_fails() {
        let pattern = ContextPattern::parse("A*", Side::Right);
        assert_eq!(pattern.invalid_symbol(), Some('*'));
        assert!(!pattern.matches(&chars("AB")));
        assert!(!lr_match("1", "1", Side::Right));
    }
}
