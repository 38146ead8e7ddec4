//! Text to allophone translation

use super::word::{UnmatchedLetter, WordTranslator};
use crate::phonemes::PhonemeMap;
use crate::vocabulary::Vocabulary;
use crate::Result;
use serde::Serialize;

/// Allophone appended after every word
pub const DEFAULT_SEPARATOR: &str = "PA4";

/// Where a word's allophones came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Vocabulary,
    Rules,
}

/// Allophones for one input word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTranslation {
    pub word: String,
    pub allophones: Vec<String>,
    pub source: Source,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<UnmatchedLetter>,
}

/// Translates text into synthesizer allophones
///
/// Each word is looked up in the vocabulary first; words not found there go
/// through the letter-to-sound rules and the phoneme map. All parts are
/// immutable, so one translator can be shared between threads.
#[derive(Debug, Clone)]
pub struct Translator {
    words: WordTranslator,
    vocabulary: Vocabulary,
    phonemes: PhonemeMap,
    separator: String,
}

impl Translator {
    pub fn new(words: WordTranslator, vocabulary: Vocabulary, phonemes: PhonemeMap) -> Self {
        Self {
            words,
            vocabulary,
            phonemes,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// English rules, the built-in vocabulary and SP0256 allophones
    pub fn english() -> Self {
        Self::new(
            WordTranslator::english(),
            Vocabulary::builtin(),
            PhonemeMap::sp0256(),
        )
    }

    /// Use a different word separator; empty for none
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.trim().to_string();
        self
    }

    pub fn word_translator(&self) -> &WordTranslator {
        &self.words
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn phoneme_map(&self) -> &PhonemeMap {
        &self.phonemes
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Allophones for a single word, without the separator
    pub fn translate_word(&self, word: &str) -> Result<WordTranslation> {
        if let Some(allophones) = self.vocabulary.lookup(word) {
            return Ok(WordTranslation {
                word: word.to_string(),
                allophones: allophones.split_whitespace().map(str::to_string).collect(),
                source: Source::Vocabulary,
                unmatched: Vec::new(),
            });
        }

        let report = self.words.translate_word_report(word)?;
        Ok(WordTranslation {
            word: word.to_string(),
            allophones: self.phonemes.map_all(&report.phonemes),
            source: Source::Rules,
            unmatched: report.unmatched,
        })
    }

    /// Per-word translations of whitespace-separated text
    pub fn translate_detailed(&self, text: &str) -> Result<Vec<WordTranslation>> {
        text.split_whitespace()
            .map(|word| self.translate_word(word))
            .collect()
    }

    /// Allophones for a sequence of words, each followed by the separator
    pub fn translate_words<I, S>(&self, words: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for word in words {
            out.extend(self.translate_word(word.as_ref())?.allophones);
            if !self.separator.is_empty() {
                out.push(self.separator.clone());
            }
        }
        Ok(out)
    }

    /// Allophones for whitespace-separated text
    pub fn translate(&self, text: &str) -> Result<Vec<String>> {
        self.translate_words(text.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_first() {
        let translator = Translator::english();
        let word = translator.translate_word("The").unwrap();
        assert_eq!(word.source, Source::Vocabulary);
        assert_eq!(word.allophones, vec!["DH1", "PA3", "IY"]);
    }

    #[test]
    fn test_rules_fallback() {
        let translator = Translator::english();
        let word = translator.translate_word("cat").unwrap();
        assert_eq!(word.source, Source::Rules);
        assert_eq!(word.allophones, vec!["KK1", "AE", "TT1"]);
    }

    #[test]
    fn test_separator_after_each_word() {
        let translator = Translator::english();
        assert_eq!(
            translator.translate("the cat").unwrap(),
            vec!["DH1", "PA3", "IY", "PA4", "KK1", "AE", "TT1", "PA4"]
        );
    }

    #[test]
    fn test_custom_separator() {
        let translator = Translator::english().with_separator("PA2");
        assert_eq!(translator.translate("a").unwrap(), vec!["EY", "PA2"]);

        let translator = Translator::english().with_separator("");
        assert_eq!(translator.translate("a").unwrap(), vec!["EY"]);
    }

    #[test]
    fn test_empty_text() {
        let translator = Translator::english();
        assert!(translator.translate("   ").unwrap().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let translator = Translator::english();
        let words = translator.translate_detailed("the cat").unwrap();
        let json = serde_json::to_value(&words).unwrap();
        assert_eq!(json[0]["source"], "vocabulary");
        assert_eq!(json[1]["source"], "rules");
        assert_eq!(json[1]["allophones"][0], "KK1");
        assert!(json[1].get("unmatched").is_none());
    }
}
