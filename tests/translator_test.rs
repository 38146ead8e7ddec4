//! Integration tests for text translation
//!
//! Exercises the rule engine, vocabulary bypass and phoneme mapping through
//! the public API.

use retrospeak::phonemes::PhonemeMap;
use retrospeak::rules::pattern::{lr_match, Side};
use retrospeak::rules::{Rule, RuleTable, TriggerKey};
use retrospeak::translate::{Source, Translator, WordTranslator};
use retrospeak::vocabulary::Vocabulary;
use retrospeak::RetroSpeakError;
use std::sync::Arc;
use std::thread;

#[test]
fn test_english_table_is_complete() {
    let table = RuleTable::english();
    assert!(table.validate().is_ok());
    for key in TriggerKey::all() {
        assert!(table.rules_for(key).is_some(), "no bucket for {}", key);
    }
}

#[test]
fn test_vocabulary_words_bypass_rules() {
    let translator = Translator::english();
    let vocabulary = Vocabulary::builtin();
    for word in ["the", "hello", "robot", "Computer", "SPEAK"] {
        let translated = translator.translate_word(word).unwrap();
        let expected: Vec<&str> = vocabulary.lookup(word).unwrap().split_whitespace().collect();
        assert_eq!(translated.source, Source::Vocabulary);
        assert_eq!(translated.allophones, expected, "word '{}'", word);
    }
}

#[test]
fn test_vocabulary_bypasses_an_empty_rule_table() {
    // With no rules at all, a dictionary word still translates
    let translator = Translator::new(
        WordTranslator::new(RuleTable::new()),
        Vocabulary::builtin(),
        PhonemeMap::sp0256(),
    );
    assert_eq!(
        translator.translate("the").unwrap(),
        vec!["DH1", "PA3", "IY", "PA4"]
    );
}

#[test]
fn test_the_through_both_paths() {
    let rules = WordTranslator::english();
    assert_eq!(rules.translate_word("THE").unwrap(), vec!["DH", "AX"]);

    let translator = Translator::english();
    let lower = translator.translate_word("the").unwrap();
    let upper = translator.translate_word("THE").unwrap();
    assert_eq!(lower.allophones, upper.allophones);
    assert_eq!(upper.source, Source::Vocabulary);
}

#[test]
fn test_rule_order_is_priority() {
    let first = RuleTable::new().with_rows(
        TriggerKey::Letter('A'),
        &[("", "A", "", "EY"), ("", "A", "", "AE")],
    );
    let second = RuleTable::new().with_rows(
        TriggerKey::Letter('A'),
        &[("", "A", "", "AE"), ("", "A", "", "EY")],
    );

    assert_eq!(WordTranslator::new(first).translate_word("a").unwrap(), vec!["EY"]);
    assert_eq!(WordTranslator::new(second).translate_word("a").unwrap(), vec!["AE"]);
}

#[test]
fn test_context_decides_between_rules() {
    let table = RuleTable::new()
        .with_rules(
            TriggerKey::Letter('C'),
            vec![Rule::new("", "C", "+", "s"), Rule::new("", "C", "", "k")],
        )
        .with_rows(TriggerKey::Letter('E'), &[("", "E", "", "EH")])
        .with_rows(TriggerKey::Letter('A'), &[("", "A", "", "AE")]);
    let words = WordTranslator::new(table);

    assert_eq!(words.translate_word("ce").unwrap(), vec!["s", "EH"]);
    assert_eq!(words.translate_word("ca").unwrap(), vec!["k", "AE"]);
}

#[test]
fn test_unmatched_letter_recovery() {
    let table = RuleTable::new()
        .with_rows(TriggerKey::Letter('Q'), &[("", "QU", "", "k w")])
        .with_rows(TriggerKey::Letter('Z'), &[("", "Z", "", "z")]);
    let words = WordTranslator::new(table);

    let report = words.translate_word_report("QZ").unwrap();
    assert_eq!(report.phonemes, vec!["z"]);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].letter, 'Q');
    assert_eq!(report.unmatched[0].position, 0);
}

#[test]
fn test_missing_bucket_is_fatal() {
    let table = RuleTable::new().with_rows(TriggerKey::Letter('Z'), &[("", "Z", "", "z")]);
    let words = WordTranslator::new(table);

    match words.translate_word("ZQ") {
        Err(RetroSpeakError::UnknownTrigger { key, .. }) => assert_eq!(key, "Q"),
        other => panic!("expected UnknownTrigger, got {:?}", other),
    }
}

#[test]
fn test_unmapped_phonemes_are_dropped() {
    let table = RuleTable::new().with_rows(TriggerKey::Letter('X'), &[("", "X", "", "k XX s")]);
    let translator = Translator::new(
        WordTranslator::new(table),
        Vocabulary::new(),
        PhonemeMap::sp0256(),
    );

    let allophones = translator.translate("x").unwrap();
    assert_eq!(allophones, vec!["KK1", "SS", "PA4"]);
    assert!(!allophones.iter().any(|a| a == "XX"));
}

#[test]
fn test_rule_words_map_to_chip_allophones() {
    let translator = Translator::english();
    let allophones = translator.translate("cat").unwrap();
    assert_eq!(allophones, vec!["KK1", "AE", "TT1", "PA4"]);
    for allophone in &allophones {
        assert!(retrospeak::speech::allophones::address(allophone).is_some());
    }
}

#[test]
fn test_punctuation_pauses() {
    let translator = Translator::english();
    let allophones = translator.translate("cat, dog.").unwrap();
    assert_eq!(allophones[3], "PA4");
    assert_eq!(allophones.last().map(String::as_str), Some("PA4"));
}

#[test]
fn test_whole_alphabet_translates() {
    let words = WordTranslator::english();
    for letter in 'a'..='z' {
        let word = letter.to_string().repeat(3);
        assert!(words.translate_word(&word).is_ok(), "word '{}'", word);
    }
    for word in ["thought", "knight", "physics", "xylophone", "queue", "rhythm"] {
        let report = words.translate_word_report(word).unwrap();
        assert!(!report.phonemes.is_empty(), "word '{}'", word);
    }
}

#[test]
fn test_pattern_examples() {
    assert!(lr_match("", "", Side::Left));
    assert!(lr_match("", "", Side::Right));
    assert!(lr_match("#", "AEIOU", Side::Right));
    assert!(!lr_match("#", "BA", Side::Right));
    assert!(lr_match(":", "A", Side::Right));
    assert!(lr_match("%", "ING ", Side::Right));
    assert!(lr_match("%", "ER ", Side::Right));
    assert!(lr_match("%", "E ", Side::Right));
    assert!(!lr_match("%", "XYZ", Side::Right));
}

#[test]
fn test_translator_shared_between_threads() {
    let translator = Arc::new(Translator::english());
    let expected = translator.translate("the quick brown fox").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || translator.translate("the quick brown fox").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
