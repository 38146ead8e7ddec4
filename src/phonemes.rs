//! Phoneme alphabet mapping
//!
//! The letter-to-sound rules speak the NRL phoneme alphabet, which is a
//! subset of what the SP0256-AL2 can produce. This maps each NRL phoneme to
//! one or more chip allophones.

use log::debug;
use std::collections::HashMap;

/// NRL phoneme -> SP0256-AL2 allophones
const NRL_TO_SP0256: &[(&str, &str)] = &[
    ("AA", "AA"),
    ("AE", "AE"),
    ("AH", "AX AX"),
    ("AO", "AO"),
    ("AW", "AW"),
    ("AX", "AX"),
    ("AY", "AY"),
    ("b", "BB1"),
    ("CH", "CH"),
    ("d", "DD1"),
    ("DH", "DH1"),
    ("EH", "EH"),
    ("ER", "ER1"),
    ("EY", "EY"),
    ("f", "FF"),
    ("g", "GG2"),
    ("h", "HH1"),
    ("IH", "IH"),
    ("IY", "IY"),
    ("j", "JH"),
    ("k", "KK1"),
    ("l", "LL"),
    ("m", "MM"),
    ("n", "NN1"),
    ("NG", "NG"),
    ("OW", "OW"),
    ("OY", "OY"),
    ("p", "PP"),
    ("r", "RR1"),
    ("s", "SS"),
    ("SH", "SH"),
    ("t", "TT1"),
    ("TH", "TH"),
    ("UH", "UH"),
    ("UW", "UW2"),
    ("v", "VV"),
    ("w", "WW"),
    ("WH", "WH"),
    ("y", "YY1"),
    ("z", "ZZ"),
    ("ZH", "ZH"),
    ("PAUSE", "PA4"),
];

/// Maps rule-engine phonemes onto a synthesizer's phoneme set
///
/// Phonemes with no entry are dropped. That silences them rather than
/// failing, so a gap in the map shows up as missing speech.
#[derive(Debug, Clone, Default)]
pub struct PhonemeMap {
    entries: HashMap<String, Vec<String>>,
}

impl PhonemeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// NRL phonemes to SP0256-AL2 allophones
    pub fn sp0256() -> Self {
        NRL_TO_SP0256
            .iter()
            .fold(Self::new(), |map, (from, to)| map.with(from, to))
    }

    /// Add or replace one mapping; `to` is whitespace-separated
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.entries.insert(
            from.to_string(),
            to.split_whitespace().map(str::to_string).collect(),
        );
        self
    }

    /// Target phonemes for one source phoneme
    pub fn get(&self, phoneme: &str) -> Option<&[String]> {
        self.entries.get(phoneme).map(Vec::as_slice)
    }

    /// Map a phoneme sequence, dropping anything unmapped
    pub fn map_all<S: AsRef<str>>(&self, phonemes: &[S]) -> Vec<String> {
        let mut out = Vec::with_capacity(phonemes.len());
        for phoneme in phonemes {
            match self.get(phoneme.as_ref()) {
                Some(mapped) => out.extend(mapped.iter().cloned()),
                None => debug!("Dropping unmapped phoneme '{}'", phoneme.as_ref()),
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
