//! SP0256-AL2 allophone addresses
//!
//! The chip speaks one of 64 allophones selected by a 6-bit address.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Allophone name -> address, from the SP0256-AL2 datasheet
pub static ALLOPHONES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let names = [
        "PA1", "PA2", "PA3", "PA4", "PA5", "OY", "AY", "EH", //
        "KK3", "PP", "JH", "NN1", "IH", "TT2", "RR1", "AX", //
        "MM", "TT1", "DH1", "IY", "EY", "DD1", "UW1", "AO", //
        "AA", "YY2", "AE", "HH1", "BB1", "TH", "UH", "UW2", //
        "AW", "DD2", "GG3", "VV", "GG1", "SH", "ZH", "RR2", //
        "FF", "KK2", "KK1", "ZZ", "NG", "LL", "WW", "XR", //
        "WH", "YY1", "CH", "ER1", "ER2", "OW", "DH2", "SS", //
        "NN2", "HH2", "OR", "AR", "YR", "GG2", "EL", "BB2",
    ];
    names
        .iter()
        .enumerate()
        .map(|(address, name)| (*name, address as u8))
        .collect()
});

/// Address of an allophone, ignoring case
pub fn address(name: &str) -> Option<u8> {
    ALLOPHONES.get(name.to_uppercase().as_str()).copied()
}

/// Canonical (uppercase) spelling of an allophone name
pub fn canonical(name: &str) -> Option<&'static str> {
    ALLOPHONES
        .get_key_value(name.to_uppercase().as_str())
        .map(|(name, _)| *name)
}

/// All allophone names, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ALLOPHONES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses() {
        assert_eq!(address("PA1"), Some(0));
        assert_eq!(address("pa4"), Some(3));
        assert_eq!(address("BB2"), Some(63));
        assert_eq!(address("QQ"), None);
    }

    #[test]
    fn test_names() {
        let names = names();
        assert_eq!(names.len(), 64);
        assert_eq!(names[0], "AA");
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("dh1"), Some("DH1"));
        assert_eq!(canonical("nope"), None);
    }
}
