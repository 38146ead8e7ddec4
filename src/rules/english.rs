//! NRL English letter-to-sound rules
//!
//! From "Automatic Translation of English Text to Phonetics by Means of
//! Letter-to-Sound Rules", NRL Report 7948 (Elovitz et al., 1976), as
//! adapted by Wasser (1985). Public domain.
//!
//! Output phonemes use the NRL alphabet: vowels and digraphs in uppercase
//! (`IY`, `AX`, `TH`, `NG`, ...), single consonants in lowercase (`p`, `b`,
//! `t`, ...). Punctuation that ends a phrase produces `PAUSE`.
//!
//! A left or right pattern of `""` matches anything; `" "` requires a word
//! boundary. Order within each list is priority order.

use super::{RuleRow, TriggerKey};

pub const PUNCTUATION: &[RuleRow] = &[
    ("", " ", "", ""),
    ("", "-", "", ""),
    (".", "'S", "", "z"),
    ("#:.E", "'S", "", "z"),
    ("#", "'S", "", "z"),
    ("", "'", "", ""),
    ("", ",", "", "PAUSE"),
    ("", ".", "", "PAUSE"),
    ("", "?", "", "PAUSE"),
    ("", "!", "", "PAUSE"),
];

pub const A: &[RuleRow] = &[
    ("", "A", " ", "AX"),
    (" ", "ARE", " ", "AA r"),
    (" ", "AR", "O", "AX r"),
    ("", "AR", "#", "EH r"),
    ("^", "AS", "#", "EY s"),
    ("", "A", "WA", "AX"),
    ("", "AW", "", "AO"),
    (" :", "ANY", "", "EH n IY"),
    ("", "A", "^+#", "EY"),
    ("#:", "ALLY", "", "AX l IY"),
    (" ", "AL", "#", "AX l"),
    ("", "AGAIN", "", "AX g EH n"),
    ("#:", "AG", "E", "IH j"),
    ("", "A", "^+:#", "AE"),
    (" :", "A", "^+ ", "EY"),
    ("", "A", "^%", "EY"),
    (" ", "ARR", "", "AX r"),
    ("", "ARR", "", "AE r"),
    (" :", "AR", " ", "AA r"),
    ("", "AR", " ", "ER"),
    ("", "AR", "", "AA r"),
    ("", "AIR", "", "EH r"),
    ("", "AI", "", "EY"),
    ("", "AY", "", "EY"),
    ("", "AU", "", "AO"),
    ("#:", "AL", " ", "AX l"),
    ("#:", "ALS", " ", "AX l z"),
    ("", "ALK", "", "AO k"),
    ("", "AL", "^", "AO l"),
    (" :", "ABLE", "", "EY b AX l"),
    ("", "ABLE", "", "AX b AX l"),
    ("", "ANG", "+", "EY n j"),
    ("", "A", "", "AE"),
];

pub const B: &[RuleRow] = &[
    (" ", "BE", "^#", "b IH"),
    ("", "BEING", "", "b IY IH NG"),
    (" ", "BOTH", " ", "b OW TH"),
    (" ", "BUS", "#", "b IH z"),
    ("", "BUIL", "", "b IH l"),
    ("", "B", "", "b"),
];

pub const C: &[RuleRow] = &[
    (" ", "CH", "^", "k"),
    ("^E", "CH", "", "k"),
    ("", "CH", "", "CH"),
    (" S", "CI", "#", "s AY"),
    ("", "CI", "A", "SH"),
    ("", "CI", "O", "SH"),
    ("", "CI", "EN", "SH"),
    ("", "C", "+", "s"),
    ("", "CK", "", "k"),
    ("", "COM", "%", "k AH m"),
    ("", "C", "", "k"),
];

pub const D: &[RuleRow] = &[
    ("#:", "DED", " ", "d IH d"),
    (".E", "D", " ", "d"),
    ("#:^E", "D", " ", "t"),
    (" ", "DE", "^#", "d IH"),
    (" ", "DO", " ", "d UW"),
    (" ", "DOES", "", "d AH z"),
    (" ", "DOING", "", "d UW IH NG"),
    (" ", "DOW", "", "d AW"),
    ("", "DU", "A", "j UW"),
    ("", "D", "", "d"),
];

pub const E: &[RuleRow] = &[
    ("#:", "E", " ", ""),
    ("':^", "E", " ", ""),
    (" :", "E", " ", "IY"),
    ("#", "ED", " ", "d"),
    ("#:", "E", "D ", ""),
    ("", "EV", "ER", "EH v"),
    ("", "E", "^%", "IY"),
    ("", "ERI", "#", "IY r IY"),
    ("", "ERI", "", "EH r IH"),
    ("#:", "ER", "#", "ER"),
    ("", "ER", "#", "EH r"),
    ("", "ER", "", "ER"),
    (" ", "EVEN", "", "IY v EH n"),
    ("#:", "E", "W", ""),
    ("T", "EW", "", "UW"),
    ("S", "EW", "", "UW"),
    ("R", "EW", "", "UW"),
    ("D", "EW", "", "UW"),
    ("L", "EW", "", "UW"),
    ("Z", "EW", "", "UW"),
    ("N", "EW", "", "UW"),
    ("J", "EW", "", "UW"),
    ("TH", "EW", "", "UW"),
    ("CH", "EW", "", "UW"),
    ("SH", "EW", "", "UW"),
    ("", "EW", "", "y UW"),
    ("", "E", "O", "IY"),
    ("#:S", "ES", " ", "IH z"),
    ("#:C", "ES", " ", "IH z"),
    ("#:G", "ES", " ", "IH z"),
    ("#:Z", "ES", " ", "IH z"),
    ("#:X", "ES", " ", "IH z"),
    ("#:J", "ES", " ", "IH z"),
    ("#:CH", "ES", " ", "IH z"),
    ("#:SH", "ES", " ", "IH z"),
    ("#:", "E", "S ", ""),
    ("#:", "ELY", " ", "l IY"),
    ("#:", "EMENT", "", "m EH n t"),
    ("", "EFUL", "", "f UH l"),
    ("", "EE", "", "IY"),
    ("", "EARN", "", "ER n"),
    (" ", "EAR", "^", "ER"),
    ("", "EAD", "", "EH d"),
    ("#:", "EA", " ", "IY AX"),
    ("", "EA", "SU", "EH"),
    ("", "EA", "", "IY"),
    ("", "EIGH", "", "EY"),
    ("", "EI", "", "IY"),
    (" ", "EYE", "", "AY"),
    ("", "EY", "", "IY"),
    ("", "EU", "", "y UW"),
    ("", "E", "", "EH"),
];

pub const F: &[RuleRow] = &[
    ("", "FUL", "", "f UH l"),
    ("", "F", "", "f"),
];

pub const G: &[RuleRow] = &[
    ("", "GIV", "", "g IH v"),
    (" ", "G", "I^", "g"),
    ("", "GE", "T", "g EH"),
    ("SU", "GGES", "", "g j EH s"),
    ("", "GG", "", "g"),
    (" B#", "G", "", "g"),
    ("", "G", "+", "j"),
    ("", "GREAT", "", "g r EY t"),
    ("#", "GH", "", ""),
    ("", "G", "", "g"),
];

pub const H: &[RuleRow] = &[
    (" ", "HAV", "", "h AE v"),
    (" ", "HERE", "", "h IY r"),
    (" ", "HOUR", "", "AW ER"),
    ("", "HOW", "", "h AW"),
    ("", "H", "#", "h"),
    ("", "H", "", ""),
];

pub const I: &[RuleRow] = &[
    (" ", "IN", "", "IH n"),
    (" ", "I", " ", "AY"),
    ("", "IN", "D", "AY n"),
    ("", "IER", "", "IY ER"),
    ("#:R", "IED", "", "IY d"),
    ("", "IED", " ", "AY d"),
    ("", "IEN", "", "IY EH n"),
    ("", "IE", "T", "AY EH"),
    (" :", "I", "%", "AY"),
    ("", "I", "%", "IY"),
    ("", "IE", "", "IY"),
    ("", "I", "^+:#", "IH"),
    ("", "IR", "#", "AY r"),
    ("", "IZ", "%", "AY z"),
    ("", "IS", "%", "AY z"),
    ("", "I", "D%", "AY"),
    ("+^", "I", "^+", "IH"),
    ("", "I", "T%", "AY"),
    ("#:^", "I", "^+", "IH"),
    ("", "I", "^+", "AY"),
    ("", "IR", "", "ER"),
    ("", "IGH", "", "AY"),
    ("", "ILD", "", "AY l d"),
    ("", "IGN", " ", "AY n"),
    ("", "IGN", "^", "AY n"),
    ("", "IGN", "%", "AY n"),
    ("", "IQUE", "", "IY k"),
    ("", "I", "", "IH"),
];

pub const J: &[RuleRow] = &[("", "J", "", "j")];

pub const K: &[RuleRow] = &[
    (" ", "K", "N", ""),
    ("", "K", "", "k"),
];

pub const L: &[RuleRow] = &[
    ("", "LO", "C#", "l OW"),
    ("L", "L", "", ""),
    ("#:^", "L", "%", "AX l"),
    ("", "LEAD", "", "l IY d"),
    ("", "L", "", "l"),
];

pub const M: &[RuleRow] = &[
    ("", "MOV", "", "m UW v"),
    ("", "M", "", "m"),
];

pub const N: &[RuleRow] = &[
    ("E", "NG", "+", "n j"),
    ("", "NG", "R", "NG g"),
    ("", "NG", "#", "NG g"),
    ("", "NGL", "%", "NG g AX l"),
    ("", "NG", "", "NG"),
    ("", "NK", "", "NG k"),
    (" ", "NOW", " ", "n AW"),
    ("", "N", "", "n"),
];

pub const O: &[RuleRow] = &[
    ("", "OF", " ", "AX v"),
    ("", "OROUGH", "", "ER OW"),
    ("#:", "OR", " ", "ER"),
    ("#:", "ORS", " ", "ER z"),
    ("", "OR", "", "AO r"),
    (" ", "ONE", "", "w AH n"),
    ("", "OW", "", "OW"),
    (" ", "OVER", "", "OW v ER"),
    ("", "OV", "", "AH v"),
    ("", "O", "^%", "OW"),
    ("", "O", "^EN", "OW"),
    ("", "O", "^I#", "OW"),
    ("", "OL", "D", "OW l"),
    ("", "OUGHT", "", "AO t"),
    ("", "OUGH", "", "AH f"),
    (" ", "OU", "", "AW"),
    ("H", "OU", "S#", "AW"),
    ("", "OUS", "", "AX s"),
    ("", "OUR", "", "AO r"),
    ("", "OULD", "", "UH d"),
    ("^", "OU", "^L", "AH"),
    ("", "OUP", "", "UW p"),
    ("", "OU", "", "AW"),
    ("", "OY", "", "OY"),
    ("", "OING", "", "OW IH NG"),
    ("", "OI", "", "OY"),
    ("", "OOR", "", "AO r"),
    ("", "OOK", "", "UH k"),
    ("", "OOD", "", "UH d"),
    ("", "OO", "", "UW"),
    ("", "O", "E", "OW"),
    ("", "O", " ", "OW"),
    ("", "OA", "", "OW"),
    (" ", "ONLY", "", "OW n l IY"),
    (" ", "ONCE", "", "w AH n s"),
    ("", "ON'T", "", "OW n t"),
    ("C", "O", "N", "AA"),
    ("", "O", "NG", "AO"),
    (" :^", "O", "N", "AH"),
    ("I", "ON", "", "AX n"),
    ("#:", "ON", " ", "AX n"),
    ("#^", "ON", "", "AX n"),
    ("", "O", "ST ", "OW"),
    ("", "OF", "^", "AO f"),
    ("", "OTHER", "", "AH DH ER"),
    ("", "OSS", " ", "AO s"),
    ("#:^", "OM", "", "AH m"),
    ("", "O", "", "AA"),
];

pub const P: &[RuleRow] = &[
    ("", "PH", "", "f"),
    ("", "PEOP", "", "p IY p"),
    ("", "POW", "", "p AW"),
    ("", "PUT", " ", "p UH t"),
    ("", "P", "", "p"),
];

pub const Q: &[RuleRow] = &[
    ("", "QUAR", "", "k w AO r"),
    ("", "QU", "", "k w"),
    ("", "Q", "", "k"),
];

pub const R: &[RuleRow] = &[
    (" ", "RE", "^#", "r IY"),
    ("", "R", "", "r"),
];

pub const S: &[RuleRow] = &[
    ("", "SH", "", "SH"),
    ("#", "SION", "", "ZH AX n"),
    ("", "SOME", "", "s AH m"),
    ("#", "SUR", "#", "ZH ER"),
    ("", "SUR", "#", "SH ER"),
    ("#", "SU", "#", "ZH UW"),
    ("#", "SSU", "#", "SH UW"),
    ("#", "SED", " ", "z d"),
    ("#", "S", "#", "z"),
    ("", "SAID", "", "s EH d"),
    ("^", "SION", "", "SH AX n"),
    ("", "S", "S", ""),
    (".", "S", " ", "z"),
    ("#:.E", "S", " ", "z"),
    ("#:^##", "S", " ", "z"),
    ("#:^#", "S", " ", "s"),
    ("U", "S", " ", "s"),
    (" :#", "S", " ", "z"),
    (" ", "SCH", "", "s k"),
    ("", "S", "C+", ""),
    ("#", "SM", "", "z m"),
    ("#", "SN", "'", "z AX n"),
    ("", "S", "", "s"),
];

pub const T: &[RuleRow] = &[
    (" ", "THE", " ", "DH AX"),
    ("", "TO", " ", "t UW"),
    ("", "THAT", " ", "DH AE t"),
    (" ", "THIS", " ", "DH IH s"),
    (" ", "THEY", "", "DH EY"),
    (" ", "THERE", "", "DH EH r"),
    ("", "THER", "", "DH ER"),
    ("", "THEIR", "", "DH EH r"),
    (" ", "THAN", " ", "DH AE n"),
    (" ", "THEM", " ", "DH EH m"),
    ("", "THESE", " ", "DH IY z"),
    (" ", "THEN", "", "DH EH n"),
    ("", "THROUGH", "", "TH r UW"),
    ("", "THOSE", "", "DH OW z"),
    ("", "THOUGH", " ", "DH OW"),
    (" ", "THUS", "", "DH AH s"),
    ("", "TH", "", "TH"),
    ("#:", "TED", " ", "t IH d"),
    ("S", "TI", "#N", "CH"),
    ("", "TI", "O", "SH"),
    ("", "TI", "A", "SH"),
    ("", "TIEN", "", "SH AX n"),
    ("", "TUR", "#", "CH ER"),
    ("", "TU", "A", "CH UW"),
    (" ", "TWO", "", "t UW"),
    ("", "T", "", "t"),
];

pub const U: &[RuleRow] = &[
    (" ", "UN", "I", "y UW n"),
    (" ", "UN", "", "AH n"),
    (" ", "UPON", "", "AX p AO n"),
    ("T", "UR", "#", "UH r"),
    ("S", "UR", "#", "UH r"),
    ("R", "UR", "#", "UH r"),
    ("D", "UR", "#", "UH r"),
    ("L", "UR", "#", "UH r"),
    ("Z", "UR", "#", "UH r"),
    ("N", "UR", "#", "UH r"),
    ("J", "UR", "#", "UH r"),
    ("TH", "UR", "#", "UH r"),
    ("CH", "UR", "#", "UH r"),
    ("SH", "UR", "#", "UH r"),
    ("", "UR", "#", "y UH r"),
    ("", "UR", "", "ER"),
    ("", "U", "^ ", "AH"),
    ("", "U", "^^", "AH"),
    ("", "UY", "", "AY"),
    (" G", "U", "#", ""),
    ("G", "U", "%", ""),
    ("G", "U", "#", "w"),
    ("#N", "U", "", "y UW"),
    ("T", "U", "", "UW"),
    ("S", "U", "", "UW"),
    ("R", "U", "", "UW"),
    ("D", "U", "", "UW"),
    ("L", "U", "", "UW"),
    ("Z", "U", "", "UW"),
    ("N", "U", "", "UW"),
    ("J", "U", "", "UW"),
    ("TH", "U", "", "UW"),
    ("CH", "U", "", "UW"),
    ("SH", "U", "", "UW"),
    ("", "U", "", "y UW"),
];

pub const V: &[RuleRow] = &[
    ("", "VIEW", "", "v y UW"),
    ("", "V", "", "v"),
];

pub const W: &[RuleRow] = &[
    (" ", "WERE", "", "w ER"),
    ("", "WA", "S", "w AA"),
    ("", "WA", "T", "w AA"),
    ("", "WHERE", "", "WH EH r"),
    ("", "WHAT", "", "WH AA t"),
    ("", "WHOL", "", "h OW l"),
    ("", "WHO", "", "h UW"),
    ("", "WH", "", "WH"),
    ("", "WAR", "", "w AO r"),
    ("", "WOR", "^", "w ER"),
    ("", "WR", "", "r"),
    ("", "W", "", "w"),
];

pub const X: &[RuleRow] = &[("", "X", "", "k s")];

pub const Y: &[RuleRow] = &[
    ("", "YOUNG", "", "y AH NG"),
    (" ", "YOU", "", "y UW"),
    (" ", "YES", "", "y EH s"),
    (" ", "Y", "", "y"),
    ("#:^", "Y", " ", "IY"),
    ("#:^", "Y", "I", "IY"),
    (" :", "Y", " ", "AY"),
    (" :", "Y", "#", "AY"),
    (" :", "Y", "^+:#", "IH"),
    (" :", "Y", "^#", "AY"),
    ("", "Y", "", "IH"),
];

pub const Z: &[RuleRow] = &[("", "Z", "", "z")];

/// Every bucket of the English rule set
pub const BUCKETS: &[(TriggerKey, &[RuleRow])] = &[
    (TriggerKey::Punctuation, PUNCTUATION),
    (TriggerKey::Letter('A'), A),
    (TriggerKey::Letter('B'), B),
    (TriggerKey::Letter('C'), C),
    (TriggerKey::Letter('D'), D),
    (TriggerKey::Letter('E'), E),
    (TriggerKey::Letter('F'), F),
    (TriggerKey::Letter('G'), G),
    (TriggerKey::Letter('H'), H),
    (TriggerKey::Letter('I'), I),
    (TriggerKey::Letter('J'), J),
    (TriggerKey::Letter('K'), K),
    (TriggerKey::Letter('L'), L),
    (TriggerKey::Letter('M'), M),
    (TriggerKey::Letter('N'), N),
    (TriggerKey::Letter('O'), O),
    (TriggerKey::Letter('P'), P),
    (TriggerKey::Letter('Q'), Q),
    (TriggerKey::Letter('R'), R),
    (TriggerKey::Letter('S'), S),
    (TriggerKey::Letter('T'), T),
    (TriggerKey::Letter('U'), U),
    (TriggerKey::Letter('V'), V),
    (TriggerKey::Letter('W'), W),
    (TriggerKey::Letter('X'), X),
    (TriggerKey::Letter('Y'), Y),
    (TriggerKey::Letter('Z'), Z),
];
