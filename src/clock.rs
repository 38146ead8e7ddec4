//! Spoken time and date
//!
//! Builds allophone strings for the current time ("the time is ten o five
//! p m") and date ("today is monday the first of june") from vocabulary
//! entries, ready for [`Speaker::speak`](crate::speech::Speaker::speak).

use crate::vocabulary::Vocabulary;
use crate::Result;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

const WORD_BREAK: &str = "PA4";
const PHRASE_BREAK: &str = "PA5";
const TENS_BREAK: &str = "PA2";

const NUMBERS: [&str; 20] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

const TENS: [&str; 4] = ["twenty", "thirty", "forty", "fifty"];

const ORDINALS: [&str; 20] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth", "seventeenth",
    "eighteenth", "nineteenth", "twentieth",
];

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Collects vocabulary allophones into one phrase
struct Phrase<'v> {
    vocabulary: &'v Vocabulary,
    parts: Vec<String>,
}

impl<'v> Phrase<'v> {
    fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            parts: Vec::new(),
        }
    }

    fn word(&mut self, word: &str) -> Result<&mut Self> {
        let allophones = self
            .vocabulary
            .lookup(word)
            .ok_or_else(|| format!("'{}' is missing from the vocabulary", word))?;
        self.parts.push(allophones.to_string());
        Ok(self)
    }

    fn pause(&mut self, allophone: &str) -> &mut Self {
        self.parts.push(allophone.to_string());
        self
    }

    fn finish(&self) -> String {
        self.parts.join(" ")
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Minutes 1..=59 as words
fn push_minutes(phrase: &mut Phrase<'_>, minute: u32) -> Result<()> {
    let minute = minute as usize;
    if minute <= 20 {
        if minute < 10 {
            phrase.word("o")?.pause(WORD_BREAK);
        }
        phrase.word(NUMBERS[minute - 1])?;
    } else {
        phrase.word(TENS[minute / 10 - 2])?;
        if minute % 10 > 0 {
            phrase.pause(WORD_BREAK).word(NUMBERS[minute % 10 - 1])?;
        }
    }
    phrase.pause(WORD_BREAK);
    Ok(())
}

/// Allophones for "the time is H [MM] A M|P M"
///
/// Twelve-hour clock: midnight is twelve a m, noon is twelve p m.
pub fn time_to_speak(time: NaiveTime, vocabulary: &Vocabulary) -> Result<String> {
    let (pm, hour) = time.hour12();
    let minute = time.minute();

    let mut phrase = Phrase::new(vocabulary);
    phrase
        .pause(PHRASE_BREAK)
        .word("the")?
        .pause(WORD_BREAK)
        .word("time")?
        .pause(WORD_BREAK)
        .word("is")?
        .pause(WORD_BREAK)
        .word(NUMBERS[hour as usize - 1])?
        .pause(WORD_BREAK);

    if minute > 0 {
        push_minutes(&mut phrase, minute)?;
    }

    phrase
        .word(if pm { "p" } else { "a" })?
        .pause(WORD_BREAK)
        .word("m")?
        .pause(PHRASE_BREAK);
    Ok(phrase.finish())
}

/// Allophones for "today is WEEKDAY the NTH of MONTH"
pub fn date_to_speak(date: NaiveDate, vocabulary: &Vocabulary) -> Result<String> {
    let day = date.day() as usize;

    let mut phrase = Phrase::new(vocabulary);
    phrase
        .pause(PHRASE_BREAK)
        .word("today")?
        .pause(WORD_BREAK)
        .word("is")?
        .pause(WORD_BREAK)
        .word(weekday_name(date.weekday()))?
        .pause(WORD_BREAK)
        .word("the")?
        .pause(WORD_BREAK);

    match day {
        1..=20 => {
            phrase.word(ORDINALS[day - 1])?;
        }
        30 => {
            phrase.word("thirtieth")?;
        }
        _ => {
            phrase
                .word(TENS[day / 10 - 2])?
                .pause(TENS_BREAK)
                .word(ORDINALS[day % 10 - 1])?;
        }
    }

    phrase
        .pause(WORD_BREAK)
        .word("of")?
        .pause(WORD_BREAK)
        .word(MONTHS[date.month0() as usize])?
        .pause(WORD_BREAK);
    Ok(phrase.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RetroSpeakError;

    fn words(vocabulary: &Vocabulary, list: &[&str]) -> String {
        list.iter()
            .map(|w| vocabulary.lookup(w).map(str::to_string).unwrap_or_else(|| w.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_time_on_the_hour() {
        let vocabulary = Vocabulary::builtin();
        let time = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
        let expected = words(
            &vocabulary,
            &["PA5", "the", "PA4", "time", "PA4", "is", "PA4", "three", "PA4", "p", "PA4", "m", "PA5"],
        );
        assert_eq!(time_to_speak(time, &vocabulary).unwrap(), expected);
    }

    #[test]
    fn test_time_minutes() {
        let vocabulary = Vocabulary::builtin();

        let spoken = time_to_speak(NaiveTime::from_hms_opt(9, 5, 0).unwrap(), &vocabulary).unwrap();
        let expected = words(&vocabulary, &["nine", "PA4", "o", "PA4", "five", "PA4", "a"]);
        assert!(spoken.contains(&expected), "{}", spoken);

        let spoken = time_to_speak(NaiveTime::from_hms_opt(9, 42, 0).unwrap(), &vocabulary).unwrap();
        let expected = words(&vocabulary, &["nine", "PA4", "forty", "PA4", "two", "PA4", "a"]);
        assert!(spoken.contains(&expected), "{}", spoken);

        let spoken = time_to_speak(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), &vocabulary).unwrap();
        let expected = words(&vocabulary, &["nine", "PA4", "thirty", "PA4", "a"]);
        assert!(spoken.contains(&expected), "{}", spoken);
    }

    #[test]
    fn test_midnight_and_noon() {
        let vocabulary = Vocabulary::builtin();
        let twelve = vocabulary.lookup("twelve").unwrap();
        let a = vocabulary.lookup("a").unwrap();
        let p = vocabulary.lookup("p").unwrap();

        let midnight = time_to_speak(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), &vocabulary).unwrap();
        assert!(midnight.contains(&format!("{} PA4 {} PA4", twelve, a)));

        let noon = time_to_speak(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), &vocabulary).unwrap();
        assert!(noon.contains(&format!("{} PA4 {} PA4", twelve, p)));
    }

    #[test]
    fn test_date() {
        let vocabulary = Vocabulary::builtin();
        // 2015-06-01 was a Monday
        let date = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        let expected = words(
            &vocabulary,
            &[
                "PA5", "today", "PA4", "is", "PA4", "monday", "PA4", "the", "PA4", "first", "PA4",
                "of", "PA4", "june", "PA4",
            ],
        );
        assert_eq!(date_to_speak(date, &vocabulary).unwrap(), expected);
    }

    #[test]
    fn test_compound_days() {
        let vocabulary = Vocabulary::builtin();

        let date = NaiveDate::from_ymd_opt(2015, 1, 31).unwrap();
        let spoken = date_to_speak(date, &vocabulary).unwrap();
        assert!(spoken.contains(&words(&vocabulary, &["thirty", "PA2", "first"])));

        let date = NaiveDate::from_ymd_opt(2015, 1, 30).unwrap();
        let spoken = date_to_speak(date, &vocabulary).unwrap();
        assert!(spoken.contains(vocabulary.lookup("thirtieth").unwrap()));
    }

    #[test]
    fn test_every_day_and_minute_speaks() {
        let vocabulary = Vocabulary::builtin();
        for day in 1..=31 {
            let date = NaiveDate::from_ymd_opt(2015, 1, day).unwrap();
            assert!(date_to_speak(date, &vocabulary).is_ok());
        }
        for minute in 0..60 {
            let time = NaiveTime::from_hms_opt(23, minute, 0).unwrap();
            assert!(time_to_speak(time, &vocabulary).is_ok());
        }
    }

    #[test]
    fn test_missing_word_is_an_error() {
        let vocabulary = Vocabulary::new();
        let time = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        let err = time_to_speak(time, &vocabulary).unwrap_err();
        assert!(
            matches!(err, RetroSpeakError::Other(ref message) if message.contains("'the'")),
            "{}",
            err
        );
    }
}
