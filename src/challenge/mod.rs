pub mod history;

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use crate::error::SpellError;

/// Words in a daily challenge.
pub const DAILY_CHALLENGE_SIZE: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed word list for one calendar day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub date: String,
    pub words: Vec<String>,
}

/// Numeric seed for a date: its digits read as one integer (`2024-01-02` -> 20240102).
pub fn date_seed(date: &str) -> Result<u64, SpellError> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| SpellError::invalid_date(date))?;
    // Reject forms chrono tolerates but that would change the seed, e.g. `2024-1-2`
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(SpellError::invalid_date(date));
    }

    date.replace('-', "")
        .parse::<u64>()
        .map_err(|_| SpellError::invalid_date(date))
}

/// Pick today's challenge: the same corpus and date always give the same words in the same order.
pub fn select_daily_challenge(corpus: &[String], date: &str) -> Result<Challenge, SpellError> {
    select_challenge_sized(corpus, date, DAILY_CHALLENGE_SIZE)
}

pub fn select_challenge_for(corpus: &[String], date: NaiveDate) -> Result<Challenge, SpellError> {
    select_daily_challenge(corpus, &date.format(DATE_FORMAT).to_string())
}

/// Word `i` is `corpus[(seed * (i + 1)) % len]`, so small corpora repeat words.
pub fn select_challenge_sized(
    corpus: &[String],
    date: &str,
    size: usize,
) -> Result<Challenge, SpellError> {
    if corpus.is_empty() {
        return Err(SpellError::empty_corpus());
    }
    let seed = date_seed(date)?;
    let len = corpus.len() as u128;

    let words = (0..size as u128)
        .map(|i| {
            let index = (seed as u128 * (i + 1)) % len;
            corpus[index as usize].clone()
        })
        .collect();

    Ok(Challenge {
        date: date.to_string(),
        words,
    })
}
