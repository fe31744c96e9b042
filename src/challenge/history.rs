//! Completion statistics for daily challenges, one storage slot per date.

use serde::{Serialize, Deserialize};
use crate::error::SpellError;
use crate::store::KeyValueStore;

const KEY_PREFIX: &str = "spelldeck.challenge.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResult {
    pub date: String,
    pub score: u32,
    pub total: u32,
    pub time_ms: u64,
    pub accuracy: f64,
}

impl ChallengeResult {
    pub fn new<S: Into<String>>(date: S, score: u32, total: u32, time_ms: u64) -> Self {
        let accuracy = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64
        };
        ChallengeResult {
            date: date.into(),
            score,
            total,
            time_ms,
            accuracy,
        }
    }
}

pub fn result_key(date: &str) -> String {
    format!("{}{}", KEY_PREFIX, date)
}

/// Save the result for its date, replacing any earlier attempt
pub fn save_result<S: KeyValueStore>(store: &S, result: &ChallengeResult) -> Result<(), SpellError> {
    let json = serde_json::to_string(result)?;
    store
        .set(&result_key(&result.date), &json)
        .map_err(|e| SpellError::from(e).with_context(format!("date: {}", result.date)))?;
    tracing::debug!(date = %result.date, score = result.score, total = result.total, "Saved challenge result");
    Ok(())
}

/// Load the saved result for a date; unreadable or malformed slots read as `None`
pub fn load_result<S: KeyValueStore>(store: &S, date: &str) -> Option<ChallengeResult> {
    store
        .get(&result_key(date))
        .ok()
        .flatten()
        .and_then(|s| serde_json::from_str(&s).ok())
}

pub fn has_completed<S: KeyValueStore>(store: &S, date: &str) -> bool {
    load_result(store, date).is_some()
}
