use serde::{Serialize, Deserialize};

/// One day in milliseconds; the starting and reset interval.
pub const BASE_INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;

/// Consecutive correct recalls after which a word leaves the queue.
pub const GRADUATION_THRESHOLD: u32 = 3;

/// A word under spaced repetition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub word: String,
    /// Milliseconds since epoch
    pub next_review: i64,
    /// Milliseconds
    pub interval: i64,
    pub success_count: u32,
}

impl ReviewItem {
    /// Fresh schedule: due one base interval from `now`
    pub fn new<S: Into<String>>(word: S, now: i64) -> Self {
        ReviewItem {
            word: word.into(),
            next_review: now.saturating_add(BASE_INTERVAL_MS),
            interval: BASE_INTERVAL_MS,
            success_count: 0,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.next_review <= now
    }

    pub fn is_graduated(&self) -> bool {
        self.success_count >= GRADUATION_THRESHOLD
    }

    /// Drop all progress and start over from the base interval
    pub fn restart(&mut self, now: i64) {
        self.success_count = 0;
        self.interval = BASE_INTERVAL_MS;
        self.next_review = now.saturating_add(BASE_INTERVAL_MS);
    }

    /// Correct recall: double the gap
    pub fn promote(&mut self, now: i64) {
        self.success_count += 1;
        self.interval = self.interval.saturating_mul(2);
        self.next_review = now.saturating_add(self.interval);
    }
}
