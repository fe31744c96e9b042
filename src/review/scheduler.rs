use std::collections::HashSet;

use crate::clock::{Clock, SystemClock};
use crate::review::item::ReviewItem;
use crate::store::KeyValueStore;

/// Storage slot holding the whole review queue as a JSON array.
pub const REVIEW_QUEUE_KEY: &str = "spelldeck.review_queue";

/// What `record_outcome` did to the word
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The word was never added; nothing changed
    Untracked,
    /// Correct recall, interval doubled
    Rescheduled(ReviewItem),
    /// Missed recall, progress reset to the base interval
    Reset(ReviewItem),
    /// Reached the graduation threshold and left the queue
    Graduated(String),
}

/// Spaced-repetition queue persisted in a single storage slot.
///
/// Every mutating call loads the full queue, changes it and writes it back.
/// Storage problems never reach the caller: an unreadable or corrupt slot is
/// an empty queue and a failed write is dropped.
pub struct ReviewScheduler<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> ReviewScheduler<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ReviewScheduler<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        ReviewScheduler { store, clock }
    }

    /// Flag a word for review. Re-adding a tracked word restarts its schedule.
    pub fn add_review_word(&self, word: &str) {
        if word.trim().is_empty() {
            return;
        }
        let now = self.clock.now_ms();
        let mut queue = self.load();

        match queue.iter().position(|item| item.word == word) {
            Some(pos) => queue[pos].restart(now),
            None => queue.push(ReviewItem::new(word, now)),
        }

        tracing::debug!(word = %word, queue_len = queue.len(), "Word flagged for review");
        self.save(&queue);
    }

    /// Items whose next review is at or before `now`
    pub fn due_items(&self, now: i64) -> Vec<ReviewItem> {
        self.load()
            .into_iter()
            .filter(|item| item.is_due(now))
            .collect()
    }

    pub fn due_count(&self, now: i64) -> usize {
        self.due_items(now).len()
    }

    /// Due items as of the scheduler's clock
    pub fn due_now(&self) -> Vec<ReviewItem> {
        self.due_items(self.clock.now_ms())
    }

    /// Apply a recall result to a tracked word
    pub fn record_outcome(&self, word: &str, was_correct: bool) -> ReviewOutcome {
        let mut queue = self.load();
        let Some(pos) = queue.iter().position(|item| item.word == word) else {
            return ReviewOutcome::Untracked;
        };
        let now = self.clock.now_ms();

        let outcome = if was_correct {
            queue[pos].promote(now);
            if queue[pos].is_graduated() {
                let item = queue.remove(pos);
                tracing::debug!(word = %item.word, "Word graduated from review");
                ReviewOutcome::Graduated(item.word)
            } else {
                ReviewOutcome::Rescheduled(queue[pos].clone())
            }
        } else {
            queue[pos].restart(now);
            ReviewOutcome::Reset(queue[pos].clone())
        };

        self.save(&queue);
        outcome
    }

    pub fn items(&self) -> Vec<ReviewItem> {
        self.load()
    }

    pub fn get(&self, word: &str) -> Option<ReviewItem> {
        self.load().into_iter().find(|item| item.word == word)
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wipe the whole queue
    pub fn reset(&self) {
        let _ = self.store.remove(REVIEW_QUEUE_KEY);
    }

    fn load(&self) -> Vec<ReviewItem> {
        let items: Vec<ReviewItem> = match self.store.get(REVIEW_QUEUE_KEY) {
            Ok(Some(data)) => serde_json::from_str(&data).unwrap_or_default(),
            _ => Vec::new(),
        };

        // Keep the first entry per word
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|item| seen.insert(item.word.clone()))
            .collect()
    }

    fn save(&self, queue: &[ReviewItem]) {
        if let Ok(json) = serde_json::to_string(queue) {
            let _ = self.store.set(REVIEW_QUEUE_KEY, &json);
        }
    }
}
