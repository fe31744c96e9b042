use std::sync::Arc;
use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::review::item::ReviewItem;
use crate::review::scheduler::{ReviewOutcome, ReviewScheduler};
use crate::store::KeyValueStore;

/// Thread-safe handle to a review scheduler.
/// Each call holds the lock across its whole load-mutate-save cycle, so
/// concurrent callers cannot overwrite each other's updates.
pub struct SharedReviewScheduler<S, C = SystemClock> {
    inner: Arc<Mutex<ReviewScheduler<S, C>>>,
}

impl<S, C> Clone for SharedReviewScheduler<S, C> {
    fn clone(&self) -> Self {
        SharedReviewScheduler {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore, C: Clock> SharedReviewScheduler<S, C> {
    pub fn new(scheduler: ReviewScheduler<S, C>) -> Self {
        SharedReviewScheduler {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    pub fn add_review_word(&self, word: &str) {
        self.inner.lock().add_review_word(word);
    }

    pub fn record_outcome(&self, word: &str, was_correct: bool) -> ReviewOutcome {
        self.inner.lock().record_outcome(word, was_correct)
    }

    pub fn due_items(&self, now: i64) -> Vec<ReviewItem> {
        self.inner.lock().due_items(now)
    }

    pub fn due_count(&self, now: i64) -> usize {
        self.inner.lock().due_count(now)
    }

    pub fn items(&self) -> Vec<ReviewItem> {
        self.inner.lock().items()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Run several operations under one lock
    pub fn with_scheduler<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&ReviewScheduler<S, C>) -> R,
    {
        let guard = self.inner.lock();
        f(&*guard)
    }
}
