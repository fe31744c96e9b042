pub mod item;
pub mod scheduler;
pub mod shared;

pub use item::{ReviewItem, BASE_INTERVAL_MS, GRADUATION_THRESHOLD};
pub use scheduler::{ReviewOutcome, ReviewScheduler, REVIEW_QUEUE_KEY};
pub use shared::SharedReviewScheduler;
