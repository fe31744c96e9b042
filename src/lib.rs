pub mod challenge;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod review;
pub mod store;
pub mod words;

pub use challenge::{select_daily_challenge, Challenge};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ErrorKind, SpellError};
pub use review::{ReviewItem, ReviewOutcome, ReviewScheduler, SharedReviewScheduler};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use words::{ingest, WordRecord};
