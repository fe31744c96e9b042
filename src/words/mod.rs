pub mod ingest;
pub mod record;

pub use ingest::{corpus, ingest, ingest_file, SourceFormat};
pub use record::WordRecord;
