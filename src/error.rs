use serde::{Serialize, Deserialize};
use std::fmt;

/// What went wrong, for callers that need to branch on the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Payload is neither a JSON array nor a usable table
    Format,
    /// A candidate record lacks a required field
    MissingField { index: usize, field: String },
    /// Daily challenge requested from an empty corpus
    EmptyCorpus,
    /// Challenge date is not a real `YYYY-MM-DD` date
    InvalidDate,
    Io,
    Json,
    Config,
    Storage,
    Other,
}

/// Unified error type for the spelldeck crate.
/// Fallible operations return Result<T, SpellError> instead of String errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellError {
    pub kind: ErrorKind,
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl SpellError {
    /// Create a new error with kind, stage and message
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S, stage: &'static str) -> Self {
        SpellError {
            kind,
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    pub fn format<S: Into<String>>(message: S) -> Self {
        SpellError::new(ErrorKind::Format, message, "ingest")
    }

    /// Validation failure naming the zero-based record index and the field
    pub fn missing_field(index: usize, field: &str) -> Self {
        SpellError::new(
            ErrorKind::MissingField { index, field: field.to_string() },
            format!("record {} is missing required field \"{}\"", index, field),
            "validate",
        )
    }

    pub fn empty_corpus() -> Self {
        SpellError::new(
            ErrorKind::EmptyCorpus,
            "cannot select a daily challenge from an empty corpus",
            "challenge",
        )
    }

    pub fn invalid_date<S: AsRef<str>>(date: S) -> Self {
        SpellError::new(
            ErrorKind::InvalidDate,
            format!("invalid challenge date {:?}, expected YYYY-MM-DD", date.as_ref()),
            "challenge",
        )
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for SpellError {}

impl From<anyhow::Error> for SpellError {
    fn from(err: anyhow::Error) -> Self {
        SpellError::new(ErrorKind::Other, err.to_string(), "unknown").with_source("anyhow")
    }
}

impl From<std::io::Error> for SpellError {
    fn from(err: std::io::Error) -> Self {
        SpellError::new(ErrorKind::Io, format!("I/O error: {}", err), "io")
            .with_source("std::io")
    }
}

impl From<serde_json::Error> for SpellError {
    fn from(err: serde_json::Error) -> Self {
        SpellError::new(ErrorKind::Json, format!("JSON error: {}", err), "json_parse")
            .with_source("serde_json")
    }
}

impl From<csv::Error> for SpellError {
    fn from(err: csv::Error) -> Self {
        SpellError::format(format!("malformed tabular word list: {}", err)).with_source("csv")
    }
}

impl From<toml::de::Error> for SpellError {
    fn from(err: toml::de::Error) -> Self {
        SpellError::new(ErrorKind::Config, format!("invalid configuration: {}", err), "config")
            .with_source("toml")
    }
}

impl From<crate::store::StoreError> for SpellError {
    fn from(err: crate::store::StoreError) -> Self {
        SpellError::new(ErrorKind::Storage, err.to_string(), "storage")
            .with_source("store")
    }
}
