use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::SpellError;

/// Fields every word record must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 2] = ["word", "definition"];

/// A validated vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "deserialize_syllables")]
    pub syllables: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub suffix: Option<String>,
}

impl WordRecord {
    pub fn new<W: Into<String>, D: Into<String>>(word: W, definition: D) -> Self {
        WordRecord {
            word: word.into(),
            definition: definition.into(),
            syllables: Vec::new(),
            origin: None,
            example: None,
            pronunciation: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Validate one candidate (a JSON element or a table row) and build the record.
    pub fn from_candidate(index: usize, candidate: Value) -> Result<WordRecord, SpellError> {
        let fields = match candidate {
            Value::Object(fields) => fields,
            _ => return Err(SpellError::missing_field(index, REQUIRED_FIELDS[0])),
        };

        for field in REQUIRED_FIELDS {
            if !has_text(&fields, field) {
                return Err(SpellError::missing_field(index, field));
            }
        }

        serde_json::from_value(Value::Object(fields)).map_err(|e| {
            SpellError::format(format!("record {} could not be read: {}", index, e))
        })
    }
}

fn has_text(fields: &Map<String, Value>, name: &str) -> bool {
    matches!(fields.get(name), Some(Value::String(s)) if !s.trim().is_empty())
}

/// Split the compact `ap-ple` / `ap·ple` / `ap ple` form into syllables
pub fn split_syllables(text: &str) -> Vec<String> {
    text.split(|c: char| c == '-' || c == '·' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Accepts either a list of syllables or a single hyphenated string
fn deserialize_syllables<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let syllables = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => split_syllables(&s),
        _ => Vec::new(),
    };
    Ok(syllables)
}

// Blank optional fields read as absent
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).filter(|s| !s.trim().is_empty()))
}
