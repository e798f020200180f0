//! Serde helpers shared by the section patch types.

use serde::{Deserialize, Deserializer};

/// Raw field value as it may appear in a scenario file.
///
/// Fields are free-form text, but hand-written files often carry bare
/// numbers, so those are accepted and turned back into text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawField> for String {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::Text(s) => s,
            RawField::Integer(n) => n.to_string(),
            RawField::Float(n) => n.to_string(),
        }
    }
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawField>::deserialize(deserializer)?.map(String::from))
}

/// Picks the patched value when one was provided, otherwise keeps `current`.
pub(crate) fn pick(
    current: &str,
    update: &Option<String>,
) -> String {
    update.as_deref().unwrap_or(current).to_string()
}
