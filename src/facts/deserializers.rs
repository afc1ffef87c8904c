use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts the event year as either a JSON integer or a numeric string
pub fn deserialize_year<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::custom("year must be an integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::custom(format!("invalid year '{}': {}", s, e))),
        _ => Err(Error::custom("year must be a number or string")),
    }
}
