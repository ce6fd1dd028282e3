use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Layout used for every date in the catalog: local time, second precision, no offset.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, FORMAT)
}

pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// `#[serde(with = "boxoffice_shared::datetime")]` adapter for `NaiveDateTime` fields.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", raw, e)))
}
