//! Usage record data model
//!
//! Wire types for the `/usage` endpoint and the timestamp parsing rules that go with them.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque row key. Backends send integers, other JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(i64),
    /// Integers past `i64::MAX` and fractional ids, kept as sent.
    Numeric(serde_json::Number),
    Text(String),
}

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageId::Number(id) => write!(f, "{}", id),
            MessageId::Numeric(id) => write!(f, "{}", id),
            MessageId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// One logged consumption event tying a message to a credit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub message_id: MessageId,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub report_name: Option<String>,
    pub credits_used: f64,
}

impl UsageRecord {
    /// Report name, with empty strings treated as absent.
    pub fn report_name(&self) -> Option<&str> {
        self.report_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Body of `GET /usage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
    pub usage: Vec<UsageRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(millis) => DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            serde::de::Error::custom(format!("timestamp out of range: {}", millis))
        }),
        RawTimestamp::Text(text) => parse_timestamp_in(&text, &Local).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognised timestamp: {}", text))
        }),
    }
}

/// Parse a serialized timestamp.
///
/// Offset-less date-times are read in `tz`; bare dates are UTC midnight.
pub fn parse_timestamp_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
