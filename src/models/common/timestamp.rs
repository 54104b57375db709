use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use ts_rs::TS;

use crate::errors::Result;

/// 带时区偏移的时间戳
///
/// 两个值相等要求同一时刻且偏移相同：`09:30+00:00` 与 `18:30+09:00`
/// 是同一时刻，但不相等。
///
/// JSON 与 `Display` 同为 RFC 3339，零偏移写作 `+00:00`；解析时 `Z` 也接受。
#[derive(Debug, Clone, Copy, TS)]
#[ts(export, export_to = "common.ts", type = "string")]
pub struct OffsetTimestamp(DateTime<FixedOffset>);

impl OffsetTimestamp {
    /// 解析 RFC 3339 文本，例如 `2024-01-15T09:30:00+00:00`
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self(DateTime::parse_from_rfc3339(value)?))
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for OffsetTimestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl PartialEq for OffsetTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.offset() == other.0.offset()
    }
}

impl Eq for OffsetTimestamp {}

impl Hash for OffsetTimestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.0.offset().local_minus_utc().hash(state);
    }
}

impl Serialize for OffsetTimestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for OffsetTimestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<FixedOffset>::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for OffsetTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
