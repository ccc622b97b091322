//! Date parsing and display formatting.
//!
//! Content dates arrive as `2024-12-11`, `2024-12-11T14:15:00` or full
//! RFC 3339 strings. Everything is normalised to a naive UTC timestamp;
//! display strings follow the site's "December 11, 2024" style.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{FolioError, Result};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a content date string.
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| FolioError::invalid_date(value, "midnight out of range")),
        Err(e) => Err(FolioError::invalid_date(value, e.to_string())),
    }
}

/// "December 11, 2024"
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "December 11, 2024 14:15"
pub fn format_date_time(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y %H:%M").to_string()
}

/// "Wednesday, December 11, 2024"
pub fn format_long_date(date: &NaiveDateTime) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// How a listing shows item dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// "December 11, 2024"
    #[default]
    Date,
    /// "December 11, 2024 14:15"
    DateTime,
    /// "Wednesday, December 11, 2024"
    Long,
}

impl DateStyle {
    pub fn format(&self, date: &NaiveDateTime) -> String {
        match self {
            DateStyle::Date => format_date(date),
            DateStyle::DateTime => format_date_time(date),
            DateStyle::Long => format_long_date(date),
        }
    }
}

/// Serde adapter for optional content dates.
///
/// Strings go through [`parse_date`]; unquoted TOML dates are accepted too.
pub mod optional_date {
    use std::fmt;

    use chrono::NaiveDateTime;
    use serde::de::value::MapAccessDeserializer;
    use serde::de::{self, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DateVisitor)
    }

    /// Accepts a date string, null, or a native TOML datetime
    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = Option<NaiveDateTime>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a date string or TOML datetime")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            if value.trim().is_empty() {
                return Ok(None);
            }
            super::parse_date(value).map(Some).map_err(E::custom)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(DateVisitor)
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            let datetime = toml::value::Datetime::deserialize(MapAccessDeserializer::new(map))?;
            self.visit_str(&datetime.to_string())
        }
    }
}
