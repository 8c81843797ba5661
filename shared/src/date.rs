//! Calendar date type used by list entities
//!
//! Entity fixtures and API payloads carry plain `YYYY-MM-DD` strings. This
//! module wraps them in a typed value so date columns sort chronologically
//! instead of lexically.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire format for all calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =========================================================
// CalendarDate
// =========================================================

/// A day without time or timezone, serialized as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Const constructor for literal dates in seed data; an impossible date
    /// fails const evaluation.
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self(date),
            None => panic!("impossible calendar date literal"),
        }
    }

    /// Parses a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok().map(Self)
    }

    /// Short human label used in table cells, e.g. `Jan 15, 2024`.
    pub fn display_label(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_iso_dates() {
        let date = CalendarDate::parse("2024-01-15").unwrap();
        assert_eq!(date.to_string(), "2024-01-15");
        assert_eq!(date.display_label(), "Jan 15, 2024");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(CalendarDate::parse("2024-13-01").is_none());
        assert!(CalendarDate::parse("15/01/2024").is_none());
        assert!(CalendarDate::parse("2023-02-30").is_none());
    }

    #[test]
    fn orders_chronologically_across_years() {
        let dec = CalendarDate::parse("2023-12-05").unwrap();
        let jan = CalendarDate::parse("2024-01-15").unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn serde_uses_plain_string_form() {
        let date = CalendarDate::parse("2024-04-01").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-04-01\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
