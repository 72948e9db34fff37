use serde::{Deserialize, Serialize};
use std::fmt;
use time::{macros::format_description, Date};

/// A `yyyy-mm-dd` date exactly as the store keeps it.
///
/// Observation dates are text columns, so every filter compares them as
/// strings. Zero-padded ISO order makes that agree with calendar order for
/// well-formed values. Malformed values are carried through untouched.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a calendar date, rejecting anything that is not strictly `yyyy-mm-dd`.
    pub fn to_date(&self) -> Result<Date, time::error::Parse> {
        Date::parse(&self.0, format_description!("[year]-[month]-[day]"))
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ))
    }
}

impl From<&str> for DateKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DateKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
