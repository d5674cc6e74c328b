//! Expiration dates (calendar date, no time component).

use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Textual format accepted on input and written to disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date after which an item is considered expired.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse `YYYY-MM-DD` text. Anything else, including out-of-range months
    /// or days, is `InvalidDateFormat`.
    ///
    /// The year must be exactly four digits; month and day may be one or two.
    /// chrono alone would also accept signs and embedded whitespace.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if !has_date_shape(text) {
            return Err(DomainError::invalid_date(text));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::invalid_date(text))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// True when this date is strictly earlier than `as_of`.
    pub fn is_before(&self, as_of: NaiveDate) -> bool {
        self.0 < as_of
    }
}

/// `DDDD-D[D]-D[D]`, ASCII digits only.
fn has_date_shape(text: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = text.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for ExpirationDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExpirationDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExpirationDate> for String {
    fn from(value: ExpirationDate) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_calendar_date() {
        let date = ExpirationDate::parse("2025-06-01").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(date.to_string(), "2025-06-01");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "2025-13-40",
            "June 1 2025",
            "",
            "2025/06/01",
            "2025-02-30",
            " 2025-06-01",
            "2025- 06-01",
            "2025-06- 1",
            "2025-06-01 ",
            "+2025-06-01",
            "-0001-01-01",
            "20250-01-01",
            "2025-006-01",
            "2025-06-01-01",
        ] {
            assert_eq!(
                ExpirationDate::parse(text),
                Err(DomainError::InvalidDateFormat(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_single_digit_month_and_day() {
        let date = ExpirationDate::parse("2025-6-1").unwrap();
        assert_eq!(date.to_string(), "2025-06-01");
    }

    #[test]
    fn is_before_is_strict() {
        let date = ExpirationDate::parse("2025-06-01").unwrap();
        let same = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!date.is_before(same));
        assert!(date.is_before(same.succ_opt().unwrap()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let date = ExpirationDate::parse("2025-05-01").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2025-05-01\"");
        let back: ExpirationDate = serde_json::from_str("\"2025-05-01\"").unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<ExpirationDate>("\"soon\"").is_err());
    }
}
