//! Support statement records.

use std::fmt;
use std::str::FromStr;

/// Support status carried by a statement's `marker` attribute.
///
/// The metadata schema is open-ended here; markers other than the two known
/// values are preserved verbatim so they survive a round trip through the XML
/// export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportStatus {
    Supported,
    Unsupported,
    Other(String),
}

impl SupportStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Supported => "supported",
            Self::Unsupported => "unsupported",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SupportStatus {
    fn from(s: &str) -> Self {
        match s {
            "supported" => Self::Supported,
            "unsupported" => Self::Unsupported,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for SupportStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// One support statement, keyed by identifier in the statements table.
///
/// `summary`, `link`, and `text` accumulate across parser text chunks while
/// the statement element is open; the dates and status come from attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportStatement {
    pub start_date: String,
    pub end_date: String,
    pub status: SupportStatus,
    pub summary: String,
    pub link: String,
    pub text: String,
}

impl SupportStatement {
    /// Fresh working record for a newly opened statement element.
    #[must_use]
    pub fn new(start_date: String, end_date: String, status: SupportStatus) -> Self {
        Self {
            start_date,
            end_date,
            status,
            summary: String::new(),
            link: String::new(),
            text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            "supported".parse::<SupportStatus>().unwrap(),
            SupportStatus::Supported
        );
        assert_eq!(
            "unsupported".parse::<SupportStatus>().unwrap(),
            SupportStatus::Unsupported
        );
        let other: SupportStatus = "extended".parse().unwrap();
        assert_eq!(other.as_str(), "extended");
    }

    #[test]
    fn test_new_statement_has_empty_text_fields() {
        let stmt = SupportStatement::new(
            "2020-01-01".into(),
            "2030-01-01".into(),
            SupportStatus::Supported,
        );
        assert!(stmt.summary.is_empty());
        assert!(stmt.link.is_empty());
        assert!(stmt.text.is_empty());
    }
}
