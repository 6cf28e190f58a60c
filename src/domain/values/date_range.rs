use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    AllTime,
    Last30Days,
    ThisYear,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::AllTime => write!(f, "All Time"),
            DateRange::Last30Days => write!(f, "Last 30 Days"),
            DateRange::ThisYear => write!(f, "This Year"),
        }
    }
}

impl FromStr for DateRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all time" | "all-time" => Ok(DateRange::AllTime),
            "last 30 days" | "last-30-days" => Ok(DateRange::Last30Days),
            "this year" | "this-year" => Ok(DateRange::ThisYear),
            _ => Err(DomainError::InvalidFilterValue(format!(
                "Unknown date range: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ui_and_cli_forms() {
        assert_eq!("All Time".parse::<DateRange>().unwrap(), DateRange::AllTime);
        assert_eq!(
            "last-30-days".parse::<DateRange>().unwrap(),
            DateRange::Last30Days
        );
        assert_eq!(
            "This Year".parse::<DateRange>().unwrap(),
            DateRange::ThisYear
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "Last Week".parse::<DateRange>(),
            Err(DomainError::InvalidFilterValue(_))
        ));
    }
}
