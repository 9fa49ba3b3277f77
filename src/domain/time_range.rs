// Time range selector shared by every dashboard view
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown time range '{0}', expected one of 24h, 7d, 30d, 90d, 1y")]
pub struct ParseTimeRangeError(pub String);

/// Display window applied to time-series charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
        TimeRange::LastYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
            TimeRange::LastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "last 24 hours",
            TimeRange::Last7Days => "last 7 days",
            TimeRange::Last30Days => "last 30 days",
            TimeRange::Last90Days => "last 90 days",
            TimeRange::LastYear => "last year",
        }
    }

    /// Number of trailing daily samples covered by the range.
    ///
    /// Source series are daily, so 24h selects the most recent day.
    pub fn window_days(&self) -> usize {
        match self {
            TimeRange::Last24Hours => 1,
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
            TimeRange::LastYear => 365,
        }
    }

    /// Daily samples merged into one output point (1 = no re-bucketing).
    pub fn bucket_days(&self) -> usize {
        match self {
            TimeRange::Last90Days => 7,
            TimeRange::LastYear => 30,
            _ => 1,
        }
    }

    /// Points produced for a series that covers the whole window.
    pub fn window_size(&self) -> usize {
        self.window_days().div_ceil(self.bucket_days())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| ParseTimeRangeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for range in TimeRange::ALL {
            assert_eq!(range.as_str().parse::<TimeRange>(), Ok(range));
        }
        assert_eq!(" 90d ".parse::<TimeRange>(), Ok(TimeRange::Last90Days));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "2w".parse::<TimeRange>().unwrap_err();
        assert_eq!(err, ParseTimeRangeError("2w".to_string()));
        assert!(err.to_string().contains("2w"));
    }

    #[test]
    fn test_window_sizes() {
        let sizes: Vec<usize> = TimeRange::ALL.iter().map(|r| r.window_size()).collect();
        assert_eq!(sizes, vec![1, 7, 30, 13, 13]);
    }

    #[test]
    fn test_serde_uses_short_names() {
        let json = serde_json::to_string(&TimeRange::LastYear).unwrap();
        assert_eq!(json, "\"1y\"");
        let parsed: TimeRange = serde_json::from_str("\"24h\"").unwrap();
        assert_eq!(parsed, TimeRange::Last24Hours);
    }
}
