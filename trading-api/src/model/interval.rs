use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling interval a strategy asks the host to feed it at.
///
/// Serialised with the host's wire names (`"1day"`, `"1hour"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "4hour")]
    FourHours,
    #[serde(rename = "1day")]
    OneDay,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1min",
            Interval::FiveMinutes => "5min",
            Interval::OneHour => "1hour",
            Interval::FourHours => "4hour",
            Interval::OneDay => "1day",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_matches_display() {
        let json = serde_json::to_string(&Interval::OneDay).unwrap();
        assert_eq!(json, "\"1day\"");
        assert_eq!(Interval::OneDay.to_string(), "1day");

        let parsed: Interval = serde_json::from_str("\"4hour\"").unwrap();
        assert_eq!(parsed, Interval::FourHours);
    }
}
