use std::{fmt::Display, str::FromStr};

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// `%.f` prints no fraction for whole seconds, otherwise 3, 6 or 9 digits,
// whichever keeps every nanosecond
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A node timestamp such as `2018-06-15T19:17:47` or `2018-06-15T19:17:47.500`.
///
/// Nodes emit UTC without an offset suffix; a trailing `Z` is accepted on input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time(NaiveDateTime);

impl Time {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid time {value:?}: {source}")]
pub struct ParseTimeError {
    value: String,
    #[source]
    source: chrono::ParseError,
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), FORMAT)
            .map(Time)
            .map_err(|source| ParseTimeError { value: s.to_string(), source })
    }
}

impl From<NaiveDateTime> for Time {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Time::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_seconds() {
        let time = Time::from_str("2018-06-15T19:17:47").unwrap();
        assert_eq!(time.to_string(), "2018-06-15T19:17:47");
    }

    #[test]
    fn test_parse_millis_and_zulu() {
        let time = Time::from_str("2018-06-15T19:17:47.500Z").unwrap();
        assert_eq!(time.to_string(), "2018-06-15T19:17:47.500");
    }

    #[test]
    fn test_sub_millisecond_precision_survives_formatting() {
        let time = Time::from_str("2019-04-05T10:22:30.0005").unwrap();
        assert_eq!(time.to_string(), "2019-04-05T10:22:30.000500");
        assert_eq!(Time::from_str(&time.to_string()).unwrap(), time);

        let encoded = serde_json::to_string(&time).unwrap();
        assert_eq!(serde_json::from_str::<Time>(&encoded).unwrap(), time);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Time::from_str("yesterday").is_err());
    }

    #[test]
    fn test_serde_uses_node_format() {
        let time: Time = serde_json::from_str("\"2019-01-01T00:00:30\"").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"2019-01-01T00:00:30\"");
    }
}
