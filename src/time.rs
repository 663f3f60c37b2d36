//! Date patterns, parsing and ranges.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::UtilError;

/// A named date/time layout, exposed as a chrono format string.
pub trait DateTimeFormat {
    fn value(&self) -> &str;
}

/// The layouts the toolkit ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `2021-01-20 10:00:10`
    YmdHms,
    /// `2021-01-20`
    Ymd,
    /// `20-01-2021 10:00:10`
    DmyHms,
    /// `20-01-2021`
    Dmy,
    /// `2021-01-20T10:00:10.000Z`
    Iso8601,
}

impl DateTimeFormat for DatePattern {
    fn value(&self) -> &str {
        match self {
            DatePattern::YmdHms => "%Y-%m-%d %H:%M:%S",
            DatePattern::Ymd => "%Y-%m-%d",
            DatePattern::DmyHms => "%d-%m-%Y %H:%M:%S",
            DatePattern::Dmy => "%d-%m-%Y",
            DatePattern::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3fZ",
        }
    }
}

/// The current UTC timestamp.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parses `text` with the given layout. Date-only layouts parse at
/// midnight.
pub fn parse(text: &str, format: &impl DateTimeFormat) -> Result<NaiveDateTime, UtilError> {
    let layout = format.value();
    NaiveDateTime::parse_from_str(text, layout)
        .or_else(|_| {
            NaiveDate::parse_from_str(text, layout).map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|e| UtilError::DateParse(format!("{text}: {e}")))
}

/// Renders `timestamp` with the given layout.
pub fn format(timestamp: &NaiveDateTime, format: &impl DateTimeFormat) -> String {
    timestamp.format(format.value()).to_string()
}

/// A closed timestamp interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// A range from `start` until now.
    pub fn since(start: NaiveDateTime) -> Self {
        Self::new(start, now())
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        *timestamp >= self.start && *timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_parse_and_render() {
        let parsed = parse("2021-01-20 10:00:10", &DatePattern::YmdHms).unwrap();
        assert_eq!(format(&parsed, &DatePattern::YmdHms), "2021-01-20 10:00:10");
        assert_eq!(format(&parsed, &DatePattern::Dmy), "20-01-2021");
        assert_eq!(
            format(&parsed, &DatePattern::Iso8601),
            "2021-01-20T10:00:10.000Z"
        );
    }

    #[test]
    fn date_only_layouts_parse_at_midnight() {
        let parsed = parse("2021-01-20", &DatePattern::Ymd).unwrap();
        assert_eq!(format(&parsed, &DatePattern::YmdHms), "2021-01-20 00:00:00");
    }

    #[test]
    fn unparseable_input_is_an_error() {
        let result = parse("tomorrow-ish", &DatePattern::Ymd);
        assert!(matches!(result, Err(UtilError::DateParse(_))));
    }

    #[test]
    fn ranges_are_inclusive() {
        let start = parse("2021-01-01", &DatePattern::Ymd).unwrap();
        let end = parse("2021-01-31", &DatePattern::Ymd).unwrap();
        let inside = parse("2021-01-15 12:00:00", &DatePattern::YmdHms).unwrap();
        let outside = parse("2021-02-01", &DatePattern::Ymd).unwrap();

        let range = DateRange::new(start, end);
        assert!(range.contains(&start));
        assert!(range.contains(&end));
        assert!(range.contains(&inside));
        assert!(!range.contains(&outside));
        assert_eq!(range.start(), start);
    }

    #[test]
    fn since_ends_now_or_later() {
        let start = parse("2000-01-01", &DatePattern::Ymd).unwrap();
        let range = DateRange::since(start);
        assert!(range.end() > range.start());
    }
}
