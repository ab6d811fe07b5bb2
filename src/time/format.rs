/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rendering and parsing of the `YYYY-MM-DDThh:mm[:ss[.fff]]Z` text form.
//!
//! Rounding at the chosen granularity is half-to-even, with carry into the
//! larger fields: `23:59:59.500` rendered at second granularity lands on the
//! next day.

use core::str::FromStr;

use super::{civil_from_days, AstroTime};
use crate::errors::TimeError;

/// Output granularity for [format_time].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeFormat {
    Day,
    Minute,
    Second,
    Millisecond,
}

fn year_field(year: i64) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+06}")
    }
}

/// Renders the UT calendar form of `time` at the requested granularity.
pub fn format_time(time: &AstroTime, format: TimeFormat) -> String {
    // Days since 1970-01-01T00:00 UT; all granularities round an integer
    // count of their own unit, so the carry into larger fields falls out of
    // the integer decomposition.
    let days = time.ut + 0.5 + 10_957.0;
    match format {
        TimeFormat::Day => {
            let d = days.round_ties_even() as i64;
            let (y, mo, dd) = civil_from_days(d);
            format!("{}-{mo:02}-{dd:02}", year_field(y))
        }
        TimeFormat::Minute => {
            let total = (days * 1440.0).round_ties_even() as i64;
            let (d, rem) = (total.div_euclid(1440), total.rem_euclid(1440));
            let (y, mo, dd) = civil_from_days(d);
            format!(
                "{}-{mo:02}-{dd:02}T{:02}:{:02}Z",
                year_field(y),
                rem / 60,
                rem % 60
            )
        }
        TimeFormat::Second => {
            let total = (days * 86_400.0).round_ties_even() as i64;
            let (d, rem) = (total.div_euclid(86_400), total.rem_euclid(86_400));
            let (y, mo, dd) = civil_from_days(d);
            format!(
                "{}-{mo:02}-{dd:02}T{:02}:{:02}:{:02}Z",
                year_field(y),
                rem / 3600,
                (rem / 60) % 60,
                rem % 60
            )
        }
        TimeFormat::Millisecond => {
            let total = (days * 86_400_000.0).round_ties_even() as i64;
            let (d, rem) = (total.div_euclid(86_400_000), total.rem_euclid(86_400_000));
            let (y, mo, dd) = civil_from_days(d);
            format!(
                "{}-{mo:02}-{dd:02}T{:02}:{:02}:{:02}.{:03}Z",
                year_field(y),
                rem / 3_600_000,
                (rem / 60_000) % 60,
                (rem / 1000) % 60,
                rem % 1000
            )
        }
    }
}

impl FromStr for AstroTime {
    type Err = TimeError;

    /// Parses `YYYY-MM-DDThh:mm[:ss[.fff]]Z`. The year may carry a sign and
    /// more than four digits.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        const BAD: TimeError = TimeError::Unparseable {
            text_hint: "expected YYYY-MM-DDThh:mm[:ss[.fff]]Z",
        };
        let text = text.strip_suffix('Z').ok_or(BAD)?;
        let (date, clock) = text.split_once('T').ok_or(BAD)?;

        // A leading sign belongs to the year, not to a field separator.
        let (sign, date_digits) = match date.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, date.strip_prefix('+').unwrap_or(date)),
        };
        let mut date_parts = date_digits.splitn(3, '-');
        let year = sign
            * date_parts
                .next()
                .and_then(|p| p.parse::<i64>().ok())
                .ok_or(BAD)?;
        let month: i32 = date_parts.next().and_then(|p| p.parse().ok()).ok_or(BAD)?;
        let day: i32 = date_parts.next().and_then(|p| p.parse().ok()).ok_or(BAD)?;

        let mut clock_parts = clock.splitn(3, ':');
        let hour: i32 = clock_parts.next().and_then(|p| p.parse().ok()).ok_or(BAD)?;
        let minute: i32 = clock_parts.next().and_then(|p| p.parse().ok()).ok_or(BAD)?;
        let second: f64 = match clock_parts.next() {
            Some(p) => p.parse().map_err(|_| BAD)?,
            None => 0.0,
        };

        let year = i32::try_from(year).map_err(|_| TimeError::InvalidDate {
            field: "year",
            value: year as f64,
        })?;
        AstroTime::try_new(year, month, day, hour, minute, second)
    }
}

#[cfg(test)]
mod ut_format {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeFormat::Millisecond, "2018-12-02T18:30:12.543Z")]
    #[case(TimeFormat::Second, "2018-12-02T18:30:13Z")]
    #[case(TimeFormat::Minute, "2018-12-02T18:30Z")]
    #[case(TimeFormat::Day, "2018-12-03")]
    fn granularities(#[case] format: TimeFormat, #[case] expected: &str) {
        let time = AstroTime::try_new(2018, 12, 2, 18, 30, 12.543).unwrap();
        assert_eq!(format_time(&time, format), expected);
    }

    #[test]
    fn millisecond_rounds_half_even_without_carry() {
        let time = AstroTime::try_new(2018, 12, 2, 23, 59, 59.4994).unwrap();
        assert_eq!(
            format_time(&time, TimeFormat::Millisecond),
            "2018-12-02T23:59:59.499Z"
        );
    }

    #[test]
    fn second_rounding_carries_into_the_next_day() {
        let time = AstroTime::try_new(2018, 12, 2, 23, 59, 59.500_001).unwrap();
        assert_eq!(
            format_time(&time, TimeFormat::Second),
            "2018-12-03T00:00:00Z"
        );
    }

    #[test]
    fn parse_round_trip() {
        for text in [
            "2018-12-02T18:30:12.543Z",
            "1700-01-09T03:14:00.000Z",
            "2100-06-01T00:00:00.000Z",
        ] {
            let time: AstroTime = text.parse().unwrap();
            assert_eq!(format_time(&time, TimeFormat::Millisecond), text);
        }
        let short: AstroTime = "2022-11-21T02:36Z".parse().unwrap();
        assert_eq!(format_time(&short, TimeFormat::Minute), "2022-11-21T02:36Z");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["2018-12-02", "2018-12-02T18:30", "junk", "2018-13-02T00:00Z"] {
            assert!(text.parse::<AstroTime>().is_err(), "accepted {text}");
        }
    }

    #[test]
    fn display_uses_millisecond_granularity() {
        let time = AstroTime::try_new(2021, 5, 26, 11, 18, 42.0).unwrap();
        assert_eq!(format!("{time}"), "2021-05-26T11:18:42.000Z");
    }
}
