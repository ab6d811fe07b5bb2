/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Lunar phases and quarters.

use crate::bodies::Body;
use crate::constants::MEAN_SYNODIC_MONTH;
use crate::errors::{AstroResult, EventError, EventSnafu, SearchError, SearchSnafu};
use crate::math::angles::{between_0_360, between_pm_180};
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

/// The Moon's ecliptic longitude east of the Sun, degrees in [0, 360):
/// 0 new moon, 90 first quarter, 180 full moon, 270 third quarter.
pub fn moon_phase(time: &AstroTime) -> AstroResult<f64> {
    super::pair_longitude(Body::Moon, Body::Sun, time)
}

/// Finds when the Moon's phase angle equals `target_lon` degrees. Searches
/// forward for positive `limit_days`, backward for negative; symmetric in
/// either direction. Fails with a not-found error when the phase does not
/// occur inside the window.
pub fn search_moon_phase(target_lon: f64, start: AstroTime, limit_days: f64) -> AstroResult<AstroTime> {
    // The phase advances ~12.19 deg/day; aim the bracket at the estimated
    // crossing and give it two days of slack.
    let rate = 360.0 / MEAN_SYNODIC_MONTH;
    let current = moon_phase(&start)?;
    let est_days = if limit_days >= 0.0 {
        between_0_360(target_lon - current) / rate
    } else {
        -between_0_360(current - target_lon) / rate
    };
    if est_days.abs() - 1.0 > limit_days.abs() {
        return Err(SearchError::NotFound { limit_days }).context(SearchSnafu {
            action: "moon phase search",
        });
    }
    let lo = start.add_days(est_days - 1.2);
    let hi = start.add_days(est_days + 1.2);
    let f = |t: &AstroTime| Ok(between_pm_180(moon_phase(t)? - target_lon));
    search::search(f, lo, hi, 0.5)
}

/// A lunar quarter: 0 new, 1 first quarter, 2 full, 3 third quarter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoonQuarter {
    pub quarter: u8,
    pub time: AstroTime,
}

/// Finds the first quarter event at or after `start`.
pub fn search_moon_quarter(start: AstroTime) -> AstroResult<MoonQuarter> {
    let current = moon_phase(&start)?;
    let quarter = (1 + (current / 90.0).floor() as u8) % 4;
    let time = search_moon_phase(90.0 * quarter as f64, start, 10.0)?;
    Ok(MoonQuarter { quarter, time })
}

/// The quarter event following `previous`. Consecutive quarters are about
/// 7.4 days apart; the next one is found just beyond the previous.
pub fn next_moon_quarter(previous: &MoonQuarter) -> AstroResult<MoonQuarter> {
    let next = search_moon_quarter(previous.time.add_days(6.0))?;
    if next.quarter != (previous.quarter + 1) % 4 {
        // The phase function is monotonic; skipping a quarter is a bug.
        return Err(EventError::NoMoonQuarter).context(EventSnafu {
            action: "advancing to the next moon quarter",
        });
    }
    Ok(next)
}

#[cfg(test)]
mod ut_phase {
    use super::*;

    #[test]
    fn known_new_moon() {
        // A new moon occurred on 2021-05-11 near 19:00 UT.
        let start = AstroTime::try_new(2021, 5, 8, 0, 0, 0.0).unwrap();
        let nm = search_moon_phase(0.0, start, 10.0).unwrap();
        let expected = AstroTime::try_new(2021, 5, 11, 19, 0, 0.0).unwrap();
        assert!(
            (nm.ut - expected.ut).abs() < 0.05,
            "new moon found at {nm}"
        );
    }

    #[test]
    fn forward_backward_symmetry() {
        let start = AstroTime::try_new(2021, 5, 8, 0, 0, 0.0).unwrap();
        let nm = search_moon_phase(0.0, start, 10.0).unwrap();
        let back = search_moon_phase(0.0, nm.add_days(3.0), -10.0).unwrap();
        assert!(
            (nm.ut - back.ut).abs() * 86_400.0 < 1.0,
            "forward {nm} vs backward {back}"
        );
    }

    #[test]
    fn synodic_month_bounds() {
        // Consecutive new moons stay within the classical bounds on the
        // synodic month length.
        let mut time = AstroTime::try_new(2019, 1, 3, 0, 0, 0.0).unwrap();
        let mut prev = search_moon_phase(0.0, time, 35.0).unwrap();
        for _ in 0..24 {
            time = prev.add_days(5.0);
            let next = search_moon_phase(0.0, time, 35.0).unwrap();
            let interval = next.ut - prev.ut;
            assert!(
                (29.18..=29.93).contains(&interval),
                "synodic interval {interval} at {next}"
            );
            prev = next;
        }
    }

    #[test]
    fn quarters_advance_in_order() {
        let start = AstroTime::try_new(2020, 2, 1, 0, 0, 0.0).unwrap();
        let mut quarter = search_moon_quarter(start).unwrap();
        for _ in 0..12 {
            let next = next_moon_quarter(&quarter).unwrap();
            assert_eq!(next.quarter, (quarter.quarter + 1) % 4);
            let gap = next.time.ut - quarter.time.ut;
            assert!((6.0..9.0).contains(&gap), "quarter gap {gap}");
            quarter = next;
        }
    }

    #[test]
    fn out_of_window_phase_is_not_found() {
        let start = AstroTime::try_new(2021, 5, 12, 0, 0, 0.0).unwrap();
        // The next new moon is ~29 days away; a 5-day window cannot hold it.
        assert!(search_moon_phase(0.0, start, 5.0).is_err());
    }
}
