/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rises, sets, altitude crossings, and meridian (hour-angle) events.

use log::trace;

use crate::bodies::Body;
use crate::constants::shapes::{MOON_EQUATORIAL_RADIUS_KM, SUN_RADIUS_KM};
use crate::constants::KM_PER_AU;
use crate::ephemerides::Aberration;
use crate::errors::{AstroResult, SearchError, SearchSnafu};
use crate::math::angles::between_pm_x;
use crate::observer::Observer;
use crate::search::{self, AscentStats};
use crate::time::{sidereal_time, AstroTime};
use crate::topocentric::{equator, horizon, EquatorDate, Refraction, Topocentric};

use snafu::ResultExt;

/// Which horizon crossing to look for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Upward crossing: the body's altitude function passes through the
    /// threshold from below.
    Rise,
    /// Downward crossing.
    Set,
}

/// Standard refraction lift at the horizon, degrees (about 34 arcminutes).
const HORIZON_REFRACTION_DEG: f64 = 34.0 / 60.0;

/// Window length for the crossing scan, days.
const SCAN_WINDOW_DAYS: f64 = 0.25;

/// Bound on how fast any body's altitude changes, degrees per day: full
/// diurnal rotation plus the Moon's own motion, with margin.
const MAX_ALTITUDE_SLOPE: f64 = 500.0;

/// Angular radius of the body's disc in degrees, for limb-touch corrections.
fn angular_radius_deg(body: Body, dist_au: f64) -> f64 {
    let radius_km = match body {
        Body::Sun => SUN_RADIUS_KM,
        Body::Moon => MOON_EQUATORIAL_RADIUS_KM,
        _ => return 0.0,
    };
    (radius_km / (dist_au * KM_PER_AU)).asin().to_degrees()
}

/// The scalar whose ascending zero is a rise: apparent altitude of the upper
/// limb, with horizon refraction, relative to the target altitude.
fn altitude_error(
    body: Body,
    observer: &Observer,
    time: &AstroTime,
    target_altitude: f64,
    limb_corrected: bool,
) -> AstroResult<f64> {
    let ofdate = equator(body, time, observer, EquatorDate::OfDate, Aberration::On)?;
    let hor = horizon(time, observer, ofdate.ra, ofdate.dec, Refraction::None)?;
    let correction = if limb_corrected {
        angular_radius_deg(body, ofdate.dist) + HORIZON_REFRACTION_DEG
    } else {
        0.0
    };
    Ok(hor.altitude + correction - target_altitude)
}

/// Scans from `start` over at most `limit_days` (negative = backward) for
/// the next crossing of `f` through zero in the requested direction, then
/// refines it with the kernel.
fn search_crossing<F>(mut f: F, start: AstroTime, limit_days: f64) -> AstroResult<AstroTime>
where
    F: FnMut(&AstroTime) -> AstroResult<f64>,
{
    let not_found = || SearchError::NotFound { limit_days };
    if limit_days == 0.0 || !limit_days.is_finite() {
        return Err(not_found()).context(SearchSnafu {
            action: "altitude crossing scan",
        });
    }
    let backward = limit_days < 0.0;
    let span = limit_days.abs();
    let windows = (span / SCAN_WINDOW_DAYS).ceil() as usize;
    let mut stats = AscentStats::default();

    // Each window is oriented forward in time even when scanning backward,
    // so a crossing keeps its meaning; windows are visited nearest-first.
    let mut prev_sample: Option<f64> = None;
    for k in 0..windows {
        let (ta, tb) = if backward {
            let hi = start.add_days(-(k as f64) * SCAN_WINDOW_DAYS);
            let lo = start.add_days(-((k + 1) as f64).min(span / SCAN_WINDOW_DAYS) * SCAN_WINDOW_DAYS);
            (lo, hi)
        } else {
            let lo = start.add_days(k as f64 * SCAN_WINDOW_DAYS);
            let hi = start.add_days(((k + 1) as f64 * SCAN_WINDOW_DAYS).min(span));
            (lo, hi)
        };
        let fa = match (backward, prev_sample) {
            (false, Some(value)) => value,
            _ => f(&ta)?,
        };
        let fb = match (backward, prev_sample) {
            (true, Some(value)) => value,
            _ => f(&tb)?,
        };
        prev_sample = Some(if backward { fa } else { fb });

        let bracket = if fa <= 0.0 && fb > 0.0 {
            Some((ta, tb))
        } else if fa <= 0.0 {
            search::find_ascent(&mut f, ta, tb, fa, fb, MAX_ALTITUDE_SLOPE, 0, &mut stats)?
        } else {
            // Above threshold at the window start: wait for the function to
            // come back down before looking for the next ascent.
            None
        };
        if let Some((lo, hi)) = bracket {
            trace!(
                "crossing bracket after {} evaluations (depth {})",
                stats.evaluations,
                stats.max_depth
            );
            return search::search(&mut f, lo, hi, 0.1);
        }
    }
    Err(not_found()).context(SearchSnafu {
        action: "altitude crossing scan",
    })
}

/// Finds the next rise or set of a body as seen by the observer. The event
/// is the upper limb touching the refracted horizon. A negative `limit_days`
/// searches backward from `start`. Fails with a not-found search error when
/// the body stays above or below the horizon for the whole window.
pub fn search_rise_set(
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: AstroTime,
    limit_days: f64,
) -> AstroResult<AstroTime> {
    let sign = match direction {
        Direction::Rise => 1.0,
        Direction::Set => -1.0,
    };
    search_crossing(
        |t| Ok(sign * altitude_error(body, observer, t, 0.0, true)?),
        start,
        limit_days,
    )
}

/// Finds when the center of a body crosses the given altitude (no refraction
/// or limb correction), enabling twilight computations against -6, -12, and
/// -18 degrees.
pub fn search_altitude(
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: AstroTime,
    limit_days: f64,
    altitude: f64,
) -> AstroResult<AstroTime> {
    let sign = match direction {
        Direction::Rise => 1.0,
        Direction::Set => -1.0,
    };
    search_crossing(
        |t| Ok(sign * altitude_error(body, observer, t, altitude, false)?),
        start,
        limit_days,
    )
}

/// A meridian-crossing event: the time and where the body then appears.
#[derive(Copy, Clone, Debug)]
pub struct HourAngleEvent {
    pub time: AstroTime,
    pub hor: Topocentric,
}

/// Ratio of a solar day to a sidereal day: hour-angle error converts to
/// clock time through this factor.
const SOLAR_DAYS_PER_SIDEREAL_HOUR: f64 = 0.997_269_566_3 / 24.0;

/// Finds when the body reaches the given hour angle (0 = upper culmination,
/// 12 = lower) for the observer. `direction` +1 searches forward from
/// `start`, -1 backward.
pub fn search_hour_angle(
    body: Body,
    observer: &Observer,
    hour_angle: f64,
    start: AstroTime,
    direction: i32,
) -> AstroResult<HourAngleEvent> {
    let mut time = start;
    for iteration in 0..100 {
        let ofdate = equator(body, &time, observer, EquatorDate::OfDate, Aberration::On)?;
        let lst = sidereal_time(&time) + observer.longitude / 15.0;
        // How many sidereal hours until the body reaches the target angle.
        let mut delta = hour_angle + ofdate.ra - lst;
        if iteration == 0 {
            // First step fixes the direction; afterwards take the shortest.
            delta = if direction >= 0 {
                delta.rem_euclid(24.0)
            } else {
                -(-delta).rem_euclid(24.0)
            };
        } else {
            delta = between_pm_x(delta, 12.0);
        }
        if delta.abs() * 3600.0 < 0.1 {
            let hor = horizon(&time, observer, ofdate.ra, ofdate.dec, Refraction::Normal)?;
            return Ok(HourAngleEvent { time, hor });
        }
        time = time.add_days(delta * SOLAR_DAYS_PER_SIDEREAL_HOUR);
    }
    Err(SearchError::NoConvergence { iter: 100 }).context(SearchSnafu {
        action: "hour angle search",
    })
}

#[cfg(test)]
mod ut_riseset {
    use super::*;
    use crate::time::TimeFormat;

    fn miami() -> Observer {
        Observer::new(25.77, -80.19, 3.0)
    }

    #[test]
    fn sun_rises_and_sets_at_mid_latitudes() {
        let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
        let rise = search_rise_set(Body::Sun, &miami(), Direction::Rise, start, 1.0).unwrap();
        let set = search_rise_set(Body::Sun, &miami(), Direction::Set, start, 1.0).unwrap();
        // Local clock is UT-5: sunrise ~06:45 local = 11:45 UT, sunset
        // ~17:30 local = 22:30 UT in late November.
        let (_, _, _, rise_h, _, _) = rise.calendar();
        let (_, _, _, set_h, _, _) = set.calendar();
        assert!((11..=12).contains(&rise_h), "rise at {rise}");
        assert!((22..=23).contains(&set_h), "set at {set}");
    }

    #[test]
    fn forward_and_backward_searches_agree() {
        let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
        let rise = search_rise_set(Body::Sun, &miami(), Direction::Rise, start, 1.0).unwrap();
        // Searching backward from shortly after the event must find it again.
        let later = rise.add_days(0.01);
        let back = search_rise_set(Body::Sun, &miami(), Direction::Rise, later, -1.0).unwrap();
        assert!(
            (back.ut - rise.ut).abs() * 86_400.0 < 0.5,
            "forward {rise} vs backward {back}"
        );
    }

    #[test]
    fn circumpolar_sun_has_no_rise() {
        // Midsummer at 78 N: the Sun never sets, so no rise event exists in
        // a two-day window.
        let svalbard = Observer::new(78.0, 15.0, 0.0);
        let start = AstroTime::try_new(2022, 6, 20, 0, 0, 0.0).unwrap();
        let result = search_rise_set(Body::Sun, &svalbard, Direction::Rise, start, 2.0);
        assert!(result.is_err());
        // And midwinter has no rise either (polar night).
        let start = AstroTime::try_new(2022, 12, 20, 0, 0, 0.0).unwrap();
        let result = search_rise_set(Body::Sun, &svalbard, Direction::Rise, start, 2.0);
        assert!(result.is_err());
    }

    #[test]
    fn twilight_precedes_sunrise() {
        let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
        let civil = search_altitude(
            Body::Sun,
            &miami(),
            Direction::Rise,
            start,
            1.0,
            -6.0,
        )
        .unwrap();
        let rise = search_rise_set(Body::Sun, &miami(), Direction::Rise, start, 1.0).unwrap();
        let gap_minutes = (rise.ut - civil.ut) * 1440.0;
        assert!(
            gap_minutes > 15.0 && gap_minutes < 40.0,
            "civil twilight {} minutes before sunrise",
            gap_minutes
        );
    }

    #[test]
    fn culmination_sits_between_rise_and_set() {
        let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
        let rise = search_rise_set(Body::Sun, &miami(), Direction::Rise, start, 1.0).unwrap();
        let culm = search_hour_angle(Body::Sun, &miami(), 0.0, rise, 1).unwrap();
        let set = search_rise_set(Body::Sun, &miami(), Direction::Set, rise, 1.0).unwrap();
        assert!(culm.time.ut > rise.ut && culm.time.ut < set.ut);
        // At culmination the Sun bears due south from Miami in November and
        // stands at its daily maximum altitude.
        assert!(
            (culm.hor.azimuth - 180.0).abs() < 3.0,
            "azimuth = {}",
            culm.hor.azimuth
        );
        assert!(culm.hor.altitude > 40.0 && culm.hor.altitude < 46.0);
        // Lower culmination is about half a day later.
        let lower = search_hour_angle(Body::Sun, &miami(), 12.0, culm.time, 1).unwrap();
        let gap = lower.time.ut - culm.time.ut;
        assert!((gap - 0.5).abs() < 0.02, "gap = {gap} days");
    }

    #[test]
    fn moonrise_shifts_later_each_day() {
        let observer = miami();
        let start = AstroTime::try_new(2022, 3, 1, 0, 0, 0.0).unwrap();
        let first = search_rise_set(Body::Moon, &observer, Direction::Rise, start, 2.0).unwrap();
        let second =
            search_rise_set(Body::Moon, &observer, Direction::Rise, first.add_days(0.01), 2.0)
                .unwrap();
        let gap_hours = (second.ut - first.ut) * 24.0;
        assert!(
            gap_hours > 24.0 && gap_hours < 26.0,
            "daily moonrise delay = {} h ({} -> {})",
            gap_hours - 24.0,
            first.format(TimeFormat::Minute),
            second.format(TimeFormat::Minute)
        );
    }
}
