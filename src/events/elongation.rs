/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elongation from the Sun, maximum elongations of the inner planets, and
//! heliocentric relative-longitude searches.

use log::debug;

use crate::bodies::Body;
use crate::ephemerides::{geo_vector, Aberration};
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError, SearchError, SearchSnafu};
use crate::math::angle_between;
use crate::math::angles::between_pm_180;
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

/// Whether a body is best seen before sunrise or after sunset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Morning,
    Evening,
}

/// A body's angular separation from the Sun at one instant.
#[derive(Copy, Clone, Debug)]
pub struct ElongationEvent {
    pub time: AstroTime,
    pub visibility: Visibility,
    /// Angular separation between the body and the Sun, degrees.
    pub elongation: f64,
    /// Difference of geocentric ecliptic longitudes, degrees in [0, 360).
    pub ecliptic_separation: f64,
}

/// Elongation and visibility of a body at `time`.
pub fn elongation(body: Body, time: &AstroTime) -> AstroResult<ElongationEvent> {
    let body_vec = geo_vector(body, time, Aberration::On)?;
    let sun_vec = geo_vector(Body::Sun, time, Aberration::On)?;
    let separation = super::pair_longitude(body, Body::Sun, time)?;
    let visibility = if separation < 180.0 {
        Visibility::Evening
    } else {
        Visibility::Morning
    };
    Ok(ElongationEvent {
        time: *time,
        visibility,
        elongation: angle_between(&body_vec.vec, &sun_vec.vec),
        ecliptic_separation: separation,
    })
}

/// Elongation as a plain scalar, for slope work.
fn elongation_deg(body: Body, time: &AstroTime) -> AstroResult<f64> {
    let body_vec = geo_vector(body, time, Aberration::On)?;
    let sun_vec = geo_vector(Body::Sun, time, Aberration::On)?;
    Ok(angle_between(&body_vec.vec, &sun_vec.vec))
}

/// Finds the next maximum elongation of Mercury or Venus after `start`.
///
/// The scalar searched is the time derivative of the elongation; a maximum
/// is a falling zero crossing of that slope.
pub fn search_max_elongation(body: Body, start: AstroTime) -> AstroResult<ElongationEvent> {
    if body != Body::Mercury && body != Body::Venus {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "searching for a maximum elongation",
        });
    }
    let slope_dt = 0.1;
    let mut slope = |t: &AstroTime| -> AstroResult<f64> {
        let ahead = elongation_deg(body, &t.add_days(slope_dt))?;
        let behind = elongation_deg(body, &t.add_days(-slope_dt))?;
        Ok((ahead - behind) / (2.0 * slope_dt))
    };

    // Extrema alternate roughly every quarter synodic period; sampling at a
    // small fraction of that cannot jump across two of them.
    let step = super::synodic_period_days(body) / 16.0;
    let mut t_prev = start;
    let mut s_prev = slope(&t_prev)?;
    for k in 1..=40 {
        let t_next = start.add_days(k as f64 * step);
        let s_next = slope(&t_next)?;
        if s_prev > 0.0 && s_next <= 0.0 {
            // Falling slope: a maximum lies inside.
            let peak = search::search(&mut slope, t_prev, t_next, 1.0)?;
            debug!("max elongation of {body} at {peak}");
            return elongation(body, &peak);
        }
        t_prev = t_next;
        s_prev = s_next;
    }
    Err(SearchError::NotFound {
        limit_days: 40.0 * step,
    })
    .context(SearchSnafu {
        action: "searching for a maximum elongation",
    })
}

/// Finds when the heliocentric longitude of `body` minus that of the Earth
/// equals `target_rel_lon` degrees: 0 is inferior conjunction for the inner
/// planets and opposition for the outer ones, 180 the other alignment.
pub fn search_relative_longitude(
    body: Body,
    target_rel_lon: f64,
    start: AstroTime,
) -> AstroResult<AstroTime> {
    if body == Body::Earth || !body.is_planet() && body != Body::Pluto {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "searching a relative longitude",
        });
    }
    // Degrees per day by which the relative longitude drifts; negative for
    // bodies slower than the Earth.
    let rate = 360.0 / super::orbital_period_days(body) - 360.0 / super::orbital_period_days(Body::Earth);
    let error = |t: &AstroTime| -> AstroResult<f64> {
        Ok(between_pm_180(
            super::ecliptic_longitude(body, t)? - super::ecliptic_longitude(Body::Earth, t)?
                - target_rel_lon,
        ))
    };

    // Newton-style iteration on the nearly linear drift.
    let mut time = start;
    let mut offset = error(&time)?;
    // Walk in the direction that reaches the target without backtracking
    // before `start`.
    if offset * rate.signum() > 0.0 {
        offset -= 360.0 * rate.signum();
    }
    for _ in 0..100 {
        if offset.abs() < 1.0e-4 {
            return Ok(time);
        }
        time = time.add_days(-offset / rate);
        offset = error(&time)?;
    }
    Err(SearchError::NoConvergence { iter: 100 }).context(SearchSnafu {
        action: "searching a relative longitude",
    })
}

#[cfg(test)]
mod ut_elongation {
    use super::*;

    #[test]
    fn mercury_max_elongation_bounds() {
        // Mercury's maximum elongation is always between 18 and 28 degrees.
        let mut start = AstroTime::try_new(2023, 1, 1, 0, 0, 0.0).unwrap();
        for _ in 0..4 {
            let event = search_max_elongation(Body::Mercury, start).unwrap();
            assert!(
                event.elongation > 17.9 && event.elongation < 28.1,
                "elongation {} at {}",
                event.elongation,
                event.time
            );
            assert!(event.time.ut > start.ut);
            start = event.time.add_days(5.0);
        }
    }

    #[test]
    fn venus_max_elongation_bounds() {
        let start = AstroTime::try_new(2019, 6, 1, 0, 0, 0.0).unwrap();
        let event = search_max_elongation(Body::Venus, start).unwrap();
        assert!(
            event.elongation > 45.0 && event.elongation < 47.5,
            "elongation {}",
            event.elongation
        );
    }

    #[test]
    fn rejects_outer_bodies() {
        let start = AstroTime::from_ut(0.0);
        assert!(search_max_elongation(Body::Mars, start).is_err());
        assert!(search_max_elongation(Body::Moon, start).is_err());
    }

    #[test]
    fn relative_longitude_finds_oppositions() {
        // Mars was at opposition near 2020-10-13.
        let start = AstroTime::try_new(2020, 6, 1, 0, 0, 0.0).unwrap();
        let opp = search_relative_longitude(Body::Mars, 0.0, start).unwrap();
        let expected = AstroTime::try_new(2020, 10, 13, 0, 0, 0.0).unwrap();
        assert!(
            (opp.ut - expected.ut).abs() < 2.0,
            "opposition found at {opp}"
        );
        assert!(opp.ut >= start.ut);
    }

    #[test]
    fn relative_longitude_finds_inferior_conjunctions() {
        // Venus inferior conjunction near 2020-06-03.
        let start = AstroTime::try_new(2020, 1, 15, 0, 0, 0.0).unwrap();
        let conj = search_relative_longitude(Body::Venus, 0.0, start).unwrap();
        let expected = AstroTime::try_new(2020, 6, 3, 0, 0, 0.0).unwrap();
        assert!((conj.ut - expected.ut).abs() < 2.0, "conjunction at {conj}");
    }

    #[test]
    fn elongation_visibility_follows_the_separation() {
        // Shortly after superior conjunction, Mercury emerges into the
        // evening sky (separation just above 0); before it, the morning sky.
        let time = AstroTime::try_new(2023, 4, 15, 0, 0, 0.0).unwrap();
        let event = elongation(Body::Mercury, &time).unwrap();
        match event.visibility {
            Visibility::Evening => assert!(event.ecliptic_separation < 180.0),
            Visibility::Morning => assert!(event.ecliptic_separation >= 180.0),
        }
    }
}
