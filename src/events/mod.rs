/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Observable events, built on the search kernel: rises and sets, phases,
//! elongations, apsides, nodes, seasons, eclipses, and transits.

pub mod apsis;
pub mod eclipse;
pub mod elongation;
pub mod node;
pub mod phase;
pub mod riseset;
pub mod seasons;
pub mod transit;

pub use apsis::{next_lunar_apsis, next_planet_apsis, search_lunar_apsis, search_planet_apsis,
    Apsis, ApsisKind};
pub use eclipse::{next_global_solar_eclipse, next_local_solar_eclipse, next_lunar_eclipse,
    search_global_solar_eclipse, search_local_solar_eclipse, search_lunar_eclipse, EclipseEvent,
    EclipseKind, GlobalSolarEclipse, LocalSolarEclipse, LunarEclipse};
pub use elongation::{elongation, search_max_elongation, search_relative_longitude,
    ElongationEvent, Visibility};
pub use node::{next_moon_node, search_moon_node, NodeEvent, NodeKind};
pub use phase::{moon_phase, next_moon_quarter, search_moon_phase, search_moon_quarter,
    MoonQuarter};
pub use riseset::{search_altitude, search_hour_angle, search_rise_set, Direction,
    HourAngleEvent};
pub use seasons::{seasons, SeasonsInfo};
pub use transit::{next_transit, search_transit, TransitEvent};

use crate::bodies::Body;
use crate::ephemerides::{geo_vector, helio_vector, Aberration};
use crate::errors::AstroResult;
use crate::frames;
use crate::math::angles::between_0_360;
use crate::math::Vector3;
use crate::time::AstroTime;

/// Sidereal orbital periods in days, used for search heuristics.
pub(crate) fn orbital_period_days(body: Body) -> f64 {
    match body {
        Body::Mercury => 87.969,
        Body::Venus => 224.701,
        Body::Earth | Body::Emb => 365.256,
        Body::Mars => 686.980,
        Body::Jupiter => 4_332.589,
        Body::Saturn => 10_759.22,
        Body::Uranus => 30_685.4,
        Body::Neptune => 60_189.0,
        Body::Pluto => 90_560.0,
        Body::Moon => 27.321_582,
        _ => f64::INFINITY,
    }
}

/// Mean synodic period of a planet as seen from Earth, days.
pub(crate) fn synodic_period_days(body: Body) -> f64 {
    let earth = orbital_period_days(Body::Earth);
    let own = orbital_period_days(body);
    1.0 / (1.0 / earth - 1.0 / own).abs()
}

/// True-ecliptic-of-date longitude of an EQJ vector, degrees in [0, 360).
pub(crate) fn ect_longitude(vec: &Vector3, time: &AstroTime) -> f64 {
    let ect = frames::rotation_eqj_ect(time) * *vec;
    between_0_360(ect.y.atan2(ect.x).to_degrees())
}

/// Geocentric apparent ecliptic-of-date longitude of a body, degrees.
pub(crate) fn geo_ecliptic_longitude(body: Body, time: &AstroTime) -> AstroResult<f64> {
    let vec = geo_vector(body, time, Aberration::On)?;
    Ok(ect_longitude(&vec.vec, time))
}

/// Angular difference, in [0, 360), between the geocentric apparent ecliptic
/// longitudes of two bodies: how far `body1` sits east of `body2` along the
/// ecliptic.
pub fn pair_longitude(body1: Body, body2: Body, time: &AstroTime) -> AstroResult<f64> {
    Ok(between_0_360(
        geo_ecliptic_longitude(body1, time)? - geo_ecliptic_longitude(body2, time)?,
    ))
}

/// Heliocentric ecliptic longitude of a body (mean ecliptic of J2000),
/// degrees in [0, 360).
pub fn ecliptic_longitude(body: Body, time: &AstroTime) -> AstroResult<f64> {
    let vec = helio_vector(body, time)?;
    let ecl = frames::rotation_eqj_ecl() * vec.vec;
    Ok(between_0_360(ecl.y.atan2(ecl.x).to_degrees()))
}

#[cfg(test)]
mod ut_events {
    use super::*;

    #[test]
    fn synodic_periods_match_the_classics() {
        assert!((synodic_period_days(Body::Mercury) - 115.9).abs() < 0.5);
        assert!((synodic_period_days(Body::Venus) - 583.9).abs() < 1.5);
        assert!((synodic_period_days(Body::Mars) - 779.9).abs() < 2.0);
        assert!((synodic_period_days(Body::Jupiter) - 398.9).abs() < 1.0);
    }

    #[test]
    fn earth_relative_longitude_of_sun_is_zero() {
        // The Sun's heliocentric longitude is undefined; its geocentric
        // longitude against itself is trivially zero via pair_longitude.
        let time = AstroTime::try_new(2022, 6, 1, 0, 0, 0.0).unwrap();
        let zero = pair_longitude(Body::Sun, Body::Sun, &time).unwrap();
        assert!(zero.abs() < 1e-12);
    }

    #[test]
    fn moon_runs_ahead_of_the_sun_after_new_moon() {
        // 2021-05-11 19:00 UT was a new moon; two days later the Moon sits
        // roughly 24-30 degrees east of the Sun.
        let time = AstroTime::try_new(2021, 5, 13, 19, 0, 0.0).unwrap();
        let sep = pair_longitude(Body::Moon, Body::Sun, &time).unwrap();
        assert!(sep > 15.0 && sep < 40.0, "sep = {sep}");
    }
}
