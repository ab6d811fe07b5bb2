/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Evaluation of the truncated VSOP87D planetary series.
//!
//! The tables live in [super::vsop87_data]. Positions come out in the mean
//! ecliptic of date; [helio_state_eqj] unwinds precession into EQJ, which is
//! the frame every public ephemeris function speaks.

use crate::bodies::Body;
use crate::constants::ARCSEC2DEG;
use crate::math::rotation::Rotation;
use crate::math::Vector3;
use crate::orientations::{mean_obliquity, precession};

/// One cosine term: `amp * cos(phase + freq * tau)`.
pub(crate) struct VsopTerm {
    pub amp: f64,
    pub phase: f64,
    pub freq: f64,
}

impl VsopTerm {
    pub(crate) const fn new(amp: f64, phase: f64, freq: f64) -> Self {
        Self { amp, phase, freq }
    }
}

/// A planet's three coordinates, each a list of series by power of tau.
pub(crate) struct VsopModel {
    pub lon: &'static [&'static [VsopTerm]],
    pub lat: &'static [&'static [VsopTerm]],
    pub rad: &'static [&'static [VsopTerm]],
}

/// Rate of general precession in longitude, radians per day. Used to remove
/// the of-date frame's own rotation from series velocities.
const PRECESSION_RATE_RAD_PER_DAY: f64 =
    5028.796195 * ARCSEC2DEG * core::f64::consts::PI / 180.0 / 36_525.0;

pub(crate) fn model_for(body: Body) -> Option<&'static VsopModel> {
    use super::vsop87_data::*;
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Earth => Some(&EARTH),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        _ => None,
    }
}

/// Sums one coordinate and its derivative with respect to tau.
fn series_pair(series: &[&[VsopTerm]], tau: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut deriv = 0.0;
    let mut tp = 1.0; // tau^k
    let mut tp_prev = 0.0; // k * tau^(k-1)
    for (k, group) in series.iter().enumerate() {
        let mut inner = 0.0;
        let mut inner_dot = 0.0;
        for term in group.iter() {
            let (sin_arg, cos_arg) = (term.phase + term.freq * tau).sin_cos();
            inner += term.amp * cos_arg;
            inner_dot -= term.amp * term.freq * sin_arg;
        }
        value += inner * tp;
        deriv += inner_dot * tp + inner * tp_prev;
        tp_prev = (k + 1) as f64 * tp;
        tp *= tau;
    }
    (value, deriv)
}

/// Heliocentric state in the mean-ecliptic-of-date frame: position in AU and
/// velocity in AU/day, with the of-date frame's own precession removed so
/// that the velocity is inertial.
fn helio_state_ecl_of_date(model: &VsopModel, tt: f64) -> (Vector3, Vector3) {
    let tau = tt / 365_250.0;
    let (lon, dlon) = series_pair(model.lon, tau);
    let (lat, dlat) = series_pair(model.lat, tau);
    let (rad, drad) = series_pair(model.rad, tau);

    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let pos = Vector3::new(
        rad * cos_lat * cos_lon,
        rad * cos_lat * sin_lon,
        rad * sin_lat,
    );

    // Chain rule on (L, B, R), converted from per-millennium to per-day.
    let per_day = 1.0 / 365_250.0;
    let dr = drad * per_day;
    let dl = dlon * per_day;
    let db = dlat * per_day;
    let mut vel = Vector3::new(
        dr * cos_lat * cos_lon - rad * sin_lat * db * cos_lon - rad * cos_lat * sin_lon * dl,
        dr * cos_lat * sin_lon - rad * sin_lat * db * sin_lon + rad * cos_lat * cos_lon * dl,
        dr * sin_lat + rad * cos_lat * db,
    );
    // The equinox of date drifts westward along the ecliptic; the series
    // derivative therefore contains the frame's own spin about +z.
    vel.x += PRECESSION_RATE_RAD_PER_DAY * pos.y;
    vel.y -= PRECESSION_RATE_RAD_PER_DAY * pos.x;

    (pos, vel)
}

/// Rotation from the mean ecliptic of date into EQJ.
pub(crate) fn ecl_of_date_to_eqj(tt: f64) -> Rotation {
    let eps = mean_obliquity(tt).to_radians();
    Rotation::combine(
        precession::precession_rot(tt).inverse(),
        Rotation::r1(eps).inverse(),
    )
}

/// Heliocentric position (AU) and velocity (AU/day) of a planet in EQJ.
pub(crate) fn helio_state_eqj(model: &VsopModel, tt: f64) -> (Vector3, Vector3) {
    let (pos, vel) = helio_state_ecl_of_date(model, tt);
    let rot = ecl_of_date_to_eqj(tt);
    (rot * pos, rot * vel)
}

#[cfg(test)]
mod ut_vsop87 {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn earth_at_j2000() {
        // Heliocentric Earth at J2000: longitude-of-date 100.3778 deg,
        // radius 0.9833276 AU (the Sun's geocentric longitude is 280.378).
        let model = model_for(Body::Earth).unwrap();
        let (pos, _) = helio_state_ecl_of_date(model, 0.0);
        let lon = crate::math::angles::between_0_360(pos.y.atan2(pos.x).to_degrees());
        assert_relative_eq!(lon, 100.37784, epsilon = 1e-4);
        assert_relative_eq!(pos.norm(), 0.98332758, epsilon = 1e-6);
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let dt = 0.05;
        for body in [Body::Mercury, Body::Earth, Body::Jupiter, Body::Neptune] {
            let model = model_for(body).unwrap();
            let (_, vel) = helio_state_eqj(model, 2500.0);
            let (ahead, _) = helio_state_eqj(model, 2500.0 + dt);
            let (behind, _) = helio_state_eqj(model, 2500.0 - dt);
            let fd = (ahead - behind) / (2.0 * dt);
            assert!(
                (vel - fd).norm() < 1e-8 + 2e-5 * vel.norm(),
                "{body}: analytic {vel:?} vs finite difference {fd:?}"
            );
        }
    }

    #[test]
    fn orbital_radii_stay_in_range() {
        for (body, lo, hi) in [
            (Body::Mercury, 0.30, 0.47),
            (Body::Venus, 0.71, 0.74),
            (Body::Earth, 0.97, 1.02),
            (Body::Mars, 1.36, 1.67),
            (Body::Jupiter, 4.9, 5.5),
            (Body::Saturn, 9.0, 10.1),
            (Body::Uranus, 18.2, 20.15),
            (Body::Neptune, 29.7, 30.4),
        ] {
            let model = model_for(body).unwrap();
            let mut tt = -150.0 * 365.25;
            while tt < 150.0 * 365.25 {
                let (pos, _) = helio_state_eqj(model, tt);
                let r = pos.norm();
                assert!(r > lo && r < hi, "{body} r = {r} at tt = {tt}");
                tt += 211.0;
            }
        }
    }

    #[test]
    fn no_model_for_non_planets() {
        assert!(model_for(Body::Moon).is_none());
        assert!(model_for(Body::Pluto).is_none());
        assert!(model_for(Body::Sun).is_none());
    }
}
