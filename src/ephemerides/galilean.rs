/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Jupiter-centric states of the four Galilean satellites.
//!
//! The theory here is a compact truncation: mean circular orbits in Jupiter's
//! equatorial plane, with the leading resonance inequalities applied to Io
//! and Europa. That holds the positions to a fraction of a percent of the
//! orbital radius, which is what the rest of the engine needs from them.

use crate::axis;
use crate::bodies::Body;
use crate::math::{StateVector, Vector3};
use crate::time::AstroTime;

/// States of the four satellites relative to Jupiter's center, in EQJ axes,
/// AU and AU/day.
#[derive(Copy, Clone, Debug)]
pub struct JupiterMoons {
    pub io: StateVector,
    pub europa: StateVector,
    pub ganymede: StateVector,
    pub callisto: StateVector,
}

/// Mean longitude at the 1976-08-10.0 TD epoch (JD 2443000.5), mean motion
/// in degrees/day, orbital radius in AU.
struct MoonElements {
    lon_epoch: f64,
    rate: f64,
    radius_au: f64,
}

const EPOCH_OFFSET_DAYS: f64 = 8544.5; // J2000 minus JD 2443000.5

const IO: MoonElements = MoonElements {
    lon_epoch: 106.077_19,
    rate: 203.488_955_790,
    radius_au: 2.819_31e-3,
};
const EUROPA: MoonElements = MoonElements {
    lon_epoch: 175.731_61,
    rate: 101.374_724_735,
    radius_au: 4.485_58e-3,
};
const GANYMEDE: MoonElements = MoonElements {
    lon_epoch: 120.558_83,
    rate: 50.317_609_207,
    radius_au: 7.155_36e-3,
};
const CALLISTO: MoonElements = MoonElements {
    lon_epoch: 84.444_59,
    rate: 21.571_071_177,
    radius_au: 1.258_57e-2,
};

impl MoonElements {
    fn mean_longitude(&self, d: f64) -> f64 {
        self.lon_epoch + self.rate * d
    }
}

/// Jupiter-centric state for a longitude/rate pair, expressed on the basis
/// `(node, in_plane, pole)` of Jupiter's equatorial frame.
fn plane_state(
    elements: &MoonElements,
    lon_deg: f64,
    rate_deg_per_day: f64,
    node: &Vector3,
    in_plane: &Vector3,
    time: &AstroTime,
) -> StateVector {
    let (sin_u, cos_u) = lon_deg.to_radians().sin_cos();
    let rate = rate_deg_per_day.to_radians();
    let pos = (node * cos_u + in_plane * sin_u) * elements.radius_au;
    let vel = (node * -sin_u + in_plane * cos_u) * (elements.radius_au * rate);
    StateVector::new(pos, vel, *time)
}

/// Positions and velocities of Io, Europa, Ganymede, and Callisto relative
/// to Jupiter, in EQJ.
pub fn jupiter_moons(time: &AstroTime) -> JupiterMoons {
    let d = time.tt + EPOCH_OFFSET_DAYS;

    let l1 = IO.mean_longitude(d);
    let l2 = EUROPA.mean_longitude(d);
    let l3 = GANYMEDE.mean_longitude(d);
    let l4 = CALLISTO.mean_longitude(d);

    // Leading inequalities of the 4:2:1 resonance.
    let arg12 = (2.0 * (l1 - l2)).to_radians();
    let arg23 = (2.0 * (l2 - l3)).to_radians();
    let u1 = l1 + 0.472 * arg12.sin();
    let u2 = l2 + 1.065 * arg23.sin();
    // Degrees/day, chain rule through the radian-valued argument.
    let du1 = IO.rate + 0.472 * arg12.cos() * (2.0 * (IO.rate - EUROPA.rate)).to_radians();
    let du2 =
        EUROPA.rate + 1.065 * arg23.cos() * (2.0 * (EUROPA.rate - GANYMEDE.rate)).to_radians();

    // Jupiter's equatorial basis in EQJ: the pole, its node on the EQJ
    // equator, and the in-plane completion.
    let pole = axis::body_pole_eqj(Body::Jupiter, time);
    let node = Vector3::z().cross(&pole).normalize();
    let in_plane = pole.cross(&node);

    JupiterMoons {
        io: plane_state(&IO, u1, du1, &node, &in_plane, time),
        europa: plane_state(&EUROPA, u2, du2, &node, &in_plane, time),
        ganymede: plane_state(&GANYMEDE, l3, GANYMEDE.rate, &node, &in_plane, time),
        callisto: plane_state(&CALLISTO, l4, CALLISTO.rate, &node, &in_plane, time),
    }
}

#[cfg(test)]
mod ut_galilean {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radii_and_speeds() {
        let time = AstroTime::try_new(2022, 1, 1, 0, 0, 0.0).unwrap();
        let moons = jupiter_moons(&time);
        for (state, radius, period) in [
            (moons.io, 2.819_31e-3, 1.769_137_786),
            (moons.europa, 4.485_58e-3, 3.551_181),
            (moons.ganymede, 7.155_36e-3, 7.154_553),
            (moons.callisto, 1.258_57e-2, 16.689_018),
        ] {
            assert_relative_eq!(state.pos.norm(), radius, max_relative = 1e-9);
            // Circular speed = 2 pi a / P.
            let expected = core::f64::consts::TAU * radius / period;
            assert_relative_eq!(state.vel.norm(), expected, max_relative = 0.02);
            // Velocity is tangential.
            assert!(state.pos.dot(&state.vel).abs() < 1e-12);
        }
    }

    #[test]
    fn orbits_lie_in_jupiters_equator() {
        let time = AstroTime::try_new(1995, 7, 4, 12, 0, 0.0).unwrap();
        let pole = crate::axis::body_pole_eqj(Body::Jupiter, &time);
        let moons = jupiter_moons(&time);
        for state in [moons.io, moons.europa, moons.ganymede, moons.callisto] {
            assert!(state.pos.dot(&pole).abs() < 1e-12 * state.pos.norm().max(1.0));
        }
    }

    #[test]
    fn io_completes_an_orbit() {
        let time = AstroTime::from_ut(100.0);
        let later = time.add_days(1.769_137_786);
        let a = jupiter_moons(&time).io;
        let b = jupiter_moons(&later).io;
        // One sidereal period later Io has nearly returned (the resonance
        // terms shift it slightly).
        let angle = crate::math::angle_between(&a.pos, &b.pos);
        assert!(angle < 1.5, "angle = {angle}");
    }

    #[test]
    fn laplace_relation_holds() {
        // The 4:2:1 resonance keeps l1 - 3 l2 + 2 l3 librating about 180 deg.
        for tt in [-20000.0, -321.0, 0.0, 5000.0, 30000.0] {
            let d = tt + EPOCH_OFFSET_DAYS;
            let phi = crate::math::angles::between_0_360(
                IO.mean_longitude(d) - 3.0 * EUROPA.mean_longitude(d)
                    + 2.0 * GANYMEDE.mean_longitude(d),
            );
            assert!((phi - 180.0).abs() < 1.0, "phi = {phi} at {tt}");
        }
    }
}
