/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Vector3 is nalgebra's Vector3 with a 64-bit floating point representation.
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;

pub mod angles;
pub mod rotation;
pub mod vectors;

pub use vectors::{AstroVector, Spherical, StateVector};

/// Returns the angle between two vectors in degrees, in [0, 180].
///
/// Uses the atan2 form, which stays accurate for nearly parallel and nearly
/// antiparallel inputs where the acos form loses half the significand.
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    let cross = a.cross(b);
    cross.norm().atan2(a.dot(b)).to_degrees()
}

#[cfg(test)]
mod ut_math {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_between_cardinal_axes() {
        assert_relative_eq!(angle_between(&Vector3::x(), &Vector3::y()), 90.0);
        assert_relative_eq!(angle_between(&Vector3::x(), &Vector3::x()), 0.0);
        assert_relative_eq!(angle_between(&Vector3::x(), &-Vector3::x()), 180.0);
    }

    #[test]
    fn angle_between_is_stable_near_parallel() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 1e-9, 0.0);
        let angle = angle_between(&a, &b);
        assert_relative_eq!(angle, 1e-9_f64.to_degrees(), max_relative = 1e-9);
    }
}
