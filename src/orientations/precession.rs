/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! IAU 2006 equatorial precession in the equinox-based (ζ, z, θ) form.

use crate::constants::ARCSEC2DEG;
use crate::math::rotation::Rotation;

/// The three precession angles at the given TT, in degrees.
pub fn angles(tt_days: f64) -> (f64, f64, f64) {
    let t = tt_days / 36_525.0;
    let zeta = 2.650545
        + t * (2306.083227
            + t * (0.2988499 + t * (0.01801828 + t * (-0.000005971 + t * -0.0000003173))));
    let z = -2.650545
        + t * (2306.077181
            + t * (1.0927348 + t * (0.01826837 + t * (-0.000028596 + t * -0.0000002904))));
    let theta = t
        * (2004.191903 + t * (-0.4294934 + t * (-0.04182264 + t * (-0.000007089 + t * -0.0000001274))));
    (zeta * ARCSEC2DEG, z * ARCSEC2DEG, theta * ARCSEC2DEG)
}

/// Rotation taking mean-equator-of-J2000 coordinates to mean-equator-of-date:
/// `R3(-z) · R2(θ) · R3(-ζ)`. The inverse direction is the transpose.
pub fn precession_rot(tt_days: f64) -> Rotation {
    let (zeta, z, theta) = angles(tt_days);
    Rotation::r3(-z.to_radians())
        * Rotation::r2(theta.to_radians())
        * Rotation::r3(-zeta.to_radians())
}

#[cfg(test)]
mod ut_precession {
    use super::*;
    use crate::math::{Matrix3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn identity_at_j2000() {
        let rot = precession_rot(0.0);
        // The frame-bias-free angles pass through zero at the epoch, up to
        // the constant ζ₀/z₀ pair that cancels in the matrix.
        assert_relative_eq!(rot.mat, Matrix3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn equinox_drift_over_fifty_years() {
        // The J2000 equinox direction, seen in mean-of-date coordinates of
        // 2050, has drifted to RA +0.6407 deg, Dec +0.2783 deg.
        let rot = precession_rot(50.0 * 365.25);
        let w = rot * Vector3::x();
        let ra = w.y.atan2(w.x).to_degrees();
        let dec = w.z.asin().to_degrees();
        assert_relative_eq!(ra, 0.640_679_5, epsilon = 1e-6);
        assert_relative_eq!(dec, 0.278_324_3, epsilon = 1e-6);
    }

    #[test]
    fn matrices_stay_orthogonal_over_five_centuries() {
        let mut tt = -250.0 * 365.25;
        while tt < 250.0 * 365.25 {
            let rot = precession_rot(tt);
            let eye = rot.mat * rot.mat.transpose();
            assert_relative_eq!(eye, Matrix3::identity(), epsilon = 2e-15);
            tt += 3650.25;
        }
    }
}
