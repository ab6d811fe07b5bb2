/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::ops::{Add, Neg, Sub};

use super::Vector3;
use crate::errors::MathError;
use crate::time::AstroTime;

/// A position in AU, tagged with the instant it refers to.
///
/// The reference frame is a caller contract and is not carried in the type:
/// every producing function documents the frame of its result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AstroVector {
    pub vec: Vector3,
    pub t: AstroTime,
}

impl AstroVector {
    pub fn new(x: f64, y: f64, z: f64, t: AstroTime) -> Self {
        Self {
            vec: Vector3::new(x, y, z),
            t,
        }
    }

    pub fn from_vec3(vec: Vector3, t: AstroTime) -> Self {
        Self { vec, t }
    }

    /// Length of the vector in AU.
    pub fn length(&self) -> f64 {
        self.vec.norm()
    }

    pub fn x(&self) -> f64 {
        self.vec.x
    }

    pub fn y(&self) -> f64 {
        self.vec.y
    }

    pub fn z(&self) -> f64 {
        self.vec.z
    }

    pub(crate) fn check_finite(&self, action: &'static str) -> Result<(), MathError> {
        if self.vec.iter().all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(MathError::BadVector { action })
        }
    }
}

impl Add for AstroVector {
    type Output = AstroVector;

    fn add(self, rhs: AstroVector) -> AstroVector {
        AstroVector {
            vec: self.vec + rhs.vec,
            t: self.t,
        }
    }
}

impl Sub for AstroVector {
    type Output = AstroVector;

    fn sub(self, rhs: AstroVector) -> AstroVector {
        AstroVector {
            vec: self.vec - rhs.vec,
            t: self.t,
        }
    }
}

impl Neg for AstroVector {
    type Output = AstroVector;

    fn neg(self) -> AstroVector {
        AstroVector {
            vec: -self.vec,
            t: self.t,
        }
    }
}

/// Position and velocity, in AU and AU/day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StateVector {
    pub pos: Vector3,
    pub vel: Vector3,
    pub t: AstroTime,
}

impl StateVector {
    pub fn new(pos: Vector3, vel: Vector3, t: AstroTime) -> Self {
        Self { pos, vel, t }
    }

    pub fn position(&self) -> AstroVector {
        AstroVector {
            vec: self.pos,
            t: self.t,
        }
    }

    pub(crate) fn check_finite(&self, action: &'static str) -> Result<(), MathError> {
        if self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(MathError::BadVector { action })
        }
    }
}

impl Sub for StateVector {
    type Output = StateVector;

    fn sub(self, rhs: StateVector) -> StateVector {
        StateVector {
            pos: self.pos - rhs.pos,
            vel: self.vel - rhs.vel,
            t: self.t,
        }
    }
}

/// Spherical coordinates: latitude and longitude in degrees, distance in AU.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spherical {
    pub lat: f64,
    pub lon: f64,
    pub dist: f64,
}

impl Spherical {
    pub fn new(lat: f64, lon: f64, dist: f64) -> Self {
        Self { lat, lon, dist }
    }

    /// Converts Cartesian coordinates to spherical. At either pole the
    /// longitude is reported as zero by convention.
    pub fn from_vector(vector: &AstroVector) -> Self {
        let (x, y, z) = (vector.vec.x, vector.vec.y, vector.vec.z);
        let xy_proj = x * x + y * y;
        let dist = (xy_proj + z * z).sqrt();
        let (lat, lon) = if xy_proj == 0.0 {
            if z == 0.0 {
                // Zero vector: all angles are meaningless, report zeros.
                (0.0, 0.0)
            } else if z < 0.0 {
                (-90.0, 0.0)
            } else {
                (90.0, 0.0)
            }
        } else {
            let lon = super::angles::between_0_360(y.atan2(x).to_degrees());
            (z.atan2(xy_proj.sqrt()).to_degrees(), lon)
        };
        Self { lat, lon, dist }
    }

    /// Converts spherical coordinates to a Cartesian vector at the given
    /// instant.
    pub fn to_vector(&self, t: AstroTime) -> AstroVector {
        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();
        let rcos = self.dist * cos_lat;
        AstroVector::new(rcos * cos_lon, rcos * sin_lon, self.dist * sin_lat, t)
    }
}

#[cfg(test)]
mod ut_vectors {
    use super::*;
    use crate::time::AstroTime;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(35.0, 110.0)]
    #[case(-60.0, 2.5)]
    #[case(0.0, 359.9)]
    #[case(89.0, 180.0)]
    #[case(-89.0, 0.1)]
    fn sphere_round_trip(#[case] lat: f64, #[case] lon: f64) {
        let t = AstroTime::from_ut(0.0);
        let sphere = Spherical::new(lat, lon, 1.0);
        let back = Spherical::from_vector(&sphere.to_vector(t));
        assert_relative_eq!(back.lat, lat, epsilon = 8.0e-15);
        assert_relative_eq!(back.lon, lon, epsilon = 8.0e-15);
        assert_relative_eq!(back.dist, 1.0, epsilon = 8.0e-15);
    }

    #[test]
    fn poles_have_zero_longitude() {
        let t = AstroTime::from_ut(0.0);
        let sphere = Spherical::from_vector(&AstroVector::new(0.0, 0.0, 2.0, t));
        assert_relative_eq!(sphere.lat, 90.0);
        assert_relative_eq!(sphere.lon, 0.0);
        let sphere = Spherical::from_vector(&AstroVector::new(0.0, 0.0, -2.0, t));
        assert_relative_eq!(sphere.lat, -90.0);
        assert_relative_eq!(sphere.lon, 0.0);
    }

    #[test]
    fn non_finite_vectors_are_detected() {
        let t = AstroTime::from_ut(0.0);
        let bad = AstroVector::new(f64::NAN, 0.0, 0.0, t);
        assert!(bad.check_finite("testing").is_err());
        let good = AstroVector::new(1.0, 2.0, 3.0, t);
        assert!(good.check_finite("testing").is_ok());
    }
}
