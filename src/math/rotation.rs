/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::ops::Mul;

use super::{AstroVector, Matrix3, StateVector, Vector3};

/// A rotation between two reference frames, acting on column vectors:
/// `out = rot * in`.
///
/// Every matrix produced by this crate is orthogonal with determinant +1, so
/// the inverse is the transpose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    pub mat: Matrix3,
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            mat: Matrix3::identity(),
        }
    }

    pub fn from_matrix(mat: Matrix3) -> Self {
        Self { mat }
    }

    /// Returns a rotation about the X axis.
    pub fn r1(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            mat: Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c),
        }
    }

    /// Returns a rotation about the Y axis.
    pub fn r2(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            mat: Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c),
        }
    }

    /// Returns a rotation about the Z axis.
    pub fn r3(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            mat: Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Re-orients this rotation by rotating `angle_deg` about one of its
    /// coordinate axes (0 = x, 1 = y, 2 = z). Returns `None` for any other
    /// axis index.
    ///
    /// Lets callers build matrices compositionally from the identity.
    pub fn pivot(&self, axis: usize, angle_deg: f64) -> Option<Self> {
        let axial = match axis {
            0 => Self::r1(angle_deg.to_radians()),
            1 => Self::r2(angle_deg.to_radians()),
            2 => Self::r3(angle_deg.to_radians()),
            _ => return None,
        };
        Some(Self::combine(axial, *self))
    }

    /// Composition: `combine(b, a)` applies `a` first, then `b`.
    pub fn combine(b: Rotation, a: Rotation) -> Self {
        Self { mat: b.mat * a.mat }
    }

    /// The inverse rotation. The matrix is orthogonal by construction, so
    /// this is the transpose.
    pub fn inverse(&self) -> Self {
        Self {
            mat: self.mat.transpose(),
        }
    }
}

impl Mul<Vector3> for Rotation {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.mat * rhs
    }
}

impl Mul<AstroVector> for Rotation {
    type Output = AstroVector;

    fn mul(self, rhs: AstroVector) -> AstroVector {
        AstroVector {
            vec: self.mat * rhs.vec,
            t: rhs.t,
        }
    }
}

impl Mul<StateVector> for Rotation {
    type Output = StateVector;

    /// Rotates position and velocity together. Valid when the rotation does
    /// not itself vary over time (the transport term is the caller's
    /// responsibility, as in the observer-state path).
    fn mul(self, rhs: StateVector) -> StateVector {
        StateVector {
            pos: self.mat * rhs.pos,
            vel: self.mat * rhs.vel,
            t: rhs.t,
        }
    }
}

impl Mul for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Rotation {
        Rotation::combine(self, rhs)
    }
}

#[cfg(test)]
mod ut_rotation {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn r1_quarter_turn() {
        let r1 = Rotation::r1(FRAC_PI_2);
        assert_eq!(r1 * Vector3::x(), Vector3::x());
        assert!((r1 * Vector3::z() - Vector3::y()).norm() < f64::EPSILON);
        assert!((r1 * Vector3::y() + Vector3::z()).norm() < f64::EPSILON);
    }

    #[test]
    fn r3_quarter_turn() {
        let r3 = Rotation::r3(FRAC_PI_2);
        assert_eq!(r3 * Vector3::z(), Vector3::z());
        assert!((r3 * Vector3::x() + Vector3::y()).norm() < f64::EPSILON);
        assert!((r3 * Vector3::y() - Vector3::x()).norm() < f64::EPSILON);
    }

    #[test]
    fn combine_applies_right_operand_first() {
        // Quarter turn about z, then quarter turn about x: +x -> -y -> +z.
        let c = Rotation::combine(Rotation::r1(FRAC_PI_2), Rotation::r3(FRAC_PI_2));
        assert!((c * Vector3::x() - Vector3::z()).norm() < 4.0 * f64::EPSILON);
    }

    #[test]
    fn pivot_matches_axial_rotation() {
        let from_pivot = Rotation::identity().pivot(2, 90.0).unwrap();
        let direct = Rotation::r3(FRAC_PI_2);
        assert_relative_eq!(from_pivot.mat, direct.mat, epsilon = f64::EPSILON);
        assert!(Rotation::identity().pivot(3, 10.0).is_none());
    }

    #[test]
    fn inverse_is_transpose_round_trip() {
        let rot = Rotation::r1(0.3) * Rotation::r2(-1.1) * Rotation::r3(2.7);
        let eye = Rotation::combine(rot, rot.inverse());
        assert_relative_eq!(eye.mat, Matrix3::identity(), epsilon = 2.0e-15);
        assert_relative_eq!(rot.mat.determinant(), 1.0, epsilon = 2.0e-15);
    }
}
