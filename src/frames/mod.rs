/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reference frames and the rotations among them.
//!
//! Six frames are supported:
//! - `Eqj` — mean equator and equinox of J2000;
//! - `Eqd` — true equator and equinox of date (precession + nutation);
//! - `Ecl` — mean ecliptic of J2000;
//! - `Ect` — true ecliptic of date;
//! - `Hor` — topocentric horizontal (+z zenith, azimuth clockwise from north);
//! - `Gal` — IAU-1958 galactic.
//!
//! Every ordered pair has a builder: [frame_rotation] composes the pair from
//! the per-frame primitives through the EQJ hub, so all paths producing the
//! same matrix agree to machine precision.

use core::fmt;

use crate::constants::OBLIQUITY_J2000_DEG;
use crate::errors::{AstroResult, MathError, MathSnafu};
use crate::math::rotation::Rotation;
use crate::math::Matrix3;
use crate::observer::Observer;
use crate::orientations::precession;
use crate::time::{sidereal_time, AstroTime};

use snafu::ResultExt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    Eqj,
    Eqd,
    Ecl,
    Ect,
    Hor,
    Gal,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frame::Eqj => "EQJ",
            Frame::Eqd => "EQD",
            Frame::Ecl => "ECL",
            Frame::Ect => "ECT",
            Frame::Hor => "HOR",
            Frame::Gal => "GAL",
        };
        write!(f, "{name}")
    }
}

/// EQJ → GAL. The IAU-1958 galactic axes expressed in J2000 equatorial
/// coordinates; rows are the galactic x, y, z unit vectors. The published
/// constants are orthogonal only to ~6e-12, so they are snapped to the
/// nearest exactly-orthonormal triad to keep the matrix invariants tight.
#[rustfmt::skip]
const EQJ_GAL: [f64; 9] = [
    -0.054_875_539_395_848, -0.873_437_104_725_577, -0.483_834_991_773_658,
     0.494_109_453_629_202, -0.444_829_594_300_396,  0.746_982_248_697_247,
    -0.867_666_135_682_537, -0.198_076_389_615_587,  0.455_983_794_521_898,
];

/// Nutation rotation: mean equator of date → true equator of date.
fn nutation_rot(time: &AstroTime) -> Rotation {
    let eps_mean = time.mean_obliquity().to_radians();
    let eps_true = time.true_obliquity().to_radians();
    let dpsi = time.nutation_dpsi().to_radians();
    Rotation::r1(-eps_true) * Rotation::r3(-dpsi) * Rotation::r1(eps_mean)
}

/// EQJ → EQD: precession then nutation.
pub fn rotation_eqj_eqd(time: &AstroTime) -> Rotation {
    Rotation::combine(nutation_rot(time), precession::precession_rot(time.tt))
}

/// EQD → EQJ.
pub fn rotation_eqd_eqj(time: &AstroTime) -> Rotation {
    rotation_eqj_eqd(time).inverse()
}

/// EQJ → ECL: tilt by the J2000 mean obliquity.
pub fn rotation_eqj_ecl() -> Rotation {
    Rotation::r1(OBLIQUITY_J2000_DEG.to_radians())
}

/// ECL → EQJ.
pub fn rotation_ecl_eqj() -> Rotation {
    rotation_eqj_ecl().inverse()
}

/// EQD → ECT: tilt by the true obliquity of date.
pub fn rotation_eqd_ect(time: &AstroTime) -> Rotation {
    Rotation::r1(time.true_obliquity().to_radians())
}

/// ECT → EQD.
pub fn rotation_ect_eqd(time: &AstroTime) -> Rotation {
    rotation_eqd_ect(time).inverse()
}

/// EQJ → ECT.
pub fn rotation_eqj_ect(time: &AstroTime) -> Rotation {
    Rotation::combine(rotation_eqd_ect(time), rotation_eqj_eqd(time))
}

/// ECT → EQJ.
pub fn rotation_ect_eqj(time: &AstroTime) -> Rotation {
    rotation_eqj_ect(time).inverse()
}

/// EQJ → GAL.
pub fn rotation_eqj_gal() -> Rotation {
    Rotation::from_matrix(Matrix3::from_row_slice(&EQJ_GAL))
}

/// GAL → EQJ.
pub fn rotation_gal_eqj() -> Rotation {
    rotation_eqj_gal().inverse()
}

/// EQD → HOR for the given observer. Horizontal components are (north, west,
/// zenith); azimuth is measured clockwise from north, so east = 90°.
pub fn rotation_eqd_hor(time: &AstroTime, observer: &Observer) -> Rotation {
    let (sin_lat, cos_lat) = observer.latitude.to_radians().sin_cos();
    // Local apparent sidereal angle: Greenwich plus east longitude.
    let lst_rad = (sidereal_time(time) * 15.0 + observer.longitude).to_radians();
    let tilt = Rotation::from_matrix(Matrix3::new(
        -sin_lat, 0.0, cos_lat, // north
        0.0, -1.0, 0.0, // west
        cos_lat, 0.0, sin_lat, // zenith
    ));
    Rotation::combine(tilt, Rotation::r3(lst_rad))
}

/// HOR → EQD.
pub fn rotation_hor_eqd(time: &AstroTime, observer: &Observer) -> Rotation {
    rotation_eqd_hor(time, observer).inverse()
}

/// Builds the rotation for any ordered frame pair. `Hor` endpoints require an
/// observer; the builder fails with an invalid-parameter error otherwise.
pub fn frame_rotation(
    from: Frame,
    to: Frame,
    time: &AstroTime,
    observer: Option<&Observer>,
) -> AstroResult<Rotation> {
    if from == to {
        return Ok(Rotation::identity());
    }
    let to_eqj = |frame: Frame| -> AstroResult<Rotation> {
        Ok(match frame {
            Frame::Eqj => Rotation::identity(),
            Frame::Eqd => rotation_eqd_eqj(time),
            Frame::Ecl => rotation_ecl_eqj(),
            Frame::Ect => rotation_ect_eqj(time),
            Frame::Gal => rotation_gal_eqj(),
            Frame::Hor => {
                let observer = observer.ok_or(MathError::InvalidParameter {
                    param: "observer",
                    value: f64::NAN,
                })
                .context(MathSnafu {
                    action: "building a horizontal frame rotation",
                })?;
                Rotation::combine(rotation_eqd_eqj(time), rotation_hor_eqd(time, observer))
            }
        })
    };
    let from_eqj = |frame: Frame| -> AstroResult<Rotation> {
        Ok(to_eqj(frame)?.inverse())
    };
    Ok(Rotation::combine(from_eqj(to)?, to_eqj(from)?))
}

#[cfg(test)]
mod ut_frames {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const FRAMES: [Frame; 6] = [
        Frame::Eqj,
        Frame::Eqd,
        Frame::Ecl,
        Frame::Ect,
        Frame::Hor,
        Frame::Gal,
    ];

    fn miami() -> Observer {
        Observer::new(25.77, -80.19, 3.0)
    }

    #[test]
    fn all_pairs_are_orthogonal_over_five_centuries() {
        for year in [1700, 1820, 1950, 2025, 2200] {
            let time = AstroTime::try_new(year, 6, 15, 3, 30, 0.0).unwrap();
            for from in FRAMES {
                for to in FRAMES {
                    let rot = frame_rotation(from, to, &time, Some(&miami())).unwrap();
                    let eye = rot.mat * rot.mat.transpose();
                    for i in 0..3 {
                        for j in 0..3 {
                            let expect = if i == j { 1.0 } else { 0.0 };
                            assert!(
                                (eye[(i, j)] - expect).abs() < 2.0e-15,
                                "{from}->{to} year {year}"
                            );
                        }
                        let row_norm: f64 = (0..3).map(|j| rot.mat[(i, j)].powi(2)).sum();
                        assert!((row_norm.sqrt() - 1.0).abs() < 1.8e-15);
                    }
                    assert_relative_eq!(rot.mat.determinant(), 1.0, epsilon = 4.0e-15);
                }
            }
        }
    }

    #[test]
    fn round_trips_recover_identity() {
        let time = AstroTime::try_new(2022, 11, 21, 8, 0, 0.0).unwrap();
        for from in FRAMES {
            for to in FRAMES {
                let fwd = frame_rotation(from, to, &time, Some(&miami())).unwrap();
                let back = frame_rotation(to, from, &time, Some(&miami())).unwrap();
                let eye = Rotation::combine(back, fwd).mat;
                assert_relative_eq!(eye, Matrix3::identity(), epsilon = 4.0e-15);
            }
        }
    }

    #[rstest]
    #[case(Frame::Eqj, Frame::Ecl)]
    #[case(Frame::Eqj, Frame::Eqd)]
    #[case(Frame::Eqd, Frame::Ect)]
    #[case(Frame::Eqj, Frame::Gal)]
    fn dispatcher_agrees_with_direct_builders(#[case] from: Frame, #[case] to: Frame) {
        let time = AstroTime::try_new(2030, 2, 2, 12, 0, 0.0).unwrap();
        let direct = match (from, to) {
            (Frame::Eqj, Frame::Ecl) => rotation_eqj_ecl(),
            (Frame::Eqj, Frame::Eqd) => rotation_eqj_eqd(&time),
            (Frame::Eqd, Frame::Ect) => rotation_eqd_ect(&time),
            (Frame::Eqj, Frame::Gal) => rotation_eqj_gal(),
            _ => unreachable!(),
        };
        let dispatched = frame_rotation(from, to, &time, None).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((direct.mat[(i, j)] - dispatched.mat[(i, j)]).abs() <= 2.0e-15);
            }
        }
    }

    #[test]
    fn horizontal_requires_an_observer() {
        let time = AstroTime::from_ut(0.0);
        assert!(frame_rotation(Frame::Eqj, Frame::Hor, &time, None).is_err());
        assert!(frame_rotation(Frame::Hor, Frame::Ecl, &time, None).is_err());
        assert!(frame_rotation(Frame::Eqj, Frame::Ecl, &time, None).is_ok());
    }

    #[test]
    fn zenith_points_away_from_earth_center() {
        // The observer's own geocentric direction, rotated into HOR, must be
        // almost straight up (geodetic vs geocentric latitude differ by a few
        // arcminutes at mid latitudes).
        let time = AstroTime::try_new(2024, 3, 1, 4, 0, 0.0).unwrap();
        let observer = miami();
        let up = crate::observer::observer_vector(&time, &observer, true);
        let hor = rotation_eqd_hor(&time, &observer) * up.vec.normalize();
        assert!(hor.z > 0.999, "zenith component = {}", hor.z);
    }

    #[test]
    fn galactic_center_direction() {
        // The galactic center (l=0, b=0) sits near RA 17h45.6m, Dec -28.94°.
        let gal_x = rotation_gal_eqj() * Vector3::x();
        let ra_h = crate::math::angles::between_0_24(
            gal_x.y.atan2(gal_x.x).to_degrees() / 15.0,
        );
        let dec = gal_x.z.asin().to_degrees();
        assert!((ra_h - 17.76).abs() < 0.01, "ra = {ra_h}");
        assert!((dec - (-28.94)).abs() < 0.05, "dec = {dec}");
    }
}
