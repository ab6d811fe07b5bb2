/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Terrestrial observers on the oblate reference ellipsoid, and their
//! geocentric position and velocity.

use crate::constants::shapes::{EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING_RATIO};
use crate::constants::{EARTH_ROTATION_RAD_PER_DAY, KM_PER_AU};
use crate::errors::{AstroError, AstroResult, MathError, MathSnafu};
use crate::frames;
use crate::math::rotation::Rotation;
use crate::math::{AstroVector, StateVector, Vector3};
use crate::time::{sidereal_time, AstroTime};

use snafu::ResultExt;

/// A geographic location on the reference ellipsoid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    /// Geodetic latitude, degrees, north positive.
    pub latitude: f64,
    /// Longitude, degrees, east positive.
    pub longitude: f64,
    /// Height above the reference ellipsoid, meters.
    pub height: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }
}

/// Squared first eccentricity of the reference ellipsoid, from the
/// polar-to-equatorial radius ratio.
const ECCENTRICITY_SQ: f64 = 1.0 - EARTH_FLATTENING_RATIO * EARTH_FLATTENING_RATIO;

/// Prime-vertical radius of curvature at the given geodetic latitude, km:
/// the distance along the ellipsoid normal from the surface to the polar
/// axis.
fn prime_vertical_km(sin_lat: f64) -> f64 {
    EARTH_EQUATORIAL_RADIUS_KM / (1.0 - ECCENTRICITY_SQ * sin_lat * sin_lat).sqrt()
}

/// Geodetic to geocentric. The observer sits `height` along the ellipsoid
/// normal above the surface point; the normal meets the equatorial plane a
/// distance `e²·N` short of where it meets the polar axis, which is where
/// the `1 - e²` factor on z comes from. Returns the terrestrial-frame
/// position in km (x toward the Greenwich meridian, z toward the north
/// pole).
pub(crate) fn terrestrial_position_km(observer: &Observer) -> Vector3 {
    let (sin_lat, cos_lat) = observer.latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = observer.longitude.to_radians().sin_cos();
    let height_km = observer.height / 1000.0;
    let normal = prime_vertical_km(sin_lat);
    let ring_radius = (normal + height_km) * cos_lat;
    Vector3::new(
        ring_radius * cos_lon,
        ring_radius * sin_lon,
        (normal * (1.0 - ECCENTRICITY_SQ) + height_km) * sin_lat,
    )
}

/// Geocentric to geodetic, inverting [terrestrial_position_km] by fixed-point
/// iteration on the latitude: each round rebuilds the ellipsoid normal from
/// the previous estimate. The contraction per round is about e², so a dozen
/// rounds land far below a millimeter. Longitude on the polar axis is
/// reported as zero by convention.
pub(crate) fn observer_from_terrestrial(pos_km: &Vector3) -> Observer {
    let axis_dist = pos_km.x.hypot(pos_km.y);
    let z = pos_km.z;
    let longitude = if axis_dist > 0.0 {
        pos_km.y.atan2(pos_km.x).to_degrees()
    } else {
        0.0
    };

    // Seed with the latitude the point would have if it sat on the surface.
    let mut lat = (z / (axis_dist * (1.0 - ECCENTRICITY_SQ))).atan();
    for _ in 0..12 {
        let refined =
            ((z + ECCENTRICITY_SQ * prime_vertical_km(lat.sin()) * lat.sin()) / axis_dist).atan();
        if (refined - lat).abs() < 5.0e-16 {
            lat = refined;
            break;
        }
        lat = refined;
    }

    // Project the height along whichever axis is better conditioned.
    let (sin_lat, cos_lat) = lat.sin_cos();
    let normal = prime_vertical_km(sin_lat);
    let height_km = if cos_lat.abs() > sin_lat.abs() {
        axis_dist / cos_lat - normal
    } else {
        z / sin_lat - normal * (1.0 - ECCENTRICITY_SQ)
    };

    Observer {
        latitude: lat.to_degrees(),
        longitude,
        height: height_km * 1000.0,
    }
}

/// Rotation from the terrestrial frame to the true equator of date, for the
/// apparent sidereal angle at `time`.
fn terrestrial_to_eqd(time: &AstroTime) -> Rotation {
    let gast_rad = sidereal_time(time) * 15.0_f64.to_radians();
    Rotation::r3(-gast_rad)
}

/// Geocentric position of the observer in AU. `of_date` selects the true
/// equator of date; otherwise the result is rotated into EQJ.
pub fn observer_vector(time: &AstroTime, observer: &Observer, of_date: bool) -> AstroVector {
    let pos_eqd = terrestrial_to_eqd(time) * (terrestrial_position_km(observer) / KM_PER_AU);
    let pos = if of_date {
        pos_eqd
    } else {
        frames::rotation_eqd_eqj(time) * pos_eqd
    };
    AstroVector::from_vec3(pos, *time)
}

/// Geocentric position and velocity of the observer in AU and AU/day. The
/// velocity is the instantaneous sidereal-rotation term `ω × r`.
pub fn observer_state(time: &AstroTime, observer: &Observer, of_date: bool) -> StateVector {
    let pos_eqd = terrestrial_to_eqd(time) * (terrestrial_position_km(observer) / KM_PER_AU);
    let vel_eqd = Vector3::new(
        -EARTH_ROTATION_RAD_PER_DAY * pos_eqd.y,
        EARTH_ROTATION_RAD_PER_DAY * pos_eqd.x,
        0.0,
    );
    let state = StateVector::new(pos_eqd, vel_eqd, *time);
    if of_date {
        state
    } else {
        frames::rotation_eqd_eqj(time) * state
    }
}

/// Recovers the geographic location whose geocentric position at the vector's
/// own time equals the given vector. The inverse of [observer_vector].
pub fn vector_observer(vector: &AstroVector, of_date: bool) -> AstroResult<Observer> {
    vector
        .check_finite("recovering an observer from a vector")
        .context(MathSnafu {
            action: "vector_observer",
        })?;
    let vec_eqd = if of_date {
        vector.vec
    } else {
        frames::rotation_eqj_eqd(&vector.t) * vector.vec
    };
    let ter = terrestrial_to_eqd(&vector.t).inverse() * (vec_eqd * KM_PER_AU);
    Ok(observer_from_terrestrial(&ter))
}

/// Acceleration due to gravity at the given geodetic latitude (degrees) and
/// height above the ellipsoid (meters), in m/s². Somigliana's formula with
/// the free-air height fade.
pub fn observer_gravity(latitude: f64, height: f64) -> Result<f64, AstroError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(MathError::InvalidParameter {
            param: "latitude",
            value: latitude,
        })
        .context(MathSnafu {
            action: "observer_gravity",
        });
    }
    let s2 = latitude.to_radians().sin().powi(2);
    let g0 = 9.780_325_335_9 * (1.0 + 0.001_931_852_652_41 * s2)
        / (1.0 - 0.006_694_379_990_13 * s2).sqrt();
    Ok(g0 * (1.0 - (3.157_04e-7 - 2.102_69e-9 * s2) * height + 7.374_52e-14 * height * height))
}

#[cfg(test)]
mod ut_observer {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(25.77, -80.19, 3.0)]
    #[case(-33.87, 151.21, 45.0)]
    #[case(51.4769, 0.0, 10.0)]
    #[case(71.0, -156.0, 2.0)]
    #[case(-0.5, 100.0, 4000.0)]
    #[case(89.99, 10.0, 100.0)]
    #[case(-89.99, -170.0, 0.0)]
    fn geodetic_round_trip(#[case] lat: f64, #[case] lon: f64, #[case] height: f64) {
        let observer = Observer::new(lat, lon, height);
        let back = observer_from_terrestrial(&terrestrial_position_km(&observer));
        // Sub-millimeter in height, better than a microdegree in latitude.
        assert_relative_eq!(back.latitude, lat, epsilon = 1e-6);
        assert_relative_eq!(back.longitude, lon, epsilon = 1e-9);
        assert!((back.height - height).abs() < 1e-3);
    }

    #[test]
    fn equatorial_and_polar_radii() {
        let equator = Observer::new(0.0, 0.0, 0.0);
        let pos = terrestrial_position_km(&equator);
        assert_relative_eq!(pos.norm(), EARTH_EQUATORIAL_RADIUS_KM, epsilon = 1e-9);
        let pole = Observer::new(90.0, 0.0, 0.0);
        let pos = terrestrial_position_km(&pole);
        assert_relative_eq!(
            pos.z,
            EARTH_EQUATORIAL_RADIUS_KM * EARTH_FLATTENING_RATIO,
            epsilon = 1e-9
        );
    }

    #[test]
    fn observer_vector_round_trip() {
        let time = AstroTime::try_new(2022, 11, 21, 2, 30, 0.0).unwrap();
        let observer = Observer::new(25.77, -80.19, 12.0);
        for of_date in [false, true] {
            let vec = observer_vector(&time, &observer, of_date);
            let back = vector_observer(&vec, of_date).unwrap();
            assert_relative_eq!(back.latitude, observer.latitude, epsilon = 1e-7);
            assert_relative_eq!(back.longitude, observer.longitude, epsilon = 1e-7);
            assert!((back.height - observer.height).abs() < 0.01);
        }
    }

    #[test]
    fn rotation_velocity_points_east() {
        let time = AstroTime::from_ut(1234.5);
        let observer = Observer::new(0.0, 0.0, 0.0);
        let state = observer_state(&time, &observer, true);
        // Speed at the equator is about 0.46 km/s.
        let speed_km_s = state.vel.norm() * KM_PER_AU / 86_400.0;
        assert!((speed_km_s - 0.465).abs() < 0.01, "speed = {speed_km_s}");
        // ω × r is orthogonal to r and to the pole.
        assert!(state.vel.dot(&state.pos).abs() < 1e-18);
        assert!(state.vel.z == 0.0);
    }

    #[test]
    fn gravity_increases_toward_the_poles() {
        let equator = observer_gravity(0.0, 0.0).unwrap();
        let pole = observer_gravity(90.0, 0.0).unwrap();
        assert_relative_eq!(equator, 9.780_325, epsilon = 1e-5);
        assert_relative_eq!(pole, 9.832_185, epsilon = 1e-5);
        assert!(observer_gravity(45.0, 3000.0).unwrap() < observer_gravity(45.0, 0.0).unwrap());
        assert!(observer_gravity(91.0, 0.0).is_err());
    }
}
