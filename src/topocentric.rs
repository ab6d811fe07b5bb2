/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Topocentric coordinates: where a body appears from a specific place on
//! Earth, with optional atmospheric refraction.

use crate::bodies::Body;
use crate::ephemerides::{geo_vector, Aberration};
use crate::errors::{AstroResult, MathError, MathSnafu};
use crate::frames;
use crate::math::angles::{between_0_24, between_0_360};
use crate::math::{AstroVector, Vector3};
use crate::observer::{observer_vector, Observer};
use crate::time::AstroTime;

use snafu::ResultExt;

/// Output frame selector for equatorial coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EquatorDate {
    /// Mean equator and equinox of J2000.
    J2000,
    /// True equator and equinox of the observation time.
    OfDate,
}

/// Atmospheric refraction model for horizontal coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Refraction {
    None,
    /// Bennett's formula with a taper below -1 degree; the standard choice.
    Normal,
    /// Bennett's formula without the low-altitude taper, scaled by the
    /// standard-atmosphere air density at the observer's elevation.
    JplHor,
}

/// Topocentric equatorial coordinates of a body.
#[derive(Copy, Clone, Debug)]
pub struct Equatorial {
    /// Right ascension, sidereal hours in [0, 24).
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Distance to the body, AU.
    pub dist: f64,
    /// The same position as a vector, in the requested equatorial frame.
    pub vec: AstroVector,
}

/// Horizontal coordinates plus the (optionally refracted) equatorial ones.
#[derive(Copy, Clone, Debug)]
pub struct Topocentric {
    /// Azimuth, degrees clockwise from true north in [0, 360).
    pub azimuth: f64,
    /// Altitude above the horizon, degrees.
    pub altitude: f64,
    /// Right ascension of date, hours; refraction-adjusted when requested.
    pub ra: f64,
    /// Declination of date, degrees; refraction-adjusted when requested.
    pub dec: f64,
}

fn equ_angles(vec: &Vector3) -> (f64, f64) {
    let ra = between_0_24(vec.y.atan2(vec.x).to_degrees() / 15.0);
    let dec = (vec.z / vec.norm()).asin().to_degrees();
    (ra, dec)
}

/// Topocentric equatorial coordinates of `body` for the given observer.
///
/// The geocentric vector is corrected for light time (and aberration, when
/// requested), then offset by the observer's geocentric position, which is
/// what produces the horizontal parallax of near bodies.
pub fn equator(
    body: Body,
    time: &AstroTime,
    observer: &Observer,
    equdate: EquatorDate,
    aberration: Aberration,
) -> AstroResult<Equatorial> {
    let geo = geo_vector(body, time, aberration)?;
    let obs = observer_vector(time, observer, false);
    let topo_eqj = geo.vec - obs.vec;
    let vec = match equdate {
        EquatorDate::J2000 => topo_eqj,
        EquatorDate::OfDate => frames::rotation_eqj_eqd(time) * topo_eqj,
    };
    let (ra, dec) = equ_angles(&vec);
    Ok(Equatorial {
        ra,
        dec,
        dist: vec.norm(),
        vec: AstroVector::from_vec3(vec, *time),
    })
}

/// Converts apparent of-date equatorial coordinates (`ra` hours, `dec`
/// degrees) to horizontal coordinates for the observer, applying the chosen
/// refraction model.
pub fn horizon(
    time: &AstroTime,
    observer: &Observer,
    ra: f64,
    dec: f64,
    refraction: Refraction,
) -> AstroResult<Topocentric> {
    if !ra.is_finite() || !dec.is_finite() {
        return Err(MathError::BadVector {
            action: "converting equatorial to horizontal coordinates",
        })
        .context(MathSnafu { action: "horizon" });
    }
    let ra_rad = ra * 15.0_f64.to_radians();
    let dec_rad = dec.to_radians();
    let eqd = Vector3::new(
        dec_rad.cos() * ra_rad.cos(),
        dec_rad.cos() * ra_rad.sin(),
        dec_rad.sin(),
    );
    // Horizontal components are (north, west, zenith).
    let hor = frames::rotation_eqd_hor(time, observer) * eqd;
    let azimuth = between_0_360((-hor.y).atan2(hor.x).to_degrees());
    let altitude = hor.z.asin().to_degrees();

    // The JplHor variant bends in proportion to the air actually above the
    // observer; the other models are sea-level by definition.
    let density = match refraction {
        Refraction::JplHor => {
            atmosphere(observer.height.clamp(-500.0, 100_000.0))?.density
        }
        _ => 1.0,
    };
    let refr = density * refraction_angle(refraction, altitude);
    let (out_ra, out_dec) = if refr != 0.0 {
        // Lift the line of sight by the refraction angle, keeping azimuth,
        // and carry the bent direction back to the equator of date.
        let bent_alt = (altitude + refr).to_radians();
        let az_rad = azimuth.to_radians();
        let bent_hor = Vector3::new(
            bent_alt.cos() * az_rad.cos(),
            -bent_alt.cos() * az_rad.sin(),
            bent_alt.sin(),
        );
        let bent_eqd = frames::rotation_hor_eqd(time, observer) * bent_hor;
        equ_angles(&bent_eqd)
    } else {
        (ra, dec)
    };

    Ok(Topocentric {
        azimuth,
        altitude: altitude + refr,
        ra: out_ra,
        dec: out_dec,
    })
}

/// Refraction angle in degrees for an observed altitude in degrees, at sea
/// level. Zero for out-of-range altitudes and for [Refraction::None].
/// [horizon] layers the observer's air density on top of this for the
/// [Refraction::JplHor] variant.
pub fn refraction_angle(refraction: Refraction, altitude: f64) -> f64 {
    if !(-90.0..=90.0).contains(&altitude) {
        return 0.0;
    }
    match refraction {
        Refraction::None => 0.0,
        Refraction::Normal | Refraction::JplHor => {
            let hd = altitude.max(-1.0);
            let mut refr = 1.02 / ((hd + 10.3 / (hd + 5.11)).to_radians().tan()) / 60.0;
            if refraction == Refraction::Normal && altitude < -1.0 {
                // Fade out below the formula's validity so the correction
                // goes to zero at the nadir instead of blowing up.
                refr *= (altitude + 90.0) / 89.0;
            }
            refr
        }
    }
}

/// Inverse correction: given an already-refracted sea-level altitude,
/// returns the (non-positive) angle to add to recover the airless altitude.
pub fn inverse_refraction_angle(refraction: Refraction, bent_altitude: f64) -> f64 {
    if !(-90.0..=90.0).contains(&bent_altitude) {
        return 0.0;
    }
    // Fixed-point iteration on the forward model; converges in a few rounds.
    // The cap guards the ulp-oscillation regime near the poles.
    let mut altitude = bent_altitude - refraction_angle(refraction, bent_altitude);
    for _ in 0..50 {
        let diff = (altitude + refraction_angle(refraction, altitude)) - bent_altitude;
        if diff.abs() < 1.0e-14 {
            break;
        }
        altitude -= diff;
    }
    altitude - bent_altitude
}

/// Atmospheric conditions at an elevation above sea level, from the standard
/// atmosphere layer model.
#[derive(Copy, Clone, Debug)]
pub struct AtmosphereInfo {
    /// Pressure, pascals.
    pub pressure: f64,
    /// Temperature, kelvins.
    pub temperature: f64,
    /// Density relative to sea level.
    pub density: f64,
}

/// Temperature/pressure layers: base geopotential height (m), base
/// temperature (K), lapse rate (K/m).
const ATMOSPHERE_LAYERS: [(f64, f64, f64); 7] = [
    (0.0, 288.15, -0.0065),
    (11_000.0, 216.65, 0.0),
    (20_000.0, 216.65, 0.001),
    (32_000.0, 228.65, 0.0028),
    (47_000.0, 270.65, 0.0),
    (51_000.0, 270.65, -0.0028),
    (71_000.0, 214.65, -0.002),
];

/// `g0 * M / R*` for dry air, kelvins per meter.
const GMR: f64 = 0.034_163_195;

/// Standard-atmosphere conditions at `elevation` meters above sea level.
/// Valid from -500 m to 100 km.
pub fn atmosphere(elevation: f64) -> AstroResult<AtmosphereInfo> {
    if !elevation.is_finite() || !(-500.0..=100_000.0).contains(&elevation) {
        return Err(MathError::InvalidParameter {
            param: "elevation",
            value: elevation,
        })
        .context(MathSnafu { action: "atmosphere" });
    }
    // Walk down to the layer containing the elevation, accumulating the
    // pressure at each layer base on the way.
    let mut pressure = 101_325.0;
    let mut layer_idx = 0;
    for idx in 1..ATMOSPHERE_LAYERS.len() {
        if elevation < ATMOSPHERE_LAYERS[idx].0 {
            break;
        }
        let (prev_base, prev_temp, prev_lapse) = ATMOSPHERE_LAYERS[idx - 1];
        pressure *= layer_pressure_ratio(ATMOSPHERE_LAYERS[idx].0 - prev_base, prev_temp, prev_lapse);
        layer_idx = idx;
    }
    let (base, base_temp, lapse) = ATMOSPHERE_LAYERS[layer_idx];
    let height = elevation - base;
    let temperature = base_temp + lapse * height;
    pressure *= layer_pressure_ratio(height, base_temp, lapse);
    let density = (pressure / temperature) / (101_325.0 / 288.15);
    Ok(AtmosphereInfo {
        pressure,
        temperature,
        density,
    })
}

fn layer_pressure_ratio(height: f64, base_temp: f64, lapse: f64) -> f64 {
    if lapse == 0.0 {
        (-GMR * height / base_temp).exp()
    } else {
        (base_temp / (base_temp + lapse * height)).powf(GMR / lapse)
    }
}

#[cfg(test)]
mod ut_topocentric {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn greenwich() -> Observer {
        Observer::new(51.4769, 0.0, 46.0)
    }

    #[rstest]
    #[case(Refraction::Normal)]
    #[case(Refraction::JplHor)]
    fn refraction_round_trip(#[case] refraction: Refraction) {
        let mut altitude = -90.1;
        while altitude <= 90.1 {
            let refr = refraction_angle(refraction, altitude);
            let inverse = inverse_refraction_angle(refraction, altitude + refr);
            assert!(
                (refr + inverse).abs() < 2.0e-14,
                "alt {altitude}: refr {refr}, inverse {inverse}"
            );
            altitude += 0.3;
        }
    }

    #[test]
    fn horizon_refraction_magnitude() {
        // Standard refraction at the horizon is close to 34 arcminutes.
        let refr = refraction_angle(Refraction::Normal, 0.0) * 60.0;
        assert!((refr - 34.5).abs() < 1.0, "refr = {refr} arcmin");
        // And about one arcminute at 45 degrees.
        let refr = refraction_angle(Refraction::Normal, 45.0) * 60.0;
        assert!((refr - 1.0).abs() < 0.1, "refr = {refr} arcmin");
        assert_eq!(refraction_angle(Refraction::None, 0.0), 0.0);
    }

    #[test]
    fn jplhor_refraction_thins_with_altitude() {
        // A direction exactly on the geometric horizon (hour angle 6h,
        // declination 0) seen from sea level and from a 4000 m peak at the
        // same coordinates: only the air density differs between the two.
        let time = AstroTime::try_new(2023, 8, 1, 4, 0, 0.0).unwrap();
        let sea = Observer::new(28.3, -16.5, 0.0);
        let peak = Observer::new(28.3, -16.5, 4000.0);
        let lst = crate::time::sidereal_time(&time) + sea.longitude / 15.0;
        let ra = between_0_24(lst - 6.0);
        let at_sea = horizon(&time, &sea, ra, 0.0, Refraction::JplHor).unwrap();
        let at_peak = horizon(&time, &peak, ra, 0.0, Refraction::JplHor).unwrap();
        // Density at 4000 m is about 0.67, so roughly a third of the 34
        // arcminute horizon lift disappears.
        let thinning = at_sea.altitude - at_peak.altitude;
        assert!((0.1..0.3).contains(&thinning), "thinning = {thinning}");
        // The Normal model stays a sea-level convention at any elevation.
        let normal_sea = horizon(&time, &sea, ra, 0.0, Refraction::Normal).unwrap();
        let normal_peak = horizon(&time, &peak, ra, 0.0, Refraction::Normal).unwrap();
        assert!((normal_sea.altitude - normal_peak.altitude).abs() < 1e-12);
    }

    #[test]
    fn zenith_object_has_altitude_ninety() {
        // A body placed exactly at the observer's of-date zenith direction.
        let time = AstroTime::try_new(2022, 3, 15, 21, 30, 0.0).unwrap();
        let observer = greenwich();
        let zenith = crate::observer::observer_vector(&time, &observer, true);
        let (ra, dec) = equ_angles(&zenith.vec);
        let topo = horizon(&time, &observer, ra, dec, Refraction::None).unwrap();
        // Geodetic vs geocentric latitude keeps this a handful of
        // arcminutes from the exact zenith.
        assert!(topo.altitude > 89.7, "alt = {}", topo.altitude);
    }

    #[test]
    fn cardinal_directions() {
        // An of-date direction on the celestial equator at the local
        // meridian appears due south from a northern site.
        let time = AstroTime::try_new(2022, 3, 15, 21, 30, 0.0).unwrap();
        let observer = greenwich();
        let lst = crate::time::sidereal_time(&time) + observer.longitude / 15.0;
        let topo = horizon(
            &time,
            &observer,
            between_0_24(lst),
            0.0,
            Refraction::None,
        )
        .unwrap();
        assert!((topo.azimuth - 180.0).abs() < 0.1, "az = {}", topo.azimuth);
        assert!(
            (topo.altitude - (90.0 - observer.latitude)).abs() < 0.2,
            "alt = {}",
            topo.altitude
        );
    }

    #[test]
    fn equator_parallax_for_the_moon() {
        // The Moon's horizontal parallax is up to a degree: topocentric and
        // geocentric RA/Dec must differ noticeably when the Moon is low.
        let time = AstroTime::try_new(2022, 11, 21, 2, 0, 0.0).unwrap();
        let observer = Observer::new(25.77, -80.19, 3.0);
        let topo = equator(
            Body::Moon,
            &time,
            &observer,
            EquatorDate::OfDate,
            Aberration::None,
        )
        .unwrap();
        let geo = crate::ephemerides::geo_moon(&time);
        let geo_of_date = frames::rotation_eqj_eqd(&time) * geo.vec;
        let shift = crate::math::angle_between(&topo.vec.vec, &geo_of_date) * 60.0;
        assert!(shift > 5.0 && shift < 70.0, "parallax = {shift} arcmin");
    }

    #[test]
    fn atmosphere_profile() {
        let sea = atmosphere(0.0).unwrap();
        assert_relative_eq!(sea.pressure, 101_325.0);
        assert_relative_eq!(sea.temperature, 288.15);
        assert_relative_eq!(sea.density, 1.0);
        // Tropopause: about 22.6 kPa and 216.65 K.
        let eleven = atmosphere(11_000.0).unwrap();
        assert!((eleven.pressure - 22_632.0).abs() < 100.0);
        assert_relative_eq!(eleven.temperature, 216.65);
        // Everest-height density is about 1/3 below sea level... and thin.
        let everest = atmosphere(8848.0).unwrap();
        assert!(everest.density > 0.30 && everest.density < 0.45);
        assert!(atmosphere(150_000.0).is_err());
        assert!(atmosphere(f64::NAN).is_err());
    }
}
