/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Geocentric Moon from a truncated ELP-2000 expansion in the four lunar
//! fundamental arguments (elongation D, solar anomaly M, lunar anomaly M',
//! argument of latitude F), with the classical A1/A2/A3 planetary additives.
//! Accuracy is about 10 arcseconds in longitude and 4 in latitude over
//! several centuries around J2000.

use log::trace;

use crate::constants::KM_PER_AU;
use crate::math::vectors::Spherical;
use crate::math::{AstroVector, StateVector};
use crate::time::AstroTime;

use super::vsop87::ecl_of_date_to_eqj;

/// Longitude (1e-6 deg) and distance (1e-3 km) coefficients for one
/// combination of the fundamental arguments.
struct MainTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    lon: f64,
    dist: f64,
}

impl MainTerm {
    const fn new(d: i8, m: i8, mp: i8, f: i8, lon: f64, dist: f64) -> Self {
        Self { d, m, mp, f, lon, dist }
    }
}

/// Latitude coefficient (1e-6 deg).
struct LatTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    lat: f64,
}

impl LatTerm {
    const fn new(d: i8, m: i8, mp: i8, f: i8, lat: f64) -> Self {
        Self { d, m, mp, f, lat }
    }
}

#[rustfmt::skip]
const TERMS_LR: [MainTerm; 60] = [
    MainTerm::new(0, 0, 1, 0, 6288774.0, -20905355.0),
    MainTerm::new(2, 0, -1, 0, 1274027.0, -3699111.0),
    MainTerm::new(2, 0, 0, 0, 658314.0, -2955968.0),
    MainTerm::new(0, 0, 2, 0, 213618.0, -569925.0),
    MainTerm::new(0, 1, 0, 0, -185116.0, 48888.0),
    MainTerm::new(0, 0, 0, 2, -114332.0, -3149.0),
    MainTerm::new(2, 0, -2, 0, 58793.0, 246158.0),
    MainTerm::new(2, -1, -1, 0, 57066.0, -152138.0),
    MainTerm::new(2, 0, 1, 0, 53322.0, -170733.0),
    MainTerm::new(2, -1, 0, 0, 45758.0, -204586.0),
    MainTerm::new(0, 1, -1, 0, -40923.0, -129620.0),
    MainTerm::new(1, 0, 0, 0, -34720.0, 108743.0),
    MainTerm::new(0, 1, 1, 0, -30383.0, 104755.0),
    MainTerm::new(2, 0, 0, -2, 15327.0, 10321.0),
    MainTerm::new(0, 0, 1, 2, -12528.0, 0.0),
    MainTerm::new(0, 0, 1, -2, 10980.0, 79661.0),
    MainTerm::new(4, 0, -1, 0, 10675.0, -34782.0),
    MainTerm::new(0, 0, 3, 0, 10034.0, -23210.0),
    MainTerm::new(4, 0, -2, 0, 8548.0, -21636.0),
    MainTerm::new(2, 1, -1, 0, -7888.0, 24208.0),
    MainTerm::new(2, 1, 0, 0, -6766.0, 30824.0),
    MainTerm::new(1, 0, -1, 0, -5163.0, -8379.0),
    MainTerm::new(1, 1, 0, 0, 4987.0, -16675.0),
    MainTerm::new(2, -1, 1, 0, 4036.0, -12831.0),
    MainTerm::new(2, 0, 2, 0, 3994.0, -10445.0),
    MainTerm::new(4, 0, 0, 0, 3861.0, -11650.0),
    MainTerm::new(2, 0, -3, 0, 3665.0, 14403.0),
    MainTerm::new(0, 1, -2, 0, -2689.0, -7003.0),
    MainTerm::new(2, 0, -1, 2, -2602.0, 0.0),
    MainTerm::new(2, -1, -2, 0, 2390.0, 10056.0),
    MainTerm::new(1, 0, 1, 0, -2348.0, 6322.0),
    MainTerm::new(2, -2, 0, 0, 2236.0, -9884.0),
    MainTerm::new(0, 1, 2, 0, -2120.0, 5751.0),
    MainTerm::new(0, 2, 0, 0, -2069.0, 0.0),
    MainTerm::new(2, -2, -1, 0, 2048.0, -4950.0),
    MainTerm::new(2, 0, 1, -2, -1773.0, 4130.0),
    MainTerm::new(2, 0, 0, 2, -1595.0, 0.0),
    MainTerm::new(4, -1, -1, 0, 1215.0, -3958.0),
    MainTerm::new(0, 0, 2, 2, -1110.0, 0.0),
    MainTerm::new(3, 0, -1, 0, -892.0, 3258.0),
    MainTerm::new(2, 1, 1, 0, -810.0, 2616.0),
    MainTerm::new(4, -1, -2, 0, 759.0, -1897.0),
    MainTerm::new(0, 2, -1, 0, -713.0, -2117.0),
    MainTerm::new(2, 2, -1, 0, -700.0, 2354.0),
    MainTerm::new(2, 1, -2, 0, 691.0, 0.0),
    MainTerm::new(2, -1, 0, -2, 596.0, 0.0),
    MainTerm::new(4, 0, 1, 0, 549.0, -1423.0),
    MainTerm::new(0, 0, 4, 0, 537.0, -1117.0),
    MainTerm::new(4, -1, 0, 0, 520.0, -1571.0),
    MainTerm::new(1, 0, -2, 0, -487.0, -1739.0),
    MainTerm::new(2, 1, 0, -2, -399.0, 0.0),
    MainTerm::new(0, 0, 2, -2, -381.0, -4421.0),
    MainTerm::new(1, 1, 1, 0, 351.0, 0.0),
    MainTerm::new(3, 0, -2, 0, -340.0, 0.0),
    MainTerm::new(4, 0, -3, 0, 330.0, 0.0),
    MainTerm::new(2, -1, 2, 0, 327.0, 0.0),
    MainTerm::new(0, 2, 1, 0, -323.0, 1165.0),
    MainTerm::new(1, 1, -1, 0, 299.0, 0.0),
    MainTerm::new(2, 0, 3, 0, 294.0, 0.0),
    MainTerm::new(2, 0, -1, -2, 0.0, 8752.0),
];

#[rustfmt::skip]
const TERMS_B: [LatTerm; 60] = [
    LatTerm::new(0, 0, 0, 1, 5128122.0),
    LatTerm::new(0, 0, 1, 1, 280602.0),
    LatTerm::new(0, 0, 1, -1, 277693.0),
    LatTerm::new(2, 0, 0, -1, 173237.0),
    LatTerm::new(2, 0, -1, 1, 55413.0),
    LatTerm::new(2, 0, -1, -1, 46271.0),
    LatTerm::new(2, 0, 0, 1, 32573.0),
    LatTerm::new(0, 0, 2, 1, 17198.0),
    LatTerm::new(2, 0, 1, -1, 9266.0),
    LatTerm::new(0, 0, 2, -1, 8822.0),
    LatTerm::new(2, -1, 0, -1, 8216.0),
    LatTerm::new(2, 0, -2, -1, 4324.0),
    LatTerm::new(2, 0, 1, 1, 4200.0),
    LatTerm::new(2, 1, 0, -1, -3359.0),
    LatTerm::new(2, -1, -1, 1, 2463.0),
    LatTerm::new(2, -1, 0, 1, 2211.0),
    LatTerm::new(2, -1, -1, -1, 2065.0),
    LatTerm::new(0, 1, -1, -1, -1870.0),
    LatTerm::new(4, 0, -1, -1, 1828.0),
    LatTerm::new(0, 1, 0, 1, -1794.0),
    LatTerm::new(0, 0, 0, 3, -1749.0),
    LatTerm::new(0, 1, -1, 1, -1565.0),
    LatTerm::new(1, 0, 0, 1, -1491.0),
    LatTerm::new(0, 1, 1, 1, -1475.0),
    LatTerm::new(0, 1, 1, -1, -1410.0),
    LatTerm::new(0, 1, 0, -1, -1344.0),
    LatTerm::new(1, 0, 0, -1, -1335.0),
    LatTerm::new(0, 0, 3, 1, 1107.0),
    LatTerm::new(4, 0, 0, -1, 1021.0),
    LatTerm::new(4, 0, -1, 1, 833.0),
    LatTerm::new(0, 0, 1, -3, 777.0),
    LatTerm::new(4, 0, -2, 1, 671.0),
    LatTerm::new(2, 0, 0, -3, 607.0),
    LatTerm::new(2, 0, 2, -1, 596.0),
    LatTerm::new(2, -1, 1, -1, 491.0),
    LatTerm::new(2, 0, -2, 1, -451.0),
    LatTerm::new(0, 0, 3, -1, 439.0),
    LatTerm::new(2, 0, 2, 1, 422.0),
    LatTerm::new(2, 0, -3, -1, 421.0),
    LatTerm::new(2, 1, -1, 1, -366.0),
    LatTerm::new(2, 1, 0, 1, -351.0),
    LatTerm::new(4, 0, 0, 1, 331.0),
    LatTerm::new(2, -1, 1, 1, 315.0),
    LatTerm::new(2, -2, 0, -1, 302.0),
    LatTerm::new(0, 0, 1, 3, -283.0),
    LatTerm::new(2, 1, 1, -1, -229.0),
    LatTerm::new(1, 1, 0, -1, 223.0),
    LatTerm::new(1, 1, 0, 1, 223.0),
    LatTerm::new(0, 1, -2, -1, -220.0),
    LatTerm::new(2, 1, -1, -1, -220.0),
    LatTerm::new(1, 0, 1, 1, -185.0),
    LatTerm::new(2, -1, -2, -1, 181.0),
    LatTerm::new(0, 1, 2, 1, -177.0),
    LatTerm::new(4, 0, -2, -1, 176.0),
    LatTerm::new(4, -1, -1, -1, 166.0),
    LatTerm::new(1, 0, 1, -1, -164.0),
    LatTerm::new(4, 0, 1, -1, 132.0),
    LatTerm::new(1, 0, -1, -1, -119.0),
    LatTerm::new(4, -1, 0, -1, 115.0),
    LatTerm::new(2, -2, 0, 1, 107.0),
];

/// Mean longitude, elongation, anomalies, and argument of latitude, degrees.
fn fundamentals(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t2 * t2;
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Evaluates the full series: mean-ecliptic-of-date longitude and latitude in
/// degrees, distance in km.
pub(crate) fn moon_mean_ecliptic(tt: f64) -> (f64, f64, f64) {
    let t = tt / 36_525.0;
    let (lp, d, m, mp, f) = fundamentals(t);

    // Correction for the decreasing eccentricity of the Earth's orbit,
    // applied once per power of M in the argument.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in &TERMS_LR {
        let e_factor = match term.m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        let arg = (term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp
            + term.f as f64 * f)
            .to_radians();
        sum_l += term.lon * e_factor * arg.sin();
        sum_r += term.dist * e_factor * arg.cos();
    }

    let mut sum_b = 0.0;
    for term in &TERMS_B {
        let e_factor = match term.m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        let arg = (term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp
            + term.f as f64 * f)
            .to_radians();
        sum_b += term.lat * e_factor * arg.sin();
    }

    // Planetary additives (Venus, Jupiter, and the flattening term).
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.to_radians().sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f.to_radians()).sin()
        + 175.0 * (a1 + f.to_radians()).sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    let lon = crate::math::angles::between_0_360(lp + sum_l / 1.0e6);
    let lat = sum_b / 1.0e6;
    let dist_km = 385_000.56 + sum_r / 1000.0;
    trace!("moon series at tt={tt}: lon={lon} lat={lat} dist={dist_km}");
    (lon, lat, dist_km)
}

/// Geocentric Moon position in EQJ for a raw TT day offset, AU.
pub(crate) fn geo_moon_pos(tt: f64) -> crate::math::Vector3 {
    let (lon, lat, dist_km) = moon_mean_ecliptic(tt);
    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon.to_radians().sin_cos();
    let r = dist_km / KM_PER_AU;
    let ecl = crate::math::Vector3::new(
        r * cos_lat * cos_lon,
        r * cos_lat * sin_lon,
        r * sin_lat,
    );
    ecl_of_date_to_eqj(tt) * ecl
}

/// Geocentric Moon position in EQJ, AU.
pub fn geo_moon(time: &AstroTime) -> AstroVector {
    AstroVector::from_vec3(geo_moon_pos(time.tt), *time)
}

/// Geocentric Moon position and velocity in EQJ, AU and AU/day. The velocity
/// is a central finite difference over ±0.001 day, which resolves the series
/// to machine-level relative accuracy for this truncation.
pub fn geo_moon_state(time: &AstroTime) -> StateVector {
    const DT: f64 = 1.0e-3;
    let ahead = geo_moon(&time.add_days(DT));
    let behind = geo_moon(&time.add_days(-DT));
    let here = geo_moon(time);
    StateVector::new(here.vec, (ahead.vec - behind.vec) / (2.0 * DT), *time)
}

/// Geocentric Moon in true-ecliptic-of-date (ECT) spherical coordinates:
/// latitude and longitude in degrees, distance in AU.
///
/// The true ecliptic shares the mean ecliptic plane; nutation only shifts the
/// equinox along it, so the conversion is a longitude offset by Δψ.
pub fn ecliptic_geo_moon(time: &AstroTime) -> Spherical {
    let (lon, lat, dist_km) = moon_mean_ecliptic(time.tt);
    Spherical::new(
        lat,
        crate::math::angles::between_0_360(lon + time.nutation_dpsi()),
        dist_km / KM_PER_AU,
    )
}

#[cfg(test)]
mod ut_lunar {
    use super::*;
    use crate::frames;
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD.
        let tt = 2_448_724.5 - 2_451_545.0;
        let (lon, lat, dist) = moon_mean_ecliptic(tt);
        assert_relative_eq!(lon, 133.162_655, epsilon = 1e-6);
        assert_relative_eq!(lat, -3.229_126, epsilon = 1e-6);
        assert_relative_eq!(dist, 368_409.7, epsilon = 0.1);
    }

    #[test]
    fn geo_moon_regression() {
        // Pin of this model's own output; the chain is deterministic.
        let time = AstroTime::try_new(2019, 6, 24, 15, 45, 37.0).unwrap();
        let moon = geo_moon(&time);
        assert_relative_eq!(moon.vec.x, 2.674_112_892_959_4e-3, epsilon = 1e-10);
        assert_relative_eq!(moon.vec.y, -1.531_533_910_460_6e-4, epsilon = 1e-10);
        assert_relative_eq!(moon.vec.z, -3.150_081_438_293_1e-4, epsilon = 1e-10);
        // External reference for the same instant sits 12 km away, within
        // the documented truncation error.
        let reference = Vector3::new(
            0.002_674_037_026_701_135,
            -0.000_153_161_031_660_066_6,
            -0.000_315_015_992_706_942_9,
        );
        assert!((moon.vec - reference).norm() * KM_PER_AU < 25.0);
    }

    #[test]
    fn distance_range() {
        let mut tt = -50.0 * 365.25;
        while tt < 50.0 * 365.25 {
            let (_, lat, dist) = moon_mean_ecliptic(tt);
            assert!(dist > 356_000.0 && dist < 407_000.0, "dist = {dist}");
            assert!(lat.abs() < 5.4, "lat = {lat}");
            tt += 3.7;
        }
    }

    #[test]
    fn velocity_is_consistent_with_orbit() {
        let time = AstroTime::try_new(2021, 5, 26, 0, 0, 0.0).unwrap();
        let state = geo_moon_state(&time);
        // Mean orbital speed about 1 km/s.
        let speed_km_s = state.vel.norm() * KM_PER_AU / 86_400.0;
        assert!((0.8..1.2).contains(&speed_km_s), "speed = {speed_km_s}");
        // Specific angular momentum direction is roughly the ecliptic pole.
        let h = state.pos.cross(&state.vel).normalize();
        let pole = frames::rotation_ecl_eqj() * Vector3::z();
        assert!(h.dot(&pole) > 0.98);
    }

    #[test]
    fn ecliptic_output_matches_series_longitude() {
        // The ECT longitude differs from the mean-of-date series value by the
        // nutation in longitude (a few tens of arcseconds at most).
        let time = AstroTime::try_new(2019, 6, 24, 15, 45, 37.0).unwrap();
        let (lon_mean, lat_mean, _) = moon_mean_ecliptic(time.tt);
        let sphere = ecliptic_geo_moon(&time);
        let dlon = crate::math::angles::between_pm_180(sphere.lon - lon_mean);
        assert!(dlon.abs() < 30.0 / 3600.0, "dlon = {dlon}");
        assert!((sphere.lat - lat_mean).abs() < 2.0 / 3600.0);
    }
}
