/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Lunar libration: the slow rocking that exposes the Moon's limb regions.
//!
//! Optical libration comes from the geometry of the tilted lunar orbit;
//! the small physical libration is the classical ρ/σ/τ series.

use crate::constants::shapes::MOON_EQUATORIAL_RADIUS_KM;
use crate::ephemerides::lunar;
use crate::math::angles::{between_pm_180, between_0_360};
use crate::time::AstroTime;

/// Inclination of the mean lunar equator to the ecliptic, degrees.
const MOON_EQUATOR_INCLINATION: f64 = 1.54242;

/// Libration state of the Moon at one instant.
#[derive(Copy, Clone, Debug)]
pub struct LibrationInfo {
    /// Sub-Earth selenographic latitude, degrees (positive: far-side north
    /// limb tips toward us).
    pub elat: f64,
    /// Sub-Earth selenographic longitude, degrees.
    pub elon: f64,
    /// Geocentric ecliptic latitude of the Moon, degrees.
    pub mlat: f64,
    /// Geocentric ecliptic longitude of the Moon, degrees.
    pub mlon: f64,
    /// Distance to the Moon, km.
    pub dist_km: f64,
    /// Apparent angular diameter of the Moon, degrees.
    pub diam_deg: f64,
}

/// Geocentric lunar libration angles at `time`.
pub fn libration(time: &AstroTime) -> LibrationInfo {
    let t = time.tt / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t2 * t2;
    let (mlon, mlat, dist_km) = lunar::moon_mean_ecliptic(time.tt);

    // Fundamental arguments, degrees.
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let omega = 125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
        - t4 / 60_616_000.0;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    // Optical libration. The apparent longitude enters without nutation so
    // the angles refer to the mean equinox, as is conventional.
    let i = MOON_EQUATOR_INCLINATION.to_radians();
    let w = (mlon - omega).to_radians();
    let beta = mlat.to_radians();
    let a = (w.sin() * beta.cos() * i.cos() - beta.sin() * i.sin()).atan2(w.cos() * beta.cos());
    let lon_optical = between_pm_180(a.to_degrees() - f);
    let lat_optical = (-w.sin() * beta.cos() * i.sin() - beta.sin() * i.cos()).asin();

    // Physical libration, degrees.
    let dr = core::f64::consts::PI / 180.0;
    let k1 = (119.75 + 131.849 * t) * dr;
    let k2 = (72.56 + 20.186 * t) * dr;
    let md = mp * dr;
    let ms = m * dr;
    let fd = f * dr;
    let dd = d * dr;
    let om = omega * dr;
    let rho = -0.027_52 * md.cos() - 0.022_45 * fd.sin() + 0.006_84 * (md - 2.0 * fd).cos()
        - 0.002_93 * (2.0 * fd).cos()
        - 0.000_85 * (2.0 * fd - 2.0 * dd).cos()
        - 0.000_54 * (md - 2.0 * dd).cos()
        - 0.000_20 * (md + fd).sin()
        - 0.000_20 * (md + 2.0 * fd).cos()
        - 0.000_20 * (md - fd).cos()
        + 0.000_14 * (md + 2.0 * fd - 2.0 * dd).cos();
    let sigma = -0.028_16 * md.sin() + 0.022_44 * fd.cos() - 0.006_82 * (md - 2.0 * fd).sin()
        - 0.002_79 * (2.0 * fd).sin()
        - 0.000_83 * (2.0 * fd - 2.0 * dd).sin()
        + 0.000_69 * (md - 2.0 * dd).sin()
        + 0.000_40 * (md + fd).cos()
        - 0.000_25 * (2.0 * md).sin()
        - 0.000_23 * (md + 2.0 * fd).sin()
        + 0.000_20 * (md - fd).cos()
        + 0.000_19 * (md - fd).sin()
        + 0.000_13 * (md + 2.0 * fd - 2.0 * dd).sin()
        - 0.000_10 * (md - 3.0 * fd).cos();
    let tau = 0.025_20 * e * ms.sin() + 0.004_73 * (2.0 * md - 2.0 * fd).sin()
        - 0.004_67 * md.sin()
        + 0.003_96 * k1.sin()
        + 0.002_76 * (2.0 * md - 2.0 * dd).sin()
        + 0.001_96 * om.sin()
        - 0.001_83 * (md - fd).cos()
        + 0.001_15 * (md - 2.0 * dd).sin()
        - 0.000_96 * (md - dd).sin()
        + 0.000_46 * (2.0 * fd - 2.0 * dd).sin()
        - 0.000_39 * (md - fd).sin()
        - 0.000_32 * (md - ms - dd).sin()
        + 0.000_27 * (2.0 * md - ms - 2.0 * dd).sin()
        + 0.000_23 * k2.sin()
        - 0.000_14 * (2.0 * dd).sin()
        + 0.000_14 * (2.0 * md - 2.0 * fd).cos()
        - 0.000_12 * (md - 2.0 * fd).sin()
        - 0.000_12 * (2.0 * md).sin()
        + 0.000_11 * (2.0 * md - 2.0 * ms - 2.0 * dd).sin();

    let lon_physical = -tau + (rho * a.cos() + sigma * a.sin()) * lat_optical.tan();
    let lat_physical = sigma * a.cos() - rho * a.sin();

    LibrationInfo {
        elat: lat_optical.to_degrees() + lat_physical,
        elon: lon_optical + lon_physical,
        mlat,
        mlon: between_0_360(mlon),
        dist_km,
        diam_deg: 2.0 * (MOON_EQUATORIAL_RADIUS_KM / dist_km).asin().to_degrees(),
    }
}

#[cfg(test)]
mod ut_libration {
    use super::*;

    #[test]
    fn libration_stays_within_physical_bounds() {
        // Total geocentric libration never exceeds about 8 degrees in
        // longitude and 7 in latitude.
        let mut time = AstroTime::try_new(2015, 1, 1, 0, 0, 0.0).unwrap();
        let mut max_lon: f64 = 0.0;
        let mut max_lat: f64 = 0.0;
        for _ in 0..400 {
            let lib = libration(&time);
            max_lon = max_lon.max(lib.elon.abs());
            max_lat = max_lat.max(lib.elat.abs());
            assert!(lib.elon.abs() < 8.5, "elon {} at {}", lib.elon, time);
            assert!(lib.elat.abs() < 7.2, "elat {} at {}", lib.elat, time);
            time = time.add_days(5.03);
        }
        // And it genuinely uses most of that range.
        assert!(max_lon > 5.0, "max elon only {max_lon}");
        assert!(max_lat > 5.0, "max elat only {max_lat}");
    }

    #[test]
    fn meeus_example_53a() {
        // 1992 April 12.0 TD: optical+physical libration l = -1.23, b = 4.20.
        let tt = 2_448_724.5 - 2_451_545.0;
        let time = AstroTime::from_tt(tt);
        let lib = libration(&time);
        assert!((lib.elon - (-1.23)).abs() < 0.05, "elon {}", lib.elon);
        assert!((lib.elat - 4.20).abs() < 0.05, "elat {}", lib.elat);
    }

    #[test]
    fn angular_diameter_tracks_distance() {
        let time = AstroTime::try_new(2020, 4, 7, 18, 0, 0.0).unwrap(); // perigee full moon
        let lib = libration(&time);
        assert!(lib.diam_deg > 0.54 && lib.diam_deg < 0.57, "diam {}", lib.diam_deg);
        assert!(lib.dist_km < 360_000.0);
    }
}
