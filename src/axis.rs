/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Body rotation axes and prime-meridian angles, per the IAU Working Group
//! on Cartographic Coordinates recommended expressions.

use crate::bodies::Body;
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError};
use crate::math::{angles::between_0_360, AstroVector, Vector3};
use crate::time::AstroTime;

use snafu::ResultExt;

/// North-pole direction and rotation state of a body at one instant.
#[derive(Copy, Clone, Debug)]
pub struct AxisInfo {
    /// J2000 right ascension of the north pole, sidereal hours.
    pub ra: f64,
    /// J2000 declination of the north pole, degrees.
    pub dec: f64,
    /// Prime-meridian angle W, degrees, in [0, 360).
    pub spin: f64,
    /// Unit vector of the north pole in EQJ.
    pub north: AstroVector,
}

fn pole_vector(ra_deg: f64, dec_deg: f64) -> Vector3 {
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
}

/// Pole RA/Dec (degrees) and prime-meridian angle (degrees) at `time`.
fn axis_angles(body: Body, time: &AstroTime) -> Option<(f64, f64, f64)> {
    let d = time.tt;
    let t = d / 36_525.0;
    match body {
        Body::Sun => Some((286.13, 63.87, 84.176 + 14.184_4 * d)),
        Body::Mercury => {
            let m1 = (174.791_085_7 + 4.092_335 * d).to_radians();
            let m2 = (349.582_108_8 + 8.184_670 * d).to_radians();
            let m3 = (164.373_257_1 + 12.277_005 * d).to_radians();
            let m4 = (339.164_343_3 + 16.369_340 * d).to_radians();
            let m5 = (153.955_429_6 + 20.461_675 * d).to_radians();
            let w = 329.5988 + 6.138_510_8 * d
                + 0.010_672_57 * m1.sin()
                - 0.001_123_09 * m2.sin()
                - 0.000_110_40 * m3.sin()
                - 0.000_025_39 * m4.sin()
                - 0.000_005_71 * m5.sin();
            Some((281.0103 - 0.0328 * t, 61.4155 - 0.0049 * t, w))
        }
        Body::Venus => Some((272.76, 67.16, 160.20 - 1.481_368_8 * d)),
        Body::Earth => Some((
            -0.641 * t,
            90.0 - 0.557 * t,
            190.147 + 360.985_623_5 * d,
        )),
        Body::Moon => {
            let e1 = (125.045 - 0.052_992_1 * d).to_radians();
            let e2 = (250.089 - 0.105_984_2 * d).to_radians();
            let e3 = (260.008 + 13.012_000_9 * d).to_radians();
            let e4 = (176.625 + 13.340_715_4 * d).to_radians();
            let e5 = (357.529 + 0.985_600_3 * d).to_radians();
            let e6 = (311.589 + 26.405_708_4 * d).to_radians();
            let e7 = (134.963 + 13.064_993_0 * d).to_radians();
            let e8 = (276.617 + 0.328_714_6 * d).to_radians();
            let e9 = (34.226 + 1.748_487_7 * d).to_radians();
            let e10 = (15.134 - 0.158_976_3 * d).to_radians();
            let e11 = (119.743 + 0.003_609_6 * d).to_radians();
            let e12 = (239.961 + 0.164_357_3 * d).to_radians();
            let e13 = (25.053 + 12.959_008_8 * d).to_radians();
            let ra = 269.9949 + 0.0031 * t - 3.8787 * e1.sin() - 0.1204 * e2.sin()
                + 0.0700 * e3.sin()
                - 0.0172 * e4.sin()
                + 0.0072 * e6.sin()
                - 0.0052 * e10.sin()
                + 0.0043 * e13.sin();
            let dec = 66.5392 + 0.0130 * t + 1.5419 * e1.cos() + 0.0239 * e2.cos()
                - 0.0278 * e3.cos()
                + 0.0068 * e4.cos()
                - 0.0029 * e6.cos()
                + 0.0009 * e7.cos()
                + 0.0008 * e10.cos()
                - 0.0009 * e13.cos();
            let w = 38.3213 + (13.176_358_15 - 1.4e-12 * d) * d + 3.5610 * e1.sin()
                + 0.1208 * e2.sin()
                - 0.0642 * e3.sin()
                + 0.0158 * e4.sin()
                + 0.0252 * e5.sin()
                - 0.0066 * e6.sin()
                - 0.0047 * e7.sin()
                - 0.0046 * e8.sin()
                + 0.0028 * e9.sin()
                + 0.0052 * e10.sin()
                + 0.0040 * e11.sin()
                + 0.0019 * e12.sin()
                - 0.0044 * e13.sin();
            Some((ra, dec, w))
        }
        Body::Mars => Some((
            317.681_43 - 0.1061 * t,
            52.886_50 - 0.0609 * t,
            176.630 + 350.891_982_26 * d,
        )),
        Body::Jupiter => {
            let ja = (99.360_714 + 4850.4046 * t).to_radians();
            let jb = (175.895_369 + 1191.9605 * t).to_radians();
            let jc = (300.323_162 + 262.5475 * t).to_radians();
            let jd = (114.012_305 + 6070.2476 * t).to_radians();
            let je = (49.511_251 + 64.3 * t).to_radians();
            let ra = 268.056_595 - 0.006_499 * t
                + 0.000_117 * ja.sin()
                + 0.000_938 * jb.sin()
                + 0.001_432 * jc.sin()
                + 0.000_030 * jd.sin()
                + 0.002_150 * je.sin();
            let dec = 64.495_303 + 0.002_413 * t
                + 0.000_050 * ja.cos()
                + 0.000_404 * jb.cos()
                + 0.000_617 * jc.cos()
                - 0.000_013 * jd.cos()
                + 0.000_926 * je.cos();
            Some((ra, dec, 284.95 + 870.536 * d))
        }
        Body::Saturn => Some((
            40.589 - 0.036 * t,
            83.537 - 0.004 * t,
            38.90 + 810.793_902_4 * d,
        )),
        Body::Uranus => Some((257.311, -15.175, 203.81 - 501.160_092_8 * d)),
        Body::Neptune => {
            let n = (357.85 + 52.316 * t).to_radians();
            Some((
                299.36 + 0.70 * n.sin(),
                43.46 - 0.51 * n.cos(),
                249.978 + 541.139_775_7 * d - 0.48 * n.sin(),
            ))
        }
        Body::Pluto => Some((132.993, -6.163, 302.695 + 56.362_522_5 * d)),
        _ => None,
    }
}

/// Rotation-axis direction (EQJ) and prime-meridian angle for a body.
pub fn rotation_axis(body: Body, time: &AstroTime) -> AstroResult<AxisInfo> {
    let (ra_deg, dec_deg, w) = axis_angles(body, time)
        .ok_or(BodyError::InvalidBody { body })
        .context(BodyComputationSnafu {
            action: "computing a rotation axis",
        })?;
    Ok(AxisInfo {
        ra: between_0_360(ra_deg) / 15.0,
        dec: dec_deg,
        spin: between_0_360(w),
        north: AstroVector::from_vec3(pole_vector(ra_deg, dec_deg), *time),
    })
}

/// Unit pole vector in EQJ for internal consumers.
pub(crate) fn body_pole_eqj(body: Body, time: &AstroTime) -> Vector3 {
    match axis_angles(body, time) {
        Some((ra, dec, _)) => pole_vector(ra, dec),
        None => Vector3::z(),
    }
}
