/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Phase angles, illuminated fractions, and visual magnitudes.

use crate::axis;
use crate::bodies::Body;
use crate::ephemerides::{geo_vector, helio_vector, Aberration};
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError, SearchError, SearchSnafu};
use crate::math::angle_between;
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

/// Illumination state of a body at one instant.
#[derive(Copy, Clone, Debug)]
pub struct IlluminationInfo {
    pub time: AstroTime,
    /// Apparent visual magnitude.
    pub mag: f64,
    /// Sun-body-Earth angle, degrees, in [0, 180].
    pub phase_angle: f64,
    /// Illuminated fraction of the visible disc, in [0, 1].
    pub phase_fraction: f64,
    /// Distance from the Sun, AU.
    pub helio_dist: f64,
    /// Distance from the Earth, AU.
    pub geo_dist: f64,
    /// Tilt of Saturn's rings toward the Earth, degrees; `None` for every
    /// other body.
    pub ring_tilt: Option<f64>,
}

/// Magnitude polynomial in the phase angle for the bodies with a published
/// fit; `x` is the phase angle over 100 degrees.
fn phase_polynomial(body: Body, phase_deg: f64) -> Option<f64> {
    let x = phase_deg / 100.0;
    Some(match body {
        Body::Mercury => -0.60 + x * (4.98 + x * (-4.88 + x * 3.02)),
        Body::Venus => {
            if phase_deg < 163.6 {
                -4.47 + x * (1.03 + x * (0.57 + x * 0.13))
            } else {
                0.98 - x * 1.02
            }
        }
        Body::Mars => -1.52 + x * 1.60,
        Body::Jupiter => -9.40 + x * 0.50,
        Body::Uranus => -7.19 + x * 0.25,
        Body::Neptune => -6.87,
        Body::Pluto => -1.00 + x * 4.00,
        _ => return None,
    })
}

/// Saturn needs its rings: magnitude and ring tilt from the pole geometry.
fn saturn_magnitude(
    time: &AstroTime,
    geo_unit: &crate::math::Vector3,
    helio_dist: f64,
    geo_dist: f64,
) -> (f64, f64) {
    let pole = axis::body_pole_eqj(Body::Saturn, time);
    // Angle between the ring plane and the line of sight.
    let tilt_deg = (geo_unit.dot(&pole)).asin().to_degrees().abs();
    let tilt_rad = tilt_deg.to_radians();
    let mag = -9.0 + 5.0 * (helio_dist * geo_dist).log10() - 2.6 * tilt_rad.sin().abs()
        + 1.2 * tilt_rad.sin().powi(2);
    (mag, tilt_deg)
}

/// Phase angle, illuminated fraction, and visual magnitude of a body.
pub fn illumination(body: Body, time: &AstroTime) -> AstroResult<IlluminationInfo> {
    if body == Body::Earth || body.is_user_star() || body == Body::Ssb || body == Body::Emb {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "computing illumination",
        });
    }
    let geo = geo_vector(body, time, Aberration::On)?;
    let geo_dist = geo.length();
    let (phase_angle, helio_dist) = if body == Body::Sun {
        (0.0, 0.0)
    } else {
        let helio = helio_vector(body, time)?;
        // Sun-body-Earth angle: vectors from the body to the Sun and Earth.
        (
            angle_between(&(-helio.vec), &(-geo.vec)),
            helio.length(),
        )
    };
    let phase_fraction = 0.5 * (1.0 + phase_angle.to_radians().cos());

    let mut ring_tilt = None;
    let mag = match body {
        Body::Sun => -26.732 + 5.0 * geo_dist.log10(),
        Body::Moon => {
            // Allen-style fit against the mean lunar distance; good to a few
            // tenths of a magnitude away from full moon.
            let phase_rad = phase_angle.to_radians();
            const MEAN_DIST_AU: f64 = 385_000.6 / crate::constants::KM_PER_AU;
            -12.717 + 1.49 * phase_rad.abs() + 0.0431 * phase_rad.powi(4)
                + 5.0 * (geo_dist / MEAN_DIST_AU).log10()
        }
        Body::Saturn => {
            let (mag, tilt) =
                saturn_magnitude(time, &geo.vec.normalize(), helio_dist, geo_dist);
            ring_tilt = Some(tilt);
            mag
        }
        other => match phase_polynomial(other, phase_angle) {
            Some(base) => base + 5.0 * (helio_dist * geo_dist).log10(),
            None => {
                return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
                    action: "computing a visual magnitude",
                })
            }
        },
    };

    Ok(IlluminationInfo {
        time: *time,
        mag,
        phase_angle,
        phase_fraction,
        helio_dist,
        geo_dist,
        ring_tilt,
    })
}

/// Finds Venus's next brightness peak after `start`. Venus is the only body
/// whose magnitude extremum is sharp enough to be worth chasing; it falls
/// between the greatest elongation and the inferior conjunction.
pub fn search_peak_magnitude(body: Body, start: AstroTime) -> AstroResult<IlluminationInfo> {
    if body != Body::Venus {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "searching a peak magnitude",
        });
    }
    const SLOPE_DT: f64 = 0.1;
    let slope = |t: &AstroTime| -> AstroResult<f64> {
        let ahead = illumination(body, &t.add_days(SLOPE_DT))?.mag;
        let behind = illumination(body, &t.add_days(-SLOPE_DT))?.mag;
        Ok((ahead - behind) / (2.0 * SLOPE_DT))
    };
    // Brightness extrema recur with the 584-day synodic rhythm.
    let step = 10.0;
    let mut t_prev = start;
    let mut s_prev = slope(&t_prev)?;
    for k in 1..=70 {
        let t_next = start.add_days(k as f64 * step);
        let s_next = slope(&t_next)?;
        // Magnitude minimum: falling magnitude turning to rising.
        if s_prev < 0.0 && s_next >= 0.0 {
            let peak = search::search(&slope, t_prev, t_next, 10.0)?;
            return illumination(body, &peak);
        }
        t_prev = t_next;
        s_prev = s_next;
    }
    Err(SearchError::NotFound {
        limit_days: 700.0,
    })
    .context(SearchSnafu {
        action: "peak magnitude scan",
    })
}

#[cfg(test)]
mod ut_illumination {
    use super::*;

    #[test]
    fn full_moon_is_fully_lit() {
        // 2022-11-08 was a full moon (and a lunar eclipse).
        let time = AstroTime::try_new(2022, 11, 8, 11, 0, 0.0).unwrap();
        let info = illumination(Body::Moon, &time).unwrap();
        assert!(info.phase_angle < 2.0, "phase angle {}", info.phase_angle);
        assert!(info.phase_fraction > 0.999);
    }

    #[test]
    fn quarter_moon_is_half_lit() {
        // First quarter 2023-01-28 15:19 UT.
        let time = AstroTime::try_new(2023, 1, 28, 15, 19, 0.0).unwrap();
        let info = illumination(Body::Moon, &time).unwrap();
        assert!((info.phase_angle - 90.0).abs() < 2.0);
        assert!((info.phase_fraction - 0.5).abs() < 0.02);
    }

    #[test]
    fn venus_magnitude_range() {
        // Venus stays between about -3.8 and -4.9 over a synodic cycle.
        let mut time = AstroTime::try_new(2021, 1, 1, 0, 0, 0.0).unwrap();
        for _ in 0..60 {
            let info = illumination(Body::Venus, &time).unwrap();
            assert!(
                (-5.0..=-3.5).contains(&info.mag),
                "mag {} at {}",
                info.mag,
                time
            );
            time = time.add_days(10.0);
        }
    }

    #[test]
    fn jupiter_outshines_saturn_at_opposition() {
        let time = AstroTime::try_new(2022, 9, 26, 0, 0, 0.0).unwrap();
        let jupiter = illumination(Body::Jupiter, &time).unwrap();
        let saturn = illumination(Body::Saturn, &time).unwrap();
        assert!(jupiter.mag < -2.5, "jupiter {}", jupiter.mag);
        assert!(jupiter.mag < saturn.mag);
        assert!(saturn.ring_tilt.is_some());
        assert!(jupiter.ring_tilt.is_none());
    }

    #[test]
    fn outer_planet_phase_angles_stay_small() {
        let time = AstroTime::try_new(2020, 4, 15, 0, 0, 0.0).unwrap();
        for (body, limit) in [(Body::Jupiter, 12.0), (Body::Neptune, 2.0)] {
            let info = illumination(body, &time).unwrap();
            assert!(info.phase_angle < limit, "{body} phase {}", info.phase_angle);
        }
    }

    #[test]
    fn venus_peak_magnitude_event() {
        // Venus reached greatest brilliancy near 2021-12-04, mag about -4.9.
        let start = AstroTime::try_new(2021, 7, 1, 0, 0, 0.0).unwrap();
        let peak = search_peak_magnitude(Body::Venus, start).unwrap();
        let expected = AstroTime::try_new(2021, 12, 4, 0, 0, 0.0).unwrap();
        assert!(
            (peak.time.ut - expected.ut).abs() < 6.0,
            "peak at {}",
            peak.time
        );
        assert!(peak.mag < -4.5, "mag {}", peak.mag);
    }

    #[test]
    fn rejects_unsupported_bodies() {
        let time = AstroTime::from_ut(0.0);
        assert!(illumination(Body::Earth, &time).is_err());
        assert!(illumination(Body::Star1, &time).is_err());
        assert!(search_peak_magnitude(Body::Mercury, time).is_err());
    }
}
