/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! User-defined fixed stars. Eight slots (`Body::Star1`..`Body::Star8`) can
//! be filled with catalog coordinates; a defined slot then works in every
//! observation function the way a solar-system body does. This is the only
//! process-wide mutable state in the crate and it is lock-guarded.

use std::sync::RwLock;

use crate::bodies::Body;
use crate::constants::AU_PER_LY;
use crate::errors::{AstroResult, BodyError, BodyComputationSnafu, MathError, MathSnafu};
use crate::math::Vector3;

use snafu::ResultExt;

#[derive(Copy, Clone, Debug)]
struct StarDef {
    /// J2000 right ascension, sidereal hours.
    ra: f64,
    /// J2000 declination, degrees.
    dec: f64,
    /// Distance from the Sun, AU.
    dist_au: f64,
}

static STARS: RwLock<[Option<StarDef>; 8]> = RwLock::new([None; 8]);

fn slot(body: Body) -> Option<usize> {
    match body {
        Body::Star1 => Some(0),
        Body::Star2 => Some(1),
        Body::Star3 => Some(2),
        Body::Star4 => Some(3),
        Body::Star5 => Some(4),
        Body::Star6 => Some(5),
        Body::Star7 => Some(6),
        Body::Star8 => Some(7),
        _ => None,
    }
}

/// Assigns catalog coordinates to one of the eight star slots: J2000 right
/// ascension in sidereal hours, J2000 declination in degrees, and distance in
/// light-years. Distances below one light-year are rejected so that the
/// solar-system machinery (light time, parallax) stays well-conditioned.
pub fn define_star(body: Body, ra: f64, dec: f64, distance_ly: f64) -> AstroResult<()> {
    let index = slot(body)
        .ok_or(BodyError::InvalidBody { body })
        .context(BodyComputationSnafu {
            action: "defining a star",
        })?;
    if !(0.0..24.0).contains(&ra) || !ra.is_finite() {
        return Err(MathError::InvalidParameter {
            param: "ra",
            value: ra,
        })
        .context(MathSnafu {
            action: "defining a star",
        });
    }
    if !(-90.0..=90.0).contains(&dec) || !dec.is_finite() {
        return Err(MathError::InvalidParameter {
            param: "dec",
            value: dec,
        })
        .context(MathSnafu {
            action: "defining a star",
        });
    }
    if !(distance_ly >= 1.0) || !distance_ly.is_finite() {
        return Err(MathError::InvalidParameter {
            param: "distance_ly",
            value: distance_ly,
        })
        .context(MathSnafu {
            action: "defining a star",
        });
    }
    let mut stars = STARS.write().expect("star table lock poisoned");
    stars[index] = Some(StarDef {
        ra,
        dec,
        dist_au: distance_ly * AU_PER_LY,
    });
    Ok(())
}

/// Clears every star slot. Useful between test cases; never required.
pub fn clear_stars() {
    let mut stars = STARS.write().expect("star table lock poisoned");
    *stars = [None; 8];
}

/// Heliocentric EQJ position of a defined star slot, AU.
pub(crate) fn star_vector(body: Body) -> AstroResult<Vector3> {
    let index = slot(body)
        .ok_or(BodyError::InvalidBody { body })
        .context(BodyComputationSnafu {
            action: "resolving a star slot",
        })?;
    let star = STARS.read().expect("star table lock poisoned")[index]
        .ok_or(BodyError::UndefinedStar { body })
        .context(BodyComputationSnafu {
            action: "resolving a star slot",
        })?;
    let ra_rad = star.ra * 15.0_f64.to_radians();
    let dec_rad = star.dec.to_radians();
    Ok(Vector3::new(
        star.dist_au * dec_rad.cos() * ra_rad.cos(),
        star.dist_au * dec_rad.cos() * ra_rad.sin(),
        star.dist_au * dec_rad.sin(),
    ))
}

#[cfg(test)]
mod ut_star {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn define_and_resolve() {
        define_star(Body::Star8, 6.7525, -16.7183, 8.6).unwrap();
        let vec = star_vector(Body::Star8).unwrap();
        assert_relative_eq!(vec.norm(), 8.6 * AU_PER_LY, max_relative = 1e-12);
        let dec = (vec.z / vec.norm()).asin().to_degrees();
        assert_relative_eq!(dec, -16.7183, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(define_star(Body::Moon, 1.0, 2.0, 10.0).is_err());
        assert!(define_star(Body::Star7, 24.5, 2.0, 10.0).is_err());
        assert!(define_star(Body::Star7, 1.0, 95.0, 10.0).is_err());
        assert!(define_star(Body::Star7, 1.0, 2.0, 0.5).is_err());
        assert!(define_star(Body::Star7, f64::NAN, 2.0, 10.0).is_err());
        assert!(star_vector(Body::Star6).is_err());
    }
}
