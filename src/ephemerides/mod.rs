/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Position engines for every supported body, and the geocentric view of
//! them. All public vectors are in EQJ unless a function says otherwise.

pub mod galilean;
pub mod lunar;
pub mod pluto;
mod pluto_data;
pub mod star;
pub(crate) mod vsop87;
mod vsop87_data;

pub use galilean::{jupiter_moons, JupiterMoons};
pub use lunar::{ecliptic_geo_moon, geo_moon, geo_moon_state};
pub use star::{clear_stars, define_star};

use lunar::geo_moon_pos;

use crate::bodies::Body;
use crate::constants::bodies::{EARTH_GM, MOON_GM};
use crate::constants::C_AUDAY;
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError};
use crate::math::{AstroVector, StateVector, Vector3};
use crate::time::AstroTime;

use snafu::ResultExt;

/// Whether to correct an apparent position for the observer's motion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Aberration {
    /// Geometric light-time-corrected (astrometric) position.
    None,
    /// Apply aberration: evaluate the observer at the retarded epoch too.
    On,
}

/// Earth's displacement from the Earth-Moon barycenter, as a fraction of the
/// geocentric lunar position.
const EARTH_FROM_EMB: f64 = MOON_GM / (EARTH_GM + MOON_GM);

/// Mass-weighted offset of the solar-system barycenter from the Sun, AU.
/// The Earth-Moon pair enters as a single mass at its barycenter.
pub(crate) fn ssb_offset_pos(tt: f64) -> Vector3 {
    let mut moment = Vector3::zeros();
    let mut total = crate::constants::bodies::SUN_GM;
    for body in Body::PLANETS {
        let gm = if body == Body::Earth {
            EARTH_GM + MOON_GM
        } else {
            body.gm().unwrap_or(0.0)
        };
        let pos = helio_pos_fast(if body == Body::Earth { Body::Emb } else { body }, tt);
        moment += pos * gm;
        total += gm;
    }
    moment / total
}

/// Barycenter offset with its time derivative, AU and AU/day.
pub(crate) fn ssb_offset_state(tt: f64) -> (Vector3, Vector3) {
    let mut moment = Vector3::zeros();
    let mut moment_dot = Vector3::zeros();
    let mut total = crate::constants::bodies::SUN_GM;
    for body in Body::PLANETS {
        let gm = if body == Body::Earth {
            EARTH_GM + MOON_GM
        } else {
            body.gm().unwrap_or(0.0)
        };
        let target = if body == Body::Earth { Body::Emb } else { body };
        let (pos, vel) = helio_state_fast(target, tt);
        moment += pos * gm;
        moment_dot += vel * gm;
        total += gm;
    }
    (moment / total, moment_dot / total)
}

/// Infallible heliocentric position for the bodies the gravity field and the
/// barycenter computation draw on. EQJ, AU.
pub(crate) fn helio_pos_fast(body: Body, tt: f64) -> Vector3 {
    match body {
        Body::Sun => Vector3::zeros(),
        Body::Moon => {
            helio_pos_fast(Body::Earth, tt) + geo_moon_pos(tt)
        }
        Body::Emb => {
            helio_pos_fast(Body::Earth, tt) + geo_moon_pos(tt) * EARTH_FROM_EMB
        }
        Body::Pluto => pluto::pluto_helio_state(tt).0,
        other => match vsop87::model_for(other) {
            Some(model) => vsop87::helio_state_eqj(model, tt).0,
            None => Vector3::zeros(),
        },
    }
}


/// Infallible heliocentric state for internal consumers. EQJ, AU, AU/day.
pub(crate) fn helio_state_fast(body: Body, tt: f64) -> (Vector3, Vector3) {
    match body {
        Body::Sun => (Vector3::zeros(), Vector3::zeros()),
        Body::Moon => {
            let (epos, evel) = helio_state_fast(Body::Earth, tt);
            let (mpos, mvel) = geo_moon_state_fast(tt);
            (epos + mpos, evel + mvel)
        }
        Body::Emb => {
            let (epos, evel) = helio_state_fast(Body::Earth, tt);
            let (mpos, mvel) = geo_moon_state_fast(tt);
            (
                epos + mpos * EARTH_FROM_EMB,
                evel + mvel * EARTH_FROM_EMB,
            )
        }
        Body::Pluto => pluto::pluto_helio_state(tt),
        other => match vsop87::model_for(other) {
            Some(model) => vsop87::helio_state_eqj(model, tt),
            None => (Vector3::zeros(), Vector3::zeros()),
        },
    }
}

fn geo_moon_state_fast(tt: f64) -> (Vector3, Vector3) {
    const DT: f64 = 1.0e-3;
    let here = geo_moon_pos(tt);
    let ahead = geo_moon_pos(tt + DT);
    let behind = geo_moon_pos(tt - DT);
    (here, (ahead - behind) / (2.0 * DT))
}

/// Heliocentric position of a body in EQJ, AU.
pub fn helio_vector(body: Body, time: &AstroTime) -> AstroResult<AstroVector> {
    let vec = match body {
        Body::Ssb => ssb_offset_pos(time.tt),
        other if other.is_user_star() => star::star_vector(other)?,
        Body::Sun
        | Body::Moon
        | Body::Emb
        | Body::Pluto
        | Body::Mercury
        | Body::Venus
        | Body::Earth
        | Body::Mars
        | Body::Jupiter
        | Body::Saturn
        | Body::Uranus
        | Body::Neptune => helio_pos_fast(body, time.tt),
        other => {
            return Err(BodyError::InvalidBody { body: other }).context(BodyComputationSnafu {
                action: "computing a heliocentric vector",
            })
        }
    };
    Ok(AstroVector::from_vec3(vec, *time))
}

/// Heliocentric position and velocity of a body in EQJ, AU and AU/day.
pub fn helio_state(body: Body, time: &AstroTime) -> AstroResult<StateVector> {
    let (pos, vel) = match body {
        Body::Ssb => ssb_offset_state(time.tt),
        other if other.is_user_star() => (star::star_vector(other)?, Vector3::zeros()),
        _ => {
            helio_vector(body, time)?; // reuse the body validation
            helio_state_fast(body, time.tt)
        }
    };
    Ok(StateVector::new(pos, vel, *time))
}

/// Distance between a body and the Sun, AU.
pub fn helio_distance(body: Body, time: &AstroTime) -> AstroResult<f64> {
    Ok(helio_vector(body, time)?.length())
}

/// State of a body relative to the solar-system barycenter. EQJ, AU, AU/day.
pub fn bary_state(body: Body, time: &AstroTime) -> AstroResult<StateVector> {
    let (off_pos, off_vel) = ssb_offset_state(time.tt);
    let state = helio_state(body, time)?;
    Ok(StateVector::new(
        state.pos - off_pos,
        state.vel - off_vel,
        *time,
    ))
}

/// Geocentric position of a body in EQJ, AU, corrected for light travel
/// time. With [Aberration::On] the Earth is also evaluated at the retarded
/// epoch, which reproduces annual aberration to first order.
pub fn geo_vector(body: Body, time: &AstroTime, aberration: Aberration) -> AstroResult<AstroVector> {
    match body {
        Body::Earth => {
            return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
                action: "computing a geocentric vector",
            })
        }
        Body::Moon => return Ok(geo_moon(time)),
        // Star coordinates are astrometric already; a light-time loop over
        // years of travel would only smear the parallax term.
        star if star.is_user_star() => {
            let vec = star::star_vector(star)? - helio_pos_fast(Body::Earth, time.tt);
            return Ok(AstroVector::from_vec3(vec, *time));
        }
        _ => {}
    }

    let earth_now = helio_pos_fast(Body::Earth, time.tt);
    let mut retarded = *time;
    let mut vec = Vector3::zeros();
    // Light-time iteration converges geometrically (factor v/c per round).
    for _ in 0..10 {
        let body_pos = helio_vector(body, &retarded)?.vec;
        let earth_pos = match aberration {
            Aberration::None => earth_now,
            Aberration::On => helio_pos_fast(Body::Earth, retarded.tt),
        };
        vec = body_pos - earth_pos;
        let light_days = vec.norm() / C_AUDAY;
        let next = AstroTime::from_ut(time.ut - light_days);
        if (next.tt - retarded.tt).abs() < 1.0e-9 {
            retarded = next;
            break;
        }
        retarded = next;
    }
    Ok(AstroVector::from_vec3(vec, *time))
}

/// Geometric geocentric state (no light-time correction). EQJ, AU, AU/day.
pub fn geo_state(body: Body, time: &AstroTime) -> AstroResult<StateVector> {
    if body == Body::Earth {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "computing a geocentric state",
        });
    }
    if body == Body::Moon {
        return Ok(geo_moon_state(time));
    }
    let state = helio_state(body, time)?;
    let (epos, evel) = helio_state_fast(Body::Earth, time.tt);
    Ok(StateVector::new(
        state.pos - epos,
        state.vel - evel,
        *time,
    ))
}
