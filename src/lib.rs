/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Almagest is a self-contained astronomy calculation engine. Given a calendar
//! instant, and optionally a terrestrial observer, it computes positions,
//! velocities, orientations, and derived observational events (rises, sets,
//! culminations, eclipses, apsides, elongations, phases, conjunctions, lunar
//! nodes, librations) for the solar-system bodies and user-defined fixed stars.
//!
//! The engine performs no I/O and holds no state beyond its compiled-in series
//! tables, the user star slots, and any [simulation::GravitySimulator]
//! instances the caller creates. All query functions are pure with respect to
//! their inputs and may be called concurrently.

extern crate log;
extern crate nalgebra;

pub mod axis;
pub mod bodies;
pub mod constants;
pub mod ephemerides;
pub mod errors;
pub mod events;
pub mod frames;
pub mod illumination;
pub mod libration;
pub mod math;
pub mod observer;
pub mod orientations;
pub mod search;
pub mod simulation;
pub mod time;
pub mod topocentric;

pub mod prelude {
    pub use crate::bodies::Body;
    pub use crate::ephemerides::{geo_vector, helio_vector, Aberration};
    pub use crate::errors::{AstroError, AstroResult};
    pub use crate::frames::Frame;
    pub use crate::math::rotation::Rotation;
    pub use crate::math::{AstroVector, StateVector};
    pub use crate::observer::Observer;
    pub use crate::time::AstroTime;
    pub use crate::topocentric::{equator, horizon, EquatorDate, Refraction};
}
