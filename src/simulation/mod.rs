/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A small-body gravity propagator. Massless test bodies move in the field of
//! the Sun, the eight planets, and the Moon, whose positions come from the
//! tabulated series at every substep rather than being integrated themselves.
//!
//! The integrator is velocity-Verlet, which preserves the symplectic
//! structure of the problem and keeps energy error bounded over long spans.
//! Each instance owns its state; concurrent use requires one instance per
//! thread.

use log::{debug, trace};

use crate::bodies::Body;
use crate::ephemerides;
use crate::errors::{AstroResult, MathSnafu, SimulationError, SimulationSnafu};
use crate::math::{StateVector, Vector3};
use crate::time::AstroTime;

use snafu::ResultExt;

/// Internal substep size, days. Small bodies of interest (comets, asteroids,
/// distant satellites) have orbital periods of years; one day resolves them.
const SUBSTEP_DAYS: f64 = 1.0;

/// Largest span a single `update` call may cover, days.
const MAX_SPAN_DAYS: f64 = 36_525.0;

/// The gravitating bodies driven by the series tables. Pluto is left out of
/// the field: its pull is negligible anywhere the series are valid, and the
/// Pluto model itself integrates against this module.
const SOURCES: [Body; 10] = [
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Earth,
    Body::Moon,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

pub struct GravitySimulator {
    origin: Body,
    time: AstroTime,
    /// User bodies: position and velocity relative to the origin, EQJ axes.
    bodies: Vec<(Vector3, Vector3)>,
}

/// Heliocentric positions of gravitating sources at `tt`, with their GM.
pub(crate) fn source_positions(sources: &[Body], tt: f64) -> Vec<(f64, Vector3)> {
    sources
        .iter()
        .map(|&body| {
            let gm = body.gm().unwrap_or(0.0);
            (gm, ephemerides::helio_pos_fast(body, tt))
        })
        .collect()
}

/// Newtonian acceleration at heliocentric position `pos`, AU/day². Entries
/// closer than a micro-AU are treated as the probe itself and skipped.
pub(crate) fn field_accel(sources: &[(f64, Vector3)], pos: &Vector3) -> Vector3 {
    let mut acc = Vector3::zeros();
    for (gm, src) in sources {
        let rel = src - pos;
        let dist2 = rel.norm_squared();
        if dist2 > 1.0e-12 {
            acc += rel * (gm / (dist2 * dist2.sqrt()));
        }
    }
    acc
}

impl GravitySimulator {
    /// Creates a simulator whose small bodies are expressed relative to
    /// `origin` at `time`. Every state must carry the same reference time as
    /// the simulator itself.
    pub fn new(origin: Body, time: AstroTime, states: &[StateVector]) -> AstroResult<Self> {
        if origin.is_user_star() || origin == Body::Pluto || origin == Body::Emb {
            return Err(SimulationError::InvalidOrigin { body: origin }).context(SimulationSnafu {
                action: "initializing the gravity simulator",
            });
        }
        let mut bodies = Vec::with_capacity(states.len());
        for state in states {
            state
                .check_finite("initializing the gravity simulator")
                .context(MathSnafu {
                    action: "initializing the gravity simulator",
                })?;
            if (state.t.tt - time.tt).abs() > 1.0e-9 {
                return Err(SimulationError::EpochMismatch {
                    got: state.t.tt,
                    expected: time.tt,
                })
                .context(SimulationSnafu {
                    action: "initializing the gravity simulator",
                });
            }
            bodies.push((state.pos, state.vel));
        }
        debug!(
            "gravity simulator: origin {origin}, {} bodies, tt = {}",
            bodies.len(),
            time.tt
        );
        Ok(Self {
            origin,
            time,
            bodies,
        })
    }

    pub fn time(&self) -> AstroTime {
        self.time
    }

    pub fn origin(&self) -> Body {
        self.origin
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Heliocentric position of the origin point at `tt`.
    fn origin_helio_pos(&self, tt: f64) -> Vector3 {
        match self.origin {
            Body::Ssb => ephemerides::ssb_offset_pos(tt),
            other => ephemerides::helio_pos_fast(other, tt),
        }
    }

    /// Acceleration of the origin point itself. The origin frame is not
    /// inertial unless it is the barycenter, so this is subtracted from every
    /// body's field acceleration.
    fn origin_accel(&self, sources: &[(f64, Vector3)], origin_pos: &Vector3) -> Vector3 {
        if self.origin == Body::Ssb {
            Vector3::zeros()
        } else {
            field_accel(sources, origin_pos)
        }
    }

    fn accel_at(&self, tt: f64, positions: &[Vector3]) -> Vec<Vector3> {
        let sources = source_positions(&SOURCES, tt);
        let origin_pos = self.origin_helio_pos(tt);
        let origin_acc = self.origin_accel(&sources, &origin_pos);
        positions
            .iter()
            .map(|rel| field_accel(&sources, &(origin_pos + rel)) - origin_acc)
            .collect()
    }

    /// Advances the simulation to `time` and returns the updated states in
    /// the origin frame. Backward targets are allowed; the integrator is
    /// time-symmetric.
    pub fn update(&mut self, time: AstroTime) -> AstroResult<Vec<StateVector>> {
        let span = time.tt - self.time.tt;
        if span.abs() > MAX_SPAN_DAYS {
            return Err(SimulationError::StepTooLarge { days: span }).context(SimulationSnafu {
                action: "advancing the gravity simulator",
            });
        }
        let steps = (span.abs() / SUBSTEP_DAYS).ceil().max(1.0);
        let h = span / steps;
        let n = steps as usize;
        trace!("gravity update: {span} days in {n} steps of {h}");

        let mut tt = self.time.tt;
        let mut pos: Vec<Vector3> = self.bodies.iter().map(|b| b.0).collect();
        let mut vel: Vec<Vector3> = self.bodies.iter().map(|b| b.1).collect();
        let mut acc = self.accel_at(tt, &pos);
        for _ in 0..n {
            for i in 0..pos.len() {
                pos[i] += vel[i] * h + acc[i] * (0.5 * h * h);
            }
            tt += h;
            let acc_next = self.accel_at(tt, &pos);
            for i in 0..vel.len() {
                vel[i] += (acc[i] + acc_next[i]) * (0.5 * h);
            }
            acc = acc_next;
        }

        self.time = time;
        for (body, state) in self.bodies.iter_mut().zip(pos.iter().zip(vel.iter())) {
            *body = (*state.0, *state.1);
        }
        Ok(self
            .bodies
            .iter()
            .map(|(p, v)| StateVector::new(*p, *v, time))
            .collect())
    }

    /// State of one of the user bodies, by index in the order supplied to
    /// [GravitySimulator::new].
    pub fn body_state(&self, index: usize) -> AstroResult<StateVector> {
        self.bodies
            .get(index)
            .map(|(p, v)| StateVector::new(*p, *v, self.time))
            .ok_or(SimulationError::NotInitialized)
            .context(SimulationSnafu {
                action: "reading a body state",
            })
    }

    /// State of a solar-system body in the origin frame at the simulator's
    /// current time.
    pub fn solar_system_body_state(&self, body: Body) -> AstroResult<StateVector> {
        let state = ephemerides::helio_state(body, &self.time)?;
        let origin_state = match self.origin {
            Body::Sun => StateVector::new(Vector3::zeros(), Vector3::zeros(), self.time),
            other => ephemerides::helio_state(other, &self.time)?,
        };
        Ok(StateVector::new(
            state.pos - origin_state.pos,
            state.vel - origin_state.vel,
            self.time,
        ))
    }
}

#[cfg(test)]
mod ut_simulation {
    use super::*;
    use crate::constants::bodies::SUN_GM;
    use approx::assert_relative_eq;

    fn circular_orbit(radius: f64, time: AstroTime) -> StateVector {
        let speed = (SUN_GM / radius).sqrt();
        StateVector::new(
            Vector3::new(radius, 0.0, 0.0),
            Vector3::new(0.0, speed, 0.0),
            time,
        )
    }

    #[test]
    fn rejects_bad_origins_and_epochs() {
        let time = AstroTime::from_ut(0.0);
        assert!(GravitySimulator::new(Body::Star1, time, &[]).is_err());
        assert!(GravitySimulator::new(Body::Pluto, time, &[]).is_err());
        let stale = StateVector::new(Vector3::x(), Vector3::y(), AstroTime::from_ut(1.0));
        assert!(GravitySimulator::new(Body::Sun, time, &[stale]).is_err());
        let broken = StateVector::new(
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::zeros(),
            time,
        );
        assert!(GravitySimulator::new(Body::Sun, time, &[broken]).is_err());
    }

    #[test]
    fn rejects_oversized_update() {
        let time = AstroTime::from_ut(0.0);
        let mut sim =
            GravitySimulator::new(Body::Sun, time, &[circular_orbit(3.0, time)]).unwrap();
        assert!(sim.update(AstroTime::from_ut(40_000.0)).is_err());
    }

    #[test]
    fn circular_orbit_stays_circular() {
        // A massless body on a circular 3 AU orbit should hold its radius to
        // a few parts in 1e3 over a year; the drift that remains is real
        // planetary perturbation, mostly Jupiter's.
        let time = AstroTime::from_ut(0.0);
        let mut sim =
            GravitySimulator::new(Body::Sun, time, &[circular_orbit(3.0, time)]).unwrap();
        let states = sim.update(time.add_days(365.25)).unwrap();
        let r = states[0].pos.norm();
        assert!((r - 3.0).abs() < 2.5e-3, "r = {r}");
        assert_relative_eq!(sim.time().tt, time.add_days(365.25).tt);
    }

    #[test]
    fn forward_backward_round_trip() {
        let time = AstroTime::from_ut(1000.0);
        let start = circular_orbit(2.5, time);
        let mut sim = GravitySimulator::new(Body::Sun, time, &[start]).unwrap();
        sim.update(time.add_days(200.0)).unwrap();
        let back = sim.update(time).unwrap();
        // Velocity-Verlet retraces its own path up to floating-point noise.
        assert!((back[0].pos - start.pos).norm() < 1e-9);
        assert!((back[0].vel - start.vel).norm() < 1e-9);
    }

    #[test]
    fn heliocentric_and_barycentric_frames_agree() {
        // Propagating the same body in the Sun frame and in the SSB frame
        // must land on the same heliocentric position.
        let time = AstroTime::from_ut(500.0);
        let helio = circular_orbit(4.0, time);
        let (off_pos, off_vel) = ephemerides::ssb_offset_state(time.tt);
        let ssb_start = StateVector::new(helio.pos - off_pos, helio.vel - off_vel, time);

        let target = time.add_days(30.0);
        let mut sim_helio = GravitySimulator::new(Body::Sun, time, &[helio]).unwrap();
        let after_helio = sim_helio.update(target).unwrap()[0];
        let mut sim_ssb = GravitySimulator::new(Body::Ssb, time, &[ssb_start]).unwrap();
        let after_ssb = sim_ssb.update(target).unwrap()[0];

        let (off_pos_after, _) = ephemerides::ssb_offset_state(target.tt);
        let helio_from_ssb = after_ssb.pos + off_pos_after;
        assert!(
            (after_helio.pos - helio_from_ssb).norm() < 1e-6,
            "frames disagree by {}",
            (after_helio.pos - helio_from_ssb).norm()
        );
    }

    #[test]
    fn planet_states_follow_the_series() {
        let time = AstroTime::from_ut(0.0);
        let sim = GravitySimulator::new(Body::Earth, time, &[]).unwrap();
        let sun = sim.solar_system_body_state(Body::Sun).unwrap();
        // Geocentric Sun distance is about 0.983 AU at J2000.
        assert!((sun.pos.norm() - 0.983).abs() < 0.002);
    }
}
