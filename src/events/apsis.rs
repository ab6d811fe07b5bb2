/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Orbital distance extrema: lunar perigee/apogee and planetary
//! perihelion/aphelion.

use crate::bodies::Body;
use crate::constants::KM_PER_AU;
use crate::ephemerides::{geo_moon, helio_distance};
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError, SearchError, SearchSnafu};
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApsisKind {
    /// Closest approach: perigee for the Moon, perihelion for planets.
    Pericenter,
    /// Farthest point: apogee or aphelion.
    Apocenter,
}

/// A distance extremum event.
#[derive(Copy, Clone, Debug)]
pub struct Apsis {
    pub time: AstroTime,
    pub kind: ApsisKind,
    /// Distance in AU (to the Earth for the Moon, to the Sun for planets).
    pub dist_au: f64,
    /// The same distance in kilometers.
    pub dist_km: f64,
}

/// Searches for the next sign change of the distance slope after `start`,
/// sampling every `step` days for at most `samples` steps.
fn search_distance_extremum<D>(
    mut dist: D,
    start: AstroTime,
    step: f64,
    samples: usize,
) -> AstroResult<Apsis>
where
    D: FnMut(&AstroTime) -> AstroResult<f64>,
{
    let slope_dt = step / 50.0;
    let mut slope = |t: &AstroTime| -> AstroResult<f64> {
        let ahead = dist(&t.add_days(slope_dt))?;
        let behind = dist(&t.add_days(-slope_dt))?;
        Ok((ahead - behind) / (2.0 * slope_dt))
    };

    let mut t_prev = start;
    let mut s_prev = slope(&t_prev)?;
    for k in 1..=samples {
        let t_next = start.add_days(k as f64 * step);
        let s_next = slope(&t_next)?;
        if s_prev == 0.0 || s_prev * s_next < 0.0 {
            let time = search::search(&mut slope, t_prev, t_next, 1.0)?;
            let kind = if s_prev <= 0.0 {
                // Falling then rising distance: a minimum.
                ApsisKind::Pericenter
            } else {
                ApsisKind::Apocenter
            };
            let dist_au = dist(&time)?;
            return Ok(Apsis {
                time,
                kind,
                dist_au,
                dist_km: dist_au * KM_PER_AU,
            });
        }
        t_prev = t_next;
        s_prev = s_next;
    }
    Err(SearchError::NotFound {
        limit_days: samples as f64 * step,
    })
    .context(SearchSnafu {
        action: "distance extremum scan",
    })
}

/// Finds the first lunar perigee or apogee after `start`.
pub fn search_lunar_apsis(start: AstroTime) -> AstroResult<Apsis> {
    // Half the anomalistic month separates extrema; 3-day sampling cannot
    // skip one.
    search_distance_extremum(|t| Ok(geo_moon(t).length()), start, 3.0, 12)
}

/// The lunar apsis after `previous`; strictly later and of alternating kind.
pub fn next_lunar_apsis(previous: &Apsis) -> AstroResult<Apsis> {
    let next = search_lunar_apsis(previous.time.add_days(9.0))?;
    if next.kind == previous.kind {
        // Perigee and apogee must alternate.
        return Err(crate::errors::AstroError::Internal {
            action: "lunar apsis alternation",
        });
    }
    Ok(next)
}

fn planet_apsis_step(body: Body) -> f64 {
    super::orbital_period_days(body) / 12.0
}

/// Finds the first perihelion or aphelion of a planet after `start`.
pub fn search_planet_apsis(body: Body, start: AstroTime) -> AstroResult<Apsis> {
    if !(body.is_planet() || body == Body::Pluto) {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "searching a planet apsis",
        });
    }
    search_distance_extremum(
        |t| helio_distance(body, t),
        start,
        planet_apsis_step(body),
        16,
    )
}

/// The planetary apsis after `previous`, strictly later, alternating kind.
pub fn next_planet_apsis(body: Body, previous: &Apsis) -> AstroResult<Apsis> {
    let step = planet_apsis_step(body);
    let next = search_planet_apsis(body, previous.time.add_days(2.0 * step))?;
    if next.kind == previous.kind {
        return Err(crate::errors::AstroError::Internal {
            action: "planet apsis alternation",
        });
    }
    Ok(next)
}

#[cfg(test)]
mod ut_apsis {
    use super::*;

    #[test]
    fn lunar_apsides_alternate() {
        let start = AstroTime::try_new(2019, 1, 1, 0, 0, 0.0).unwrap();
        let mut apsis = search_lunar_apsis(start).unwrap();
        for _ in 0..10 {
            let next = next_lunar_apsis(&apsis).unwrap();
            assert_ne!(next.kind, apsis.kind);
            let gap = next.time.ut - apsis.time.ut;
            // Half an anomalistic month, with the well-known wobble.
            assert!((11.0..17.0).contains(&gap), "gap {gap}");
            apsis = next;
        }
    }

    #[test]
    fn lunar_distance_extremes() {
        let start = AstroTime::try_new(2020, 1, 1, 0, 0, 0.0).unwrap();
        let mut apsis = search_lunar_apsis(start).unwrap();
        for _ in 0..8 {
            match apsis.kind {
                ApsisKind::Pericenter => {
                    assert!((356_000.0..371_000.0).contains(&apsis.dist_km))
                }
                ApsisKind::Apocenter => {
                    assert!((403_000.0..407_000.0).contains(&apsis.dist_km))
                }
            }
            apsis = next_lunar_apsis(&apsis).unwrap();
        }
    }

    #[test]
    fn earth_perihelion_in_early_january() {
        let start = AstroTime::try_new(2021, 11, 15, 0, 0, 0.0).unwrap();
        let apsis = search_planet_apsis(Body::Earth, start).unwrap();
        assert_eq!(apsis.kind, ApsisKind::Pericenter);
        // The lunar wobble flattens the minimum, so allow a generous window
        // around the almanac value.
        let expected = AstroTime::try_new(2022, 1, 4, 7, 0, 0.0).unwrap();
        assert!(
            (apsis.time.ut - expected.ut).abs() < 2.5,
            "perihelion at {}",
            apsis.time
        );
        assert!((apsis.dist_au - 0.98330).abs() < 3.0e-4);
    }

    #[test]
    fn mercury_apsis_interval_ratio() {
        // Consecutive same-kind intervals stay close to the orbital period.
        let start = AstroTime::try_new(2000, 1, 1, 0, 0, 0.0).unwrap();
        let mut apsis = search_planet_apsis(Body::Mercury, start).unwrap();
        let mut perihelia = Vec::new();
        for _ in 0..8 {
            if apsis.kind == ApsisKind::Pericenter {
                perihelia.push(apsis.time.ut);
            }
            apsis = next_planet_apsis(Body::Mercury, &apsis).unwrap();
        }
        for pair in perihelia.windows(2) {
            let interval = pair[1] - pair[0];
            assert!(
                (interval - 87.969).abs() < 1.0,
                "perihelion interval {interval}"
            );
        }
    }

    #[test]
    fn mars_aphelion_distance() {
        let start = AstroTime::try_new(2021, 1, 1, 0, 0, 0.0).unwrap();
        let mut apsis = search_planet_apsis(Body::Mars, start).unwrap();
        if apsis.kind != ApsisKind::Apocenter {
            apsis = next_planet_apsis(Body::Mars, &apsis).unwrap();
        }
        assert!((apsis.dist_au - 1.6660).abs() < 0.002, "aphelion {}", apsis.dist_au);
    }

    #[test]
    fn rejects_non_orbiting_bodies() {
        let start = AstroTime::from_ut(0.0);
        assert!(search_planet_apsis(Body::Moon, start).is_err());
        assert!(search_planet_apsis(Body::Star1, start).is_err());
    }
}
