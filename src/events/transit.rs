/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Transits of Mercury and Venus across the Sun's disc.

use log::debug;

use crate::bodies::Body;
use crate::constants::shapes::SUN_RADIUS_KM;
use crate::constants::KM_PER_AU;
use crate::ephemerides::{geo_vector, helio_pos_fast, Aberration};
use crate::errors::{AstroResult, BodyComputationSnafu, BodyError, SearchError, SearchSnafu};
use crate::math::angle_between;
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

use super::elongation::search_relative_longitude;

/// A transit: first contact, deepest crossing, and last contact, with the
/// minimum angular separation between the centers in arcminutes.
#[derive(Copy, Clone, Debug)]
pub struct TransitEvent {
    pub start: AstroTime,
    pub peak: AstroTime,
    pub finish: AstroTime,
    pub separation: f64,
}

fn separation_deg(body: Body, time: &AstroTime) -> AstroResult<f64> {
    let planet = geo_vector(body, time, Aberration::On)?;
    let sun = geo_vector(Body::Sun, time, Aberration::On)?;
    Ok(angle_between(&planet.vec, &sun.vec))
}

/// Apparent angular radius of the Sun, degrees.
fn sun_radius_deg(time: &AstroTime) -> f64 {
    let dist_km = helio_pos_fast(Body::Earth, time.tt).norm() * KM_PER_AU;
    (SUN_RADIUS_KM / dist_km).asin().to_degrees()
}

/// Finds the next transit of Mercury or Venus after `start`. Scans inferior
/// conjunctions until the planet's disc actually crosses the Sun's.
pub fn search_transit(body: Body, start: AstroTime) -> AstroResult<TransitEvent> {
    if body != Body::Mercury && body != Body::Venus {
        return Err(BodyError::InvalidBody { body }).context(BodyComputationSnafu {
            action: "searching a transit",
        });
    }
    const SLOPE_DT: f64 = 0.02;
    let mut cursor = start;
    // Venus transits come in pairs more than a century apart, so the scan
    // must be allowed to walk a long way.
    for _ in 0..100 {
        let conj = search_relative_longitude(body, 0.0, cursor)?;
        cursor = conj.add_days(10.0);

        let slope = |t: &AstroTime| -> AstroResult<f64> {
            let ahead = separation_deg(body, &t.add_days(SLOPE_DT))?;
            let behind = separation_deg(body, &t.add_days(-SLOPE_DT))?;
            Ok((ahead - behind) / (2.0 * SLOPE_DT))
        };
        let Ok(peak) = search::search(slope, conj.add_days(-2.0), conj.add_days(2.0), 1.0) else {
            continue;
        };
        let threshold = sun_radius_deg(&peak);
        let peak_separation = separation_deg(body, &peak)?;
        debug!(
            "inferior conjunction {conj}: separation {:.3} deg vs solar radius {:.3}",
            peak_separation, threshold
        );
        if peak_separation < threshold {
            let contact = |t: &AstroTime| -> AstroResult<f64> {
                Ok(separation_deg(body, t)? - threshold)
            };
            let begin = search::search(&contact, peak.add_days(-0.4), peak, 1.0)?;
            let finish = search::search(&contact, peak, peak.add_days(0.4), 1.0)?;
            return Ok(TransitEvent {
                start: begin,
                peak,
                finish,
                separation: peak_separation * 60.0,
            });
        }
    }
    Err(SearchError::NotFound {
        limit_days: f64::INFINITY,
    })
    .context(SearchSnafu {
        action: "transit scan",
    })
}

/// The transit after the one that finished at `previous_finish`.
pub fn next_transit(body: Body, previous_finish: AstroTime) -> AstroResult<TransitEvent> {
    search_transit(body, previous_finish.add_days(100.0))
}
