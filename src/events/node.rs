/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Lunar nodes: the Moon's crossings of the ecliptic plane.

use crate::ephemerides::ecliptic_geo_moon;
use crate::errors::{AstroResult, SearchError, SearchSnafu};
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Latitude crossing from south to north.
    Ascending,
    /// Latitude crossing from north to south.
    Descending,
}

#[derive(Copy, Clone, Debug)]
pub struct NodeEvent {
    pub time: AstroTime,
    pub kind: NodeKind,
}

/// Finds the first node crossing after `start`. Crossings come every half
/// draconic month, about 13.6 days.
pub fn search_moon_node(start: AstroTime) -> AstroResult<NodeEvent> {
    let latitude = |t: &AstroTime| -> AstroResult<f64> { Ok(ecliptic_geo_moon(t).lat) };
    let step = 3.0;
    let mut t_prev = start;
    let mut lat_prev = latitude(&t_prev)?;
    for k in 1..=10 {
        let t_next = start.add_days(k as f64 * step);
        let lat_next = latitude(&t_next)?;
        if lat_prev == 0.0 || lat_prev * lat_next < 0.0 {
            let time = search::search(&latitude, t_prev, t_next, 0.5)?;
            let kind = if lat_prev <= 0.0 {
                NodeKind::Ascending
            } else {
                NodeKind::Descending
            };
            return Ok(NodeEvent { time, kind });
        }
        t_prev = t_next;
        lat_prev = lat_next;
    }
    Err(SearchError::NotFound { limit_days: 30.0 }).context(SearchSnafu {
        action: "moon node scan",
    })
}

/// The node after `previous`; nodes strictly alternate.
pub fn next_moon_node(previous: &NodeEvent) -> AstroResult<NodeEvent> {
    let next = search_moon_node(previous.time.add_days(9.0))?;
    if next.kind == previous.kind {
        return Err(crate::errors::AstroError::Internal {
            action: "moon node alternation",
        });
    }
    Ok(next)
}

#[cfg(test)]
mod ut_node {
    use super::*;

    #[test]
    fn nodes_alternate_every_half_draconic_month() {
        let start = AstroTime::try_new(2022, 1, 1, 0, 0, 0.0).unwrap();
        let mut node = search_moon_node(start).unwrap();
        for _ in 0..12 {
            let next = next_moon_node(&node).unwrap();
            assert_ne!(next.kind, node.kind);
            let gap = next.time.ut - node.time.ut;
            assert!((12.0..15.5).contains(&gap), "node gap {gap}");
            node = next;
        }
    }

    #[test]
    fn latitude_is_zero_at_the_node() {
        let start = AstroTime::try_new(2023, 6, 1, 0, 0, 0.0).unwrap();
        let node = search_moon_node(start).unwrap();
        let lat = ecliptic_geo_moon(&node.time).lat;
        // Half-second time tolerance translates to microdegrees of latitude.
        assert!(lat.abs() < 1.0e-4, "lat = {lat}");
    }

    #[test]
    fn ascending_node_goes_south_to_north() {
        let start = AstroTime::try_new(2022, 1, 1, 0, 0, 0.0).unwrap();
        let node = search_moon_node(start).unwrap();
        let before = ecliptic_geo_moon(&node.time.add_days(-0.5)).lat;
        let after = ecliptic_geo_moon(&node.time.add_days(0.5)).lat;
        match node.kind {
            NodeKind::Ascending => assert!(before < 0.0 && after > 0.0),
            NodeKind::Descending => assert!(before > 0.0 && after < 0.0),
        }
    }
}
