/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! End-to-end scenario: a user-defined star observed from a real location.

use almagest::bodies::Body;
use almagest::ephemerides::define_star;
use almagest::events::{search_hour_angle, search_rise_set, Direction};
use almagest::observer::Observer;
use almagest::time::AstroTime;

fn sirius() -> Body {
    define_star(Body::Star1, 6.7525, -16.7183, 8.6).unwrap();
    Body::Star1
}

fn miami() -> Observer {
    Observer::new(25.77, -80.19, 3.0)
}

fn minutes_from(time: &AstroTime, h: i32, mi: i32, s: f64) -> f64 {
    let expected = AstroTime::try_new(2022, 11, 21, h, mi, s).unwrap();
    (time.ut - expected.ut) * 1440.0
}

#[test]
fn sirius_over_miami() {
    let star = sirius();
    let observer = miami();
    let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();

    let rise = search_rise_set(star, &observer, Direction::Rise, start, 1.0).unwrap();
    assert!(
        minutes_from(&rise, 2, 37, 19.0).abs() < 0.5,
        "rise at {rise}"
    );

    let culmination = search_hour_angle(star, &observer, 0.0, rise, 1).unwrap();
    assert!(
        minutes_from(&culmination.time, 8, 5, 41.0).abs() < 1.0,
        "culmination at {}",
        culmination.time
    );
    // Upper culmination altitude is 90 - |lat - dec|, and Sirius crosses due
    // south of Miami.
    assert!((culmination.hor.altitude - 47.5).abs() < 0.3);
    assert!((culmination.hor.azimuth - 180.0).abs() < 0.5);

    let set = search_rise_set(star, &observer, Direction::Set, rise, 1.0).unwrap();
    assert!(minutes_from(&set, 13, 34, 2.0).abs() < 0.5, "set at {set}");

    // The star is up for just under eleven hours at this declination.
    let up_hours = (set.ut - rise.ut) * 24.0;
    assert!((10.7..11.2).contains(&up_hours), "up for {up_hours} h");
}

#[test]
fn rise_set_symmetry_for_a_star() {
    let star = sirius();
    let observer = miami();
    let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
    let rise = search_rise_set(star, &observer, Direction::Rise, start, 1.0).unwrap();
    // Backward search from slightly after the event recovers it.
    let back = search_rise_set(
        star,
        &observer,
        Direction::Rise,
        rise.add_days(0.005),
        -1.0,
    )
    .unwrap();
    assert!(
        (back.ut - rise.ut).abs() * 86_400.0 < 0.1,
        "forward {rise} vs backward {back}"
    );
}

#[test]
fn star_never_rises_from_high_northern_latitude() {
    let star = sirius();
    // From 80 N, a star at declination -16.7 never clears the horizon.
    let alert = Observer::new(80.0, -62.0, 0.0);
    let start = AstroTime::try_new(2022, 11, 21, 0, 0, 0.0).unwrap();
    assert!(search_rise_set(star, &alert, Direction::Rise, start, 3.0).is_err());
}
