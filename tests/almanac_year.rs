/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cross-module consistency over a full year of almanac-style queries.

use almagest::bodies::Body;
use almagest::events::{
    moon_phase, next_moon_quarter, search_lunar_apsis, next_lunar_apsis, search_moon_quarter,
    seasons, ApsisKind,
};
use almagest::frames::{frame_rotation, Frame};
use almagest::illumination::illumination;
use almagest::observer::Observer;
use almagest::time::AstroTime;

#[test]
fn moon_quarters_and_phase_agree() {
    // At each quarter event the phase function must read the quarter angle.
    let start = AstroTime::try_new(2023, 1, 1, 0, 0, 0.0).unwrap();
    let mut quarter = search_moon_quarter(start).unwrap();
    for _ in 0..16 {
        let phase = moon_phase(&quarter.time).unwrap();
        let target = 90.0 * quarter.quarter as f64;
        let diff = (phase - target + 180.0).rem_euclid(360.0) - 180.0;
        assert!(diff.abs() < 0.01, "phase {phase} at quarter {}", quarter.quarter);
        quarter = next_moon_quarter(&quarter).unwrap();
    }
}

#[test]
fn full_moon_is_brightest() {
    // Across one lunation the illuminated fraction peaks at the full moon.
    let start = AstroTime::try_new(2023, 3, 1, 0, 0, 0.0).unwrap();
    let mut quarter = search_moon_quarter(start).unwrap();
    while quarter.quarter != 2 {
        quarter = next_moon_quarter(&quarter).unwrap();
    }
    let at_full = illumination(Body::Moon, &quarter.time).unwrap();
    let week_before = illumination(Body::Moon, &quarter.time.add_days(-7.0)).unwrap();
    assert!(at_full.phase_fraction > 0.99);
    assert!(week_before.phase_fraction < 0.7);
    assert!(at_full.mag < week_before.mag);
}

#[test]
fn perigee_moon_looms_larger() {
    let start = AstroTime::try_new(2023, 1, 1, 0, 0, 0.0).unwrap();
    let mut apsis = search_lunar_apsis(start).unwrap();
    if apsis.kind != ApsisKind::Pericenter {
        apsis = next_lunar_apsis(&apsis).unwrap();
    }
    let at_perigee = almagest::libration::libration(&apsis.time);
    let apogee = next_lunar_apsis(&apsis).unwrap();
    let at_apogee = almagest::libration::libration(&apogee.time);
    assert!(at_perigee.diam_deg > at_apogee.diam_deg);
    assert!(at_perigee.dist_km < at_apogee.dist_km);
    assert!((at_perigee.dist_km - apsis.dist_km).abs() < 1.0);
}

#[test]
fn seasons_straddle_the_quarters_of_the_sky() {
    let info = seasons(2024).unwrap();
    // At the solstices the Sun stands at its declination extremes.
    let greenwich = Observer::new(51.4769, 0.0, 46.0);
    let june = almagest::topocentric::equator(
        Body::Sun,
        &info.jun_solstice,
        &greenwich,
        almagest::topocentric::EquatorDate::OfDate,
        almagest::ephemerides::Aberration::On,
    )
    .unwrap();
    let december = almagest::topocentric::equator(
        Body::Sun,
        &info.dec_solstice,
        &greenwich,
        almagest::topocentric::EquatorDate::OfDate,
        almagest::ephemerides::Aberration::On,
    )
    .unwrap();
    assert!((june.dec - 23.44).abs() < 0.05, "june dec {}", june.dec);
    assert!((december.dec + 23.44).abs() < 0.05, "december dec {}", december.dec);
}

#[test]
fn frame_invariants_hold_across_five_centuries() {
    // Round trips among all frames, sampled across [1700, 2200].
    let observer = Observer::new(-33.87, 151.21, 45.0);
    for year in [1700, 1825, 1950, 2075, 2200] {
        let time = AstroTime::try_new(year, 5, 17, 9, 30, 0.0).unwrap();
        for from in [Frame::Eqj, Frame::Eqd, Frame::Ecl, Frame::Ect, Frame::Hor, Frame::Gal] {
            for to in [Frame::Eqj, Frame::Eqd, Frame::Ecl, Frame::Ect, Frame::Hor, Frame::Gal] {
                let fwd = frame_rotation(from, to, &time, Some(&observer)).unwrap();
                let back = frame_rotation(to, from, &time, Some(&observer)).unwrap();
                let eye = (fwd.mat * back.mat) - nalgebra::Matrix3::identity();
                let worst = eye.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
                assert!(worst < 4.0e-15, "{from}->{to} in {year}: {worst}");
            }
        }
    }
}
