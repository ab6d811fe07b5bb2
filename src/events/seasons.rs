/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Equinoxes and solstices: the times when the Sun's apparent ecliptic
//! longitude reaches a multiple of 90 degrees.

use crate::bodies::Body;
use crate::errors::{AstroResult, TimeSnafu};
use crate::math::angles::between_pm_180;
use crate::search;
use crate::time::AstroTime;

use snafu::ResultExt;

/// The four season boundaries of one calendar year, in time order.
#[derive(Copy, Clone, Debug)]
pub struct SeasonsInfo {
    pub mar_equinox: AstroTime,
    pub jun_solstice: AstroTime,
    pub sep_equinox: AstroTime,
    pub dec_solstice: AstroTime,
}

/// Finds when the Sun's apparent ecliptic-of-date longitude equals
/// `target_lon`, searching forward from `start` over `limit_days`.
pub fn search_sun_longitude(
    target_lon: f64,
    start: AstroTime,
    limit_days: f64,
) -> AstroResult<AstroTime> {
    let f = |t: &AstroTime| {
        Ok(between_pm_180(
            super::geo_ecliptic_longitude(Body::Sun, t)? - target_lon,
        ))
    };
    search::search(f, start, start.add_days(limit_days), 0.01)
}

/// The equinoxes and solstices of a calendar year.
pub fn seasons(year: i32) -> AstroResult<SeasonsInfo> {
    let window = |month, day, target| -> AstroResult<AstroTime> {
        let start = AstroTime::try_new(year, month, day, 0, 0, 0.0).context(TimeSnafu {
            action: "bracketing a season",
        })?;
        search_sun_longitude(target, start, 14.0)
    };
    Ok(SeasonsInfo {
        mar_equinox: window(3, 14, 0.0)?,
        jun_solstice: window(6, 14, 90.0)?,
        sep_equinox: window(9, 16, 180.0)?,
        dec_solstice: window(12, 15, 270.0)?,
    })
}

#[cfg(test)]
mod ut_seasons {
    use super::*;

    fn minutes_from(time: &AstroTime, y: i32, mo: i32, d: i32, h: i32, mi: i32) -> f64 {
        let expected = AstroTime::try_new(y, mo, d, h, mi, 0.0).unwrap();
        (time.ut - expected.ut) * 1440.0
    }

    #[test]
    fn seasons_2019() {
        // Published UTC times: within a handful of minutes of the series
        // truncation used here.
        let info = seasons(2019).unwrap();
        assert!(minutes_from(&info.mar_equinox, 2019, 3, 20, 21, 58).abs() < 4.0);
        assert!(minutes_from(&info.jun_solstice, 2019, 6, 21, 15, 54).abs() < 4.0);
        assert!(minutes_from(&info.sep_equinox, 2019, 9, 23, 7, 50).abs() < 4.0);
        assert!(minutes_from(&info.dec_solstice, 2019, 12, 22, 4, 19).abs() < 4.0);
    }

    #[test]
    fn ordering_and_spacing() {
        for year in [1750, 1900, 2065, 2190] {
            let info = seasons(year).unwrap();
            assert!(info.mar_equinox.ut < info.jun_solstice.ut);
            assert!(info.jun_solstice.ut < info.sep_equinox.ut);
            assert!(info.sep_equinox.ut < info.dec_solstice.ut);
            // The astronomical seasons are 89-94 days long.
            let spring = info.jun_solstice.ut - info.mar_equinox.ut;
            let summer = info.sep_equinox.ut - info.jun_solstice.ut;
            let autumn = info.dec_solstice.ut - info.sep_equinox.ut;
            for span in [spring, summer, autumn] {
                assert!((88.5..94.5).contains(&span), "season span {span} in {year}");
            }
        }
    }

    #[test]
    fn tropical_year_closes() {
        let a = seasons(2020).unwrap();
        let b = seasons(2021).unwrap();
        let year_len = b.mar_equinox.ut - a.mar_equinox.ut;
        assert!((year_len - 365.2422).abs() < 0.01, "tropical year {year_len}");
    }
}
