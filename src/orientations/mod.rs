/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Earth-orientation models: nutation and precession. Sidereal time lives
//! with the time scale in [crate::time].

pub mod nutation;
pub mod precession;

/// Mean obliquity of the ecliptic, degrees, IAU 2006 polynomial in TT days
/// since J2000.
pub fn mean_obliquity(tt_days: f64) -> f64 {
    let t = tt_days / 36_525.0;
    (84_381.406
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-5.76e-7 + t * -4.34e-8)))))
        / 3600.0
}
