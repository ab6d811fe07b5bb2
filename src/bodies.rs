/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::fmt;

use crate::constants::bodies::*;
use crate::errors::BodyError;

/// The closed set of bodies the engine understands.
///
/// `Star1` through `Star8` are user-defined fixed-star slots, filled with
/// [crate::ephemerides::define_star]. `Emb` is the Earth–Moon barycenter and
/// `Ssb` the solar-system barycenter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Body {
    Sun = 0,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
    Emb,
    Ssb,
    Star1,
    Star2,
    Star3,
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
}

impl Body {
    pub const PLANETS: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Gravitational parameter GM in AU³/day², if the body has one.
    pub fn gm(self) -> Option<f64> {
        match self {
            Body::Sun => Some(SUN_GM),
            Body::Mercury => Some(MERCURY_GM),
            Body::Venus => Some(VENUS_GM),
            Body::Earth => Some(EARTH_GM),
            Body::Mars => Some(MARS_GM),
            Body::Jupiter => Some(JUPITER_GM),
            Body::Saturn => Some(SATURN_GM),
            Body::Uranus => Some(URANUS_GM),
            Body::Neptune => Some(NEPTUNE_GM),
            Body::Pluto => Some(PLUTO_GM),
            Body::Moon => Some(MOON_GM),
            Body::Emb => Some(EARTH_GM + MOON_GM),
            _ => None,
        }
    }

    pub fn is_planet(self) -> bool {
        Body::PLANETS.contains(&self)
    }

    pub fn is_user_star(self) -> bool {
        matches!(
            self,
            Body::Star1
                | Body::Star2
                | Body::Star3
                | Body::Star4
                | Body::Star5
                | Body::Star6
                | Body::Star7
                | Body::Star8
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Moon => "Moon",
            Body::Emb => "Earth-Moon Barycenter",
            Body::Ssb => "Solar System Barycenter",
            Body::Star1 => "Star1",
            Body::Star2 => "Star2",
            Body::Star3 => "Star3",
            Body::Star4 => "Star4",
            Body::Star5 => "Star5",
            Body::Star6 => "Star6",
            Body::Star7 => "Star7",
            Body::Star8 => "Star8",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i32> for Body {
    type Error = BodyError;

    /// Out-of-range integers yield an error, never a panic. The enum
    /// representation is contiguous from `Sun = 0` to `Star8`.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        const ALL: [Body; 21] = [
            Body::Sun,
            Body::Mercury,
            Body::Venus,
            Body::Earth,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
            Body::Moon,
            Body::Emb,
            Body::Ssb,
            Body::Star1,
            Body::Star2,
            Body::Star3,
            Body::Star4,
            Body::Star5,
            Body::Star6,
            Body::Star7,
            Body::Star8,
        ];
        usize::try_from(code)
            .ok()
            .and_then(|idx| ALL.get(idx).copied())
            .ok_or(BodyError::UnknownBodyCode { code })
    }
}

#[cfg(test)]
mod ut_bodies {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..21 {
            let body = Body::try_from(code).unwrap();
            assert_eq!(body as i32, code);
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        for code in [-1, 21, 2112, i32::MAX, i32::MIN] {
            assert_eq!(
                Body::try_from(code),
                Err(BodyError::UnknownBodyCode { code })
            );
        }
    }

    #[test]
    fn masses_cover_the_gravitating_set() {
        for body in Body::PLANETS {
            assert!(body.gm().unwrap() > 0.0);
        }
        assert!(Body::Sun.gm().unwrap() > Body::Jupiter.gm().unwrap());
        assert_eq!(Body::Star1.gm(), None);
        assert_eq!(Body::Ssb.gm(), None);
    }
}
