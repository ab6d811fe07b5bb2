/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Physical and conventional constants. All are compile-time data; nothing in
//! this module is configurable at run time.

/// Number of kilometers in one astronomical unit (DE-405 compatible).
pub const KM_PER_AU: f64 = 1.495_978_706_909_893_2e+8;

/// Speed of light in AU per day.
pub const C_AUDAY: f64 = 173.144_632_684_669_3;

/// Number of astronomical units in one light-year.
pub const AU_PER_LY: f64 = 63_241.077_084_266_28;

/// Mean length of the tropical year, in days. Used by the ΔT model to map a
/// day offset from J2000 onto a decimal calendar year.
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.242_17;

/// Mean synodic month, in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588;

/// Rotation rate of the Earth, in radians per second (IERS nominal value).
pub const EARTH_ANGVEL_RAD_PER_SEC: f64 = 7.292_115_0e-5;
/// Rotation rate of the Earth, in radians per day.
pub const EARTH_ROTATION_RAD_PER_DAY: f64 = EARTH_ANGVEL_RAD_PER_SEC * 86_400.0;

pub const DEG2RAD: f64 = 0.017_453_292_519_943_295;
pub const RAD2DEG: f64 = 57.295_779_513_082_32;
/// Hours of right ascension per radian.
pub const RAD2HOUR: f64 = 3.819_718_634_205_488;
pub const HOUR2RAD: f64 = 0.261_799_387_799_149_4;
pub const ARCSEC2DEG: f64 = 1.0 / 3600.0;

pub mod bodies {
    //! Gravitational parameters GM in AU³/day², DE-405 compatible values.

    pub const SUN_GM: f64 = 0.295_912_208_285_591_1e-03;
    pub const MERCURY_GM: f64 = 0.491_254_745_145_081_2e-10;
    pub const VENUS_GM: f64 = 0.724_345_248_616_270_3e-09;
    pub const EARTH_GM: f64 = 0.888_769_239_011_350_9e-09;
    pub const MOON_GM: f64 = EARTH_GM / 81.300_568;
    pub const MARS_GM: f64 = 0.954_953_510_577_925_8e-10;
    pub const JUPITER_GM: f64 = 0.282_534_590_952_422_6e-06;
    pub const SATURN_GM: f64 = 0.845_971_518_568_065_9e-07;
    pub const URANUS_GM: f64 = 0.129_202_491_678_196_9e-07;
    pub const NEPTUNE_GM: f64 = 0.152_435_890_078_427_6e-07;
    pub const PLUTO_GM: f64 = 0.218_869_976_542_597_0e-11;
}

pub mod shapes {
    //! Body radii and the Earth reference ellipsoid.

    pub const SUN_RADIUS_KM: f64 = 695_700.0;

    /// Equatorial radius of the reference ellipsoid (WGS-84-like), km.
    pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1366;
    /// Polar-to-equatorial radius ratio of the reference ellipsoid.
    pub const EARTH_FLATTENING_RATIO: f64 = 0.996_647_180_302_104;
    pub const EARTH_POLAR_RADIUS_KM: f64 = EARTH_EQUATORIAL_RADIUS_KM * EARTH_FLATTENING_RATIO;
    pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0084;
    /// Effective Earth radius for eclipse shadows: the geometric mean radius
    /// inflated by 1.01 to account for the opacity of the lower atmosphere
    /// (Danjon's rule).
    pub const EARTH_ECLIPSE_RADIUS_KM: f64 = 1.01 * EARTH_MEAN_RADIUS_KM;

    pub const MOON_EQUATORIAL_RADIUS_KM: f64 = 1738.1;
    pub const MOON_POLAR_RADIUS_KM: f64 = 1736.0;
    pub const MOON_MEAN_RADIUS_KM: f64 = 1737.4;

    pub const MERCURY_RADIUS_KM: f64 = 2439.7;
    pub const VENUS_RADIUS_KM: f64 = 6051.8;
    pub const MARS_RADIUS_KM: f64 = 3389.5;
    pub const JUPITER_EQUATORIAL_RADIUS_KM: f64 = 71_492.0;
    pub const JUPITER_MEAN_RADIUS_KM: f64 = 69_911.0;
    pub const SATURN_RADIUS_KM: f64 = 58_232.0;
    pub const URANUS_RADIUS_KM: f64 = 25_362.0;
    pub const NEPTUNE_RADIUS_KM: f64 = 24_622.0;
    pub const PLUTO_RADIUS_KM: f64 = 1188.3;
}

/// Mean obliquity of the ecliptic at J2000, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_279_444_444_445;
