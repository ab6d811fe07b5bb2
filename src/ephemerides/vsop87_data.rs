/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Truncated VSOP87D series for the eight planets: heliocentric spherical
//! coordinates (L, B, R) referred to the mean ecliptic and equinox of date.
//! Amplitudes are in radians (L, B) and AU (R); terms evaluate as
//! `A * cos(B + C * tau)` with `tau` in Julian millennia of TT from J2000.
//!
//! The truncation keeps every published term above roughly 1e-6 rad
//! (inner planets) to 1e-5 rad (outer planets), which holds the series
//! themselves to arcsecond class over several centuries around J2000.

use super::vsop87::{VsopModel, VsopTerm};


#[rustfmt::skip]
const MERCURY_L0: [VsopTerm; 38] = [
    VsopTerm::new(4.40250710e+00, 0.00000000, 0.00000000),
    VsopTerm::new(4.09894150e-01, 1.48302034, 26087.90314157),
    VsopTerm::new(5.04629400e-02, 4.47785449, 52175.80628314),
    VsopTerm::new(8.55347000e-03, 1.16520322, 78263.70942472),
    VsopTerm::new(1.65590000e-03, 4.11969163, 104351.61256629),
    VsopTerm::new(3.45620000e-04, 0.77930768, 130439.51570786),
    VsopTerm::new(7.58300000e-05, 3.71348404, 156527.42884943),
    VsopTerm::new(3.56000000e-05, 1.51202675, 1109.37855209),
    VsopTerm::new(1.80300000e-05, 4.10333178, 5661.33204915),
    VsopTerm::new(1.72600000e-05, 0.35832267, 182615.32199100),
    VsopTerm::new(1.59000000e-05, 2.99510423, 25028.52121138),
    VsopTerm::new(1.36500000e-05, 4.59918328, 27197.28169367),
    VsopTerm::new(1.01700000e-05, 0.88031393, 31749.23519072),
    VsopTerm::new(7.14000000e-06, 1.54144866, 24978.52458948),
    VsopTerm::new(6.44000000e-06, 5.30266166, 21535.94964452),
    VsopTerm::new(4.51000000e-06, 6.04989282, 51116.42435296),
    VsopTerm::new(4.04000000e-06, 3.28228953, 208703.22513257),
    VsopTerm::new(3.52000000e-06, 5.24156297, 20426.57109242),
    VsopTerm::new(3.45000000e-06, 2.79211954, 15874.61759536),
    VsopTerm::new(3.43000000e-06, 5.76531885, 955.59974160),
    VsopTerm::new(3.39000000e-06, 5.86327765, 25558.21217647),
    VsopTerm::new(3.25000000e-06, 1.33674488, 53285.18483524),
    VsopTerm::new(2.73000000e-06, 2.49451163, 529.69096509),
    VsopTerm::new(2.64000000e-06, 3.91705094, 57837.13824390),
    VsopTerm::new(2.60000000e-06, 0.98732774, 4551.95349705),
    VsopTerm::new(2.39000000e-06, 0.11343953, 1059.38193019),
    VsopTerm::new(2.35000000e-06, 0.26672118, 11322.66419307),
    VsopTerm::new(2.17000000e-06, 0.65987207, 13521.75144159),
    VsopTerm::new(2.09000000e-06, 2.09178234, 47623.85278608),
    VsopTerm::new(1.83000000e-06, 2.62878670, 27043.50288319),
    VsopTerm::new(1.82000000e-06, 2.43413502, 25661.30495062),
    VsopTerm::new(1.76000000e-06, 4.53636829, 51066.42773105),
    VsopTerm::new(1.73000000e-06, 2.45200164, 24498.83024629),
    VsopTerm::new(1.42000000e-06, 3.36003949, 37410.56723987),
    VsopTerm::new(1.38000000e-06, 0.29098447, 10213.28554621),
    VsopTerm::new(1.25000000e-06, 3.72079804, 39609.65541773),
    VsopTerm::new(1.18000000e-06, 2.78149786, 77204.32749453),
    VsopTerm::new(1.06000000e-06, 4.20572116, 19804.82729886),
];
#[rustfmt::skip]
const MERCURY_L1: [VsopTerm; 15] = [
    VsopTerm::new(2.60881471e+04, 0.00000000, 0.00000000),
    VsopTerm::new(1.12600800e-02, 6.21703971, 26087.90314157),
    VsopTerm::new(3.03471000e-03, 3.05565472, 52175.80628314),
    VsopTerm::new(8.05380000e-04, 6.10454743, 78263.70942472),
    VsopTerm::new(2.12450000e-04, 2.83531934, 104351.61256629),
    VsopTerm::new(5.59200000e-05, 5.82675673, 130439.51570786),
    VsopTerm::new(1.47200000e-05, 2.51845458, 156527.42884943),
    VsopTerm::new(3.88000000e-06, 5.48039226, 182615.32199100),
    VsopTerm::new(3.52000000e-06, 3.05238094, 1109.37855209),
    VsopTerm::new(1.03000000e-06, 2.14879173, 208703.22513257),
    VsopTerm::new(9.40000000e-07, 6.11791163, 27197.28169367),
    VsopTerm::new(9.10000000e-07, 0.00045481, 24978.52458948),
    VsopTerm::new(5.20000000e-07, 5.62107554, 5661.33204915),
    VsopTerm::new(4.40000000e-07, 4.57348500, 25028.52121138),
    VsopTerm::new(2.80000000e-07, 3.04195431, 51116.42435296),
];
#[rustfmt::skip]
const MERCURY_L2: [VsopTerm; 10] = [
    VsopTerm::new(5.30500000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(1.69040000e-04, 4.69072300, 26087.90314157),
    VsopTerm::new(7.39700000e-05, 1.34735624, 52175.80628314),
    VsopTerm::new(3.01800000e-05, 4.45643539, 78263.70942472),
    VsopTerm::new(1.10700000e-05, 1.26226538, 104351.61256629),
    VsopTerm::new(3.78000000e-06, 4.31998056, 130439.51570786),
    VsopTerm::new(1.23000000e-06, 1.06868541, 156527.42884943),
    VsopTerm::new(3.90000000e-07, 4.08133000, 182615.32199100),
    VsopTerm::new(1.50000000e-07, 4.63000000, 1109.37855209),
    VsopTerm::new(1.20000000e-07, 0.79000000, 208703.22513257),
];
#[rustfmt::skip]
const MERCURY_B0: [VsopTerm; 14] = [
    VsopTerm::new(1.17375290e-01, 1.98357499, 26087.90314157),
    VsopTerm::new(2.38807700e-02, 5.03738959, 52175.80628314),
    VsopTerm::new(1.22284000e-02, 3.14159265, 0.00000000),
    VsopTerm::new(5.43252000e-03, 1.79644364, 78263.70942472),
    VsopTerm::new(1.29779000e-03, 4.83232503, 104351.61256629),
    VsopTerm::new(3.18670000e-04, 1.58088495, 130439.51570786),
    VsopTerm::new(7.96300000e-05, 4.60972126, 156527.42884943),
    VsopTerm::new(2.01400000e-05, 1.35324164, 182615.32199100),
    VsopTerm::new(5.14000000e-06, 4.37835406, 208703.22513257),
    VsopTerm::new(2.09000000e-06, 2.02020294, 24978.52458948),
    VsopTerm::new(2.08000000e-06, 4.91772564, 27197.28169367),
    VsopTerm::new(1.32000000e-06, 1.11908492, 234791.12827416),
    VsopTerm::new(1.21000000e-06, 1.81271752, 53285.18483524),
    VsopTerm::new(1.00000000e-06, 5.65684734, 20426.57109242),
];
#[rustfmt::skip]
const MERCURY_B1: [VsopTerm; 11] = [
    VsopTerm::new(4.29151000e-03, 3.50169780, 26087.90314157),
    VsopTerm::new(1.46233000e-03, 3.14159265, 0.00000000),
    VsopTerm::new(2.26750000e-04, 0.01515366, 52175.80628314),
    VsopTerm::new(1.08950000e-04, 0.48540174, 78263.70942472),
    VsopTerm::new(6.35300000e-05, 3.42943919, 104351.61256629),
    VsopTerm::new(2.49600000e-05, 0.16051210, 130439.51570786),
    VsopTerm::new(8.60000000e-06, 3.18452434, 156527.42884943),
    VsopTerm::new(2.78000000e-06, 6.21020774, 182615.32199100),
    VsopTerm::new(8.60000000e-07, 2.95244392, 208703.22513257),
    VsopTerm::new(2.80000000e-07, 0.29068965, 27197.28169367),
    VsopTerm::new(2.60000000e-07, 5.97708962, 234791.12827416),
];
#[rustfmt::skip]
const MERCURY_B2: [VsopTerm; 9] = [
    VsopTerm::new(1.18310000e-04, 4.79065586, 26087.90314157),
    VsopTerm::new(1.91400000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(1.04500000e-05, 1.21216540, 52175.80628314),
    VsopTerm::new(2.66000000e-06, 4.43418337, 78263.70942472),
    VsopTerm::new(1.70000000e-06, 1.62255638, 104351.61256629),
    VsopTerm::new(9.60000000e-07, 4.80023692, 130439.51570786),
    VsopTerm::new(4.50000000e-07, 1.60758267, 156527.42884943),
    VsopTerm::new(1.80000000e-07, 4.66904655, 182615.32199100),
    VsopTerm::new(7.00000000e-08, 1.43404888, 208703.22513257),
];
#[rustfmt::skip]
const MERCURY_R0: [VsopTerm; 13] = [
    VsopTerm::new(3.95282720e-01, 0.00000000, 0.00000000),
    VsopTerm::new(7.83413200e-02, 6.19233722, 26087.90314157),
    VsopTerm::new(7.95526000e-03, 2.95989690, 52175.80628314),
    VsopTerm::new(1.21282000e-03, 6.01064153, 78263.70942472),
    VsopTerm::new(2.19220000e-04, 2.77820093, 104351.61256629),
    VsopTerm::new(4.35400000e-05, 5.82894543, 130439.51570786),
    VsopTerm::new(9.18000000e-06, 2.59650562, 156527.42884943),
    VsopTerm::new(2.90000000e-06, 1.42441937, 25028.52121138),
    VsopTerm::new(2.60000000e-06, 3.02817753, 27197.28169367),
    VsopTerm::new(2.02000000e-06, 5.64725040, 182615.32199100),
    VsopTerm::new(2.01000000e-06, 5.59227724, 31749.23519072),
    VsopTerm::new(1.42000000e-06, 6.25264202, 24978.52458948),
    VsopTerm::new(1.00000000e-06, 3.73435609, 21535.94964452),
];
#[rustfmt::skip]
const MERCURY_R1: [VsopTerm; 8] = [
    VsopTerm::new(2.17348000e-03, 4.65617159, 26087.90314157),
    VsopTerm::new(4.41420000e-04, 1.42385544, 52175.80628314),
    VsopTerm::new(1.00940000e-04, 4.47466326, 78263.70942472),
    VsopTerm::new(2.43300000e-05, 1.24226083, 104351.61256629),
    VsopTerm::new(1.62400000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(6.04000000e-06, 4.29303117, 130439.51570786),
    VsopTerm::new(1.53000000e-06, 1.06060779, 156527.42884943),
    VsopTerm::new(3.90000000e-07, 4.11136751, 182615.32199100),
];
#[rustfmt::skip]
const MERCURY_R2: [VsopTerm; 7] = [
    VsopTerm::new(3.11800000e-05, 3.08231840, 26087.90314157),
    VsopTerm::new(1.24500000e-05, 6.15183317, 52175.80628314),
    VsopTerm::new(4.25000000e-06, 2.92583353, 78263.70942472),
    VsopTerm::new(1.36000000e-06, 5.97983925, 104351.61256629),
    VsopTerm::new(4.20000000e-07, 2.69862000, 130439.51570786),
    VsopTerm::new(2.20000000e-07, 3.14159265, 0.00000000),
    VsopTerm::new(1.80000000e-07, 5.67259620, 156527.42884943),
];
#[rustfmt::skip]
const MERCURY_R3: [VsopTerm; 6] = [
    VsopTerm::new(4.36000000e-06, 1.62288399, 26087.90314157),
    VsopTerm::new(1.62000000e-06, 4.67000000, 52175.80628314),
    VsopTerm::new(7.40000000e-07, 1.61000000, 78263.70942472),
    VsopTerm::new(2.70000000e-07, 4.63000000, 104351.61256629),
    VsopTerm::new(9.00000000e-08, 1.61000000, 130439.51570786),
    VsopTerm::new(3.00000000e-08, 4.59000000, 156527.42884943),
];
pub(crate) const MERCURY: VsopModel = VsopModel {
    lon: &[&MERCURY_L0, &MERCURY_L1, &MERCURY_L2],
    lat: &[&MERCURY_B0, &MERCURY_B1, &MERCURY_B2],
    rad: &[&MERCURY_R0, &MERCURY_R1, &MERCURY_R2, &MERCURY_R3],
};

#[rustfmt::skip]
const VENUS_L0: [VsopTerm; 24] = [
    VsopTerm::new(3.17614667e+00, 0.00000000, 0.00000000),
    VsopTerm::new(1.35396800e-02, 5.59313319, 10213.28554621),
    VsopTerm::new(8.98920000e-04, 5.30650048, 20426.57109242),
    VsopTerm::new(5.47700000e-05, 4.41630652, 7860.41939244),
    VsopTerm::new(3.45600000e-05, 2.69964470, 11790.62908865),
    VsopTerm::new(2.37200000e-05, 2.99377539, 3930.20969622),
    VsopTerm::new(1.66400000e-05, 4.25018935, 1577.34354244),
    VsopTerm::new(1.43800000e-05, 4.15745043, 9683.59458112),
    VsopTerm::new(1.31700000e-05, 5.18668219, 26.29831980),
    VsopTerm::new(1.20100000e-05, 6.15357115, 30639.85663863),
    VsopTerm::new(7.69000000e-06, 0.81629615, 9437.76293489),
    VsopTerm::new(7.61000000e-06, 1.95014702, 529.69096509),
    VsopTerm::new(7.08000000e-06, 1.06466707, 775.52261132),
    VsopTerm::new(5.85000000e-06, 3.99839884, 191.44826611),
    VsopTerm::new(5.00000000e-06, 4.12340210, 15720.83878488),
    VsopTerm::new(4.29000000e-06, 3.58642859, 19367.18916223),
    VsopTerm::new(3.27000000e-06, 5.67736583, 5507.55323867),
    VsopTerm::new(3.26000000e-06, 4.59056473, 10404.73381232),
    VsopTerm::new(2.32000000e-06, 3.16251057, 9153.90361602),
    VsopTerm::new(1.80000000e-06, 4.65337915, 1109.37855209),
    VsopTerm::new(1.55000000e-06, 5.57043888, 19651.04848122),
    VsopTerm::new(1.28000000e-06, 4.22604493, 20.77539549),
    VsopTerm::new(1.28000000e-06, 0.96209822, 5661.33204915),
    VsopTerm::new(1.06000000e-06, 1.53721191, 801.82093112),
];
#[rustfmt::skip]
const VENUS_L1: [VsopTerm; 12] = [
    VsopTerm::new(1.02135294e+04, 0.00000000, 0.00000000),
    VsopTerm::new(9.57080000e-04, 2.46424449, 10213.28554621),
    VsopTerm::new(1.44450000e-04, 0.51624564, 20426.57109242),
    VsopTerm::new(2.13000000e-06, 1.79547929, 30639.85663863),
    VsopTerm::new(1.74000000e-06, 2.65535879, 26.29831980),
    VsopTerm::new(1.52000000e-06, 6.10635282, 1577.34354244),
    VsopTerm::new(8.20000000e-07, 5.70234134, 191.44826611),
    VsopTerm::new(7.00000000e-07, 2.68136035, 9437.76293489),
    VsopTerm::new(5.20000000e-07, 3.60013088, 775.52261132),
    VsopTerm::new(3.80000000e-07, 1.03379038, 529.69096509),
    VsopTerm::new(3.00000000e-07, 1.25056322, 5507.55323867),
    VsopTerm::new(2.50000000e-07, 6.10664792, 10404.73381232),
];
#[rustfmt::skip]
const VENUS_L2: [VsopTerm; 8] = [
    VsopTerm::new(5.41270000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(3.89100000e-05, 0.34514360, 10213.28554621),
    VsopTerm::new(1.33800000e-05, 2.02011286, 20426.57109242),
    VsopTerm::new(2.40000000e-07, 2.05000000, 26.29831980),
    VsopTerm::new(1.90000000e-07, 3.54000000, 30639.85663863),
    VsopTerm::new(1.00000000e-07, 3.97000000, 775.52261132),
    VsopTerm::new(7.00000000e-08, 1.52000000, 1577.34354244),
    VsopTerm::new(6.00000000e-08, 1.00000000, 191.44826611),
];
#[rustfmt::skip]
const VENUS_B0: [VsopTerm; 9] = [
    VsopTerm::new(5.92363800e-02, 0.26702775, 10213.28554621),
    VsopTerm::new(4.01080000e-04, 1.14737178, 20426.57109242),
    VsopTerm::new(3.28150000e-04, 3.14159265, 0.00000000),
    VsopTerm::new(1.01100000e-05, 1.08946123, 30639.85663863),
    VsopTerm::new(1.49000000e-06, 6.25390296, 18073.70493865),
    VsopTerm::new(1.38000000e-06, 0.86020146, 1577.34354244),
    VsopTerm::new(1.30000000e-06, 3.67152483, 9437.76293489),
    VsopTerm::new(1.20000000e-06, 3.70468812, 2352.86615377),
    VsopTerm::new(1.08000000e-06, 4.53903678, 22003.91463486),
];
#[rustfmt::skip]
const VENUS_B1: [VsopTerm; 4] = [
    VsopTerm::new(5.13348000e-03, 1.80364310, 10213.28554621),
    VsopTerm::new(4.38000000e-05, 3.38615712, 20426.57109242),
    VsopTerm::new(1.99000000e-06, 0.00000000, 0.00000000),
    VsopTerm::new(1.97000000e-06, 2.53001197, 30639.85663863),
];
#[rustfmt::skip]
const VENUS_B2: [VsopTerm; 4] = [
    VsopTerm::new(2.23780000e-04, 3.38509143, 10213.28554621),
    VsopTerm::new(2.82000000e-06, 0.00000000, 0.00000000),
    VsopTerm::new(1.73000000e-06, 5.25000000, 20426.57109242),
    VsopTerm::new(2.70000000e-07, 3.87000000, 30639.85663863),
];
#[rustfmt::skip]
const VENUS_R0: [VsopTerm; 12] = [
    VsopTerm::new(7.23348210e-01, 0.00000000, 0.00000000),
    VsopTerm::new(4.89824000e-03, 4.02151832, 10213.28554621),
    VsopTerm::new(1.65800000e-05, 4.90206728, 20426.57109242),
    VsopTerm::new(1.63200000e-05, 2.84548851, 7860.41939244),
    VsopTerm::new(1.37800000e-05, 1.12846590, 11790.62908865),
    VsopTerm::new(4.98000000e-06, 2.58682187, 9683.59458112),
    VsopTerm::new(3.74000000e-06, 1.42314837, 3930.20969622),
    VsopTerm::new(2.64000000e-06, 5.52938185, 9437.76293489),
    VsopTerm::new(2.37000000e-06, 2.55135903, 15720.83878488),
    VsopTerm::new(2.22000000e-06, 2.01346776, 19367.18916223),
    VsopTerm::new(1.26000000e-06, 2.72769833, 1577.34354244),
    VsopTerm::new(1.19000000e-06, 3.01975365, 10404.73381232),
];
#[rustfmt::skip]
const VENUS_R1: [VsopTerm; 3] = [
    VsopTerm::new(3.45510000e-04, 0.89198710, 10213.28554621),
    VsopTerm::new(2.34000000e-06, 1.77224942, 20426.57109242),
    VsopTerm::new(2.34000000e-06, 3.14159265, 0.00000000),
];
#[rustfmt::skip]
const VENUS_R2: [VsopTerm; 3] = [
    VsopTerm::new(1.40700000e-05, 5.06366395, 10213.28554621),
    VsopTerm::new(1.60000000e-07, 5.47000000, 20426.57109242),
    VsopTerm::new(1.30000000e-07, 0.00000000, 0.00000000),
];
pub(crate) const VENUS: VsopModel = VsopModel {
    lon: &[&VENUS_L0, &VENUS_L1, &VENUS_L2],
    lat: &[&VENUS_B0, &VENUS_B1, &VENUS_B2],
    rad: &[&VENUS_R0, &VENUS_R1, &VENUS_R2],
};

#[rustfmt::skip]
const EARTH_L0: [VsopTerm; 39] = [
    VsopTerm::new(1.75347046e+00, 0.00000000, 0.00000000),
    VsopTerm::new(3.34165600e-02, 4.66925680, 6283.07584999),
    VsopTerm::new(3.48940000e-04, 4.62610242, 12566.15169998),
    VsopTerm::new(3.49700000e-05, 2.74411783, 5753.38488490),
    VsopTerm::new(3.41800000e-05, 2.82886579, 3.52311835),
    VsopTerm::new(3.13600000e-05, 3.62767041, 77713.77146812),
    VsopTerm::new(2.67600000e-05, 4.41808345, 7860.41939244),
    VsopTerm::new(2.34300000e-05, 6.13516214, 3930.20969622),
    VsopTerm::new(1.32400000e-05, 0.74246341, 11506.76976979),
    VsopTerm::new(1.27300000e-05, 2.03709657, 529.69096509),
    VsopTerm::new(1.19900000e-05, 1.10962946, 1577.34354245),
    VsopTerm::new(9.90000000e-06, 5.23268072, 5884.92684658),
    VsopTerm::new(9.02000000e-06, 2.04505446, 26.29831980),
    VsopTerm::new(8.57000000e-06, 3.50849152, 398.14900340),
    VsopTerm::new(7.80000000e-06, 1.17882681, 5223.69391980),
    VsopTerm::new(7.53000000e-06, 2.53339053, 5507.55323867),
    VsopTerm::new(5.05000000e-06, 4.58292599, 18849.22754998),
    VsopTerm::new(4.92000000e-06, 4.20506639, 775.52261132),
    VsopTerm::new(3.57000000e-06, 2.91954116, 0.06731030),
    VsopTerm::new(3.17000000e-06, 5.84901948, 11790.62908865),
    VsopTerm::new(2.84000000e-06, 1.89869034, 796.29800661),
    VsopTerm::new(2.71000000e-06, 0.31486255, 10977.07880470),
    VsopTerm::new(2.43000000e-06, 0.34481445, 5486.77784318),
    VsopTerm::new(2.06000000e-06, 4.80646631, 2544.31441988),
    VsopTerm::new(2.05000000e-06, 1.86953770, 5573.14280143),
    VsopTerm::new(2.02000000e-06, 2.45767790, 6069.77675455),
    VsopTerm::new(1.56000000e-06, 0.83306084, 213.29909544),
    VsopTerm::new(1.32000000e-06, 3.41118292, 2942.46342329),
    VsopTerm::new(1.26000000e-06, 1.08302630, 20.77539549),
    VsopTerm::new(1.15000000e-06, 0.64544911, 0.98032107),
    VsopTerm::new(1.03000000e-06, 0.63600396, 4694.00295470),
    VsopTerm::new(1.02000000e-06, 0.97569280, 15720.83878488),
    VsopTerm::new(1.02000000e-06, 4.26679821, 7.11354700),
    VsopTerm::new(9.90000000e-07, 6.20992926, 2146.16541648),
    VsopTerm::new(9.80000000e-07, 0.68101342, 155.42039943),
    VsopTerm::new(8.60000000e-07, 5.98322631, 161000.68573767),
    VsopTerm::new(8.50000000e-07, 1.29870764, 6275.96230299),
    VsopTerm::new(8.50000000e-07, 3.67080093, 71430.69561813),
    VsopTerm::new(8.00000000e-07, 1.80791287, 17260.15465469),
];
#[rustfmt::skip]
const EARTH_L1: [VsopTerm; 28] = [
    VsopTerm::new(6.28331967e+03, 0.00000000, 0.00000000),
    VsopTerm::new(2.06059000e-03, 2.67823456, 6283.07584999),
    VsopTerm::new(4.30300000e-05, 2.63512650, 12566.15169998),
    VsopTerm::new(4.25000000e-06, 1.59046980, 3.52311835),
    VsopTerm::new(1.19000000e-06, 5.79557488, 26.29831980),
    VsopTerm::new(1.09000000e-06, 2.96618001, 1577.34354245),
    VsopTerm::new(9.30000000e-07, 2.59212835, 18849.22754998),
    VsopTerm::new(7.20000000e-07, 1.13846158, 529.69096509),
    VsopTerm::new(6.80000000e-07, 1.87472304, 398.14900340),
    VsopTerm::new(6.70000000e-07, 4.40918235, 5507.55323867),
    VsopTerm::new(5.90000000e-07, 2.88797038, 5223.69391980),
    VsopTerm::new(5.60000000e-07, 2.17471680, 155.42039943),
    VsopTerm::new(4.50000000e-07, 0.39803079, 796.29800661),
    VsopTerm::new(3.60000000e-07, 0.46624739, 775.52261132),
    VsopTerm::new(2.90000000e-07, 2.64707383, 7.11354700),
    VsopTerm::new(2.10000000e-07, 5.34138275, 0.98032107),
    VsopTerm::new(1.90000000e-07, 1.84628332, 5486.77784318),
    VsopTerm::new(1.90000000e-07, 4.96855124, 213.29909544),
    VsopTerm::new(1.70000000e-07, 2.99116864, 6275.96230299),
    VsopTerm::new(1.60000000e-07, 0.03216483, 2544.31441988),
    VsopTerm::new(1.60000000e-07, 1.43049285, 2146.16541648),
    VsopTerm::new(1.50000000e-07, 1.20532366, 10977.07880470),
    VsopTerm::new(1.20000000e-07, 2.83432285, 1748.01641307),
    VsopTerm::new(1.20000000e-07, 3.25804816, 5088.62883977),
    VsopTerm::new(1.20000000e-07, 5.27379790, 1194.44701022),
    VsopTerm::new(1.20000000e-07, 2.08322581, 4694.00295470),
    VsopTerm::new(1.10000000e-07, 0.77137714, 553.56940284),
    VsopTerm::new(1.00000000e-07, 1.30262991, 6286.59896834),
];
#[rustfmt::skip]
const EARTH_L2: [VsopTerm; 13] = [
    VsopTerm::new(5.29190000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(8.72000000e-05, 1.07209665, 6283.07584999),
    VsopTerm::new(3.09000000e-06, 0.86728818, 12566.15169998),
    VsopTerm::new(2.70000000e-07, 0.05297871, 3.52311835),
    VsopTerm::new(1.60000000e-07, 5.18826691, 26.29831980),
    VsopTerm::new(1.60000000e-07, 3.68457889, 155.42039943),
    VsopTerm::new(1.00000000e-07, 0.76042849, 18849.22754998),
    VsopTerm::new(9.00000000e-08, 2.05705419, 77713.77146812),
    VsopTerm::new(7.00000000e-08, 0.82673305, 775.52261132),
    VsopTerm::new(5.00000000e-08, 4.66284525, 1577.34354245),
    VsopTerm::new(4.00000000e-08, 1.03057162, 7.11354700),
    VsopTerm::new(4.00000000e-08, 3.44050803, 5573.14280143),
    VsopTerm::new(3.00000000e-08, 5.14074632, 796.29800661),
];
#[rustfmt::skip]
const EARTH_B0: [VsopTerm; 5] = [
    VsopTerm::new(2.80000000e-06, 3.19870156, 84334.66158131),
    VsopTerm::new(1.02000000e-06, 5.42248619, 5507.55323867),
    VsopTerm::new(8.00000000e-07, 3.88013204, 5223.69391980),
    VsopTerm::new(4.40000000e-07, 3.70444689, 2352.86615377),
    VsopTerm::new(3.20000000e-07, 4.00026370, 1577.34354245),
];
#[rustfmt::skip]
const EARTH_B1: [VsopTerm; 2] = [
    VsopTerm::new(9.00000000e-08, 3.90000000, 5507.55323867),
    VsopTerm::new(6.00000000e-08, 1.73000000, 5223.69391980),
];
#[rustfmt::skip]
const EARTH_R0: [VsopTerm; 40] = [
    VsopTerm::new(1.00013989e+00, 0.00000000, 0.00000000),
    VsopTerm::new(1.67070000e-02, 3.09846350, 6283.07584999),
    VsopTerm::new(1.39560000e-04, 3.05524609, 12566.15169998),
    VsopTerm::new(3.08400000e-05, 5.19846674, 77713.77146812),
    VsopTerm::new(1.62800000e-05, 1.17387558, 5753.38488490),
    VsopTerm::new(1.57600000e-05, 2.84685214, 7860.41939244),
    VsopTerm::new(9.25000000e-06, 5.45292236, 11506.76976979),
    VsopTerm::new(5.42000000e-06, 4.56409151, 3930.20969622),
    VsopTerm::new(4.72000000e-06, 3.66100022, 5884.92684658),
    VsopTerm::new(3.46000000e-06, 0.96368627, 5507.55323867),
    VsopTerm::new(3.29000000e-06, 5.89983686, 5223.69391980),
    VsopTerm::new(3.07000000e-06, 0.29867139, 5573.14280143),
    VsopTerm::new(2.43000000e-06, 4.27349530, 11790.62908865),
    VsopTerm::new(2.12000000e-06, 5.84714461, 1577.34354245),
    VsopTerm::new(1.86000000e-06, 5.02194447, 10977.07880470),
    VsopTerm::new(1.75000000e-06, 3.01193636, 18849.22754998),
    VsopTerm::new(1.10000000e-06, 5.05510635, 5486.77784318),
    VsopTerm::new(9.80000000e-07, 0.88681311, 6069.77675455),
    VsopTerm::new(8.60000000e-07, 5.68956418, 15720.83878488),
    VsopTerm::new(8.60000000e-07, 1.27095181, 161000.68573767),
    VsopTerm::new(6.50000000e-07, 0.27306586, 17260.15465469),
    VsopTerm::new(6.30000000e-07, 0.92177851, 529.69096509),
    VsopTerm::new(5.70000000e-07, 2.01304450, 83996.84731811),
    VsopTerm::new(5.60000000e-07, 5.24159799, 71430.69561813),
    VsopTerm::new(4.90000000e-07, 3.24501240, 2544.31441988),
    VsopTerm::new(4.70000000e-07, 2.57805070, 775.52261132),
    VsopTerm::new(4.50000000e-07, 5.53715807, 9437.76293489),
    VsopTerm::new(4.30000000e-07, 6.01110242, 6275.96230299),
    VsopTerm::new(3.90000000e-07, 5.36071738, 4694.00295470),
    VsopTerm::new(3.80000000e-07, 2.39255343, 8827.39026987),
    VsopTerm::new(3.70000000e-07, 0.82961281, 19651.04848122),
    VsopTerm::new(3.70000000e-07, 4.90107591, 12139.55350910),
    VsopTerm::new(3.60000000e-07, 1.67468058, 12036.46073488),
    VsopTerm::new(3.50000000e-07, 1.84270693, 2942.46342329),
    VsopTerm::new(3.30000000e-07, 0.24370300, 7084.89678112),
    VsopTerm::new(3.20000000e-07, 0.18368229, 5088.62883977),
    VsopTerm::new(3.20000000e-07, 1.77775642, 398.14900340),
    VsopTerm::new(2.80000000e-07, 1.21344868, 6286.59896834),
    VsopTerm::new(2.80000000e-07, 1.89934536, 6279.55273164),
    VsopTerm::new(2.60000000e-07, 4.58896850, 10447.38783960),
];
#[rustfmt::skip]
const EARTH_R1: [VsopTerm; 10] = [
    VsopTerm::new(1.03019000e-03, 1.10749003, 6283.07584999),
    VsopTerm::new(1.72100000e-05, 1.06442300, 12566.15169998),
    VsopTerm::new(7.02000000e-06, 3.14159265, 0.00000000),
    VsopTerm::new(3.20000000e-07, 1.02168583, 18849.22754998),
    VsopTerm::new(3.10000000e-07, 2.84358443, 5507.55323867),
    VsopTerm::new(2.50000000e-07, 1.31906570, 5223.69391980),
    VsopTerm::new(1.80000000e-07, 1.42428709, 1577.34354245),
    VsopTerm::new(1.00000000e-07, 5.91385248, 10977.07880470),
    VsopTerm::new(9.00000000e-08, 1.42046854, 6275.96230299),
    VsopTerm::new(9.00000000e-08, 0.27146150, 5486.77784318),
];
#[rustfmt::skip]
const EARTH_R2: [VsopTerm; 6] = [
    VsopTerm::new(4.35900000e-05, 5.78455133, 6283.07584999),
    VsopTerm::new(1.24000000e-06, 5.57935427, 12566.15169998),
    VsopTerm::new(1.20000000e-07, 3.14159265, 0.00000000),
    VsopTerm::new(9.00000000e-08, 3.62777893, 77713.77146812),
    VsopTerm::new(6.00000000e-08, 1.86958905, 5573.14280143),
    VsopTerm::new(3.00000000e-08, 5.47034879, 18849.22754998),
];
#[rustfmt::skip]
const EARTH_R3: [VsopTerm; 2] = [
    VsopTerm::new(1.45000000e-06, 4.27319433, 6283.07584999),
    VsopTerm::new(7.00000000e-08, 3.91706261, 12566.15169998),
];
pub(crate) const EARTH: VsopModel = VsopModel {
    lon: &[&EARTH_L0, &EARTH_L1, &EARTH_L2],
    lat: &[&EARTH_B0, &EARTH_B1],
    rad: &[&EARTH_R0, &EARTH_R1, &EARTH_R2, &EARTH_R3],
};

#[rustfmt::skip]
const MARS_L0: [VsopTerm; 60] = [
    VsopTerm::new(6.20347712e+00, 0.00000000, 0.00000000),
    VsopTerm::new(1.86563680e-01, 5.05037100, 3340.61242670),
    VsopTerm::new(1.10821700e-02, 5.40099837, 6681.22485340),
    VsopTerm::new(9.17980000e-04, 5.75478745, 10021.83728010),
    VsopTerm::new(2.77450000e-04, 5.97049513, 3.52311835),
    VsopTerm::new(1.23160000e-04, 0.84956094, 2810.92146160),
    VsopTerm::new(1.06100000e-04, 2.93958560, 2281.23049651),
    VsopTerm::new(8.92700000e-05, 4.15697846, 0.01725365),
    VsopTerm::new(8.71600000e-05, 6.11005153, 13362.44970680),
    VsopTerm::new(7.77500000e-05, 3.33968655, 5621.84292321),
    VsopTerm::new(6.79800000e-05, 0.36462229, 398.14900340),
    VsopTerm::new(4.16100000e-05, 0.22814971, 2942.46342329),
    VsopTerm::new(3.57500000e-05, 1.66186505, 2544.31441988),
    VsopTerm::new(3.07500000e-05, 0.85696614, 191.44826611),
    VsopTerm::new(2.93800000e-05, 6.07893711, 0.06731030),
    VsopTerm::new(2.62800000e-05, 0.64806045, 3337.08930835),
    VsopTerm::new(2.58000000e-05, 0.02996736, 3344.13554505),
    VsopTerm::new(2.38900000e-05, 5.03896442, 796.29800661),
    VsopTerm::new(1.79900000e-05, 0.65634057, 529.69096509),
    VsopTerm::new(1.54600000e-05, 2.91579701, 1751.53953142),
    VsopTerm::new(1.52800000e-05, 1.14979301, 6151.53388830),
    VsopTerm::new(1.28600000e-05, 3.06796065, 2146.16541648),
    VsopTerm::new(1.26400000e-05, 3.62275122, 5092.15195812),
    VsopTerm::new(1.02500000e-05, 3.69334099, 8962.45534991),
    VsopTerm::new(8.92000000e-06, 0.18293837, 16703.06213349),
    VsopTerm::new(8.59000000e-06, 2.40093811, 2914.01423582),
    VsopTerm::new(8.33000000e-06, 4.49495782, 3340.62968035),
    VsopTerm::new(8.33000000e-06, 2.46418619, 3340.59517305),
    VsopTerm::new(7.49000000e-06, 3.82248614, 155.42039943),
    VsopTerm::new(7.24000000e-06, 0.67497311, 3738.76143011),
    VsopTerm::new(7.13000000e-06, 3.66335473, 1059.38193019),
    VsopTerm::new(6.55000000e-06, 0.48864064, 3127.31333126),
    VsopTerm::new(6.36000000e-06, 2.92182225, 8432.76438482),
    VsopTerm::new(5.53000000e-06, 4.47479317, 1748.01641307),
    VsopTerm::new(5.50000000e-06, 3.81001205, 0.98032107),
    VsopTerm::new(4.72000000e-06, 3.62547124, 1194.44701022),
    VsopTerm::new(4.26000000e-06, 0.55364317, 6283.07584999),
    VsopTerm::new(4.15000000e-06, 0.49662285, 213.29909544),
    VsopTerm::new(3.12000000e-06, 0.99853944, 6677.70173505),
    VsopTerm::new(3.07000000e-06, 0.38052862, 6684.74797175),
    VsopTerm::new(3.02000000e-06, 4.48618007, 3532.06069281),
    VsopTerm::new(2.99000000e-06, 2.78323740, 6254.62666252),
    VsopTerm::new(2.93000000e-06, 4.22131299, 20.77539549),
    VsopTerm::new(2.84000000e-06, 5.76885434, 3149.16416059),
    VsopTerm::new(2.81000000e-06, 5.88163521, 1349.86740966),
    VsopTerm::new(2.74000000e-06, 0.54222167, 3340.54511640),
    VsopTerm::new(2.74000000e-06, 0.13427523, 3340.67999020),
    VsopTerm::new(2.39000000e-06, 5.37155471, 4136.91043352),
    VsopTerm::new(2.36000000e-06, 5.75504515, 3333.49887969),
    VsopTerm::new(2.31000000e-06, 1.28240685, 3870.30339179),
    VsopTerm::new(2.21000000e-06, 3.50466812, 382.89653222),
    VsopTerm::new(2.04000000e-06, 2.82133266, 1221.84856632),
    VsopTerm::new(1.93000000e-06, 3.35715137, 3.59042865),
    VsopTerm::new(1.89000000e-06, 1.49103016, 9492.14631500),
    VsopTerm::new(1.79000000e-06, 1.00561962, 951.71840625),
    VsopTerm::new(1.74000000e-06, 2.41360332, 553.56940284),
    VsopTerm::new(1.72000000e-06, 0.43943041, 5486.77784318),
    VsopTerm::new(1.60000000e-06, 3.94854735, 4562.46099302),
    VsopTerm::new(1.44000000e-06, 1.41874193, 135.06508003),
    VsopTerm::new(1.40000000e-06, 3.32592516, 2700.71514039),
];
#[rustfmt::skip]
const MARS_L1: [VsopTerm; 27] = [
    VsopTerm::new(3.34085627e+03, 0.00000000, 0.00000000),
    VsopTerm::new(1.45822700e-02, 3.60426053, 3340.61242670),
    VsopTerm::new(1.64901000e-03, 3.92631250, 6681.22485340),
    VsopTerm::new(1.99630000e-04, 4.26594061, 10021.83728010),
    VsopTerm::new(3.45200000e-05, 4.73210386, 3.52311835),
    VsopTerm::new(2.48500000e-05, 4.61277567, 13362.44970680),
    VsopTerm::new(8.42000000e-06, 4.45858256, 2281.23049651),
    VsopTerm::new(5.38000000e-06, 5.01589727, 398.14900340),
    VsopTerm::new(5.21000000e-06, 4.99422678, 3344.13554505),
    VsopTerm::new(4.33000000e-06, 2.56066402, 191.44826611),
    VsopTerm::new(4.30000000e-06, 5.31646162, 155.42039943),
    VsopTerm::new(3.82000000e-06, 3.53881289, 796.29800661),
    VsopTerm::new(3.14000000e-06, 4.96335266, 16703.06213349),
    VsopTerm::new(2.83000000e-06, 3.15967518, 2544.31441988),
    VsopTerm::new(2.06000000e-06, 4.56891455, 2146.16541648),
    VsopTerm::new(1.69000000e-06, 1.32894813, 3337.08930835),
    VsopTerm::new(1.58000000e-06, 4.18501036, 1751.53953142),
    VsopTerm::new(1.34000000e-06, 2.23325104, 0.98032107),
    VsopTerm::new(1.34000000e-06, 5.97421903, 1748.01641307),
    VsopTerm::new(1.18000000e-06, 6.02407213, 6151.53388830),
    VsopTerm::new(1.17000000e-06, 2.21347652, 1059.38193019),
    VsopTerm::new(1.14000000e-06, 2.12869455, 1109.37855209),
    VsopTerm::new(1.14000000e-06, 5.42803224, 3738.76143011),
    VsopTerm::new(9.10000000e-07, 1.09627836, 1349.86740966),
    VsopTerm::new(8.50000000e-07, 3.90854841, 553.56940284),
    VsopTerm::new(8.30000000e-07, 5.29636626, 6684.74797175),
    VsopTerm::new(8.10000000e-07, 4.42813405, 529.69096509),
];
#[rustfmt::skip]
const MARS_L2: [VsopTerm; 14] = [
    VsopTerm::new(5.80160000e-04, 2.04979463, 3340.61242670),
    VsopTerm::new(5.41880000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(1.39080000e-04, 2.45742359, 6681.22485340),
    VsopTerm::new(2.46500000e-05, 2.80000020, 10021.83728010),
    VsopTerm::new(3.98000000e-06, 3.14118428, 13362.44970680),
    VsopTerm::new(2.22000000e-06, 3.19436080, 3.52311835),
    VsopTerm::new(1.21000000e-06, 0.54325292, 155.42039943),
    VsopTerm::new(6.20000000e-07, 3.48529427, 16703.06213349),
    VsopTerm::new(5.40000000e-07, 3.54191121, 3344.13554505),
    VsopTerm::new(3.40000000e-07, 6.00188499, 2281.23049651),
    VsopTerm::new(3.20000000e-07, 4.14015171, 191.44826611),
    VsopTerm::new(3.00000000e-07, 1.99870459, 796.29800661),
    VsopTerm::new(2.20000000e-07, 3.44555899, 398.14900340),
    VsopTerm::new(2.00000000e-07, 5.42000000, 553.56940284),
];
#[rustfmt::skip]
const MARS_B0: [VsopTerm; 16] = [
    VsopTerm::new(3.19713500e-02, 3.76832042, 3340.61242670),
    VsopTerm::new(2.98033000e-03, 4.10616996, 6681.22485340),
    VsopTerm::new(2.89105000e-03, 0.00000000, 0.00000000),
    VsopTerm::new(3.13660000e-04, 4.44651053, 10021.83728010),
    VsopTerm::new(3.48400000e-05, 4.78812549, 13362.44970680),
    VsopTerm::new(4.43000000e-06, 5.65233014, 3337.08930835),
    VsopTerm::new(4.43000000e-06, 5.02642622, 3344.13554505),
    VsopTerm::new(3.99000000e-06, 5.13056816, 16703.06213349),
    VsopTerm::new(2.93000000e-06, 3.79290674, 2281.23049651),
    VsopTerm::new(1.82000000e-06, 6.13648041, 6151.53388830),
    VsopTerm::new(1.63000000e-06, 4.26399640, 529.69096509),
    VsopTerm::new(1.60000000e-06, 2.23194572, 1059.38193019),
    VsopTerm::new(1.49000000e-06, 2.16501221, 5621.84292321),
    VsopTerm::new(1.43000000e-06, 1.18215016, 3340.59517305),
    VsopTerm::new(1.43000000e-06, 3.21292181, 3340.62968035),
    VsopTerm::new(1.39000000e-06, 2.41796458, 8962.45534991),
];
#[rustfmt::skip]
const MARS_B1: [VsopTerm; 9] = [
    VsopTerm::new(3.50069000e-03, 5.36847836, 3340.61242670),
    VsopTerm::new(1.41160000e-04, 3.14159265, 0.00000000),
    VsopTerm::new(9.67100000e-05, 5.47877786, 6681.22485340),
    VsopTerm::new(1.47200000e-05, 3.20205766, 10021.83728010),
    VsopTerm::new(4.26000000e-06, 3.40843813, 13362.44970680),
    VsopTerm::new(1.02000000e-06, 0.77617286, 3337.08930835),
    VsopTerm::new(7.90000000e-07, 3.72000000, 16703.06213349),
    VsopTerm::new(3.30000000e-07, 3.46000000, 5621.84292321),
    VsopTerm::new(2.60000000e-07, 2.48000000, 2281.23049651),
];
#[rustfmt::skip]
const MARS_B2: [VsopTerm; 6] = [
    VsopTerm::new(1.67270000e-04, 0.60221392, 3340.61242670),
    VsopTerm::new(4.98700000e-05, 3.14159265, 0.00000000),
    VsopTerm::new(3.02000000e-06, 5.55871276, 6681.22485340),
    VsopTerm::new(2.60000000e-07, 1.90000000, 13362.44970680),
    VsopTerm::new(2.10000000e-07, 0.92000000, 10021.83728010),
    VsopTerm::new(1.20000000e-07, 2.24000000, 3337.08930835),
];
#[rustfmt::skip]
const MARS_R0: [VsopTerm; 45] = [
    VsopTerm::new(1.53033488e+00, 0.00000000, 0.00000000),
    VsopTerm::new(1.41849530e-01, 3.47971284, 3340.61242670),
    VsopTerm::new(6.60776000e-03, 3.81783443, 6681.22485340),
    VsopTerm::new(4.61790000e-04, 4.15595316, 10021.83728010),
    VsopTerm::new(8.11000000e-05, 5.55958416, 2810.92146160),
    VsopTerm::new(7.48500000e-05, 1.77239078, 5621.84292321),
    VsopTerm::new(5.52300000e-05, 1.36436303, 2281.23049651),
    VsopTerm::new(3.82500000e-05, 4.49407183, 13362.44970680),
    VsopTerm::new(2.48400000e-05, 4.92545639, 2942.46342329),
    VsopTerm::new(2.30700000e-05, 0.09081579, 2544.31441988),
    VsopTerm::new(1.99900000e-05, 5.36059605, 3337.08930835),
    VsopTerm::new(1.96000000e-05, 4.74249386, 3344.13554505),
    VsopTerm::new(1.16700000e-05, 2.11260868, 5092.15195812),
    VsopTerm::new(1.10300000e-05, 5.00908403, 398.14900340),
    VsopTerm::new(9.92000000e-06, 5.83861961, 6151.53388830),
    VsopTerm::new(8.99000000e-06, 4.40790433, 529.69096509),
    VsopTerm::new(8.07000000e-06, 2.10217065, 1059.38193019),
    VsopTerm::new(7.98000000e-06, 3.44839026, 796.29800661),
    VsopTerm::new(7.41000000e-06, 1.49906336, 2146.16541648),
    VsopTerm::new(7.26000000e-06, 1.24516810, 8432.76438482),
    VsopTerm::new(6.92000000e-06, 2.13378814, 8962.45534991),
    VsopTerm::new(6.33000000e-06, 0.89353285, 3340.59517305),
    VsopTerm::new(6.33000000e-06, 2.92430446, 3340.62968035),
    VsopTerm::new(6.30000000e-06, 1.28738135, 1751.53953142),
    VsopTerm::new(5.74000000e-06, 0.82896244, 2914.01423582),
    VsopTerm::new(5.26000000e-06, 5.38292991, 3738.76143011),
    VsopTerm::new(4.73000000e-06, 5.19850522, 3127.31333126),
    VsopTerm::new(3.48000000e-06, 4.83219199, 16703.06213349),
    VsopTerm::new(2.84000000e-06, 2.90692064, 3532.06069281),
    VsopTerm::new(2.80000000e-06, 5.25749247, 6283.07584999),
    VsopTerm::new(2.76000000e-06, 1.21767967, 6254.62666252),
    VsopTerm::new(2.75000000e-06, 2.90818883, 1748.01641307),
    VsopTerm::new(2.70000000e-06, 3.76394728, 5884.92684658),
    VsopTerm::new(2.39000000e-06, 2.03669934, 1194.44701022),
    VsopTerm::new(2.34000000e-06, 5.10546492, 5486.77784318),
    VsopTerm::new(2.28000000e-06, 3.25529020, 6872.67311951),
    VsopTerm::new(2.23000000e-06, 4.19861594, 3149.16416059),
    VsopTerm::new(2.19000000e-06, 5.58340248, 191.44826611),
    VsopTerm::new(2.08000000e-06, 5.25476078, 3340.54511640),
    VsopTerm::new(2.08000000e-06, 4.84626442, 3340.67999020),
    VsopTerm::new(1.86000000e-06, 5.69871555, 6677.70173505),
    VsopTerm::new(1.83000000e-06, 5.08062683, 6684.74797175),
    VsopTerm::new(1.79000000e-06, 4.18423025, 3333.49887969),
    VsopTerm::new(1.76000000e-06, 5.95341919, 3870.30339179),
    VsopTerm::new(1.64000000e-06, 3.79889068, 4136.91043352),
];
#[rustfmt::skip]
const MARS_R1: [VsopTerm; 25] = [
    VsopTerm::new(1.10743300e-02, 2.03250524, 3340.61242670),
    VsopTerm::new(1.03176000e-03, 2.37071847, 6681.22485340),
    VsopTerm::new(1.28770000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(1.08160000e-04, 2.70888095, 10021.83728010),
    VsopTerm::new(1.19500000e-05, 3.04702256, 13362.44970680),
    VsopTerm::new(4.39000000e-06, 2.88835054, 2281.23049651),
    VsopTerm::new(3.96000000e-06, 3.42324611, 3344.13554505),
    VsopTerm::new(1.83000000e-06, 1.58428644, 2544.31441988),
    VsopTerm::new(1.36000000e-06, 3.38507017, 16703.06213349),
    VsopTerm::new(1.28000000e-06, 6.04343360, 3337.08930835),
    VsopTerm::new(1.28000000e-06, 0.62991919, 1059.38193019),
    VsopTerm::new(1.27000000e-06, 1.95389775, 796.29800661),
    VsopTerm::new(1.18000000e-06, 2.99762091, 2146.16541648),
    VsopTerm::new(8.80000000e-07, 3.42000000, 398.14900340),
    VsopTerm::new(8.30000000e-07, 3.85647526, 3738.76143011),
    VsopTerm::new(7.60000000e-07, 4.45000000, 6151.53388830),
    VsopTerm::new(7.20000000e-07, 2.76000000, 529.69096509),
    VsopTerm::new(6.70000000e-07, 2.54888813, 1751.53953142),
    VsopTerm::new(6.60000000e-07, 4.40577927, 1748.01641307),
    VsopTerm::new(5.80000000e-07, 0.54348867, 1194.44701022),
    VsopTerm::new(5.40000000e-07, 0.67747714, 8962.45534991),
    VsopTerm::new(5.10000000e-07, 3.72584855, 6684.74797175),
    VsopTerm::new(4.90000000e-07, 5.72959428, 3340.59517305),
    VsopTerm::new(4.90000000e-07, 1.47717922, 3340.62968035),
    VsopTerm::new(4.80000000e-07, 2.58061691, 3149.16416059),
];
#[rustfmt::skip]
const MARS_R2: [VsopTerm; 11] = [
    VsopTerm::new(4.42420000e-04, 0.47930604, 3340.61242670),
    VsopTerm::new(8.13800000e-05, 0.86998398, 6681.22485340),
    VsopTerm::new(1.27500000e-05, 1.22594051, 10021.83728010),
    VsopTerm::new(1.87000000e-06, 1.57298991, 13362.44970680),
    VsopTerm::new(5.20000000e-07, 3.14159265, 0.00000000),
    VsopTerm::new(4.10000000e-07, 1.97000000, 3344.13554505),
    VsopTerm::new(2.70000000e-07, 1.92000000, 16703.06213349),
    VsopTerm::new(1.80000000e-07, 4.43000000, 2281.23049651),
    VsopTerm::new(1.20000000e-07, 4.53000000, 3185.19202727),
    VsopTerm::new(1.00000000e-07, 5.39000000, 1059.38193019),
    VsopTerm::new(1.00000000e-07, 0.42000000, 796.29800661),
];
#[rustfmt::skip]
const MARS_R3: [VsopTerm; 5] = [
    VsopTerm::new(1.11300000e-05, 5.14987305, 3340.61242670),
    VsopTerm::new(4.24000000e-06, 5.61343766, 6681.22485340),
    VsopTerm::new(1.00000000e-06, 5.99726827, 10021.83728010),
    VsopTerm::new(2.00000000e-07, 0.07633062, 13362.44970680),
    VsopTerm::new(5.00000000e-08, 3.14000000, 0.00000000),
];
pub(crate) const MARS: VsopModel = VsopModel {
    lon: &[&MARS_L0, &MARS_L1, &MARS_L2],
    lat: &[&MARS_B0, &MARS_B1, &MARS_B2],
    rad: &[&MARS_R0, &MARS_R1, &MARS_R2, &MARS_R3],
};

#[rustfmt::skip]
const JUPITER_L0: [VsopTerm; 39] = [
    VsopTerm::new(5.99546910e-01, 0.00000000, 0.00000000),
    VsopTerm::new(9.69589900e-02, 5.06191793, 529.69096509),
    VsopTerm::new(5.73610000e-03, 1.44406206, 7.11354700),
    VsopTerm::new(3.06389000e-03, 5.41734730, 1059.38193019),
    VsopTerm::new(9.71780000e-04, 4.14264692, 632.78373932),
    VsopTerm::new(7.29030000e-04, 3.64042916, 522.57741809),
    VsopTerm::new(6.42640000e-04, 3.41145165, 103.09277421),
    VsopTerm::new(3.98060000e-04, 2.29376740, 419.48464387),
    VsopTerm::new(3.88580000e-04, 1.27231755, 316.39186965),
    VsopTerm::new(2.79650000e-04, 1.78454591, 536.80451209),
    VsopTerm::new(1.35900000e-04, 5.77481040, 1589.07289528),
    VsopTerm::new(8.76900000e-05, 3.63000308, 949.17560897),
    VsopTerm::new(8.24600000e-05, 3.58227925, 206.18554844),
    VsopTerm::new(7.61000000e-05, 5.07300274, 735.87651353),
    VsopTerm::new(6.77800000e-05, 3.98530872, 1265.56747863),
    VsopTerm::new(6.46600000e-05, 5.56569778, 621.73803904),
    VsopTerm::new(5.85000000e-05, 1.43878250, 1052.26838319),
    VsopTerm::new(5.30700000e-05, 4.18625054, 1162.47470441),
    VsopTerm::new(5.29700000e-05, 3.16092929, 910.81854255),
    VsopTerm::new(4.76700000e-05, 1.33951917, 454.90936652),
    VsopTerm::new(4.75700000e-05, 5.03051905, 380.12776796),
    VsopTerm::new(4.00700000e-05, 4.25522487, 746.92221379),
    VsopTerm::new(3.65000000e-05, 5.16797983, 1066.49547719),
    VsopTerm::new(3.33500000e-05, 2.72693655, 88.86568022),
    VsopTerm::new(3.13100000e-05, 5.27475342, 515.46387109),
    VsopTerm::new(2.49700000e-05, 3.55318741, 1478.86657406),
    VsopTerm::new(2.20000000e-05, 4.73892221, 1045.15483619),
    VsopTerm::new(2.02400000e-05, 5.24505118, 942.06206196),
    VsopTerm::new(1.91200000e-05, 0.85621927, 412.37109687),
    VsopTerm::new(1.61100000e-05, 3.08867789, 1368.66025285),
    VsopTerm::new(1.47900000e-05, 2.68026191, 1596.18644228),
    VsopTerm::new(1.23100000e-05, 1.89042979, 416.30325008),
    VsopTerm::new(1.21700000e-05, 1.80171561, 110.20632121),
    VsopTerm::new(1.01500000e-05, 1.38673237, 838.96928775),
    VsopTerm::new(9.99000000e-06, 2.87208940, 513.07988101),
    VsopTerm::new(9.61000000e-06, 4.54876989, 2118.76386038),
    VsopTerm::new(8.86000000e-06, 4.14785948, 533.62311835),
    VsopTerm::new(8.21000000e-06, 1.59342534, 1898.35121794),
    VsopTerm::new(8.12000000e-06, 5.94091899, 909.81873305),
];
#[rustfmt::skip]
const JUPITER_L1: [VsopTerm; 36] = [
    VsopTerm::new(5.29934808e+02, 0.00000000, 0.00000000),
    VsopTerm::new(4.89741000e-03, 4.22066689, 529.69096509),
    VsopTerm::new(2.28919000e-03, 6.02647464, 7.11354700),
    VsopTerm::new(2.76550000e-04, 4.57265957, 1059.38193019),
    VsopTerm::new(2.07210000e-04, 5.45938936, 522.57741809),
    VsopTerm::new(1.21060000e-04, 0.16985765, 536.80451209),
    VsopTerm::new(6.06800000e-05, 4.42419502, 103.09277421),
    VsopTerm::new(5.43400000e-05, 3.98478382, 419.48464387),
    VsopTerm::new(4.23800000e-05, 5.89009351, 14.22709400),
    VsopTerm::new(2.21200000e-05, 5.26771446, 206.18554844),
    VsopTerm::new(1.74600000e-05, 4.92669378, 1589.07289528),
    VsopTerm::new(1.29600000e-05, 5.55132765, 3.18139374),
    VsopTerm::new(1.17300000e-05, 5.85647304, 1052.26838319),
    VsopTerm::new(1.16300000e-05, 0.51450895, 3.93215326),
    VsopTerm::new(1.09900000e-05, 5.30705242, 515.46387109),
    VsopTerm::new(1.00700000e-05, 0.46478399, 735.87651353),
    VsopTerm::new(1.00400000e-05, 3.15040302, 426.59819088),
    VsopTerm::new(8.48000000e-06, 5.75805850, 110.20632121),
    VsopTerm::new(8.27000000e-06, 4.80312016, 1366.21257229),
    VsopTerm::new(8.16000000e-06, 0.58643054, 1265.56747863),
    VsopTerm::new(7.25000000e-06, 5.51827471, 956.28915597),
    VsopTerm::new(5.68000000e-06, 5.98867049, 155.42039943),
    VsopTerm::new(4.74000000e-06, 4.13245269, 412.37109687),
    VsopTerm::new(4.13000000e-06, 5.73652891, 1045.15483619),
    VsopTerm::new(3.45000000e-06, 4.24159565, 632.78373932),
    VsopTerm::new(3.36000000e-06, 3.73248749, 1162.47470441),
    VsopTerm::new(2.34000000e-06, 4.03469970, 949.17560897),
    VsopTerm::new(2.34000000e-06, 6.24302226, 309.27832265),
    VsopTerm::new(1.99000000e-06, 1.50458442, 838.96928775),
    VsopTerm::new(1.95000000e-06, 2.21879010, 323.50541665),
    VsopTerm::new(1.87000000e-06, 6.08620565, 742.99006053),
    VsopTerm::new(1.84000000e-06, 6.27963588, 543.91805909),
    VsopTerm::new(1.71000000e-06, 5.41655983, 199.07200014),
    VsopTerm::new(1.31000000e-06, 0.62643377, 728.76296653),
    VsopTerm::new(1.15000000e-06, 0.68019050, 846.08283475),
    VsopTerm::new(1.15000000e-06, 5.28641699, 2118.76386038),
];
#[rustfmt::skip]
const JUPITER_L2: [VsopTerm; 21] = [
    VsopTerm::new(4.72340000e-04, 4.32148536, 7.11354700),
    VsopTerm::new(3.89660000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(3.06290000e-04, 2.93021440, 529.69096509),
    VsopTerm::new(3.18900000e-05, 1.05504616, 522.57741809),
    VsopTerm::new(2.72900000e-05, 4.84545481, 536.80451209),
    VsopTerm::new(2.72300000e-05, 3.41411527, 1059.38193019),
    VsopTerm::new(1.72100000e-05, 4.18734385, 14.22709400),
    VsopTerm::new(3.83000000e-06, 5.76790714, 419.48464387),
    VsopTerm::new(3.78000000e-06, 0.76050432, 515.46387109),
    VsopTerm::new(3.67000000e-06, 6.05509120, 103.09277421),
    VsopTerm::new(3.37000000e-06, 3.78644384, 3.18139374),
    VsopTerm::new(3.08000000e-06, 0.69356654, 206.18554844),
    VsopTerm::new(2.18000000e-06, 3.81389191, 1589.07289528),
    VsopTerm::new(1.99000000e-06, 5.33996443, 1066.49547719),
    VsopTerm::new(1.97000000e-06, 2.48356402, 3.93215326),
    VsopTerm::new(1.56000000e-06, 1.40642426, 1045.15483619),
    VsopTerm::new(1.46000000e-06, 3.81373196, 639.89728631),
    VsopTerm::new(1.42000000e-06, 1.63435169, 426.59819088),
    VsopTerm::new(1.30000000e-06, 5.83738872, 412.37109687),
    VsopTerm::new(1.17000000e-06, 1.41435462, 625.67019231),
    VsopTerm::new(9.70000000e-07, 4.03383427, 110.20632121),
];
#[rustfmt::skip]
const JUPITER_B0: [VsopTerm; 25] = [
    VsopTerm::new(2.26861600e-02, 3.55852606, 529.69096509),
    VsopTerm::new(1.10090000e-03, 0.00000000, 0.00000000),
    VsopTerm::new(1.09972000e-03, 3.90809347, 1059.38193019),
    VsopTerm::new(8.10100000e-05, 3.60509572, 522.57741809),
    VsopTerm::new(6.43700000e-05, 4.25884585, 1066.49547719),
    VsopTerm::new(6.04400000e-05, 4.11118202, 1589.07289528),
    VsopTerm::new(1.10700000e-05, 2.98534421, 1162.47470441),
    VsopTerm::new(9.44000000e-06, 1.67522288, 426.59819088),
    VsopTerm::new(9.42000000e-06, 2.93619072, 1052.26838319),
    VsopTerm::new(8.94000000e-06, 1.75447429, 7.11354700),
    VsopTerm::new(8.36000000e-06, 5.17881973, 103.09277421),
    VsopTerm::new(7.67000000e-06, 2.15473594, 632.78373932),
    VsopTerm::new(6.84000000e-06, 3.67808770, 213.29909544),
    VsopTerm::new(5.59000000e-06, 0.01354830, 846.08283475),
    VsopTerm::new(5.32000000e-06, 2.70305954, 110.20632121),
    VsopTerm::new(4.64000000e-06, 1.17337249, 949.17560897),
    VsopTerm::new(4.31000000e-06, 2.60825000, 419.48464387),
    VsopTerm::new(3.51000000e-06, 4.61062990, 2118.76386038),
    VsopTerm::new(1.32000000e-06, 4.77816991, 742.99006053),
    VsopTerm::new(1.23000000e-06, 3.34968181, 1692.16566950),
    VsopTerm::new(1.16000000e-06, 1.38688232, 323.50541665),
    VsopTerm::new(1.15000000e-06, 5.04892295, 316.39186965),
    VsopTerm::new(1.04000000e-06, 3.70103838, 515.46387109),
    VsopTerm::new(1.03000000e-06, 2.31878999, 1478.86657406),
    VsopTerm::new(1.02000000e-06, 3.15293785, 1581.95934828),
];
#[rustfmt::skip]
const JUPITER_B1: [VsopTerm; 14] = [
    VsopTerm::new(1.77352000e-03, 5.70166488, 529.69096509),
    VsopTerm::new(3.23000000e-05, 5.77941619, 1059.38193019),
    VsopTerm::new(3.08100000e-05, 5.47464296, 522.57741809),
    VsopTerm::new(2.21200000e-05, 4.73477480, 536.80451209),
    VsopTerm::new(1.69400000e-05, 3.14159265, 0.00000000),
    VsopTerm::new(3.46000000e-06, 4.74595174, 1052.26838319),
    VsopTerm::new(2.34000000e-06, 5.18856876, 1066.49547719),
    VsopTerm::new(1.96000000e-06, 6.18554286, 7.11354700),
    VsopTerm::new(1.50000000e-06, 3.92721226, 1589.07289528),
    VsopTerm::new(1.14000000e-06, 3.43897271, 632.78373932),
    VsopTerm::new(9.70000000e-07, 2.91426304, 949.17560897),
    VsopTerm::new(8.20000000e-07, 5.07666097, 1162.47470441),
    VsopTerm::new(7.70000000e-07, 2.50522188, 103.09277421),
    VsopTerm::new(7.70000000e-07, 0.61288181, 419.48464387),
];
#[rustfmt::skip]
const JUPITER_B2: [VsopTerm; 10] = [
    VsopTerm::new(8.09400000e-05, 1.46322843, 529.69096509),
    VsopTerm::new(8.13000000e-06, 3.14159265, 0.00000000),
    VsopTerm::new(7.42000000e-06, 0.95691639, 522.57741809),
    VsopTerm::new(3.99000000e-06, 2.89888666, 536.80451209),
    VsopTerm::new(3.42000000e-06, 1.44683789, 1059.38193019),
    VsopTerm::new(7.40000000e-07, 0.40724675, 1052.26838319),
    VsopTerm::new(4.60000000e-07, 3.48036895, 1066.49547719),
    VsopTerm::new(3.00000000e-07, 1.92504171, 1589.07289528),
    VsopTerm::new(2.90000000e-07, 0.99888460, 515.46387109),
    VsopTerm::new(2.30000000e-07, 4.27124052, 7.11354700),
];
#[rustfmt::skip]
const JUPITER_R0: [VsopTerm; 32] = [
    VsopTerm::new(5.20887429e+00, 0.00000000, 0.00000000),
    VsopTerm::new(2.52093270e-01, 3.49108640, 529.69096509),
    VsopTerm::new(6.10600000e-03, 3.84115365, 1059.38193019),
    VsopTerm::new(2.82029000e-03, 2.57419881, 632.78373932),
    VsopTerm::new(1.87647000e-03, 2.07590383, 522.57741809),
    VsopTerm::new(8.67930000e-04, 0.71001145, 419.48464387),
    VsopTerm::new(7.20630000e-04, 0.21465724, 536.80451209),
    VsopTerm::new(6.55170000e-04, 5.97995884, 316.39186965),
    VsopTerm::new(3.01350000e-04, 2.16132003, 949.17560897),
    VsopTerm::new(2.91350000e-04, 1.67759379, 103.09277421),
    VsopTerm::new(2.39470000e-04, 0.27457854, 7.11354700),
    VsopTerm::new(2.34530000e-04, 3.54023542, 735.87651353),
    VsopTerm::new(2.22840000e-04, 4.19362594, 1589.07289528),
    VsopTerm::new(1.30330000e-04, 2.96042965, 1162.47470441),
    VsopTerm::new(1.27490000e-04, 2.71550286, 1052.26838319),
    VsopTerm::new(9.70300000e-05, 1.90669633, 206.18554844),
    VsopTerm::new(9.16100000e-05, 4.41352953, 213.29909544),
    VsopTerm::new(7.89500000e-05, 2.47907592, 426.59819088),
    VsopTerm::new(7.05800000e-05, 2.18184839, 1265.56747863),
    VsopTerm::new(6.13800000e-05, 6.26418240, 846.08283475),
    VsopTerm::new(5.47700000e-05, 5.65729989, 639.89728631),
    VsopTerm::new(4.17000000e-05, 2.01605645, 515.46387109),
    VsopTerm::new(4.13700000e-05, 2.72219979, 625.67019231),
    VsopTerm::new(3.50300000e-05, 0.56531297, 1066.49547719),
    VsopTerm::new(2.61700000e-05, 2.00993967, 1581.95934828),
    VsopTerm::new(2.50000000e-05, 4.55182056, 838.96928775),
    VsopTerm::new(2.12800000e-05, 6.12751461, 742.99006053),
    VsopTerm::new(1.91200000e-05, 0.85621927, 412.37109687),
    VsopTerm::new(1.61100000e-05, 3.08867789, 1368.66025285),
    VsopTerm::new(1.47900000e-05, 2.68026191, 1596.18644228),
    VsopTerm::new(1.23100000e-05, 1.89042979, 416.30325008),
    VsopTerm::new(1.21700000e-05, 1.80171561, 110.20632121),
];
#[rustfmt::skip]
const JUPITER_R1: [VsopTerm; 30] = [
    VsopTerm::new(1.27180200e-02, 2.64937512, 529.69096509),
    VsopTerm::new(6.16620000e-04, 3.00076460, 1059.38193019),
    VsopTerm::new(5.34440000e-04, 3.89717383, 522.57741809),
    VsopTerm::new(4.13900000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(3.11850000e-04, 4.88276958, 536.80451209),
    VsopTerm::new(1.18470000e-04, 2.41330603, 419.48464387),
    VsopTerm::new(9.16600000e-05, 4.75979408, 7.11354700),
    VsopTerm::new(3.40400000e-05, 3.34688537, 1589.07289528),
    VsopTerm::new(3.20300000e-05, 5.21083285, 735.87651353),
    VsopTerm::new(3.17600000e-05, 2.79297987, 103.09277421),
    VsopTerm::new(2.80600000e-05, 3.74223694, 515.46387109),
    VsopTerm::new(2.67700000e-05, 4.33052878, 1052.26838319),
    VsopTerm::new(2.60000000e-05, 3.63435102, 206.18554844),
    VsopTerm::new(2.41200000e-05, 1.46947308, 426.59819088),
    VsopTerm::new(2.10100000e-05, 3.92762682, 639.89728631),
    VsopTerm::new(1.64600000e-05, 5.30953510, 1066.49547719),
    VsopTerm::new(1.64100000e-05, 4.41628669, 625.67019231),
    VsopTerm::new(1.05000000e-05, 3.16113623, 213.29909544),
    VsopTerm::new(1.02500000e-05, 2.55432643, 412.37109687),
    VsopTerm::new(8.06000000e-06, 2.67750801, 632.78373932),
    VsopTerm::new(7.41000000e-06, 2.17094630, 1162.47470441),
    VsopTerm::new(6.77000000e-06, 6.24953479, 838.96928775),
    VsopTerm::new(5.67000000e-06, 4.57655414, 742.99006053),
    VsopTerm::new(4.85000000e-06, 2.46882793, 949.17560897),
    VsopTerm::new(4.69000000e-06, 4.70973463, 543.91805909),
    VsopTerm::new(4.45000000e-06, 0.40281181, 323.50541665),
    VsopTerm::new(4.16000000e-06, 5.36836018, 728.76296653),
    VsopTerm::new(4.02000000e-06, 4.60528841, 309.27832265),
    VsopTerm::new(3.47000000e-06, 4.68148808, 14.22709400),
    VsopTerm::new(3.38000000e-06, 3.16781951, 956.28915597),
];
#[rustfmt::skip]
const JUPITER_R2: [VsopTerm; 22] = [
    VsopTerm::new(7.96450000e-04, 1.35865949, 529.69096509),
    VsopTerm::new(8.25200000e-05, 5.77773935, 522.57741809),
    VsopTerm::new(7.03000000e-05, 3.27476965, 536.80451209),
    VsopTerm::new(5.31400000e-05, 1.83835109, 1059.38193019),
    VsopTerm::new(1.86100000e-05, 2.97682139, 7.11354700),
    VsopTerm::new(9.64000000e-06, 5.48031822, 515.46387109),
    VsopTerm::new(8.36000000e-06, 4.19889882, 419.48464387),
    VsopTerm::new(4.98000000e-06, 3.14159265, 0.00000000),
    VsopTerm::new(4.27000000e-06, 2.22752300, 639.89728631),
    VsopTerm::new(4.06000000e-06, 3.78250730, 1066.49547719),
    VsopTerm::new(3.77000000e-06, 2.24248352, 1589.07289528),
    VsopTerm::new(3.63000000e-06, 5.36761847, 206.18554844),
    VsopTerm::new(3.42000000e-06, 6.09922969, 1052.26838319),
    VsopTerm::new(3.39000000e-06, 6.12690864, 625.67019231),
    VsopTerm::new(3.33000000e-06, 0.00328961, 426.59819088),
    VsopTerm::new(2.80000000e-06, 4.26162555, 412.37109687),
    VsopTerm::new(2.57000000e-06, 0.96295364, 632.78373932),
    VsopTerm::new(2.30000000e-06, 0.70530766, 735.87651353),
    VsopTerm::new(2.01000000e-06, 3.06850623, 543.91805909),
    VsopTerm::new(2.00000000e-06, 4.42884165, 103.09277421),
    VsopTerm::new(1.39000000e-06, 2.93235671, 14.22709400),
    VsopTerm::new(1.14000000e-06, 0.78713911, 728.76296653),
];
pub(crate) const JUPITER: VsopModel = VsopModel {
    lon: &[&JUPITER_L0, &JUPITER_L1, &JUPITER_L2],
    lat: &[&JUPITER_B0, &JUPITER_B1, &JUPITER_B2],
    rad: &[&JUPITER_R0, &JUPITER_R1, &JUPITER_R2],
};

#[rustfmt::skip]
const SATURN_L0: [VsopTerm; 56] = [
    VsopTerm::new(8.74013540e-01, 0.00000000, 0.00000000),
    VsopTerm::new(1.11076600e-01, 3.96205090, 213.29909544),
    VsopTerm::new(1.41415100e-02, 4.58581516, 7.11354700),
    VsopTerm::new(3.98379000e-03, 0.52112032, 206.18554844),
    VsopTerm::new(3.50769000e-03, 3.30329907, 220.41264244),
    VsopTerm::new(2.06816000e-03, 0.24658372, 103.09277421),
    VsopTerm::new(7.92710000e-04, 3.84007056, 419.48464387),
    VsopTerm::new(2.39900000e-04, 4.66976924, 110.20632121),
    VsopTerm::new(1.65740000e-04, 0.43719228, 433.71173787),
    VsopTerm::new(1.58200000e-04, 0.93809155, 632.78373932),
    VsopTerm::new(1.50540000e-04, 2.71669915, 639.89728631),
    VsopTerm::new(1.49070000e-04, 5.76903183, 316.39186965),
    VsopTerm::new(1.46100000e-04, 1.56518472, 3.93215326),
    VsopTerm::new(1.31600000e-04, 4.44891291, 14.22709400),
    VsopTerm::new(1.30050000e-04, 5.98119023, 11.04570026),
    VsopTerm::new(1.07250000e-04, 3.12939523, 202.25339517),
    VsopTerm::new(6.12600000e-05, 1.76328667, 277.03499741),
    VsopTerm::new(5.86300000e-05, 0.23656938, 529.69096509),
    VsopTerm::new(5.22800000e-05, 4.20783365, 3.18139374),
    VsopTerm::new(5.02000000e-05, 3.17787728, 229.97386999),
    VsopTerm::new(4.59300000e-05, 0.61977257, 199.07200014),
    VsopTerm::new(4.00600000e-05, 2.24479718, 70.84944530),
    VsopTerm::new(3.87400000e-05, 3.22282691, 138.51749687),
    VsopTerm::new(3.26900000e-05, 0.77492638, 949.17560897),
    VsopTerm::new(2.95400000e-05, 0.98280521, 95.97922721),
    VsopTerm::new(2.46100000e-05, 2.03163875, 735.87651353),
    VsopTerm::new(1.75800000e-05, 3.26580109, 522.57741809),
    VsopTerm::new(1.64000000e-05, 5.50504966, 846.08283475),
    VsopTerm::new(1.58100000e-05, 4.37266311, 309.27832265),
    VsopTerm::new(1.39100000e-05, 4.02331977, 323.50541665),
    VsopTerm::new(1.12400000e-05, 2.83726798, 415.55249061),
    VsopTerm::new(1.08700000e-05, 4.18343232, 2.44768055),
    VsopTerm::new(1.01700000e-05, 3.71698152, 227.52618944),
    VsopTerm::new(9.57000000e-06, 0.50740323, 1265.56747863),
    VsopTerm::new(8.53000000e-06, 3.42141279, 175.16605980),
    VsopTerm::new(8.49000000e-06, 3.19150170, 209.36694217),
    VsopTerm::new(7.89000000e-06, 5.00745123, 0.96320784),
    VsopTerm::new(7.49000000e-06, 2.14377335, 853.19638152),
    VsopTerm::new(7.44000000e-06, 5.25276955, 224.34479570),
    VsopTerm::new(6.87000000e-06, 1.74714407, 1052.26838319),
    VsopTerm::new(6.54000000e-06, 1.59889331, 0.04818411),
    VsopTerm::new(6.34000000e-06, 2.29889903, 412.37109687),
    VsopTerm::new(6.25000000e-06, 0.97020334, 210.11770170),
    VsopTerm::new(5.80000000e-06, 3.09259007, 74.78159857),
    VsopTerm::new(5.46000000e-06, 2.12678554, 350.33211960),
    VsopTerm::new(5.43000000e-06, 1.51824320, 9.56122756),
    VsopTerm::new(5.30000000e-06, 4.44938897, 117.31986822),
    VsopTerm::new(4.78000000e-06, 2.96488054, 137.03302416),
    VsopTerm::new(4.74000000e-06, 5.47527111, 742.99006053),
    VsopTerm::new(4.52000000e-06, 1.04436664, 490.33408918),
    VsopTerm::new(4.49000000e-06, 1.28990416, 127.47179660),
    VsopTerm::new(3.72000000e-06, 2.27819108, 217.23124870),
    VsopTerm::new(3.55000000e-06, 3.01286483, 838.96928775),
    VsopTerm::new(3.47000000e-06, 1.53928228, 340.77089204),
    VsopTerm::new(3.43000000e-06, 0.24604039, 0.52126486),
    VsopTerm::new(3.30000000e-06, 0.24716202, 1581.95934828),
];
#[rustfmt::skip]
const SATURN_L1: [VsopTerm; 41] = [
    VsopTerm::new(2.13542956e+02, 0.00000000, 0.00000000),
    VsopTerm::new(1.29685500e-02, 1.82820545, 213.29909544),
    VsopTerm::new(5.64348000e-03, 2.88500136, 7.11354700),
    VsopTerm::new(1.07679000e-03, 2.27769912, 206.18554844),
    VsopTerm::new(9.83230000e-04, 1.08070061, 426.59819088),
    VsopTerm::new(4.02550000e-04, 2.04128257, 220.41264244),
    VsopTerm::new(1.99420000e-04, 1.27954663, 103.09277421),
    VsopTerm::new(1.05120000e-04, 2.74880393, 14.22709400),
    VsopTerm::new(6.93900000e-05, 0.40493080, 639.89728631),
    VsopTerm::new(4.80300000e-05, 2.44194098, 419.48464387),
    VsopTerm::new(4.05600000e-05, 2.92166618, 110.20632121),
    VsopTerm::new(3.76900000e-05, 3.64965631, 3.93215326),
    VsopTerm::new(3.38500000e-05, 2.41694252, 3.18139374),
    VsopTerm::new(3.30200000e-05, 1.26256487, 433.71173787),
    VsopTerm::new(3.07100000e-05, 2.32739317, 199.07200014),
    VsopTerm::new(1.95300000e-05, 3.56394683, 11.04570026),
    VsopTerm::new(1.24900000e-05, 2.62803737, 95.97922721),
    VsopTerm::new(9.22000000e-06, 1.96089834, 227.52618944),
    VsopTerm::new(7.06000000e-06, 4.41689249, 529.69096509),
    VsopTerm::new(6.50000000e-06, 6.17418094, 202.25339517),
    VsopTerm::new(6.28000000e-06, 6.11088227, 309.27832265),
    VsopTerm::new(4.87000000e-06, 6.03998200, 853.19638152),
    VsopTerm::new(4.79000000e-06, 4.98776988, 522.57741809),
    VsopTerm::new(4.68000000e-06, 1.28726118, 402.66224924),
    VsopTerm::new(4.17000000e-06, 2.11708169, 323.50541665),
    VsopTerm::new(4.08000000e-06, 1.29949557, 209.36694217),
    VsopTerm::new(3.52000000e-06, 2.31707079, 632.78373932),
    VsopTerm::new(3.44000000e-06, 3.95854179, 412.37109687),
    VsopTerm::new(3.40000000e-06, 3.63396399, 316.39186965),
    VsopTerm::new(3.36000000e-06, 3.77173073, 735.87651353),
    VsopTerm::new(3.32000000e-06, 2.86077699, 210.11770170),
    VsopTerm::new(2.89000000e-06, 2.73208156, 117.31986822),
    VsopTerm::new(2.81000000e-06, 5.74398845, 2.44768055),
    VsopTerm::new(2.66000000e-06, 0.54344961, 647.01083331),
    VsopTerm::new(2.30000000e-06, 1.64425644, 216.48048176),
    VsopTerm::new(1.92000000e-06, 2.96512946, 224.34479570),
    VsopTerm::new(1.73000000e-06, 4.07695221, 846.08283475),
    VsopTerm::new(1.67000000e-06, 2.59745202, 21.34064100),
    VsopTerm::new(1.36000000e-06, 2.28580247, 10.29494073),
    VsopTerm::new(1.31000000e-06, 3.44108356, 742.99006053),
    VsopTerm::new(1.28000000e-06, 4.09533471, 217.23124870),
];
#[rustfmt::skip]
const SATURN_L2: [VsopTerm; 21] = [
    VsopTerm::new(1.16441000e-03, 1.17987850, 7.11354700),
    VsopTerm::new(9.19210000e-04, 0.07425261, 213.29909544),
    VsopTerm::new(9.05920000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(1.52770000e-04, 4.06492007, 206.18554844),
    VsopTerm::new(1.06310000e-04, 0.25778277, 220.41264244),
    VsopTerm::new(1.06050000e-04, 5.40963596, 426.59819088),
    VsopTerm::new(4.26500000e-05, 1.04595557, 14.22709400),
    VsopTerm::new(1.21600000e-05, 2.91860042, 103.09277421),
    VsopTerm::new(1.16500000e-05, 4.60942129, 639.89728631),
    VsopTerm::new(1.08200000e-05, 5.69130351, 433.71173787),
    VsopTerm::new(1.04500000e-05, 4.04206453, 199.07200014),
    VsopTerm::new(1.02000000e-05, 0.63369523, 3.18139374),
    VsopTerm::new(6.34000000e-06, 4.38825406, 419.48464387),
    VsopTerm::new(5.49000000e-06, 5.57303134, 3.93215326),
    VsopTerm::new(4.57000000e-06, 1.26840971, 110.20632121),
    VsopTerm::new(4.25000000e-06, 0.20935516, 227.52618944),
    VsopTerm::new(2.74000000e-06, 4.28841012, 95.97922721),
    VsopTerm::new(1.62000000e-06, 1.38139149, 11.04570026),
    VsopTerm::new(1.29000000e-06, 1.56586884, 309.27832265),
    VsopTerm::new(1.17000000e-06, 3.88120916, 853.19638152),
    VsopTerm::new(1.05000000e-06, 4.90003198, 647.01083331),
];
#[rustfmt::skip]
const SATURN_B0: [VsopTerm; 34] = [
    VsopTerm::new(4.33067800e-02, 3.60284428, 213.29909544),
    VsopTerm::new(2.40348000e-03, 2.85238489, 426.59819088),
    VsopTerm::new(8.47460000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(3.41160000e-04, 0.57297307, 206.18554844),
    VsopTerm::new(3.08630000e-04, 3.48441504, 220.41264244),
    VsopTerm::new(1.47340000e-04, 2.11846596, 639.89728631),
    VsopTerm::new(9.91700000e-05, 5.79003189, 419.48464387),
    VsopTerm::new(6.99400000e-05, 4.73604689, 7.11354700),
    VsopTerm::new(4.80800000e-05, 5.43305315, 316.39186965),
    VsopTerm::new(4.78800000e-05, 4.96512927, 110.20632121),
    VsopTerm::new(3.43200000e-05, 2.73255752, 433.71173787),
    VsopTerm::new(1.50600000e-05, 6.01304536, 103.09277421),
    VsopTerm::new(1.06000000e-05, 5.63099292, 529.69096509),
    VsopTerm::new(9.69000000e-06, 5.20434966, 632.78373932),
    VsopTerm::new(9.42000000e-06, 1.39646678, 853.19638152),
    VsopTerm::new(7.08000000e-06, 3.80302329, 323.50541665),
    VsopTerm::new(5.52000000e-06, 5.13149109, 202.25339517),
    VsopTerm::new(4.00000000e-06, 3.35891413, 227.52618944),
    VsopTerm::new(3.19000000e-06, 3.62571887, 209.36694217),
    VsopTerm::new(3.16000000e-06, 1.99716764, 647.01083331),
    VsopTerm::new(3.14000000e-06, 0.46510248, 217.23124870),
    VsopTerm::new(2.84000000e-06, 4.88648481, 224.34479570),
    VsopTerm::new(2.36000000e-06, 2.13887472, 11.04570026),
    VsopTerm::new(2.15000000e-06, 5.94982610, 846.08283475),
    VsopTerm::new(2.09000000e-06, 2.12003894, 415.55249061),
    VsopTerm::new(2.07000000e-06, 0.73021461, 199.07200014),
    VsopTerm::new(1.79000000e-06, 2.95361515, 63.73589830),
    VsopTerm::new(1.41000000e-06, 0.64417620, 490.33408918),
    VsopTerm::new(1.39000000e-06, 4.59535168, 14.22709400),
    VsopTerm::new(1.39000000e-06, 1.99821990, 735.87651353),
    VsopTerm::new(1.35000000e-06, 5.24500819, 742.99006053),
    VsopTerm::new(1.22000000e-06, 3.11537141, 522.57741809),
    VsopTerm::new(1.16000000e-06, 3.10891547, 216.48048176),
    VsopTerm::new(1.14000000e-06, 0.96261442, 210.11770170),
];
#[rustfmt::skip]
const SATURN_B1: [VsopTerm; 32] = [
    VsopTerm::new(3.97555000e-03, 5.33289992, 213.29909544),
    VsopTerm::new(4.94790000e-04, 3.14159265, 0.00000000),
    VsopTerm::new(1.85720000e-04, 6.09919206, 426.59819088),
    VsopTerm::new(1.48010000e-04, 2.30586130, 206.18554844),
    VsopTerm::new(9.64400000e-05, 1.69674660, 220.41264244),
    VsopTerm::new(3.75700000e-05, 1.25429514, 419.48464387),
    VsopTerm::new(2.71700000e-05, 5.91166664, 639.89728631),
    VsopTerm::new(1.45500000e-05, 0.85161407, 433.71173787),
    VsopTerm::new(1.29100000e-05, 2.91770857, 7.11354700),
    VsopTerm::new(8.53000000e-06, 0.43572079, 316.39186965),
    VsopTerm::new(2.98000000e-06, 0.91909206, 632.78373932),
    VsopTerm::new(2.92000000e-06, 5.31574251, 853.19638152),
    VsopTerm::new(2.84000000e-06, 1.61881754, 227.52618944),
    VsopTerm::new(2.75000000e-06, 3.88864137, 103.09277421),
    VsopTerm::new(1.72000000e-06, 0.05215906, 647.01083331),
    VsopTerm::new(1.66000000e-06, 2.44351613, 199.07200014),
    VsopTerm::new(1.58000000e-06, 5.20850126, 110.20632121),
    VsopTerm::new(1.28000000e-06, 1.20722752, 529.69096509),
    VsopTerm::new(1.10000000e-06, 2.45695552, 217.23124870),
    VsopTerm::new(8.20000000e-07, 2.75839171, 210.11770170),
    VsopTerm::new(8.10000000e-07, 2.86038377, 14.22709400),
    VsopTerm::new(6.90000000e-07, 1.65537623, 202.25339517),
    VsopTerm::new(6.50000000e-07, 1.25527521, 216.48048176),
    VsopTerm::new(6.10000000e-07, 1.25273412, 209.36694217),
    VsopTerm::new(5.90000000e-07, 1.82410768, 323.50541665),
    VsopTerm::new(4.60000000e-07, 0.81534706, 440.82528488),
    VsopTerm::new(3.60000000e-07, 1.81851057, 224.34479570),
    VsopTerm::new(3.40000000e-07, 2.83971297, 117.31986822),
    VsopTerm::new(3.30000000e-07, 1.30564184, 412.37109687),
    VsopTerm::new(3.20000000e-07, 1.18676132, 846.08283475),
    VsopTerm::new(2.70000000e-07, 4.64931598, 1066.49547719),
    VsopTerm::new(2.70000000e-07, 4.44228739, 11.04570026),
];
#[rustfmt::skip]
const SATURN_B2: [VsopTerm; 21] = [
    VsopTerm::new(2.06300000e-04, 0.50482423, 213.29909544),
    VsopTerm::new(3.72000000e-05, 3.99833476, 206.18554844),
    VsopTerm::new(1.62700000e-05, 6.18189939, 220.41264244),
    VsopTerm::new(1.34600000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(7.06000000e-06, 3.03914308, 419.48464387),
    VsopTerm::new(3.65000000e-06, 5.09928680, 426.59819088),
    VsopTerm::new(3.30000000e-06, 5.27899211, 433.71173787),
    VsopTerm::new(2.19000000e-06, 3.82841533, 639.89728631),
    VsopTerm::new(1.39000000e-06, 1.04272623, 7.11354700),
    VsopTerm::new(1.04000000e-06, 6.15710489, 227.52618944),
    VsopTerm::new(9.30000000e-07, 1.97912470, 316.39186965),
    VsopTerm::new(7.10000000e-07, 4.14720134, 199.07200014),
    VsopTerm::new(5.20000000e-07, 2.88000000, 632.78373932),
    VsopTerm::new(4.90000000e-07, 4.43000000, 647.01083331),
    VsopTerm::new(4.10000000e-07, 3.16000000, 853.19638152),
    VsopTerm::new(2.90000000e-07, 4.53000000, 210.11770170),
    VsopTerm::new(2.40000000e-07, 1.12000000, 14.22709400),
    VsopTerm::new(2.10000000e-07, 4.35000000, 217.23124870),
    VsopTerm::new(2.00000000e-07, 5.31000000, 440.82528488),
    VsopTerm::new(1.80000000e-07, 0.85000000, 110.20632121),
    VsopTerm::new(1.70000000e-07, 5.68000000, 216.48048176),
];
#[rustfmt::skip]
const SATURN_R0: [VsopTerm; 44] = [
    VsopTerm::new(9.55758136e+00, 0.00000000, 0.00000000),
    VsopTerm::new(5.29213820e-01, 2.39226220, 213.29909544),
    VsopTerm::new(1.87368000e-02, 5.23549605, 206.18554844),
    VsopTerm::new(1.46466400e-02, 1.64763045, 426.59819088),
    VsopTerm::new(8.21891000e-03, 5.93520042, 316.39186965),
    VsopTerm::new(5.47507000e-03, 5.01532618, 103.09277421),
    VsopTerm::new(3.71684000e-03, 2.27114821, 220.41264244),
    VsopTerm::new(3.61778000e-03, 3.13904301, 7.11354700),
    VsopTerm::new(1.40618000e-03, 5.70406606, 632.78373932),
    VsopTerm::new(1.08975000e-03, 3.29313390, 110.20632121),
    VsopTerm::new(6.90070000e-04, 5.94099540, 419.48464387),
    VsopTerm::new(6.10530000e-04, 0.94037691, 639.89728631),
    VsopTerm::new(4.89130000e-04, 1.55733638, 202.25339517),
    VsopTerm::new(3.41440000e-04, 0.19519102, 277.03499741),
    VsopTerm::new(3.24020000e-04, 5.47084567, 949.17560897),
    VsopTerm::new(2.09370000e-04, 0.46349251, 735.87651353),
    VsopTerm::new(2.08390000e-04, 1.52102476, 433.71173787),
    VsopTerm::new(2.07470000e-04, 5.33255457, 199.07200014),
    VsopTerm::new(1.52980000e-04, 3.05943814, 529.69096509),
    VsopTerm::new(1.42960000e-04, 2.60433479, 323.50541665),
    VsopTerm::new(1.28840000e-04, 1.64892310, 138.51749687),
    VsopTerm::new(1.19930000e-04, 5.98051421, 846.08283475),
    VsopTerm::new(1.13800000e-04, 1.73105427, 522.57741809),
    VsopTerm::new(9.79600000e-05, 5.20475863, 1265.56747863),
    VsopTerm::new(7.75300000e-05, 5.85191318, 95.97922721),
    VsopTerm::new(6.77100000e-05, 3.00433479, 14.22709400),
    VsopTerm::new(6.46600000e-05, 0.17733160, 1052.26838319),
    VsopTerm::new(5.85000000e-05, 1.45519636, 415.55249061),
    VsopTerm::new(5.30700000e-05, 0.59737034, 63.73589830),
    VsopTerm::new(4.69500000e-05, 2.14919036, 227.52618944),
    VsopTerm::new(4.04400000e-05, 1.64011323, 209.36694217),
    VsopTerm::new(3.68800000e-05, 0.78016133, 412.37109687),
    VsopTerm::new(3.46100000e-05, 1.85088802, 175.16605980),
    VsopTerm::new(3.42000000e-05, 4.94549148, 1581.95934828),
    VsopTerm::new(3.40100000e-05, 0.55386747, 350.33211960),
    VsopTerm::new(3.37600000e-05, 3.69528478, 224.34479570),
    VsopTerm::new(2.97600000e-05, 5.68467931, 210.11770170),
    VsopTerm::new(2.88500000e-05, 1.38764077, 838.96928775),
    VsopTerm::new(2.88100000e-05, 0.17960757, 853.19638152),
    VsopTerm::new(2.50800000e-05, 3.53851863, 742.99006053),
    VsopTerm::new(2.44800000e-05, 6.18412386, 1368.66025285),
    VsopTerm::new(2.40600000e-05, 2.96559220, 117.31986822),
    VsopTerm::new(2.17400000e-05, 0.01504577, 340.77089204),
    VsopTerm::new(2.02400000e-05, 5.05411271, 11.04570026),
];
#[rustfmt::skip]
const SATURN_R1: [VsopTerm; 37] = [
    VsopTerm::new(6.18298100e-02, 0.25843511, 213.29909544),
    VsopTerm::new(5.06578000e-03, 0.71114625, 206.18554844),
    VsopTerm::new(3.41394000e-03, 5.79635741, 426.59819088),
    VsopTerm::new(1.88491000e-03, 0.47215589, 220.41264244),
    VsopTerm::new(1.86262000e-03, 3.14159265, 0.00000000),
    VsopTerm::new(1.43891000e-03, 1.40744864, 7.11354700),
    VsopTerm::new(4.96210000e-04, 6.01744469, 103.09277421),
    VsopTerm::new(2.09280000e-04, 5.09245654, 639.89728631),
    VsopTerm::new(1.99530000e-04, 1.17560125, 419.48464387),
    VsopTerm::new(1.88400000e-04, 1.60820563, 110.20632121),
    VsopTerm::new(1.38770000e-04, 0.75886204, 199.07200014),
    VsopTerm::new(1.28930000e-04, 5.94330258, 433.71173787),
    VsopTerm::new(5.39700000e-05, 1.28852405, 14.22709400),
    VsopTerm::new(4.86900000e-05, 0.86793894, 323.50541665),
    VsopTerm::new(4.24700000e-05, 0.39299180, 227.52618944),
    VsopTerm::new(3.25200000e-05, 1.25853470, 95.97922721),
    VsopTerm::new(3.08100000e-05, 3.43662557, 529.69096509),
    VsopTerm::new(2.90900000e-05, 4.60679154, 202.25339517),
    VsopTerm::new(2.85600000e-05, 2.16731405, 735.87651353),
    VsopTerm::new(1.98800000e-05, 2.45054205, 412.37109687),
    VsopTerm::new(1.94100000e-05, 6.02393385, 209.36694217),
    VsopTerm::new(1.58100000e-05, 1.29191789, 210.11770170),
    VsopTerm::new(1.34000000e-05, 4.30801822, 853.19638152),
    VsopTerm::new(1.31600000e-05, 1.25296446, 117.31986822),
    VsopTerm::new(1.20300000e-05, 1.86654673, 316.39186965),
    VsopTerm::new(1.09100000e-05, 0.07527246, 216.48048176),
    VsopTerm::new(9.66000000e-06, 0.47991379, 632.78373932),
    VsopTerm::new(9.54000000e-06, 5.15173410, 647.01083331),
    VsopTerm::new(8.82000000e-06, 1.88471724, 1052.26838319),
    VsopTerm::new(8.74000000e-06, 1.40224683, 224.34479570),
    VsopTerm::new(7.85000000e-06, 3.06377517, 838.96928775),
    VsopTerm::new(7.40000000e-06, 1.38225356, 625.67019231),
    VsopTerm::new(6.58000000e-06, 4.14362930, 309.27832265),
    VsopTerm::new(6.50000000e-06, 1.72489486, 742.99006053),
    VsopTerm::new(6.13000000e-06, 3.03307306, 63.73589830),
    VsopTerm::new(5.99000000e-06, 2.54924174, 217.23124870),
    VsopTerm::new(5.03000000e-06, 2.12958819, 3.93215326),
];
#[rustfmt::skip]
const SATURN_R2: [VsopTerm; 30] = [
    VsopTerm::new(4.36902000e-03, 4.78671673, 213.29909544),
    VsopTerm::new(7.19230000e-04, 2.50070160, 206.18554844),
    VsopTerm::new(4.97670000e-04, 4.97168151, 220.41264244),
    VsopTerm::new(4.32210000e-04, 3.86940443, 426.59819088),
    VsopTerm::new(2.96460000e-04, 5.96310264, 7.11354700),
    VsopTerm::new(4.72100000e-05, 2.47527992, 199.07200014),
    VsopTerm::new(4.14200000e-05, 4.10670941, 433.71173787),
    VsopTerm::new(3.78900000e-05, 3.09771025, 639.89728631),
    VsopTerm::new(2.96400000e-05, 1.37206249, 103.09277421),
    VsopTerm::new(2.55600000e-05, 2.85065722, 419.48464387),
    VsopTerm::new(2.32700000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(2.20800000e-05, 6.27588858, 110.20632121),
    VsopTerm::new(2.18800000e-05, 5.85545832, 14.22709400),
    VsopTerm::new(1.95700000e-05, 4.92448618, 227.52618944),
    VsopTerm::new(9.24000000e-06, 5.46392422, 323.50541665),
    VsopTerm::new(7.06000000e-06, 2.97081280, 95.97922721),
    VsopTerm::new(5.46000000e-06, 4.12854181, 412.37109687),
    VsopTerm::new(4.31000000e-06, 5.17825414, 522.57741809),
    VsopTerm::new(4.05000000e-06, 4.17294157, 209.36694217),
    VsopTerm::new(3.91000000e-06, 4.48106176, 216.48048176),
    VsopTerm::new(3.74000000e-06, 5.83435991, 117.31986822),
    VsopTerm::new(3.61000000e-06, 3.27703082, 647.01083331),
    VsopTerm::new(3.56000000e-06, 3.19152043, 210.11770170),
    VsopTerm::new(3.26000000e-06, 2.26867601, 853.19638152),
    VsopTerm::new(2.07000000e-06, 4.02188336, 735.87651353),
    VsopTerm::new(2.04000000e-06, 0.08774111, 202.25339517),
    VsopTerm::new(1.80000000e-06, 3.59704903, 632.78373932),
    VsopTerm::new(1.78000000e-06, 4.09716541, 440.82528488),
    VsopTerm::new(1.33000000e-06, 2.59350470, 191.95845443),
    VsopTerm::new(1.32000000e-06, 5.93293968, 309.27832265),
];
pub(crate) const SATURN: VsopModel = VsopModel {
    lon: &[&SATURN_L0, &SATURN_L1, &SATURN_L2],
    lat: &[&SATURN_B0, &SATURN_B1, &SATURN_B2],
    rad: &[&SATURN_R0, &SATURN_R1, &SATURN_R2],
};

#[rustfmt::skip]
const URANUS_L0: [VsopTerm; 31] = [
    VsopTerm::new(5.48129294e+00, 0.00000000, 0.00000000),
    VsopTerm::new(9.26040800e-02, 0.89106421, 74.78159857),
    VsopTerm::new(1.50424800e-02, 3.62719262, 1.48447271),
    VsopTerm::new(3.65982000e-03, 1.89962189, 73.29712585),
    VsopTerm::new(2.72328000e-03, 3.35823710, 149.56319713),
    VsopTerm::new(7.03280000e-04, 5.39254431, 63.73589830),
    VsopTerm::new(6.88930000e-04, 6.09292489, 76.26607127),
    VsopTerm::new(6.19990000e-04, 2.26952040, 2.96894542),
    VsopTerm::new(6.19510000e-04, 2.85098907, 11.04570026),
    VsopTerm::new(2.64690000e-04, 3.14152087, 71.81265315),
    VsopTerm::new(2.57110000e-04, 6.11379842, 454.90936652),
    VsopTerm::new(2.10790000e-04, 4.36059465, 148.07872442),
    VsopTerm::new(1.78190000e-04, 1.74436982, 36.64856293),
    VsopTerm::new(1.46130000e-04, 4.73732047, 3.93215326),
    VsopTerm::new(1.11630000e-04, 5.82681993, 224.34479570),
    VsopTerm::new(1.09980000e-04, 0.48865493, 138.51749687),
    VsopTerm::new(9.52700000e-05, 2.95516893, 35.16409022),
    VsopTerm::new(7.54600000e-05, 5.23626440, 109.94568878),
    VsopTerm::new(4.22000000e-05, 3.23328535, 70.84944530),
    VsopTerm::new(4.05200000e-05, 2.27754158, 151.04766985),
    VsopTerm::new(3.49000000e-05, 5.48306144, 146.59425171),
    VsopTerm::new(3.35500000e-05, 1.06549008, 4.45341812),
    VsopTerm::new(3.14400000e-05, 4.75199307, 77.75054398),
    VsopTerm::new(2.92700000e-05, 4.62903695, 9.56122756),
    VsopTerm::new(2.92200000e-05, 5.35236743, 85.82729883),
    VsopTerm::new(2.27300000e-05, 4.36600802, 70.32818044),
    VsopTerm::new(1.94100000e-05, 6.01555916, 7.11354700),
    VsopTerm::new(1.76400000e-05, 0.56129520, 2.44768055),
    VsopTerm::new(1.58100000e-05, 2.87554361, 0.96320784),
    VsopTerm::new(1.44400000e-05, 5.91517946, 3.18139374),
    VsopTerm::new(1.43800000e-05, 1.02735365, 32.19514480),
];
#[rustfmt::skip]
const URANUS_L1: [VsopTerm; 21] = [
    VsopTerm::new(7.50254312e+01, 0.00000000, 0.00000000),
    VsopTerm::new(1.54458000e-03, 5.24201658, 74.78159857),
    VsopTerm::new(2.44560000e-04, 1.71255705, 1.48447271),
    VsopTerm::new(9.25800000e-05, 0.42844639, 11.04570026),
    VsopTerm::new(8.26600000e-05, 1.50220035, 63.73589830),
    VsopTerm::new(7.84200000e-05, 1.31983607, 149.56319713),
    VsopTerm::new(3.89900000e-05, 0.46483574, 3.93215326),
    VsopTerm::new(2.28400000e-05, 4.17367533, 76.26607127),
    VsopTerm::new(1.92700000e-05, 0.53013080, 2.96894542),
    VsopTerm::new(1.23300000e-05, 1.58634458, 70.84944530),
    VsopTerm::new(7.91000000e-06, 5.43641224, 3.18139374),
    VsopTerm::new(7.67000000e-06, 1.99555409, 73.29712585),
    VsopTerm::new(4.82000000e-06, 2.98401996, 85.82729883),
    VsopTerm::new(4.50000000e-06, 4.13826237, 138.51749687),
    VsopTerm::new(4.46000000e-06, 3.72300400, 224.34479570),
    VsopTerm::new(4.27000000e-06, 4.73126059, 71.81265315),
    VsopTerm::new(3.54000000e-06, 2.58324496, 148.07872442),
    VsopTerm::new(3.48000000e-06, 2.45372261, 9.56122756),
    VsopTerm::new(3.17000000e-06, 5.57855232, 52.69019804),
    VsopTerm::new(2.06000000e-06, 2.36263144, 2.44768055),
    VsopTerm::new(1.73000000e-06, 2.71421930, 0.96320784),
];
#[rustfmt::skip]
const URANUS_L2: [VsopTerm; 10] = [
    VsopTerm::new(5.30330000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(2.35800000e-05, 2.26014661, 74.78159857),
    VsopTerm::new(7.69000000e-06, 4.52561041, 11.04570026),
    VsopTerm::new(5.52000000e-06, 3.25814281, 63.73589830),
    VsopTerm::new(5.42000000e-06, 2.27573907, 3.93215326),
    VsopTerm::new(5.29000000e-06, 4.92348433, 1.48447271),
    VsopTerm::new(2.58000000e-06, 3.69059216, 3.18139374),
    VsopTerm::new(2.39000000e-06, 5.85806638, 149.56319713),
    VsopTerm::new(1.82000000e-06, 6.21763603, 70.84944530),
    VsopTerm::new(5.40000000e-07, 1.44225240, 76.26607127),
];
#[rustfmt::skip]
const URANUS_B0: [VsopTerm; 17] = [
    VsopTerm::new(1.34627800e-02, 2.61877810, 74.78159857),
    VsopTerm::new(6.23410000e-04, 5.08111176, 149.56319713),
    VsopTerm::new(6.16010000e-04, 3.14159265, 0.00000000),
    VsopTerm::new(9.96400000e-05, 1.61603876, 76.26607127),
    VsopTerm::new(9.92600000e-05, 0.57630381, 73.29712585),
    VsopTerm::new(3.25900000e-05, 1.26119385, 224.34479570),
    VsopTerm::new(2.97200000e-05, 2.24367035, 1.48447271),
    VsopTerm::new(2.01000000e-05, 6.05550401, 148.07872442),
    VsopTerm::new(1.52200000e-05, 0.27960386, 63.73589830),
    VsopTerm::new(9.24000000e-06, 4.03822512, 151.04766985),
    VsopTerm::new(7.61000000e-06, 6.14000431, 71.81265315),
    VsopTerm::new(5.22000000e-06, 3.32085194, 138.51749687),
    VsopTerm::new(4.63000000e-06, 0.74256727, 85.82729883),
    VsopTerm::new(4.37000000e-06, 3.38082524, 529.69096509),
    VsopTerm::new(4.35000000e-06, 0.34065281, 77.75054398),
    VsopTerm::new(4.31000000e-06, 3.55445034, 213.29909544),
    VsopTerm::new(4.20000000e-06, 5.21279984, 11.04570026),
];
#[rustfmt::skip]
const URANUS_B1: [VsopTerm; 13] = [
    VsopTerm::new(2.06366000e-03, 4.12394311, 74.78159857),
    VsopTerm::new(8.56300000e-05, 0.33819986, 149.56319713),
    VsopTerm::new(1.72600000e-05, 2.12193159, 73.29712585),
    VsopTerm::new(1.37400000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(1.36900000e-05, 3.06861722, 76.26607127),
    VsopTerm::new(4.51000000e-06, 3.77656180, 1.48447271),
    VsopTerm::new(4.00000000e-06, 2.84767037, 224.34479570),
    VsopTerm::new(3.07000000e-06, 1.25456766, 148.07872442),
    VsopTerm::new(1.54000000e-06, 3.78575467, 63.73589830),
    VsopTerm::new(1.12000000e-06, 5.57299891, 151.04766985),
    VsopTerm::new(1.11000000e-06, 5.32888676, 138.51749687),
    VsopTerm::new(8.30000000e-07, 3.59152795, 71.81265315),
    VsopTerm::new(5.60000000e-07, 3.40135416, 85.82729883),
];
#[rustfmt::skip]
const URANUS_B2: [VsopTerm; 7] = [
    VsopTerm::new(9.21200000e-05, 5.80044305, 74.78159857),
    VsopTerm::new(5.57000000e-06, 0.00000000, 0.00000000),
    VsopTerm::new(2.86000000e-06, 2.17729776, 149.56319713),
    VsopTerm::new(9.50000000e-07, 3.84237567, 73.29712585),
    VsopTerm::new(4.50000000e-07, 4.87822046, 76.26607127),
    VsopTerm::new(2.00000000e-07, 5.46264485, 1.48447271),
    VsopTerm::new(1.50000000e-07, 0.87983715, 138.51749687),
];
#[rustfmt::skip]
const URANUS_R0: [VsopTerm; 36] = [
    VsopTerm::new(1.92126485e+01, 0.00000000, 0.00000000),
    VsopTerm::new(8.87849840e-01, 5.60377527, 74.78159857),
    VsopTerm::new(3.44083600e-02, 0.32836099, 73.29712585),
    VsopTerm::new(2.05565300e-02, 1.78295159, 149.56319713),
    VsopTerm::new(6.49322000e-03, 4.52247298, 76.26607127),
    VsopTerm::new(6.02248000e-03, 3.86003823, 63.73589830),
    VsopTerm::new(4.96404000e-03, 1.40139935, 454.90936652),
    VsopTerm::new(3.38526000e-03, 1.58002770, 138.51749687),
    VsopTerm::new(2.43508000e-03, 1.57086606, 71.81265315),
    VsopTerm::new(1.90522000e-03, 1.99809394, 1.48447271),
    VsopTerm::new(1.61858000e-03, 2.79137786, 148.07872442),
    VsopTerm::new(1.43706000e-03, 1.38368544, 11.04570026),
    VsopTerm::new(9.31920000e-04, 0.17437220, 36.64856293),
    VsopTerm::new(8.98060000e-04, 3.66105366, 109.94568878),
    VsopTerm::new(7.14240000e-04, 4.24509236, 224.34479570),
    VsopTerm::new(4.66770000e-04, 1.39976401, 35.16409022),
    VsopTerm::new(3.90260000e-04, 3.36234773, 277.03499741),
    VsopTerm::new(3.90100000e-04, 1.66971401, 70.84944530),
    VsopTerm::new(3.67550000e-04, 3.88649278, 146.59425171),
    VsopTerm::new(3.03490000e-04, 0.70100446, 151.04766985),
    VsopTerm::new(2.91560000e-04, 3.18056336, 77.75054398),
    VsopTerm::new(2.57860000e-04, 3.78537741, 85.82729883),
    VsopTerm::new(2.56200000e-04, 5.25656086, 380.12776796),
    VsopTerm::new(2.26370000e-04, 0.72519137, 529.69096509),
    VsopTerm::new(2.04730000e-04, 2.79640244, 70.32818044),
    VsopTerm::new(2.04720000e-04, 1.55588961, 202.25339517),
    VsopTerm::new(1.79010000e-04, 0.55455488, 2.96894542),
    VsopTerm::new(1.55030000e-04, 5.35116795, 38.13303564),
    VsopTerm::new(1.47020000e-04, 4.90434406, 108.46121608),
    VsopTerm::new(1.28970000e-04, 2.62154084, 111.43016150),
    VsopTerm::new(1.23280000e-04, 5.96039150, 127.47179660),
    VsopTerm::new(1.19590000e-04, 1.75044072, 984.60033162),
    VsopTerm::new(1.18530000e-04, 0.99343161, 52.69019804),
    VsopTerm::new(1.16960000e-04, 3.29825599, 3.93215326),
    VsopTerm::new(1.14950000e-04, 0.43774027, 65.22037101),
    VsopTerm::new(1.07930000e-04, 1.42104858, 213.29909544),
];
#[rustfmt::skip]
const URANUS_R1: [VsopTerm; 24] = [
    VsopTerm::new(1.47989600e-02, 3.67205697, 74.78159857),
    VsopTerm::new(7.12120000e-04, 6.22601006, 63.73589830),
    VsopTerm::new(6.86270000e-04, 6.13411265, 149.56319713),
    VsopTerm::new(2.40600000e-04, 3.14159265, 0.00000000),
    VsopTerm::new(2.14680000e-04, 2.60176704, 76.26607127),
    VsopTerm::new(2.08570000e-04, 5.24625494, 11.04570026),
    VsopTerm::new(1.14050000e-04, 0.01848461, 70.84944530),
    VsopTerm::new(7.49700000e-05, 0.42360033, 73.29712585),
    VsopTerm::new(4.24400000e-05, 1.41692350, 85.82729883),
    VsopTerm::new(3.92700000e-05, 3.15513991, 71.81265315),
    VsopTerm::new(3.57800000e-05, 2.31160668, 224.34479570),
    VsopTerm::new(3.50600000e-05, 2.58354048, 138.51749687),
    VsopTerm::new(3.22900000e-05, 5.25499602, 3.93215326),
    VsopTerm::new(3.06000000e-05, 0.15321893, 1.48447271),
    VsopTerm::new(2.56400000e-05, 0.98076569, 148.07872442),
    VsopTerm::new(2.42900000e-05, 3.99440122, 52.69019804),
    VsopTerm::new(1.64500000e-05, 2.65349313, 127.47179660),
    VsopTerm::new(1.58400000e-05, 1.43045619, 78.71375183),
    VsopTerm::new(1.50800000e-05, 5.05996325, 151.04766985),
    VsopTerm::new(1.49000000e-05, 2.67559167, 56.62235130),
    VsopTerm::new(1.41300000e-05, 4.57461892, 202.25339517),
    VsopTerm::new(1.40300000e-05, 1.36985349, 77.75054398),
    VsopTerm::new(1.22800000e-05, 1.04703640, 62.25142559),
    VsopTerm::new(1.03300000e-05, 0.26459059, 131.40394987),
];
#[rustfmt::skip]
const URANUS_R2: [VsopTerm; 14] = [
    VsopTerm::new(2.24400000e-04, 0.69953310, 74.78159857),
    VsopTerm::new(4.72700000e-05, 1.69901642, 63.73589830),
    VsopTerm::new(1.68200000e-05, 4.64833552, 70.84944530),
    VsopTerm::new(1.65000000e-05, 3.09660078, 11.04570026),
    VsopTerm::new(1.43400000e-05, 3.52119917, 149.56319713),
    VsopTerm::new(7.70000000e-06, 0.00000000, 0.00000000),
    VsopTerm::new(5.00000000e-06, 6.17229032, 76.26607127),
    VsopTerm::new(4.61000000e-06, 0.76676632, 3.93215326),
    VsopTerm::new(3.90000000e-06, 4.49605283, 56.62235130),
    VsopTerm::new(3.90000000e-06, 5.52673426, 85.82729883),
    VsopTerm::new(2.92000000e-06, 0.20389012, 52.69019804),
    VsopTerm::new(2.87000000e-06, 3.53357683, 73.29712585),
    VsopTerm::new(2.73000000e-06, 3.84707823, 138.51749687),
    VsopTerm::new(2.20000000e-06, 1.96418942, 131.40394987),
];
#[rustfmt::skip]
const URANUS_R3: [VsopTerm; 10] = [
    VsopTerm::new(1.16400000e-05, 4.73453291, 74.78159857),
    VsopTerm::new(2.12000000e-06, 3.34255735, 63.73589830),
    VsopTerm::new(1.96000000e-06, 2.98004616, 70.84944530),
    VsopTerm::new(1.05000000e-06, 0.95772091, 11.04570026),
    VsopTerm::new(7.30000000e-07, 1.00000000, 149.56319713),
    VsopTerm::new(7.20000000e-07, 0.03000000, 56.62235130),
    VsopTerm::new(5.50000000e-07, 2.59000000, 3.93215326),
    VsopTerm::new(3.60000000e-07, 5.65000000, 77.96319867),
    VsopTerm::new(3.40000000e-07, 3.82000000, 76.26607127),
    VsopTerm::new(3.20000000e-07, 3.60000000, 131.40394987),
];
pub(crate) const URANUS: VsopModel = VsopModel {
    lon: &[&URANUS_L0, &URANUS_L1, &URANUS_L2],
    lat: &[&URANUS_B0, &URANUS_B1, &URANUS_B2],
    rad: &[&URANUS_R0, &URANUS_R1, &URANUS_R2, &URANUS_R3],
};

#[rustfmt::skip]
const NEPTUNE_L0: [VsopTerm; 30] = [
    VsopTerm::new(5.31188633e+00, 0.00000000, 0.00000000),
    VsopTerm::new(1.79847600e-02, 2.90101273, 38.13303564),
    VsopTerm::new(1.01972800e-02, 0.48580922, 1.48447271),
    VsopTerm::new(1.24532000e-03, 4.83008090, 36.64856293),
    VsopTerm::new(4.20640000e-04, 5.41054993, 2.96894542),
    VsopTerm::new(3.77150000e-04, 6.09221808, 35.16409022),
    VsopTerm::new(3.37850000e-04, 1.24488874, 76.26607127),
    VsopTerm::new(1.64830000e-04, 0.00007727, 491.55792945),
    VsopTerm::new(9.19900000e-05, 4.93747051, 39.61750834),
    VsopTerm::new(8.99400000e-05, 0.27462171, 175.16605980),
    VsopTerm::new(4.21600000e-05, 1.98711875, 73.29712585),
    VsopTerm::new(3.36500000e-05, 1.03590060, 33.67961751),
    VsopTerm::new(2.28500000e-05, 4.20606949, 4.45341812),
    VsopTerm::new(1.43400000e-05, 2.78340432, 74.78159857),
    VsopTerm::new(9.00000000e-06, 2.07606702, 109.94568878),
    VsopTerm::new(7.45000000e-06, 3.19032530, 71.81265315),
    VsopTerm::new(5.06000000e-06, 5.74785370, 114.39910691),
    VsopTerm::new(4.00000000e-06, 0.34972342, 1021.24889455),
    VsopTerm::new(3.45000000e-06, 3.46186210, 41.10198105),
    VsopTerm::new(3.40000000e-06, 3.30369900, 77.75054398),
    VsopTerm::new(3.23000000e-06, 2.24815188, 32.19514480),
    VsopTerm::new(3.06000000e-06, 0.49684039, 0.52126486),
    VsopTerm::new(2.87000000e-06, 4.50523446, 0.04818411),
    VsopTerm::new(2.82000000e-06, 2.24565579, 146.59425171),
    VsopTerm::new(2.67000000e-06, 4.88932609, 0.96320784),
    VsopTerm::new(2.52000000e-06, 5.78166597, 388.46515524),
    VsopTerm::new(2.45000000e-06, 1.24693337, 9.56122756),
    VsopTerm::new(2.33000000e-06, 2.50459795, 137.03302416),
    VsopTerm::new(2.27000000e-06, 1.79713054, 453.42489382),
    VsopTerm::new(1.70000000e-06, 3.32390630, 108.46121608),
];
#[rustfmt::skip]
const NEPTUNE_L1: [VsopTerm; 18] = [
    VsopTerm::new(3.83768772e+01, 0.00000000, 0.00000000),
    VsopTerm::new(1.66040000e-04, 4.86319129, 1.48447271),
    VsopTerm::new(1.58070000e-04, 2.27923488, 38.13303564),
    VsopTerm::new(3.33500000e-05, 3.68199676, 76.26607127),
    VsopTerm::new(1.30600000e-05, 3.67320813, 2.96894542),
    VsopTerm::new(6.05000000e-06, 1.50477747, 35.16409022),
    VsopTerm::new(1.79000000e-06, 3.45318524, 39.61750834),
    VsopTerm::new(1.07000000e-06, 2.45126138, 37.61177078),
    VsopTerm::new(1.06000000e-06, 2.75479327, 33.67961751),
    VsopTerm::new(7.30000000e-07, 5.48724732, 36.64856293),
    VsopTerm::new(5.70000000e-07, 1.85767603, 114.39910691),
    VsopTerm::new(5.70000000e-07, 5.21649804, 0.52126486),
    VsopTerm::new(3.50000000e-07, 4.52187689, 74.78159857),
    VsopTerm::new(3.20000000e-07, 5.89965014, 77.75054398),
    VsopTerm::new(3.00000000e-07, 3.67047686, 388.46515524),
    VsopTerm::new(2.90000000e-07, 5.16877529, 9.56122756),
    VsopTerm::new(2.90000000e-07, 5.16732589, 2.44768055),
    VsopTerm::new(2.60000000e-07, 5.25273240, 168.05251280),
];
#[rustfmt::skip]
const NEPTUNE_L2: [VsopTerm; 7] = [
    VsopTerm::new(5.38930000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(2.96000000e-06, 1.85467603, 1.48447271),
    VsopTerm::new(2.81000000e-06, 1.19084538, 38.13303564),
    VsopTerm::new(2.70000000e-06, 5.72142178, 76.26607127),
    VsopTerm::new(2.30000000e-07, 1.21035311, 2.96894542),
    VsopTerm::new(9.00000000e-08, 4.42544992, 35.16409022),
    VsopTerm::new(7.00000000e-08, 0.54033306, 2.44768055),
];
#[rustfmt::skip]
const NEPTUNE_B0: [VsopTerm; 17] = [
    VsopTerm::new(3.08862300e-02, 1.44104372, 38.13303564),
    VsopTerm::new(2.77800000e-04, 5.91271882, 76.26607127),
    VsopTerm::new(2.76240000e-04, 0.00000000, 0.00000000),
    VsopTerm::new(1.54480000e-04, 3.50877079, 39.61750834),
    VsopTerm::new(1.53550000e-04, 2.52123799, 36.64856293),
    VsopTerm::new(2.00000000e-05, 1.50998668, 74.78159857),
    VsopTerm::new(1.96800000e-05, 4.37778196, 1.48447271),
    VsopTerm::new(1.01500000e-05, 3.21561035, 35.16409022),
    VsopTerm::new(6.06000000e-06, 2.80246601, 73.29712585),
    VsopTerm::new(5.95000000e-06, 2.12892708, 41.10198105),
    VsopTerm::new(5.89000000e-06, 3.18655882, 2.96894542),
    VsopTerm::new(4.02000000e-06, 4.16883287, 114.39910691),
    VsopTerm::new(2.80000000e-06, 1.68165309, 77.75054398),
    VsopTerm::new(2.62000000e-06, 3.76722704, 213.29909544),
    VsopTerm::new(2.54000000e-06, 3.27094989, 453.42489382),
    VsopTerm::new(2.06000000e-06, 4.25652348, 529.69096509),
    VsopTerm::new(1.40000000e-06, 3.52969556, 137.03302416),
];
#[rustfmt::skip]
const NEPTUNE_B1: [VsopTerm; 13] = [
    VsopTerm::new(2.27279000e-03, 3.80793089, 38.13303564),
    VsopTerm::new(1.80300000e-05, 1.97576485, 76.26607127),
    VsopTerm::new(1.43300000e-05, 3.14159265, 0.00000000),
    VsopTerm::new(1.38600000e-05, 4.82555548, 36.64856293),
    VsopTerm::new(1.07300000e-05, 6.08054240, 39.61750834),
    VsopTerm::new(1.48000000e-06, 3.85766231, 74.78159857),
    VsopTerm::new(1.36000000e-06, 0.47764957, 1.48447271),
    VsopTerm::new(7.00000000e-07, 6.18782052, 35.16409022),
    VsopTerm::new(5.20000000e-07, 5.05221791, 73.29712585),
    VsopTerm::new(4.30000000e-07, 0.30721737, 114.39910691),
    VsopTerm::new(3.70000000e-07, 4.89476629, 41.10198105),
    VsopTerm::new(3.70000000e-07, 5.75999349, 2.96894542),
    VsopTerm::new(2.60000000e-07, 5.21566335, 213.29909544),
];
#[rustfmt::skip]
const NEPTUNE_B2: [VsopTerm; 6] = [
    VsopTerm::new(9.69100000e-05, 5.57123750, 38.13303564),
    VsopTerm::new(7.90000000e-07, 3.62705474, 76.26607127),
    VsopTerm::new(7.20000000e-07, 0.45476688, 36.64856293),
    VsopTerm::new(5.90000000e-07, 3.14159265, 0.00000000),
    VsopTerm::new(3.00000000e-07, 1.60671722, 39.61750834),
    VsopTerm::new(6.00000000e-08, 5.60736757, 74.78159857),
];
#[rustfmt::skip]
const NEPTUNE_R0: [VsopTerm; 32] = [
    VsopTerm::new(3.00701321e+01, 0.00000000, 0.00000000),
    VsopTerm::new(2.70622590e-01, 1.32999459, 38.13303564),
    VsopTerm::new(1.69176400e-02, 3.25186139, 36.64856293),
    VsopTerm::new(8.07831000e-03, 5.18592836, 1.48447271),
    VsopTerm::new(5.37761000e-03, 4.52113903, 35.16409022),
    VsopTerm::new(4.95726000e-03, 1.57105654, 491.55792945),
    VsopTerm::new(2.74572000e-03, 1.84552256, 175.16605980),
    VsopTerm::new(1.35134000e-03, 3.37220607, 39.61750834),
    VsopTerm::new(1.21802000e-03, 5.79754444, 76.26607127),
    VsopTerm::new(1.00895000e-03, 0.37702748, 73.29712585),
    VsopTerm::new(6.97920000e-04, 3.79617226, 2.96894542),
    VsopTerm::new(4.66880000e-04, 5.74937810, 33.67961751),
    VsopTerm::new(2.45940000e-04, 0.50801728, 109.94568878),
    VsopTerm::new(1.69390000e-04, 1.59422166, 71.81265315),
    VsopTerm::new(1.42300000e-04, 1.07786112, 74.78159857),
    VsopTerm::new(1.20120000e-04, 1.92062131, 1021.24889455),
    VsopTerm::new(8.39500000e-05, 0.67818676, 146.59425171),
    VsopTerm::new(7.57200000e-05, 1.07149263, 388.46515524),
    VsopTerm::new(5.72100000e-05, 2.59059512, 4.45341812),
    VsopTerm::new(4.84000000e-05, 1.90685991, 41.10198105),
    VsopTerm::new(4.48300000e-05, 2.90573457, 529.69096509),
    VsopTerm::new(4.42100000e-05, 1.74993796, 108.46121608),
    VsopTerm::new(4.35400000e-05, 0.67985655, 32.19514480),
    VsopTerm::new(4.27000000e-05, 3.41343865, 453.42489382),
    VsopTerm::new(3.38100000e-05, 0.84810683, 183.24281465),
    VsopTerm::new(2.88100000e-05, 1.98600105, 137.03302416),
    VsopTerm::new(2.87900000e-05, 3.67415901, 350.33211960),
    VsopTerm::new(2.63600000e-05, 3.09755943, 213.29909544),
    VsopTerm::new(2.53000000e-05, 5.79839567, 490.07345675),
    VsopTerm::new(2.52300000e-05, 0.48630800, 493.04240217),
    VsopTerm::new(2.30600000e-05, 2.80962935, 70.32818044),
    VsopTerm::new(2.08700000e-05, 0.61858378, 33.94024994),
];
#[rustfmt::skip]
const NEPTUNE_R1: [VsopTerm; 15] = [
    VsopTerm::new(2.36339000e-03, 0.70498011, 38.13303564),
    VsopTerm::new(1.32200000e-04, 3.32015499, 1.48447271),
    VsopTerm::new(8.62200000e-05, 6.21628951, 35.16409022),
    VsopTerm::new(2.70200000e-05, 1.88140666, 39.61750834),
    VsopTerm::new(2.15500000e-05, 2.09431198, 2.96894542),
    VsopTerm::new(2.15300000e-05, 5.16873840, 76.26607127),
    VsopTerm::new(1.60300000e-05, 0.00000000, 0.00000000),
    VsopTerm::new(1.46400000e-05, 1.18417031, 33.67961751),
    VsopTerm::new(1.13600000e-05, 3.91891199, 36.64856293),
    VsopTerm::new(8.98000000e-06, 5.24122933, 388.46515524),
    VsopTerm::new(7.90000000e-06, 0.53315484, 168.05251280),
    VsopTerm::new(7.60000000e-06, 0.02051033, 182.27960605),
    VsopTerm::new(6.07000000e-06, 1.07704652, 1021.24889455),
    VsopTerm::new(5.72000000e-06, 3.40060785, 484.44438245),
    VsopTerm::new(5.61000000e-06, 2.88685815, 498.67147645),
];
#[rustfmt::skip]
const NEPTUNE_R2: [VsopTerm; 5] = [
    VsopTerm::new(4.24700000e-05, 5.89910679, 38.13303564),
    VsopTerm::new(2.18000000e-06, 0.34581829, 1.48447271),
    VsopTerm::new(1.63000000e-06, 2.23872947, 168.05251280),
    VsopTerm::new(1.56000000e-06, 4.59414467, 182.27960605),
    VsopTerm::new(1.27000000e-06, 2.84786298, 35.16409022),
];
#[rustfmt::skip]
const NEPTUNE_R3: [VsopTerm; 1] = [
    VsopTerm::new(1.66000000e-06, 4.55243893, 38.13303564),
];
pub(crate) const NEPTUNE: VsopModel = VsopModel {
    lon: &[&NEPTUNE_L0, &NEPTUNE_L1, &NEPTUNE_L2],
    lat: &[&NEPTUNE_B0, &NEPTUNE_B1, &NEPTUNE_B2],
    rad: &[&NEPTUNE_R0, &NEPTUNE_R1, &NEPTUNE_R2, &NEPTUNE_R3],
};
