/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! IAU 2000B nutation: the 77-term truncation of the luni-solar series, with
//! the planetary contribution replaced by its fixed mean offsets. Good to
//! about a milliarcsecond over 1995-2050 and degrades gently outside.

use core::f64::consts::TAU;

const ARCSEC_PER_TURN: f64 = 1_296_000.0;

/// One luni-solar term. Argument multipliers apply to the Delaunay arguments
/// (l, l', F, D, Ω); coefficients are in 0.1 µas.
struct LuniSolar {
    nl: i32,
    nlp: i32,
    nf: i32,
    nd: i32,
    nom: i32,
    sin_psi: f64,
    sin_psi_t: f64,
    cos_psi: f64,
    cos_eps: f64,
    cos_eps_t: f64,
    sin_eps: f64,
}

macro_rules! ls {
    ($nl:expr, $nlp:expr, $nf:expr, $nd:expr, $nom:expr,
     $sp:expr, $spt:expr, $cp:expr, $ce:expr, $cet:expr, $se:expr) => {
        LuniSolar {
            nl: $nl,
            nlp: $nlp,
            nf: $nf,
            nd: $nd,
            nom: $nom,
            sin_psi: $sp,
            sin_psi_t: $spt,
            cos_psi: $cp,
            cos_eps: $ce,
            cos_eps_t: $cet,
            sin_eps: $se,
        }
    };
}

#[rustfmt::skip]
const TERMS: [LuniSolar; 77] = [
    ls!( 0,  0,  0,  0,  1, -172_064_161.0, -174_666.0,  33_386.0,  92_052_331.0,  9086.0,  15_377.0),
    ls!( 0,  0,  2, -2,  2,  -13_170_906.0,   -1675.0, -13_696.0,   5_730_336.0, -3015.0,  -4587.0),
    ls!( 0,  0,  2,  0,  2,   -2_276_413.0,    -234.0,   2796.0,     978_459.0,  -485.0,   1374.0),
    ls!( 0,  0,  0,  0,  2,    2_074_554.0,     207.0,   -698.0,    -897_492.0,   470.0,   -291.0),
    ls!( 0,  1,  0,  0,  0,    1_475_877.0,   -3633.0,  11_817.0,      73_871.0,  -184.0,  -1924.0),
    ls!( 0,  1,  2, -2,  2,     -516_821.0,    1226.0,   -524.0,     224_386.0,  -677.0,   -174.0),
    ls!( 1,  0,  0,  0,  0,      711_159.0,      73.0,   -872.0,       -6750.0,     0.0,    358.0),
    ls!( 0,  0,  2,  0,  1,     -387_298.0,    -367.0,    380.0,     200_728.0,    18.0,    318.0),
    ls!( 1,  0,  2,  0,  2,     -301_461.0,     -36.0,    816.0,     129_025.0,   -63.0,    367.0),
    ls!( 0, -1,  2, -2,  2,      215_829.0,    -494.0,    111.0,      -95_929.0,   299.0,    132.0),
    ls!( 0,  0,  2, -2,  1,      128_227.0,     137.0,    181.0,      -68_982.0,    -9.0,     39.0),
    ls!(-1,  0,  2,  0,  2,      123_457.0,      11.0,     19.0,      -53_311.0,    32.0,     -4.0),
    ls!(-1,  0,  0,  2,  0,      156_994.0,      10.0,   -168.0,       -1235.0,     0.0,     82.0),
    ls!( 1,  0,  0,  0,  1,       63_110.0,      63.0,     27.0,      -33_228.0,     0.0,     -9.0),
    ls!(-1,  0,  0,  0,  1,      -57_976.0,     -63.0,   -189.0,       31_429.0,     0.0,    -75.0),
    ls!(-1,  0,  2,  2,  2,      -59_641.0,     -11.0,    149.0,       25_543.0,   -11.0,     66.0),
    ls!( 1,  0,  2,  0,  1,      -51_613.0,     -42.0,    129.0,       26_366.0,     0.0,     78.0),
    ls!(-2,  0,  2,  0,  1,       45_893.0,      50.0,     31.0,      -24_236.0,   -10.0,     20.0),
    ls!( 0,  0,  0,  2,  0,       63_384.0,      11.0,   -150.0,       -1220.0,     0.0,     29.0),
    ls!( 0,  0,  2,  2,  2,      -38_571.0,      -1.0,    158.0,       16_452.0,   -11.0,     68.0),
    ls!( 0, -2,  2, -2,  2,       32_481.0,       0.0,      0.0,      -13_870.0,     0.0,      0.0),
    ls!(-2,  0,  0,  2,  0,      -47_722.0,       0.0,    -18.0,         477.0,     0.0,    -25.0),
    ls!( 2,  0,  2,  0,  2,      -31_046.0,      -1.0,    131.0,       13_238.0,   -11.0,     59.0),
    ls!( 1,  0,  2, -2,  2,       28_593.0,       0.0,     -1.0,      -12_338.0,    10.0,     -3.0),
    ls!(-1,  0,  2,  0,  1,       20_441.0,      21.0,     10.0,      -10_758.0,     0.0,     -3.0),
    ls!( 2,  0,  0,  0,  0,       29_243.0,       0.0,    -74.0,        -609.0,     0.0,     13.0),
    ls!( 0,  0,  2,  0,  0,       25_887.0,       0.0,    -66.0,        -550.0,     0.0,     11.0),
    ls!( 0,  1,  0,  0,  1,      -14_053.0,     -25.0,     79.0,        8551.0,    -2.0,    -45.0),
    ls!(-1,  0,  0,  2,  1,       15_164.0,      10.0,     11.0,       -8001.0,     0.0,     -1.0),
    ls!( 0,  2,  2, -2,  2,      -15_794.0,      72.0,    -16.0,        6850.0,   -42.0,     -5.0),
    ls!( 0,  0, -2,  2,  0,       21_783.0,       0.0,     13.0,        -167.0,     0.0,     13.0),
    ls!( 1,  0,  0, -2,  1,      -12_873.0,     -10.0,    -37.0,        6953.0,     0.0,    -14.0),
    ls!( 0, -1,  0,  0,  1,      -12_654.0,      11.0,     63.0,        6415.0,     0.0,     26.0),
    ls!(-1,  0,  2,  2,  1,      -10_204.0,       0.0,     25.0,        5222.0,     0.0,     15.0),
    ls!( 0,  2,  0,  0,  0,       16_707.0,     -85.0,    -10.0,         168.0,    -1.0,     10.0),
    ls!( 1,  0,  2,  2,  2,       -7691.0,        0.0,     44.0,        3268.0,     0.0,     19.0),
    ls!(-2,  0,  2,  0,  0,      -11_024.0,       0.0,    -14.0,         104.0,     0.0,      2.0),
    ls!( 0,  1,  2,  0,  2,        7566.0,      -21.0,    -11.0,       -3250.0,     0.0,     -5.0),
    ls!( 0,  0,  2,  2,  1,       -6637.0,      -11.0,     25.0,        3353.0,     0.0,     14.0),
    ls!( 0, -1,  2,  0,  2,       -7141.0,       21.0,      8.0,        3070.0,     0.0,      4.0),
    ls!( 0,  0,  0,  2,  1,       -6302.0,      -11.0,      2.0,        3272.0,     0.0,      4.0),
    ls!( 1,  0,  2, -2,  1,        5800.0,       10.0,      2.0,       -3045.0,     0.0,     -1.0),
    ls!( 2,  0,  2, -2,  2,        6443.0,        0.0,     -7.0,       -2768.0,     0.0,     -4.0),
    ls!(-2,  0,  0,  2,  1,       -5774.0,      -11.0,    -15.0,        3041.0,     0.0,     -5.0),
    ls!( 2,  0,  2,  0,  1,       -5350.0,        0.0,     21.0,        2695.0,     0.0,     12.0),
    ls!( 0, -1,  2, -2,  1,       -4752.0,      -11.0,     -3.0,        2719.0,     0.0,     -3.0),
    ls!( 0,  0,  0, -2,  1,       -4940.0,      -11.0,    -21.0,        2720.0,     0.0,     -9.0),
    ls!(-1, -1,  0,  2,  0,        7350.0,        0.0,     -8.0,         -51.0,     0.0,      4.0),
    ls!( 2,  0,  0, -2,  1,        4065.0,        0.0,      6.0,       -2206.0,     0.0,      1.0),
    ls!( 1,  0,  0,  2,  0,        6579.0,        0.0,    -24.0,        -199.0,     0.0,      2.0),
    ls!( 0,  1,  2, -2,  1,        3579.0,        0.0,      5.0,       -1900.0,     0.0,      1.0),
    ls!( 1, -1,  0,  0,  0,        4725.0,        0.0,     -6.0,         -41.0,     0.0,      3.0),
    ls!(-2,  0,  2,  0,  2,       -3075.0,        0.0,     -2.0,        1313.0,     0.0,     -1.0),
    ls!( 3,  0,  2,  0,  2,       -2904.0,        0.0,     15.0,        1233.0,     0.0,      7.0),
    ls!( 0, -1,  0,  2,  0,        4348.0,        0.0,    -10.0,         -81.0,     0.0,      2.0),
    ls!( 1, -1,  2,  0,  2,       -2878.0,        0.0,      8.0,        1232.0,     0.0,      4.0),
    ls!( 0,  0,  0,  1,  0,       -4230.0,        0.0,      5.0,         -20.0,     0.0,     -2.0),
    ls!(-1, -1,  2,  2,  2,       -2819.0,        0.0,      7.0,        1207.0,     0.0,      3.0),
    ls!(-1,  0,  2,  0,  0,       -4056.0,        0.0,      5.0,          40.0,     0.0,     -2.0),
    ls!( 0, -1,  2,  2,  2,       -2647.0,        0.0,     11.0,        1129.0,     0.0,      5.0),
    ls!(-2,  0,  0,  0,  1,       -2294.0,        0.0,    -10.0,        1266.0,     0.0,     -4.0),
    ls!( 1,  1,  2,  0,  2,        2481.0,        0.0,     -7.0,       -1062.0,     0.0,     -3.0),
    ls!( 2,  0,  0,  0,  1,        2179.0,        0.0,     -2.0,       -1129.0,     0.0,     -2.0),
    ls!(-1,  1,  0,  1,  0,        3276.0,        0.0,      1.0,          -9.0,     0.0,      0.0),
    ls!( 1,  1,  0,  0,  0,       -3389.0,        0.0,      5.0,          35.0,     0.0,     -2.0),
    ls!( 1,  0,  2,  0,  0,        3339.0,        0.0,    -13.0,        -107.0,     0.0,      1.0),
    ls!(-1,  0,  2, -2,  1,       -1987.0,        0.0,     -6.0,        1073.0,     0.0,     -2.0),
    ls!( 1,  0,  0,  0,  2,       -1981.0,        0.0,      0.0,         854.0,     0.0,      0.0),
    ls!(-1,  0,  0,  1,  0,        4026.0,        0.0,   -353.0,        -553.0,     0.0,   -139.0),
    ls!( 0,  0,  2,  1,  2,        1660.0,        0.0,     -5.0,        -710.0,     0.0,     -2.0),
    ls!(-1,  0,  2,  4,  2,       -1521.0,        0.0,      9.0,         647.0,     0.0,      4.0),
    ls!(-1,  1,  0,  1,  1,        1314.0,        0.0,      0.0,        -700.0,     0.0,      0.0),
    ls!( 0, -2,  2, -2,  1,       -1283.0,        0.0,      0.0,         672.0,     0.0,      0.0),
    ls!( 1,  0,  2,  2,  1,       -1331.0,        0.0,      8.0,         663.0,     0.0,      4.0),
    ls!(-2,  0,  2,  2,  2,        1383.0,        0.0,     -2.0,        -594.0,     0.0,     -2.0),
    ls!(-1,  0,  0,  0,  2,        1405.0,        0.0,      4.0,        -610.0,     0.0,      2.0),
    ls!( 1,  1,  2, -2,  2,        1290.0,        0.0,      0.0,        -556.0,     0.0,      0.0),
];

/// Fixed offsets standing in for the neglected planetary terms, arcseconds.
const PSI_PLANETARY_ARCSEC: f64 = -0.135e-3;
const EPS_PLANETARY_ARCSEC: f64 = 0.388e-3;

/// Evaluates the nutation angles (Δψ, Δε) in arcseconds for a TT expressed in
/// days since J2000.
pub fn iau2000b(tt_days: f64) -> (f64, f64) {
    let t = tt_days / 36_525.0;

    // Delaunay arguments, arcseconds folded to radians. The 2000B model uses
    // the linear rates only.
    let to_rad = |arcsec: f64| (arcsec % ARCSEC_PER_TURN) * TAU / ARCSEC_PER_TURN;
    let el = to_rad(485_868.249036 + 1_717_915_923.2178 * t);
    let elp = to_rad(1_287_104.79305 + 129_596_581.0481 * t);
    let f = to_rad(335_779.526232 + 1_739_527_262.8478 * t);
    let d = to_rad(1_072_260.70369 + 1_602_961_601.2090 * t);
    let om = to_rad(450_160.398036 - 6_962_890.5431 * t);

    // The table is ordered by descending magnitude; fold it by ascending
    // magnitude to limit floating-point accumulation error.
    let (dpsi, deps) = TERMS.iter().rev().fold((0.0, 0.0), |(psi, eps), term| {
        let arg = (term.nl as f64 * el
            + term.nlp as f64 * elp
            + term.nf as f64 * f
            + term.nd as f64 * d
            + term.nom as f64 * om)
            % TAU;
        let (sin_arg, cos_arg) = arg.sin_cos();
        (
            psi + (term.sin_psi + term.sin_psi_t * t) * sin_arg + term.cos_psi * cos_arg,
            eps + (term.cos_eps + term.cos_eps_t * t) * cos_arg + term.sin_eps * sin_arg,
        )
    });

    // 0.1 µas to arcseconds, plus the planetary bias.
    (
        dpsi * 1.0e-7 + PSI_PLANETARY_ARCSEC,
        deps * 1.0e-7 + EPS_PLANETARY_ARCSEC,
    )
}

#[cfg(test)]
mod ut_nutation {
    use super::*;

    #[test]
    fn reference_epoch_2006() {
        // 2006-01-01T00:00 TT, the standard check point for this model:
        // Δψ = -0.9632552291148362783e-5 rad, Δε = +0.4063197106621159367e-4 rad.
        let (dpsi, deps) = iau2000b(2191.5);
        assert!((dpsi - (-1.9868565319987)).abs() < 1e-6, "dpsi = {dpsi}");
        assert!((deps - 8.3809456394098).abs() < 1e-6, "deps = {deps}");
    }

    #[test]
    fn j2000_values() {
        let (dpsi, deps) = iau2000b(0.0);
        assert!((dpsi - (-13.9316638890)).abs() < 1e-6, "dpsi = {dpsi}");
        assert!((deps - (-5.7694170773)).abs() < 1e-6, "deps = {deps}");
    }

    #[test]
    fn amplitude_envelope() {
        // Nutation in longitude stays within ±20 arcsec, obliquity within
        // ±11 arcsec, over several centuries.
        let mut tt = -150.0 * 365.25;
        while tt < 150.0 * 365.25 {
            let (dpsi, deps) = iau2000b(tt);
            assert!(dpsi.abs() < 20.0);
            assert!(deps.abs() < 11.0);
            tt += 37.25;
        }
    }

    #[test]
    fn dominant_period_is_the_node_cycle() {
        // The 18.6-year node regression dominates: samples half a node period
        // apart should be roughly opposite in sign.
        let (psi_a, _) = iau2000b(0.0);
        let (psi_b, _) = iau2000b(18.6 * 365.25 / 2.0);
        assert!(psi_a * psi_b < 0.0, "psi_a = {psi_a}, psi_b = {psi_b}");
    }
}
