/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The root-finding kernel behind every event search.
//!
//! [search] locates a sign change of a scalar function of time inside a
//! bracket using a Brent-style solver: bisection guarded, accelerated by
//! inverse quadratic interpolation. It is symmetric under direction, so
//! searching backward over a reversed bracket finds the same root.

use log::{debug, trace};

use crate::errors::{AstroResult, SearchError, SearchSnafu};
use crate::time::AstroTime;

use snafu::ResultExt;

const MAX_ITERATIONS: usize = 64;

/// Finds a time in `[t1, t2]` (either order) where `f` crosses zero. The
/// function must change sign over the bracket; the root is refined until the
/// bracket is below `tol_seconds`.
pub fn search<F>(mut f: F, t1: AstroTime, t2: AstroTime, tol_seconds: f64) -> AstroResult<AstroTime>
where
    F: FnMut(&AstroTime) -> AstroResult<f64>,
{
    let has_converged = |xa: f64, xb: f64| (xa - xb).abs() <= tol_seconds;
    let time_at = |seconds: f64| t1.add_days(seconds / 86_400.0);

    // Work in offset seconds from t1; backward searches just use a negative
    // far edge.
    let mut xa = 0.0;
    let mut xb = (t2.ut - t1.ut) * 86_400.0;
    let mut ya = f(&t1)?;
    let mut yb = f(&t2)?;

    if ya == 0.0 {
        return Ok(t1);
    }
    if yb == 0.0 {
        return Ok(t2);
    }
    if ya * yb > 0.0 {
        return Err(SearchError::NotBracketed).context(SearchSnafu {
            action: "bracketed root search",
        });
    }

    let (mut xc, mut yc, mut xd) = (xa, ya, xa);
    let mut flag = true;

    for iteration in 0..MAX_ITERATIONS {
        if has_converged(xa, xb) {
            trace!("search converged after {iteration} iterations");
            return Ok(time_at(xb));
        }
        let mut s = if (ya - yc).abs() > f64::EPSILON && (yb - yc).abs() > f64::EPSILON {
            // Inverse quadratic interpolation through the three points.
            xa * yb * yc / ((ya - yb) * (ya - yc))
                + xb * ya * yc / ((yb - ya) * (yb - yc))
                + xc * ya * yb / ((yc - ya) * (yc - yb))
        } else {
            // Secant step.
            xb - yb * (xb - xa) / (yb - ya)
        };

        // Fall back to bisection whenever the interpolated step misbehaves.
        let cond1 = (s - xb) * (s - (3.0 * xa + xb) / 4.0) > 0.0;
        let cond2 = flag && (s - xb).abs() >= (xb - xc).abs() / 2.0;
        let cond3 = !flag && (s - xb).abs() >= (xc - xd).abs() / 2.0;
        let cond4 = flag && has_converged(xb, xc);
        let cond5 = !flag && has_converged(xc, xd);
        if cond1 || cond2 || cond3 || cond4 || cond5 {
            s = (xa + xb) / 2.0;
            flag = true;
        } else {
            flag = false;
        }

        let ys = f(&time_at(s))?;
        if ys == 0.0 {
            return Ok(time_at(s));
        }

        xd = xc;
        xc = xb;
        yc = yb;
        if ya * ys < 0.0 {
            xb = s;
            yb = ys;
        } else {
            xa = s;
            ya = ys;
        }

        // Keep b as the better of the two bracket edges.
        if ya.abs() < yb.abs() {
            core::mem::swap(&mut xa, &mut xb);
            core::mem::swap(&mut ya, &mut yb);
        }
    }
    debug!("search failed to converge after {MAX_ITERATIONS} iterations");
    Err(SearchError::NoConvergence {
        iter: MAX_ITERATIONS,
    })
    .context(SearchSnafu {
        action: "bracketed root search",
    })
}

/// Statistics from a bracket-discovery scan, reported through `trace!` by
/// the callers that care.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct AscentStats {
    pub evaluations: usize,
    pub max_depth: usize,
}

/// Recursively slices `[ta, tb]` (where `f` is negative at both ends)
/// looking for an interior interval where `f` turns positive, as happens
/// with altitude-above-threshold functions between rise and set. Returns a
/// sign-change bracket `(left, right)` enclosing the ascent when found.
///
/// `max_slope` is the caller's bound on |df/dt| per day; subwindows the
/// function cannot climb out of within that bound are pruned instead of
/// bisected, which keeps the scan linear instead of exponential.
pub(crate) fn find_ascent<F>(
    f: &mut F,
    ta: AstroTime,
    tb: AstroTime,
    fa: f64,
    fb: f64,
    max_slope: f64,
    depth: usize,
    stats: &mut AscentStats,
) -> AstroResult<Option<(AstroTime, AstroTime)>>
where
    F: FnMut(&AstroTime) -> AstroResult<f64>,
{
    if fa > 0.0 || fb > 0.0 {
        // The caller's endpoints already bracket a crossing.
        return Ok(Some((ta, tb)));
    }
    // Seventeen halvings take a day-long window below one second.
    if depth > 17 {
        return Ok(None);
    }
    stats.max_depth = stats.max_depth.max(depth);

    // Even at the steepest allowed slope, the function cannot reach zero
    // from both ends inside this window: nothing to find here.
    let window = (tb.ut - ta.ut).abs();
    if (fa.abs() + fb.abs()) / max_slope > window {
        return Ok(None);
    }

    let tm = ta.add_days((tb.ut - ta.ut) / 2.0);
    let fm = f(&tm)?;
    stats.evaluations += 1;
    if fm > 0.0 {
        return Ok(Some((ta, tm)));
    }

    if let Some(found) = find_ascent(f, ta, tm, fa, fm, max_slope, depth + 1, stats)? {
        return Ok(Some(found));
    }
    find_ascent(f, tm, tb, fm, fb, max_slope, depth + 1, stats)
}

#[cfg(test)]
mod ut_search {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn finds_a_linear_root() {
        // f crosses zero exactly 10000 seconds after t1.
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let root = search(
            |t| Ok(t.ut * 86_400.0 - 10_000.0),
            t1,
            t2,
            0.1,
        )
        .unwrap();
        assert_relative_eq!(root.ut * 86_400.0, 10_000.0, epsilon = 0.1);
    }

    #[test]
    fn forward_and_backward_agree() {
        let f = |t: &AstroTime| Ok((t.ut - 0.321).sin());
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let fwd = search(f, t1, t2, 1.0e-3).unwrap();
        let bwd = search(f, t2, t1, 1.0e-3).unwrap();
        assert!((fwd.ut - bwd.ut).abs() * 86_400.0 < 2.0e-3);
        assert_relative_eq!(fwd.ut, 0.321, epsilon = 1e-7);
    }

    #[test]
    fn rejects_unbracketed_functions() {
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let err = search(|_| Ok(1.0), t1, t2, 1.0).unwrap_err();
        assert!(format!("{err}").contains("sign"));
    }

    #[test]
    fn propagates_inner_errors() {
        use crate::errors::{AstroError, MathError};
        let t1 = AstroTime::from_ut(0.0);
        let t2 = AstroTime::from_ut(1.0);
        let result = search(
            |_| {
                Err(AstroError::Math {
                    action: "test",
                    source: MathError::DomainError {
                        value: 0.0,
                        msg: "synthetic",
                    },
                })
            },
            t1,
            t2,
            1.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn ascent_finds_a_narrow_bump() {
        // Negative everywhere except a 0.02-day bump around 0.37 days; the
        // function's slope never exceeds 1 per day.
        let mut f = |t: &AstroTime| Ok(0.01 - (t.ut - 0.37).abs());
        let ta = AstroTime::from_ut(0.0);
        let tb = AstroTime::from_ut(1.0);
        let mut stats = AscentStats::default();
        let bracket = find_ascent(&mut f, ta, tb, -0.36, -0.62, 1.0, 0, &mut stats)
            .unwrap()
            .expect("bump not found");
        // The bracket encloses a crossing on the left side of the bump.
        assert!(bracket.0.ut < 0.37 && bracket.1.ut > 0.35);
        assert!(stats.evaluations > 0);
    }

    #[test]
    fn ascent_prunes_hopeless_windows() {
        // With the endpoints this deep and the slope this small, no interior
        // point can reach zero; the scan must refuse without evaluating.
        let mut f = |_: &AstroTime| Ok(-1.0);
        let ta = AstroTime::from_ut(0.0);
        let tb = AstroTime::from_ut(1.0);
        let mut stats = AscentStats::default();
        let found = find_ascent(&mut f, ta, tb, -1.0, -1.0, 0.5, 0, &mut stats).unwrap();
        assert!(found.is_none());
        assert_eq!(stats.evaluations, 0);
    }
}
