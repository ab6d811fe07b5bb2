/*
 * Almagest
 * Copyright (C) 2024-onward The Almagest contributors
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Eclipse geometry: lunar eclipses, global and local solar eclipses.
//!
//! Everything reduces to one construction: a shadow axis from the Sun
//! through the occluding body, the perpendicular distance of a target point
//! from that axis, and the umbra/penumbra cone radii in the target plane.

use log::debug;

use crate::bodies::Body;
use crate::constants::shapes::{
    EARTH_ECLIPSE_RADIUS_KM, EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING_RATIO,
    EARTH_MEAN_RADIUS_KM, MOON_MEAN_RADIUS_KM, SUN_RADIUS_KM,
};
use crate::constants::KM_PER_AU;
use crate::ephemerides::{geo_moon, helio_pos_fast, Aberration};
use crate::errors::{AstroResult, EventError, EventSnafu, SearchError, SearchSnafu};
use crate::frames;
use crate::math::Vector3;
use crate::observer::{observer_vector, Observer};
use crate::search;
use crate::time::{sidereal_time, AstroTime};
use crate::topocentric::{equator, horizon, EquatorDate, Refraction};

use snafu::ResultExt;

use super::phase::search_moon_phase;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EclipseKind {
    /// The Moon touches only the penumbra (lunar eclipses only).
    Penumbral,
    Partial,
    /// The umbra cone's apex falls short: a ring remains (solar only).
    Annular,
    Total,
}

/// Shadow-axis geometry at one instant. Distances in km.
#[derive(Copy, Clone, Debug)]
struct ShadowInfo {
    time: AstroTime,
    /// Perpendicular distance of the target point from the shadow axis.
    r: f64,
    /// Umbra cone radius in the target plane; negative past the apex.
    k: f64,
    /// Penumbra cone radius in the target plane.
    p: f64,
}

/// Cone radii at `axis_dist` km beyond a caster of radius `caster_radius`,
/// lit by the Sun at `sun_dist` km.
fn cone_radii(caster_radius: f64, sun_dist: f64, axis_dist: f64) -> (f64, f64) {
    let umbra = caster_radius - axis_dist * (SUN_RADIUS_KM - caster_radius) / sun_dist;
    let penumbra = caster_radius + axis_dist * (SUN_RADIUS_KM + caster_radius) / sun_dist;
    (umbra, penumbra)
}

/// Earth's shadow evaluated at the Moon's center.
fn earth_shadow(time: &AstroTime) -> ShadowInfo {
    let earth_km = helio_pos_fast(Body::Earth, time.tt) * KM_PER_AU;
    let moon_km = geo_moon(time).vec * KM_PER_AU;
    let axis = earth_km.normalize();
    let u = moon_km.dot(&axis);
    let r = (moon_km - axis * u).norm();
    let (k, p) = cone_radii(EARTH_ECLIPSE_RADIUS_KM, earth_km.norm(), u);
    ShadowInfo {
        time: *time,
        r,
        k,
        p,
    }
}

/// The Moon's shadow evaluated at a geocentric target point (km).
fn moon_shadow_at(time: &AstroTime, target_geo_km: &Vector3) -> ShadowInfo {
    let earth_km = helio_pos_fast(Body::Earth, time.tt) * KM_PER_AU;
    let moon_km = geo_moon(time).vec * KM_PER_AU;
    let sun_to_moon = earth_km + moon_km;
    let axis = sun_to_moon.normalize();
    let rel = target_geo_km - moon_km;
    let u = rel.dot(&axis);
    let r = (rel - axis * u).norm();
    let (k, p) = cone_radii(MOON_MEAN_RADIUS_KM, sun_to_moon.norm(), u);
    ShadowInfo {
        time: *time,
        r,
        k,
        p,
    }
}

fn moon_shadow(time: &AstroTime) -> ShadowInfo {
    moon_shadow_at(time, &Vector3::zeros())
}

fn local_moon_shadow(time: &AstroTime, observer: &Observer) -> ShadowInfo {
    let obs_km = observer_vector(time, observer, false).vec * KM_PER_AU;
    moon_shadow_at(time, &obs_km)
}

/// Refines the time near `center` where the axis distance `r` is smallest,
/// by finding the zero of its time derivative.
fn peak_shadow<S>(shadow: S, center: AstroTime, window_days: f64) -> AstroResult<AstroTime>
where
    S: Fn(&AstroTime) -> ShadowInfo,
{
    const DT: f64 = 0.005;
    let slope = |t: &AstroTime| -> AstroResult<f64> {
        let ahead = shadow(&t.add_days(DT)).r;
        let behind = shadow(&t.add_days(-DT)).r;
        Ok((ahead - behind) / (2.0 * DT))
    };
    search::search(
        slope,
        center.add_days(-window_days),
        center.add_days(window_days),
        1.0,
    )
}

/// Fraction of a disc of radius `r_disc` covered by a disc of radius
/// `r_cover` whose center lies `dist` away. All three in the same units.
fn overlap_fraction(r_disc: f64, r_cover: f64, dist: f64) -> f64 {
    if dist >= r_disc + r_cover {
        return 0.0;
    }
    if dist + r_disc <= r_cover {
        return 1.0;
    }
    if dist + r_cover <= r_disc {
        // The covering disc sits wholly inside the larger one.
        return (r_cover / r_disc).powi(2);
    }
    // Lens area of two intersecting circles.
    let d1 = (dist * dist + r_disc * r_disc - r_cover * r_cover) / (2.0 * dist);
    let d2 = dist - d1;
    let area = r_disc * r_disc * (d1 / r_disc).clamp(-1.0, 1.0).acos()
        - d1 * (r_disc * r_disc - d1 * d1).max(0.0).sqrt()
        + r_cover * r_cover * (d2 / r_cover).clamp(-1.0, 1.0).acos()
        - d2 * (r_cover * r_cover - d2 * d2).max(0.0).sqrt();
    area / (core::f64::consts::PI * r_disc * r_disc)
}

/// A lunar eclipse: the classification, the instant of deepest shadow, the
/// obscuration of the Moon's disc at that instant, and the semi-durations of
/// the phases in minutes (zero when a phase does not occur).
#[derive(Copy, Clone, Debug)]
pub struct LunarEclipse {
    pub kind: EclipseKind,
    pub peak: AstroTime,
    pub obscuration: f64,
    pub sd_penum: f64,
    pub sd_partial: f64,
    pub sd_total: f64,
}

/// Half-length in minutes of the phase during which `r` stays below `limit`.
fn shadow_semi_duration<S>(shadow: &S, peak: AstroTime, limit: f64) -> AstroResult<f64>
where
    S: Fn(&AstroTime) -> ShadowInfo,
{
    const WINDOW: f64 = 0.4;
    let f = |t: &AstroTime| -> AstroResult<f64> { Ok(shadow(t).r - limit) };
    let entry = search::search(&f, peak.add_days(-WINDOW), peak, 4.0)?;
    let exit = search::search(&f, peak, peak.add_days(WINDOW), 4.0)?;
    Ok((exit.ut - entry.ut) * 1440.0 / 2.0)
}

/// Finds the first lunar eclipse after `start`. Scans successive full moons
/// until the Moon meets the Earth's shadow.
pub fn search_lunar_eclipse(start: AstroTime) -> AstroResult<LunarEclipse> {
    let mut cursor = start;
    for _ in 0..14 {
        let full_moon = search_moon_phase(180.0, cursor, 40.0)?;
        let peak = peak_shadow(earth_shadow, full_moon, 0.9)?;
        let sh = earth_shadow(&peak);
        debug!(
            "full moon {full_moon}: axis distance {:.0} km, penumbra {:.0} km",
            sh.r, sh.p
        );
        if sh.r < sh.p + MOON_MEAN_RADIUS_KM {
            let sd_penum = shadow_semi_duration(&earth_shadow, peak, sh.p + MOON_MEAN_RADIUS_KM)?;
            let mut kind = EclipseKind::Penumbral;
            let mut obscuration = 0.0;
            let mut sd_partial = 0.0;
            let mut sd_total = 0.0;
            if sh.r < sh.k + MOON_MEAN_RADIUS_KM {
                kind = EclipseKind::Partial;
                obscuration = overlap_fraction(MOON_MEAN_RADIUS_KM, sh.k, sh.r);
                sd_partial =
                    shadow_semi_duration(&earth_shadow, peak, sh.k + MOON_MEAN_RADIUS_KM)?;
                if sh.r + MOON_MEAN_RADIUS_KM < sh.k {
                    kind = EclipseKind::Total;
                    obscuration = 1.0;
                    sd_total =
                        shadow_semi_duration(&earth_shadow, peak, sh.k - MOON_MEAN_RADIUS_KM)?;
                }
            }
            return Ok(LunarEclipse {
                kind,
                peak,
                obscuration,
                sd_penum,
                sd_partial,
                sd_total,
            });
        }
        cursor = full_moon.add_days(10.0);
    }
    Err(SearchError::NotFound { limit_days: 420.0 }).context(SearchSnafu {
        action: "lunar eclipse scan",
    })
}

/// The lunar eclipse after the one with the given peak; strictly later.
pub fn next_lunar_eclipse(previous_peak: AstroTime) -> AstroResult<LunarEclipse> {
    search_lunar_eclipse(previous_peak.add_days(10.0))
}

/// A solar eclipse seen from the Earth as a whole.
///
/// `latitude`/`longitude` give the geodetic sub-shadow point when the axis
/// pierces the Earth; for a partial (axis-miss) eclipse they are `None`, as
/// is the obscuration, whose all-Earth value is indeterminate.
#[derive(Copy, Clone, Debug)]
pub struct GlobalSolarEclipse {
    pub kind: EclipseKind,
    pub peak: AstroTime,
    /// Distance of the shadow axis from the Earth's center, km.
    pub distance: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub obscuration: Option<f64>,
}

/// Intersects the shadow axis with the oblate Earth surface; returns the
/// geodetic sub-point and the axis distance from the Moon to it (km).
fn shadow_surface_point(time: &AstroTime) -> Option<(Observer, f64)> {
    let rot = frames::rotation_eqj_eqd(time);
    let earth_km = helio_pos_fast(Body::Earth, time.tt) * KM_PER_AU;
    let moon_km = rot * (geo_moon(time).vec * KM_PER_AU);
    let axis = rot * (earth_km + geo_moon(time).vec * KM_PER_AU).normalize();

    // Scale z to turn the ellipsoid into a sphere.
    let scale = 1.0 / EARTH_FLATTENING_RATIO;
    let origin = Vector3::new(moon_km.x, moon_km.y, moon_km.z * scale);
    let dir = Vector3::new(axis.x, axis.y, axis.z * scale);

    // |origin + t*dir|^2 = Re^2, smaller root = near-side surface.
    let a = dir.norm_squared();
    let b = 2.0 * origin.dot(&dir);
    let c = origin.norm_squared() - EARTH_EQUATORIAL_RADIUS_KM * EARTH_EQUATORIAL_RADIUS_KM;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t_near = (-b - disc.sqrt()) / (2.0 * a);
    let scaled_point = origin + dir * t_near;
    let surface_eqd = Vector3::new(
        scaled_point.x,
        scaled_point.y,
        scaled_point.z * EARTH_FLATTENING_RATIO,
    );

    // Rotate with the Earth to get geographic coordinates.
    let gast_rad = sidereal_time(time) * 15.0_f64.to_radians();
    let ter = crate::math::rotation::Rotation::r3(gast_rad) * surface_eqd;
    let observer = crate::observer::observer_from_terrestrial(&ter);
    let dist_from_moon = (surface_eqd - moon_km).norm();
    Some((observer, dist_from_moon))
}

/// Finds the first solar eclipse visible anywhere on Earth after `start`.
pub fn search_global_solar_eclipse(start: AstroTime) -> AstroResult<GlobalSolarEclipse> {
    let mut cursor = start;
    for _ in 0..14 {
        let new_moon = search_moon_phase(0.0, cursor, 40.0)?;
        let peak = peak_shadow(moon_shadow, new_moon, 0.9)?;
        let sh = moon_shadow(&peak);
        if sh.r < sh.p + EARTH_MEAN_RADIUS_KM {
            let mut kind = EclipseKind::Partial;
            let mut latitude = None;
            let mut longitude = None;
            let mut obscuration = None;
            if sh.r < EARTH_EQUATORIAL_RADIUS_KM {
                if let Some((sub_point, moon_to_surface)) = shadow_surface_point(&peak) {
                    let earth_km = helio_pos_fast(Body::Earth, peak.tt) * KM_PER_AU;
                    let moon_km = geo_moon(&peak).vec * KM_PER_AU;
                    let sun_dist = (earth_km + moon_km).norm();
                    let (k_surf, _) = cone_radii(MOON_MEAN_RADIUS_KM, sun_dist, moon_to_surface);
                    kind = if k_surf > 0.0 {
                        EclipseKind::Total
                    } else {
                        EclipseKind::Annular
                    };
                    latitude = Some(sub_point.latitude);
                    longitude = Some(sub_point.longitude);
                    // Angular sizes from the sub-point.
                    let theta_moon = (MOON_MEAN_RADIUS_KM / moon_to_surface).asin();
                    let theta_sun = (SUN_RADIUS_KM / (sun_dist + moon_to_surface)).asin();
                    obscuration = Some(if kind == EclipseKind::Total {
                        1.0
                    } else {
                        (theta_moon.sin() / theta_sun.sin()).powi(2).min(1.0)
                    });
                }
            }
            return Ok(GlobalSolarEclipse {
                kind,
                peak,
                distance: sh.r,
                latitude,
                longitude,
                obscuration,
            });
        }
        cursor = new_moon.add_days(10.0);
    }
    Err(SearchError::NotFound { limit_days: 420.0 }).context(SearchSnafu {
        action: "global solar eclipse scan",
    })
}

/// The global solar eclipse after the one with the given peak.
pub fn next_global_solar_eclipse(previous_peak: AstroTime) -> AstroResult<GlobalSolarEclipse> {
    search_global_solar_eclipse(previous_peak.add_days(10.0))
}

/// One contact of a local eclipse: when, and how high the Sun stood.
#[derive(Copy, Clone, Debug)]
pub struct EclipseEvent {
    pub time: AstroTime,
    /// Unrefracted altitude of the Sun's center, degrees.
    pub altitude: f64,
}

/// A solar eclipse as seen by one observer.
#[derive(Copy, Clone, Debug)]
pub struct LocalSolarEclipse {
    pub kind: EclipseKind,
    pub obscuration: f64,
    pub partial_begin: EclipseEvent,
    pub total_begin: Option<EclipseEvent>,
    pub peak: EclipseEvent,
    pub total_end: Option<EclipseEvent>,
    pub partial_end: EclipseEvent,
}

fn sun_altitude(time: &AstroTime, observer: &Observer) -> AstroResult<f64> {
    let equ = equator(
        Body::Sun,
        time,
        observer,
        EquatorDate::OfDate,
        Aberration::On,
    )?;
    let hor = horizon(time, observer, equ.ra, equ.dec, Refraction::None)?;
    Ok(hor.altitude)
}

fn event_at(time: AstroTime, observer: &Observer) -> AstroResult<EclipseEvent> {
    Ok(EclipseEvent {
        time,
        altitude: sun_altitude(&time, observer)?,
    })
}

/// Obscuration of the Sun's disc for the observer at `time`.
fn local_obscuration(time: &AstroTime, observer: &Observer) -> AstroResult<f64> {
    let sun = equator(
        Body::Sun,
        time,
        observer,
        EquatorDate::OfDate,
        Aberration::On,
    )?;
    let moon = equator(
        Body::Moon,
        time,
        observer,
        EquatorDate::OfDate,
        Aberration::On,
    )?;
    let theta_sun = (SUN_RADIUS_KM / (sun.dist * KM_PER_AU)).asin();
    let theta_moon = (MOON_MEAN_RADIUS_KM / (moon.dist * KM_PER_AU)).asin();
    let separation = crate::math::angle_between(&sun.vec.vec, &moon.vec.vec).to_radians();
    Ok(overlap_fraction(theta_sun, theta_moon, separation))
}

/// Finds the first solar eclipse after `start` whose partial phase is
/// visible (Sun above the horizon at peak) for the given observer.
pub fn search_local_solar_eclipse(
    start: AstroTime,
    observer: &Observer,
) -> AstroResult<LocalSolarEclipse> {
    let shadow = |t: &AstroTime| local_moon_shadow(t, observer);
    let mut cursor = start;
    for _ in 0..60 {
        let new_moon = search_moon_phase(0.0, cursor, 40.0)?;
        cursor = new_moon.add_days(10.0);
        let Ok(peak_time) = peak_shadow(&shadow, new_moon, 0.9) else {
            continue;
        };
        let sh = shadow(&peak_time);
        if sh.r >= sh.p {
            continue;
        }
        if sun_altitude(&peak_time, observer)? < 0.0 {
            continue;
        }

        let partial = |t: &AstroTime| -> AstroResult<f64> {
            let s = shadow(t);
            Ok(s.r - s.p)
        };
        let partial_begin = search::search(&partial, peak_time.add_days(-0.2), peak_time, 1.0)?;
        let partial_end = search::search(&partial, peak_time, peak_time.add_days(0.2), 1.0)?;

        let (kind, total_begin, total_end) = if sh.r < sh.k.abs() {
            let core = |t: &AstroTime| -> AstroResult<f64> {
                let s = shadow(t);
                Ok(s.r - s.k.abs())
            };
            let begin = search::search(&core, peak_time.add_days(-0.1), peak_time, 1.0)?;
            let end = search::search(&core, peak_time, peak_time.add_days(0.1), 1.0)?;
            let kind = if sh.k > 0.0 {
                EclipseKind::Total
            } else {
                EclipseKind::Annular
            };
            (
                kind,
                Some(event_at(begin, observer)?),
                Some(event_at(end, observer)?),
            )
        } else {
            (EclipseKind::Partial, None, None)
        };

        return Ok(LocalSolarEclipse {
            kind,
            obscuration: local_obscuration(&peak_time, observer)?,
            partial_begin: event_at(partial_begin, observer)?,
            total_begin,
            peak: event_at(peak_time, observer)?,
            total_end,
            partial_end: event_at(partial_end, observer)?,
        });
    }
    Err(EventError::IndeterminateResult {
        what: "no locally visible eclipse in the scan window",
    })
    .context(EventSnafu {
        action: "local solar eclipse scan",
    })
}

/// The local eclipse after the one with the given peak.
pub fn next_local_solar_eclipse(
    previous_peak: AstroTime,
    observer: &Observer,
) -> AstroResult<LocalSolarEclipse> {
    search_local_solar_eclipse(previous_peak.add_days(10.0), observer)
}

#[cfg(test)]
mod ut_eclipse {
    use super::*;

    #[test]
    fn overlap_fraction_limits() {
        assert_eq!(overlap_fraction(1.0, 1.0, 3.0), 0.0);
        assert_eq!(overlap_fraction(1.0, 2.0, 0.5), 1.0);
        // Identical circles at zero distance cover fully.
        assert!((overlap_fraction(1.0, 1.0, 0.0) - 1.0).abs() < 1e-12);
        // Symmetric half-way case stays within (0, 1).
        let half = overlap_fraction(1.0, 1.0, 1.0);
        assert!(half > 0.3 && half < 0.5, "half = {half}");
    }

    #[test]
    fn cone_geometry() {
        // At the Moon's distance, the Earth's umbra is roughly 4600 km and
        // the penumbra roughly 8400 km in radius.
        let (k, p) = cone_radii(EARTH_ECLIPSE_RADIUS_KM, 1.496e8, 384_400.0);
        assert!((4_200.0..5_100.0).contains(&k), "umbra {k}");
        assert!((8_200.0..9_400.0).contains(&p), "penumbra {p}");
        // The Moon's umbra barely reaches the Earth.
        let (k, _) = cone_radii(MOON_MEAN_RADIUS_KM, 1.496e8, 384_400.0);
        assert!(k.abs() < 120.0, "lunar umbra at Earth {k}");
    }

    #[test]
    fn total_lunar_eclipse_may_2021() {
        // Starting from 2020-12-19, the next lunar eclipse peaks on
        // 2021-05-26 near 11:19 UT.
        let start = AstroTime::try_new(2020, 12, 19, 0, 0, 0.0).unwrap();
        let eclipse = search_lunar_eclipse(start).unwrap();
        let expected = AstroTime::try_new(2021, 5, 26, 11, 18, 42.0).unwrap();
        assert!(
            (eclipse.peak.ut - expected.ut).abs() * 1440.0 < 5.0,
            "peak at {}",
            eclipse.peak
        );
        // This was a marginal total eclipse; the truncated lunar theory can
        // land it just inside or just outside the umbra.
        assert!(
            eclipse.kind == EclipseKind::Total || eclipse.kind == EclipseKind::Partial,
            "kind {:?}",
            eclipse.kind
        );
        assert!(eclipse.sd_penum > 0.0);
        assert!(eclipse.obscuration > 0.9);
    }

    #[test]
    fn deep_total_lunar_eclipse_2022() {
        // 2022-11-08 was a comfortably total lunar eclipse, peak 10:59 UT.
        let start = AstroTime::try_new(2022, 10, 20, 0, 0, 0.0).unwrap();
        let eclipse = search_lunar_eclipse(start).unwrap();
        let expected = AstroTime::try_new(2022, 11, 8, 10, 59, 0.0).unwrap();
        assert!(
            (eclipse.peak.ut - expected.ut).abs() * 1440.0 < 5.0,
            "peak at {}",
            eclipse.peak
        );
        assert_eq!(eclipse.kind, EclipseKind::Total);
        assert!((eclipse.obscuration - 1.0).abs() < 1e-12);
        assert!(eclipse.sd_total > 10.0 && eclipse.sd_total < 60.0);
        assert!(eclipse.sd_partial > eclipse.sd_total);
        assert!(eclipse.sd_penum > eclipse.sd_partial);
    }

    #[test]
    fn successive_lunar_eclipses_advance() {
        let start = AstroTime::try_new(2019, 1, 1, 0, 0, 0.0).unwrap();
        let first = search_lunar_eclipse(start).unwrap();
        let second = next_lunar_eclipse(first.peak).unwrap();
        assert!(second.peak.ut > first.peak.ut + 100.0);
        // Eclipse seasons repeat roughly every 5-6 synodic months.
        assert!(second.peak.ut - first.peak.ut < 230.0);
    }

    #[test]
    fn annular_solar_eclipse_2023() {
        // 2023-10-14: annular eclipse across the Americas, peak ~18:00 UT.
        let start = AstroTime::try_new(2023, 9, 20, 0, 0, 0.0).unwrap();
        let eclipse = search_global_solar_eclipse(start).unwrap();
        let expected = AstroTime::try_new(2023, 10, 14, 17, 59, 0.0).unwrap();
        assert!(
            (eclipse.peak.ut - expected.ut).abs() * 1440.0 < 10.0,
            "peak at {}",
            eclipse.peak
        );
        assert_eq!(eclipse.kind, EclipseKind::Annular);
        let lat = eclipse.latitude.unwrap();
        let lon = eclipse.longitude.unwrap();
        // Sub-point in the Americas, around 11N 83W.
        assert!((lat - 11.0).abs() < 4.0, "lat {lat}");
        assert!((lon - (-83.0)).abs() < 8.0, "lon {lon}");
        let obs = eclipse.obscuration.unwrap();
        assert!(obs > 0.8 && obs < 1.0, "obscuration {obs}");
    }

    #[test]
    fn total_solar_eclipse_2024() {
        // 2024-04-08: total eclipse over North America, greatest ~18:17 UT.
        let start = AstroTime::try_new(2024, 3, 12, 0, 0, 0.0).unwrap();
        let eclipse = search_global_solar_eclipse(start).unwrap();
        let expected = AstroTime::try_new(2024, 4, 8, 18, 17, 0.0).unwrap();
        assert!(
            (eclipse.peak.ut - expected.ut).abs() * 1440.0 < 10.0,
            "peak at {}",
            eclipse.peak
        );
        assert_eq!(eclipse.kind, EclipseKind::Total);
        assert_eq!(eclipse.obscuration, Some(1.0));
        let lat = eclipse.latitude.unwrap();
        assert!((lat - 25.3).abs() < 5.0, "lat {lat}");
    }

    #[test]
    fn local_eclipse_dallas_2024() {
        // Dallas sat inside the 2024-04-08 path of totality.
        let observer = Observer::new(32.78, -96.80, 140.0);
        let start = AstroTime::try_new(2024, 3, 1, 0, 0, 0.0).unwrap();
        let eclipse = search_local_solar_eclipse(start, &observer).unwrap();
        let peak_expected = AstroTime::try_new(2024, 4, 8, 18, 42, 0.0).unwrap();
        assert!(
            (eclipse.peak.time.ut - peak_expected.ut).abs() * 1440.0 < 10.0,
            "peak at {}",
            eclipse.peak.time
        );
        // Ordering of contacts.
        assert!(eclipse.partial_begin.time.ut < eclipse.peak.time.ut);
        assert!(eclipse.peak.time.ut < eclipse.partial_end.time.ut);
        if let (Some(tb), Some(te)) = (eclipse.total_begin, eclipse.total_end) {
            assert!(tb.time.ut > eclipse.partial_begin.time.ut);
            assert!(te.time.ut < eclipse.partial_end.time.ut);
        }
        // The Sun stood high over Texas in the early afternoon.
        assert!(eclipse.peak.altitude > 50.0, "alt {}", eclipse.peak.altitude);
        assert!(eclipse.obscuration > 0.95);
    }
}
