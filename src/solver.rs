// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Iterative solvers for meridian transits and altitude crossings.
//!
//! Sidereal time and the Sun's position are mutually time-dependent, so
//! neither event has a closed form. Both solvers are fixed-point
//! iterations on time: measure the angular residual at the current
//! estimate, convert it to a time shift at roughly one day per 360°, and
//! repeat until the residual drops below [`ANGLE_TOLERANCE`].
//!
//! From a same-day seed the transit search contracts the residual by
//! about 360/361 per step and converges in a handful of iterations; the
//! altitude search is slower near the poles, where the Sun crosses its
//! target altitude at a shallow angle. Both carry a hard iteration cap
//! so a pathological geometry can never loop forever.

use crate::epoch::EpochDays;
use crate::error::Error;
use crate::observer::Observer;
use crate::sun::{acos_deg, asin_deg, rect_to_polar, sidereal_time, sun_equatorial_position};
use qtty::{Days, Degrees};

/// Convergence tolerance for both solvers, in degrees.
pub const ANGLE_TOLERANCE: f64 = 1e-4;

/// Iteration cap for the meridian-transit search. The iteration
/// contracts fast enough that hitting this means the geometry is broken,
/// not slow.
const TRANSIT_MAX_ITERATIONS: usize = 100;

/// Iteration cap for the altitude search — a safety valve for the
/// shallow crossings near the poles.
const ALTITUDE_MAX_ITERATIONS: usize = 2000;

/// Which meridian crossing a transit search solves for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeridianCrossing {
    /// The Sun crosses the observer's meridian: local solar noon.
    Noon,
    /// The antimeridian crossing: local solar midnight.
    Midnight,
}

impl MeridianCrossing {
    /// Longitude offset that turns the noon equation into the midnight
    /// equation.
    #[inline]
    fn longitude_offset(self) -> Degrees {
        match self {
            MeridianCrossing::Noon => Degrees::new(0.0),
            MeridianCrossing::Midnight => Degrees::new(180.0),
        }
    }
}

/// Which side of a transit an altitude crossing lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HorizonEdge {
    /// The Sun ascends through the target altitude, before the transit.
    Rising,
    /// The Sun descends through the target altitude, after the transit.
    Setting,
}

impl HorizonEdge {
    /// Search direction relative to the transit: −1 (earlier) for
    /// rising, +1 (later) for setting.
    #[inline]
    fn direction(self) -> f64 {
        match self {
            HorizonEdge::Rising => -1.0,
            HorizonEdge::Setting => 1.0,
        }
    }
}

/// Find the time nearest `seed` at which the Sun's right ascension
/// equals the observer's local sidereal time — a meridian crossing.
///
/// With [`MeridianCrossing::Midnight`] the observer's longitude is offset
/// by 180°, which solves for the antimeridian crossing instead.
///
/// # Errors
///
/// [`Error::NonConvergence`] if the residual does not fall below
/// [`ANGLE_TOLERANCE`] within the iteration cap. This cannot happen for
/// a seed within a day or so of the answer; it exists so that no input
/// can loop forever.
pub fn find_transit_time(
    seed: EpochDays,
    observer: &Observer,
    crossing: MeridianCrossing,
) -> Result<EpochDays, Error> {
    let lon = observer.longitude() + crossing.longitude_offset();
    let mut time = seed;
    let mut delta = Degrees::new(0.0);

    for _ in 0..TRANSIT_MAX_ITERATIONS {
        time = time + Days::new(delta.value() / 360.0);
        let sun = rect_to_polar(sun_equatorial_position(time));
        delta = (sun.lon - sidereal_time(time, lon)).wrap_signed();
        if delta.value().abs() <= ANGLE_TOLERANCE {
            return Ok(time);
        }
    }

    Err(Error::NonConvergence {
        residual: delta.value(),
    })
}

/// Find the time at which the Sun's altitude equals `target_altitude`,
/// on the given side of `transit`.
///
/// The declination is sampled once at `seed` (conventionally a quarter
/// day from the transit) and the day's hour-angle geometry is derived
/// from it:
///
/// * the target altitude is above the Sun's whole daily arc — the
///   crossing never happens; the result collapses to `transit`;
/// * the target altitude is below the whole arc (the Sun never gets
///   that low) — the result collapses to the adjacent solar midnight;
/// * otherwise the crossing is bracketed, seeded from the hour angle,
///   and refined iteratively.
///
/// A refined time is only accepted if it lies inside the half-day window
/// between the adjacent midnight and the transit; `Ok(None)` means the
/// event does not occur in that window and the caller should treat the
/// day as degenerate. The two window checks are mirrored per direction,
/// not shared; the asymmetry is load-bearing near the poles.
///
/// # Errors
///
/// Propagates [`Error::NonConvergence`] from the inner midnight search.
/// Exhausting the altitude iteration cap is NOT an error: the best
/// estimate proceeds to the window check.
pub fn find_altitude_time(
    seed: EpochDays,
    transit: EpochDays,
    observer: &Observer,
    edge: HorizonEdge,
    target_altitude: Degrees,
) -> Result<Option<EpochDays>, Error> {
    let sun = rect_to_polar(sun_equatorial_position(seed));
    let (sin_lat, cos_lat) = observer.latitude().sin_cos();
    let (sin_dec, cos_dec) = sun.lat.sin_cos();
    let cos_h0 = (target_altitude.sin() - sin_lat * sin_dec) / (cos_lat * cos_dec);

    if cos_h0 > 1.0 {
        return Ok(Some(transit));
    }

    let direction = edge.direction();
    let midnight = find_transit_time(
        transit + Days::new(direction * 0.5),
        observer,
        MeridianCrossing::Midnight,
    )?;

    if cos_h0 < -1.0 {
        return Ok(Some(midnight));
    }

    let mut time = transit + Days::new(direction * acos_deg(cos_h0).value() / 360.0);
    let mut delta = 0.0_f64;
    let mut iterations = 0;

    loop {
        time = time + Days::new(direction * delta / 360.0);
        let sun = rect_to_polar(sun_equatorial_position(time));
        let hour_angle = (sidereal_time(time, observer.longitude()) - sun.lon).wrap_pos();
        let altitude =
            asin_deg(sin_lat * sun.lat.sin() + cos_lat * sun.lat.cos() * hour_angle.cos());
        delta = (altitude - target_altitude).value();
        iterations += 1;
        if delta.abs() <= ANGLE_TOLERANCE || iterations >= ALTITUDE_MAX_ITERATIONS {
            break;
        }
    }

    let inside_window = match edge {
        HorizonEdge::Rising => midnight <= time && time <= transit,
        HorizonEdge::Setting => transit <= time && time <= midnight,
    };
    Ok(inside_window.then_some(time))
}
