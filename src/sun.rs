// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar position model.
//!
//! Pure, stateless functions of a single [`EpochDays`] time value. The
//! formulas follow Paul Schlyter's *How to compute planetary positions*
//! (<http://www.stjarnhimlen.se/comp/ppcomp.html>), with the sidereal-time
//! expression from Jean Meeus, *Astronomical Algorithms* (1st ed. 1991),
//! re-based onto the crate's day count.
//!
//! # Reference frames
//!
//! | Type | Frame | Components |
//! |------|-------|------------|
//! | [`EclipticPosition`] | ecliptic of date | Cartesian `x, y, z` |
//! | [`EquatorialPosition`] | equator of date | Cartesian `x, y, z` |
//! | [`PolarPosition`] | either | `lon ∈ [0°, 360°)`, `lat` |
//!
//! The Cartesian vectors are scaled by the Sun–Earth distance in
//! astronomical units (≈1), which cancels out of every angular
//! computation downstream.
//!
//! # Precision
//!
//! The eccentric anomaly uses a single Newton-like correction step rather
//! than a full Kepler iteration. For the Sun's near-circular orbit
//! (e ≈ 0.0167) the truncation error is far below the minute-of-time
//! target of the rise/set solvers, and iterating further would outrun the
//! orbital-element polynomials themselves. Do not "upgrade" this step
//! without re-validating the solver tolerances that depend on it.
//!
//! All angles are degrees; the degree↔radian conversion happens inside
//! the trigonometric helpers, never in the formulas.

use crate::epoch::EpochDays;
use qtty::Degrees;

/// Cartesian position on the ecliptic plane of date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EclipticPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Cartesian position relative to the Earth's equator of date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EquatorialPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Spherical direction: longitude (right ascension) and latitude
/// (declination) when derived from an [`EquatorialPosition`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarPosition {
    /// Wrapped into `[0°, 360°)`.
    pub lon: Degrees,
    pub lat: Degrees,
}

// ── degree-mode inverse trig ──────────────────────────────────────────────
//
// qtty's angular quantities provide sin/cos; the inverses wrap the f64
// intrinsics with the same degree↔radian boundary.

#[inline]
pub(crate) fn asin_deg(x: f64) -> Degrees {
    Degrees::new(x.asin().to_degrees())
}

#[inline]
pub(crate) fn acos_deg(x: f64) -> Degrees {
    Degrees::new(x.acos().to_degrees())
}

#[inline]
pub(crate) fn atan2_deg(y: f64, x: f64) -> Degrees {
    Degrees::new(y.atan2(x).to_degrees())
}

// ── orbital elements ──────────────────────────────────────────────────────

/// Obliquity of the ecliptic (degrees).
#[inline]
pub fn obliquity_of_ecliptic(t: EpochDays) -> Degrees {
    Degrees::new(23.4393 - 3.563e-7 * t.value())
}

/// Argument of perihelion of the Sun's apparent orbit (degrees).
#[inline]
pub fn sun_arg_of_perihelion(t: EpochDays) -> Degrees {
    Degrees::new(282.9404 + 4.70935e-5 * t.value()).wrap_pos()
}

/// Eccentricity of the Sun's apparent orbit (dimensionless).
#[inline]
pub fn sun_eccentricity(t: EpochDays) -> f64 {
    0.016709 - 1.151e-9 * t.value()
}

/// Mean anomaly of the Sun (degrees).
#[inline]
pub fn sun_mean_anomaly(t: EpochDays) -> Degrees {
    Degrees::new(356.0470 + 0.9856002585 * t.value()).wrap_pos()
}

/// Local apparent sidereal time (degrees).
///
/// Greenwich-referenced, shifted by the observer's east-positive
/// longitude. The `t − 1.5` term anchors the expression to local noon of
/// the epoch's reference day.
#[inline]
pub fn sidereal_time(t: EpochDays, longitude: Degrees) -> Degrees {
    let st = 280.4606 + 360.98564736629 * (t.value() - 1.5);
    (Degrees::new(st) + longitude).wrap_pos()
}

// ── position model ────────────────────────────────────────────────────────

/// The Sun's position on the ecliptic plane at time `t`.
pub fn sun_ecliptic_position(t: EpochDays) -> EclipticPosition {
    // orbital elements
    let w = sun_arg_of_perihelion(t);
    let e = sun_eccentricity(t);
    let m = sun_mean_anomaly(t);

    // eccentric anomaly, one correction step (see module docs)
    let ea = Degrees::new(
        m.value() + e * (180.0 / std::f64::consts::PI) * m.sin() * (1.0 + e * m.cos()),
    );

    // true anomaly and distance
    let xv = ea.cos() - e;
    let yv = (1.0 - e * e).sqrt() * ea.sin();
    let v = atan2_deg(yv, xv);
    let r = xv.hypot(yv);

    // position in space
    let lon = v + w;
    EclipticPosition {
        x: r * lon.cos(),
        y: r * lon.sin(),
        z: 0.0,
    }
}

/// Rotate an ecliptic position about the x-axis (the equinox direction)
/// into the equatorial frame.
pub fn ecliptic_to_equatorial(t: EpochDays, r: EclipticPosition) -> EquatorialPosition {
    let (sin_o, cos_o) = obliquity_of_ecliptic(t).sin_cos();
    EquatorialPosition {
        x: r.x,
        y: r.y * cos_o - r.z * sin_o,
        z: r.y * sin_o + r.z * cos_o,
    }
}

/// The Sun's equatorial position at time `t`.
#[inline]
pub fn sun_equatorial_position(t: EpochDays) -> EquatorialPosition {
    ecliptic_to_equatorial(t, sun_ecliptic_position(t))
}

/// Convert a Cartesian equatorial position to right ascension and
/// declination.
pub fn rect_to_polar(r: EquatorialPosition) -> PolarPosition {
    PolarPosition {
        lon: atan2_deg(r.y, r.x).wrap_pos(),
        lat: atan2_deg(r.z, r.x.hypot(r.y)),
    }
}
