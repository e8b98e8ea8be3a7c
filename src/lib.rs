// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar Ephemeris Module
//!
//! This crate computes the instants that structure a local solar day —
//! solar noon, solar midnight, sunrise/sunset, and the twilight
//! boundaries — for an arbitrary observer on Earth.
//!
//! # Core types
//!
//! - [`EpochDays`] — continuous day count on the crate's internal epoch.
//! - [`Observer`] — validated geographic latitude/longitude pair.
//! - [`DayTimes`] — the nine named instants of one solar day, with
//!   degeneracy flags and dial-position helpers.
//! - [`TwilightTimes`] — optional nautical/astronomical extension.
//! - [`DayPoint`] — names the nine instants of a [`DayTimes`].
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`find_times`] | All events of the solar day containing an instant |
//! | [`find_times_with_twilight`] | Same, plus −12°/−18° twilight crossings |
//! | [`find_noon`] | Just the meridian transit (solar noon) |
//! | [`find_transit_time`] | Low-level meridian-crossing solver |
//! | [`find_altitude_time`] | Low-level altitude-crossing solver |
//!
//! All public instants are integer Unix milliseconds; the solvers operate
//! on [`EpochDays`] internally. Conversions between the two are exact to
//! well under a millisecond.
//!
//! # Quick example
//!
//! ```
//! use heliodon::{find_times, Observer};
//!
//! // Greenwich, during the 2024 June solstice.
//! let observer = Observer::from_degrees(51.4769, -0.0005)?;
//! let times = find_times(1_718_928_000_000, &observer)?;
//!
//! assert!(times.start_rise < times.noon && times.noon < times.end_set);
//! assert!(!times.no_rise && !times.no_set);
//! # Ok::<(), heliodon::Error>(())
//! ```
//!
//! # Accuracy
//!
//! The position model is Paul Schlyter's low-precision sun ephemeris
//! (*How to compute planetary positions*), good to roughly a minute of
//! time for rise/set events — matched to the 1e-4-degree residual at
//! which the iterative solvers stop. Polar day and polar night are not
//! errors: the affected instants collapse onto the day's boundaries and
//! the [`DayTimes`] flags report which events did not occur.

mod day_times;
mod epoch;
mod error;
mod observer;
mod solver;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use day_times::{
    find_noon, find_times, find_times_with_twilight, DayPoint, DayTimes, TwilightTimes,
    ASTRONOMICAL_TWILIGHT_ALTITUDE, CIVIL_TWILIGHT_ALTITUDE, DISC_CLEAR_ALTITUDE,
    NAUTICAL_TWILIGHT_ALTITUDE, RISE_SET_ALTITUDE,
};
pub use epoch::{EpochDays, EPOCH_UNIX_MS};
pub use error::Error;
pub use observer::Observer;
pub use solver::{
    find_altitude_time, find_transit_time, HorizonEdge, MeridianCrossing, ANGLE_TOLERANCE,
};
