// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Assembly of a full solar-day timeline.
//!
//! One call to [`find_times`] anchors the day on its meridian transit,
//! brackets it with the two adjacent solar midnights, and fills in the
//! horizon and twilight crossings from quarter-day seeds on either side
//! of the transit:
//!
//! ```text
//! start        start   start  end          start  end    end     end
//! midnight ──► dawn ─► rise ─ rise ─ noon ─ set ── set ── dusk ─► midnight
//!              −6°    −0.833° −0.294°      −0.294° −0.833° −6°
//! ```
//!
//! At extreme latitudes some crossings do not happen. Those instants
//! collapse onto the day's boundaries (the transit or a midnight) and
//! the matching `no_*` flag reports the collapse; degenerate days are
//! ordinary, displayable results, not errors.

use crate::epoch::EpochDays;
use crate::error::Error;
use crate::observer::Observer;
use crate::solver::{find_altitude_time, find_transit_time, HorizonEdge, MeridianCrossing};
use qtty::{Days, Degrees};

// ── standard altitudes ────────────────────────────────────────────────────
//
// Caller-side constants: the altitude solver itself is agnostic of what
// the target altitude means.

/// Sun-center altitude of official sunrise/sunset: solar radius plus
/// average refraction below the geometric horizon.
pub const RISE_SET_ALTITUDE: Degrees = Degrees::new(-0.833);

/// Altitude at which the solar disc has fully cleared the horizon
/// (end of rising, start of setting).
pub const DISC_CLEAR_ALTITUDE: Degrees = Degrees::new(-0.294);

/// Civil twilight boundary.
pub const CIVIL_TWILIGHT_ALTITUDE: Degrees = Degrees::new(-6.0);

/// Nautical twilight boundary.
pub const NAUTICAL_TWILIGHT_ALTITUDE: Degrees = Degrees::new(-12.0);

/// Astronomical twilight boundary.
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE: Degrees = Degrees::new(-18.0);

const QUARTER_DAY: Days = Days::new(0.25);
const HALF_DAY: Days = Days::new(0.5);

/// Names the nine instants of a [`DayTimes`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayPoint {
    StartMidnight,
    StartDawn,
    StartRise,
    EndRise,
    Noon,
    StartSet,
    EndSet,
    EndDusk,
    EndMidnight,
}

/// Nautical and astronomical twilight crossings, the optional extension
/// of [`DayTimes`]. All fields are Unix milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwilightTimes {
    /// Sun ascends through −18°.
    pub start_astronomical: i64,
    /// Sun ascends through −12°.
    pub start_nautical: i64,
    /// Sun descends through −12°.
    pub end_nautical: i64,
    /// Sun descends through −18°.
    pub end_astronomical: i64,
}

/// The named instants of one solar day, in Unix milliseconds.
///
/// Whenever no `no_*` flag is set the instants are non-decreasing in
/// declaration order. Under polar degeneracy the affected instants
/// equal `start_midnight`, `noon`, or `end_midnight`, and the flags say
/// which events did not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTimes {
    /// Solar midnight opening the day.
    pub start_midnight: i64,
    /// Civil dawn: sun ascends through −6°.
    pub start_dawn: i64,
    /// Sunrise: upper limb appears (−0.833°).
    pub start_rise: i64,
    /// Sun fully risen (−0.294°).
    pub end_rise: i64,
    /// Meridian transit: solar noon.
    pub noon: i64,
    /// Sun begins to set (−0.294°).
    pub start_set: i64,
    /// Sunset: upper limb disappears (−0.833°).
    pub end_set: i64,
    /// Civil dusk: sun descends through −6°.
    pub end_dusk: i64,
    /// Solar midnight closing the day.
    pub end_midnight: i64,
    /// `end_midnight − start_midnight`, in milliseconds.
    pub day_length: i64,
    /// The sun never crossed −6° rising.
    pub no_dawn: bool,
    /// The sun never crossed −0.833° rising.
    pub no_rise: bool,
    /// The sun never crossed −0.833° setting.
    pub no_set: bool,
    /// The sun never crossed −6° setting.
    pub no_dusk: bool,
    /// Present when requested via [`find_times_with_twilight`].
    pub twilight: Option<TwilightTimes>,
}

impl DayTimes {
    /// The instant a [`DayPoint`] names.
    pub fn instant(&self, point: DayPoint) -> i64 {
        match point {
            DayPoint::StartMidnight => self.start_midnight,
            DayPoint::StartDawn => self.start_dawn,
            DayPoint::StartRise => self.start_rise,
            DayPoint::EndRise => self.end_rise,
            DayPoint::Noon => self.noon,
            DayPoint::StartSet => self.start_set,
            DayPoint::EndSet => self.end_set,
            DayPoint::EndDusk => self.end_dusk,
            DayPoint::EndMidnight => self.end_midnight,
        }
    }

    /// Fractional position of a named instant within
    /// `[start_midnight, end_midnight]`.
    ///
    /// `ratio_of(StartMidnight)` is exactly 0 and
    /// `ratio_of(EndMidnight)` exactly 1.
    #[inline]
    pub fn ratio_of(&self, point: DayPoint) -> f64 {
        self.ratio_at(self.instant(point))
    }

    /// Fractional position of an arbitrary instant within
    /// `[start_midnight, end_midnight]`.
    #[inline]
    pub fn ratio_at(&self, unix_ms: i64) -> f64 {
        (unix_ms - self.start_midnight) as f64 / self.day_length as f64
    }
}

/// Solar noon of the day containing `unix_ms`, as Unix milliseconds.
///
/// A thin wrapper over the transit solver, used by callers to roll
/// their day window forward once the clock passes the current one.
pub fn find_noon(unix_ms: i64, observer: &Observer) -> Result<i64, Error> {
    let transit = find_transit_time(
        EpochDays::from_unix_ms(unix_ms),
        observer,
        MeridianCrossing::Noon,
    )?;
    Ok(transit.to_unix_ms())
}

/// All events of the solar day containing `unix_ms`.
pub fn find_times(unix_ms: i64, observer: &Observer) -> Result<DayTimes, Error> {
    assemble(unix_ms, observer, false)
}

/// Like [`find_times`], with the nautical/astronomical twilight
/// extension filled in.
pub fn find_times_with_twilight(unix_ms: i64, observer: &Observer) -> Result<DayTimes, Error> {
    assemble(unix_ms, observer, true)
}

fn assemble(unix_ms: i64, observer: &Observer, include_twilight: bool) -> Result<DayTimes, Error> {
    let transit = find_transit_time(
        EpochDays::from_unix_ms(unix_ms),
        observer,
        MeridianCrossing::Noon,
    )?;
    let start_midnight =
        find_transit_time(transit - HALF_DAY, observer, MeridianCrossing::Midnight)?;
    let end_midnight =
        find_transit_time(transit + HALF_DAY, observer, MeridianCrossing::Midnight)?;

    // An absent crossing collapses onto the adjacent midnight, which
    // trips the same flag as the solver's own polar-day collapse.
    let rising = |altitude: Degrees| -> Result<EpochDays, Error> {
        let found = find_altitude_time(
            transit - QUARTER_DAY,
            transit,
            observer,
            HorizonEdge::Rising,
            altitude,
        )?;
        Ok(found.unwrap_or(start_midnight))
    };
    let setting = |altitude: Degrees| -> Result<EpochDays, Error> {
        let found = find_altitude_time(
            transit + QUARTER_DAY,
            transit,
            observer,
            HorizonEdge::Setting,
            altitude,
        )?;
        Ok(found.unwrap_or(end_midnight))
    };

    let noon = transit.to_unix_ms();
    let start_midnight_ms = start_midnight.to_unix_ms();
    let end_midnight_ms = end_midnight.to_unix_ms();
    let start_dawn = rising(CIVIL_TWILIGHT_ALTITUDE)?.to_unix_ms();
    let start_rise = rising(RISE_SET_ALTITUDE)?.to_unix_ms();
    let end_rise = rising(DISC_CLEAR_ALTITUDE)?.to_unix_ms();
    let start_set = setting(DISC_CLEAR_ALTITUDE)?.to_unix_ms();
    let end_set = setting(RISE_SET_ALTITUDE)?.to_unix_ms();
    let end_dusk = setting(CIVIL_TWILIGHT_ALTITUDE)?.to_unix_ms();

    let twilight = if include_twilight {
        Some(TwilightTimes {
            start_astronomical: rising(ASTRONOMICAL_TWILIGHT_ALTITUDE)?.to_unix_ms(),
            start_nautical: rising(NAUTICAL_TWILIGHT_ALTITUDE)?.to_unix_ms(),
            end_nautical: setting(NAUTICAL_TWILIGHT_ALTITUDE)?.to_unix_ms(),
            end_astronomical: setting(ASTRONOMICAL_TWILIGHT_ALTITUDE)?.to_unix_ms(),
        })
    } else {
        None
    };

    Ok(DayTimes {
        start_midnight: start_midnight_ms,
        start_dawn,
        start_rise,
        end_rise,
        noon,
        start_set,
        end_set,
        end_dusk,
        end_midnight: end_midnight_ms,
        day_length: end_midnight_ms - start_midnight_ms,
        no_dawn: start_dawn == start_midnight_ms || start_dawn == noon,
        no_rise: start_rise == start_midnight_ms || start_rise == noon,
        no_set: end_set == end_midnight_ms || end_set == noon,
        no_dusk: end_dusk == end_midnight_ms || end_dusk == noon,
        twilight,
    })
}
