// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The crate's internal time axis.
//!
//! [`EpochDays`] is a continuous, real-valued day count since
//! **1999-12-31T00:00:00 UTC** — one day before 2000-01-01, so that the
//! first day of 2000 lands on day 1. Every trigonometric formula in this
//! crate takes its time argument on this axis; the public interface
//! speaks integer Unix milliseconds and converts at the boundary.
//!
//! The conversion is a fixed affine map and is exactly invertible:
//!
//! ```text
//! days = (unix_ms − EPOCH_UNIX_MS) / 86 400 000
//! unix_ms = days × 86 400 000 + EPOCH_UNIX_MS
//! ```
//!
//! For any representable millisecond timestamp the round trip recovers
//! the input exactly (the f64 product error is far below half a
//! millisecond).

use chrono::{DateTime, Utc};
use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unix timestamp, in milliseconds, of the crate epoch
/// (1999-12-31T00:00:00 UTC).
pub const EPOCH_UNIX_MS: i64 = 946_598_400_000;

/// Milliseconds per day.
const MS_PER_DAY: f64 = 86_400_000.0;

/// A point in time on the crate's day-count axis.
///
/// Stores a single [`Days`] quantity; the struct is `Copy` and
/// layout-identical to a bare `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct EpochDays {
    quantity: Days,
}

impl EpochDays {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the crate epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Create from a Unix timestamp in milliseconds.
    #[inline]
    pub fn from_unix_ms(unix_ms: i64) -> Self {
        Self::new((unix_ms - EPOCH_UNIX_MS) as f64 / MS_PER_DAY)
    }

    /// Create from a `chrono::DateTime<Utc>`.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_unix_ms(datetime.timestamp_millis())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Unix timestamp in milliseconds, rounded to the nearest integer.
    #[inline]
    pub fn to_unix_ms(&self) -> i64 {
        (self.value() * MS_PER_DAY + EPOCH_UNIX_MS as f64).round() as i64
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.to_unix_ms())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for EpochDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch Day: {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for EpochDays {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EpochDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for EpochDays {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for EpochDays {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for EpochDays {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for EpochDays {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for EpochDays {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for EpochDays {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<EpochDays> for Days {
    #[inline]
    fn from(time: EpochDays) -> Self {
        time.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        let t = EpochDays::from_unix_ms(EPOCH_UNIX_MS);
        assert_eq!(t.value(), 0.0);
        assert_eq!(t.to_unix_ms(), EPOCH_UNIX_MS);
    }

    #[test]
    fn first_day_of_2000_is_day_one() {
        // 2000-01-01T00:00:00Z = 946684800000 ms
        let t = EpochDays::from_unix_ms(946_684_800_000);
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn unix_ms_roundtrip_is_exact() {
        for &ms in &[
            0_i64,
            EPOCH_UNIX_MS,
            1_718_928_000_000, // 2024-06-21T00:00:00Z
            1_718_928_000_001,
            -86_400_000,
            2_000_000_000_123,
        ] {
            let t = EpochDays::from_unix_ms(ms);
            assert_eq!(t.to_unix_ms(), ms, "roundtrip failed for {} ms", ms);
        }
    }

    #[test]
    fn fractional_days_round_to_nearest_ms() {
        let t = EpochDays::new(0.5);
        assert_eq!(t.to_unix_ms(), EPOCH_UNIX_MS + 43_200_000);
    }

    #[test]
    fn utc_roundtrip() {
        let datetime = DateTime::from_timestamp_millis(1_718_928_000_000).unwrap();
        let t = EpochDays::from_utc(datetime);
        assert_eq!(t.to_utc().expect("to_utc"), datetime);
    }

    #[test]
    fn arithmetic_with_days() {
        let mut t = EpochDays::new(10.0);
        assert_eq!((t + Days::new(0.5)).value(), 10.5);
        assert_eq!((t - Days::new(2.0)).value(), 8.0);
        assert_eq!(EpochDays::new(12.0) - t, Days::new(2.0));

        t += Days::new(1.0);
        assert_eq!(t.value(), 11.0);
        t -= Days::new(0.25);
        assert_eq!(t.value(), 10.75);
    }

    #[test]
    fn into_days_and_back() {
        let t = EpochDays::new(8_938.25);
        let days: Days = t.into();
        assert_eq!(days, Days::new(8_938.25));
        assert_eq!(EpochDays::from(days), t);
    }

    #[test]
    fn display_labels_the_axis() {
        let t = EpochDays::new(1.5);
        assert!(format!("{t}").contains("Epoch Day"));
    }
}
