//! Conversion between the game's integer date encoding and calendar
//! dates.
//!
//! The game counts days with an epoch that does not line up with the
//! proleptic Gregorian calendar: day [`GAMEDATE_BASE_OFFSET`] is the
//! first day of year 1. Anything below that offset carries no usable
//! date and collapses to [`NaiveDate::MIN`].

use std::{fmt, str::FromStr};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The calendar date of game day [`GAMEDATE_BASE_OFFSET`].
pub const GAMEDATE_BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("year 1 is out of calendar range"),
};

/// The game date code corresponding to [`GAMEDATE_BASE_DATE`].
pub const GAMEDATE_BASE_OFFSET: i32 = 366;

/// Converts a game date code into a calendar date.
///
/// Codes below [`GAMEDATE_BASE_OFFSET`] map to [`NaiveDate::MIN`]. That
/// is far earlier than [`GAMEDATE_BASE_DATE`], so game day 366 and an
/// undefined date stay distinguishable.
///
/// Codes past the end of the calendar range saturate to
/// [`NaiveDate::MAX`].
pub fn gamedate_to_datetime(date: i32) -> NaiveDate {
    if date < GAMEDATE_BASE_OFFSET {
        // The server mostly reports 0 here, but any small value is treated alike.
        return NaiveDate::MIN;
    }

    let days = Days::new((date - GAMEDATE_BASE_OFFSET) as u64);
    GAMEDATE_BASE_DATE
        .checked_add_days(days)
        .unwrap_or(NaiveDate::MAX)
}

/// Converts a calendar date into a game date code.
///
/// [`NaiveDate::MIN`] maps to `0`.
pub fn datetime_to_gamedate(dt: NaiveDate) -> i32 {
    if dt == NaiveDate::MIN {
        return 0;
    }

    // The whole calendar range spans fewer than `i32::MAX` days.
    let days = dt.signed_duration_since(GAMEDATE_BASE_DATE).num_days();
    (days + GAMEDATE_BASE_OFFSET as i64) as i32
}

/// A date as encoded by the game.
///
/// Serializes transparently as its integer code.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameDate(pub i32);

impl GameDate {
    /// The undefined date.
    pub const UNDEFINED: Self = Self(0);

    /// Encodes a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(datetime_to_gamedate(date))
    }

    /// Decodes the calendar date.
    pub fn to_date(self) -> NaiveDate {
        gamedate_to_datetime(self.0)
    }

    /// Whether the code refers to an actual calendar day.
    pub fn is_valid(self) -> bool {
        self.0 >= GAMEDATE_BASE_OFFSET
    }
}

impl From<i32> for GameDate {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<GameDate> for i32 {
    fn from(value: GameDate) -> Self {
        value.0
    }
}

impl From<NaiveDate> for GameDate {
    fn from(value: NaiveDate) -> Self {
        Self::from_date(value)
    }
}

impl From<GameDate> for NaiveDate {
    fn from(value: GameDate) -> Self {
        value.to_date()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_date())
        } else {
            f.write_str("-")
        }
    }
}

impl FromStr for GameDate {
    type Err = Error;

    /// Parses either a raw date code or a `YYYY-MM-DD` calendar date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(code) = s.parse::<i32>() {
            return Ok(Self(code));
        }

        s.parse::<NaiveDate>()
            .map(Self::from_date)
            .map_err(|_| Error::InvalidDate(s.to_owned()))
    }
}
