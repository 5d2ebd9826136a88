//! Hour-based greetings.
//!
//! Hours map onto four windows, checked in order:
//!
//! | Hours | Period | Salutation |
//! |-------|--------|------------|
//! | 5..=11 | [`DayPeriod::Morning`] | Good morning |
//! | 12..=17 | [`DayPeriod::Afternoon`] | Good afternoon |
//! | 18..=21 | [`DayPeriod::Evening`] | Good evening |
//! | anything else | [`DayPeriod::Night`] | Good night |
//!
//! Hours are not validated. Negative values and values past 23 land in
//! [`DayPeriod::Night`].

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A window of the day used to pick a salutation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// Classifies an hour. Never fails; out-of-range hours are `Night`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use greet_lib::DayPeriod;
    ///
    /// assert_eq!(DayPeriod::from_hour(5), DayPeriod::Morning);
    /// assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
    /// assert_eq!(DayPeriod::from_hour(21), DayPeriod::Evening);
    /// assert_eq!(DayPeriod::from_hour(-3), DayPeriod::Night);
    /// assert_eq!(DayPeriod::from_hour(42), DayPeriod::Night);
    /// ```
    pub fn from_hour(hour: i64) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Leading phrase of the greeting, without the name.
    pub fn salutation(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
            Self::Night => "Good night",
        }
    }
}

/// Greets `name` according to the hour of day.
///
/// The result has no trailing punctuation.
///
/// ## Examples
///
/// ```
/// use greet_lib::greet_by_time;
///
/// assert_eq!(greet_by_time("Carol", 9), "Good morning, Carol");
/// assert_eq!(greet_by_time("Dan", 14), "Good afternoon, Dan");
/// assert_eq!(greet_by_time("Eve", 20), "Good evening, Eve");
/// assert_eq!(greet_by_time("Frank", 2), "Good night, Frank");
/// ```
pub fn greet_by_time(name: &str, hour: i64) -> String {
    let period = DayPeriod::from_hour(hour);
    tracing::trace!(hour, %period, "selected day period");

    format!("{}, {name}", period.salutation())
}

/// Greets `name` using the current hour of the local system clock.
pub fn greet_now(name: &str) -> String {
    greet_by_time(name, current_hour())
}

/// Hour (0..=23) reported by the local clock.
pub(crate) fn current_hour() -> i64 {
    i64::from(Local::now().hour())
}
