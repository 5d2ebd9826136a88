//! A rendered greeting along with how it was chosen.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::greeter::{Formality, greet_with};
use crate::time_greeter::{DayPeriod, current_hour, greet_by_time};

/// How a [`Greeting`] picked its salutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GreetingStyle {
    /// Name-based greeting.
    Formality {
        /// Register used for the greeting.
        formality: Formality,
    },
    /// Hour-based greeting.
    TimeOfDay {
        /// The hour that was supplied, unvalidated.
        hour: i64,
        /// Window the hour fell into.
        period: DayPeriod,
    },
}

/// A salutation for one person.
///
/// `Display` writes only the greeting text, so a `Greeting` prints the same
/// string [`greet`](crate::greet) or [`greet_by_time`] would return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// The name as it was given.
    pub name: String,
    /// How the salutation was selected.
    pub style: GreetingStyle,
    /// The full greeting.
    pub text: String,
}

impl Greeting {
    /// Builds a name-based greeting.
    ///
    /// ## Examples
    ///
    /// ```
    /// use greet_lib::Greeting;
    ///
    /// let greeting = Greeting::by_name("Bob", Some(true));
    /// assert_eq!(greeting.to_string(), "Good day, Bob.");
    /// ```
    pub fn by_name(name: &str, formal: Option<bool>) -> Self {
        let formality = Formality::from(formal);
        Self {
            name: name.to_string(),
            style: GreetingStyle::Formality { formality },
            text: greet_with(name, formality),
        }
    }

    /// Builds an hour-based greeting.
    pub fn by_time(name: &str, hour: i64) -> Self {
        Self {
            name: name.to_string(),
            style: GreetingStyle::TimeOfDay {
                hour,
                period: DayPeriod::from_hour(hour),
            },
            text: greet_by_time(name, hour),
        }
    }

    /// Builds an hour-based greeting from the local clock.
    pub fn now(name: &str) -> Self {
        Self::by_time(name, current_hour())
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
