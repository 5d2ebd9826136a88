//! Greeting helpers.
//!
//! Two pure functions build a salutation for a name:
//!
//! - [`greet`] - informal (`"Hello, Ada!"`) or formal (`"Good day, Ada."`)
//! - [`greet_by_time`] - time-of-day phrasing picked from an hour value
//!
//! Neither function can fail. Any `&str` is interpolated verbatim and any
//! `i64` hour is accepted; hours outside the morning, afternoon and evening
//! windows fall through to "Good night".
//!
//! ## Core Types
//!
//! - [`Formality`] - informal or formal phrasing
//! - [`DayPeriod`] - the four hour windows used by [`greet_by_time`]
//! - [`Greeting`] - a rendered salutation plus how it was chosen
//!
//! ## Examples
//!
//! ```rust
//! use greet_lib::{greet, greet_by_time};
//!
//! assert_eq!(greet("Alice", None), "Hello, Alice!");
//! assert_eq!(greet("Bob", Some(true)), "Good day, Bob.");
//! assert_eq!(greet_by_time("Carol", 9), "Good morning, Carol");
//! assert_eq!(greet_by_time("Frank", 2), "Good night, Frank");
//! ```

mod greeter;
mod time_greeter;
mod types;

pub use greeter::{Formality, greet, greet_with};
pub use time_greeter::{DayPeriod, greet_by_time, greet_now};
pub use types::{Greeting, GreetingStyle};
