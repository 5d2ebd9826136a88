//! Name-based greetings with an optional formal register.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Register of a name-based greeting.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Formality {
    /// `"Hello, {name}!"`
    #[default]
    Informal,
    /// `"Good day, {name}."`
    Formal,
}

impl From<bool> for Formality {
    fn from(formal: bool) -> Self {
        if formal { Self::Formal } else { Self::Informal }
    }
}

impl From<Option<bool>> for Formality {
    /// An absent flag reads as informal.
    fn from(formal: Option<bool>) -> Self {
        formal.unwrap_or(false).into()
    }
}

/// Greets `name`, formally when `formal` is `Some(true)`.
///
/// `None` and `Some(false)` both produce the informal greeting. The name is
/// used as-is, so an empty string yields `"Hello, !"`.
///
/// ## Examples
///
/// ```
/// use greet_lib::greet;
///
/// assert_eq!(greet("Alice", None), "Hello, Alice!");
/// assert_eq!(greet("Alice", Some(false)), "Hello, Alice!");
/// assert_eq!(greet("Bob", Some(true)), "Good day, Bob.");
/// ```
pub fn greet(name: &str, formal: Option<bool>) -> String {
    greet_with(name, Formality::from(formal))
}

/// Greets `name` in the given register.
pub fn greet_with(name: &str, formality: Formality) -> String {
    tracing::trace!(%formality, "selected greeting register");

    match formality {
        Formality::Formal => format!("Good day, {name}."),
        Formality::Informal => format!("Hello, {name}!"),
    }
}
