//! Behavioral checks for the public greeting functions.

use std::thread;

use greet_lib::{DayPeriod, Greeting, greet, greet_by_time};
use proptest::prelude::*;

/// Reference table for the hour windows.
fn expected(name: &str, hour: i64) -> String {
    let phrase = match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        18..=21 => "Good evening",
        _ => "Good night",
    };
    format!("{phrase}, {name}")
}

mod greeter {
    use super::*;

    proptest! {
        #[test]
        fn absent_and_false_flags_are_informal(name in any::<String>()) {
            let expected = format!("Hello, {name}!");
            prop_assert_eq!(greet(&name, None), expected.clone());
            prop_assert_eq!(greet(&name, Some(false)), expected);
        }

        #[test]
        fn true_flag_is_formal(name in any::<String>()) {
            prop_assert_eq!(greet(&name, Some(true)), format!("Good day, {name}."));
        }

        #[test]
        fn greeting_is_deterministic(name in any::<String>(), formal in any::<Option<bool>>()) {
            prop_assert_eq!(greet(&name, formal), greet(&name, formal));
            prop_assert_eq!(Greeting::by_name(&name, formal).text, greet(&name, formal));
        }
    }
}

mod time_greeter {
    use super::*;

    proptest! {
        #[test]
        fn matches_the_reference_table(name in any::<String>(), hour in any::<i64>()) {
            prop_assert_eq!(greet_by_time(&name, hour), expected(&name, hour));
        }

        #[test]
        fn morning_window(name in any::<String>(), hour in 5i64..=11) {
            prop_assert_eq!(greet_by_time(&name, hour), format!("Good morning, {name}"));
        }

        #[test]
        fn afternoon_window(name in any::<String>(), hour in 12i64..=17) {
            prop_assert_eq!(greet_by_time(&name, hour), format!("Good afternoon, {name}"));
        }

        #[test]
        fn evening_window(name in any::<String>(), hour in 18i64..=21) {
            prop_assert_eq!(greet_by_time(&name, hour), format!("Good evening, {name}"));
        }

        #[test]
        fn early_hours_and_negatives_are_night(name in any::<String>(), hour in i64::MIN..5) {
            prop_assert_eq!(greet_by_time(&name, hour), format!("Good night, {name}"));
        }

        #[test]
        fn late_hours_are_night(name in any::<String>(), hour in 22i64..=i64::MAX) {
            prop_assert_eq!(greet_by_time(&name, hour), format!("Good night, {name}"));
        }

        #[test]
        fn period_agrees_with_greeting_text(hour in any::<i64>()) {
            let period = DayPeriod::from_hour(hour);
            prop_assert!(greet_by_time("x", hour).starts_with(period.salutation()));
        }

        #[test]
        fn time_greeting_is_deterministic(name in any::<String>(), hour in any::<i64>()) {
            prop_assert_eq!(greet_by_time(&name, hour), greet_by_time(&name, hour));
            prop_assert_eq!(Greeting::by_time(&name, hour), Greeting::by_time(&name, hour));
        }
    }

    #[test]
    fn extreme_hours_are_night() {
        for hour in [i64::MIN, -1, 4, 22, 23, 24, i64::MAX] {
            assert_eq!(greet_by_time("Frank", hour), "Good night, Frank", "hour {hour}");
        }
    }
}

#[test]
fn safe_to_call_from_many_threads() {
    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            thread::spawn(move || {
                let name = format!("worker-{i}");
                (0..24)
                    .map(|hour| (greet(&name, Some(i % 2 == 0)), greet_by_time(&name, hour)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        let name = format!("worker-{i}");
        for (hour, (plain, timed)) in results.into_iter().enumerate() {
            assert_eq!(plain, greet(&name, Some(i % 2 == 0)));
            assert_eq!(timed, expected(&name, hour as i64));
        }
    }
}
