//! Date validation and generation for `DD/MM` input
//!
//! Validation uses a fixed non-leap month table, so `29/02` is rejected in every year.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use rand::Rng;
use regex::Regex;

use crate::models::DayMonth;

/// Days per month, non-leap year
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Random dates stay within days every month has
const RANDOM_DAY_MAX: u8 = 28;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])$").expect("date pattern is valid")
});

/// Number of days in `month` (1-based), or `None` for an out-of-range month
pub fn days_in_month(month: u8) -> Option<u8> {
    DAYS_IN_MONTH.get(usize::from(month).checked_sub(1)?).copied()
}

/// Checks a `DD/MM` string against the calendar
///
/// # Examples
///
/// ```
/// use on_this_day::is_valid_date;
///
/// assert!(is_valid_date("25/12"));
/// assert!(!is_valid_date("31/04"));
/// assert!(!is_valid_date("29/02"));
/// ```
pub fn is_valid_date(input: &str) -> bool {
    let Some(caps) = DATE_PATTERN.captures(input) else {
        return false;
    };
    let (Ok(day), Ok(month)) = (caps[1].parse::<u8>(), caps[2].parse::<u8>()) else {
        return false;
    };
    days_in_month(month).is_some_and(|max| day <= max)
}

/// Pick a date for "surprise me": day 1-28, month 1-12
pub fn random_date<R: Rng + ?Sized>(rng: &mut R) -> DayMonth {
    let day = rng.random_range(1..=RANDOM_DAY_MAX);
    let month = rng.random_range(1..=12u8);
    DayMonth::new(day, month).unwrap_or_else(|| unreachable!("day <= 28 exists in every month"))
}

/// Today's local date; 29/02 maps to 28/02
pub fn today() -> DayMonth {
    let now = Local::now();
    let month = now.month() as u8;
    let day = now.day() as u8;
    DayMonth::new(day, month)
        .or_else(|| DayMonth::new(day - 1, month))
        .unwrap_or_else(|| unreachable!("chrono returns a real calendar date"))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_valid_examples() {
        assert!(is_valid_date("25/12"));
        assert!(is_valid_date("01/01"));
        assert!(is_valid_date("31/01"));
        assert!(is_valid_date("28/02"));
        assert!(is_valid_date("30/04"));
    }

    #[test]
    fn test_invalid_day_for_month() {
        assert!(!is_valid_date("31/04"));
        assert!(!is_valid_date("31/06"));
        assert!(!is_valid_date("31/09"));
        assert!(!is_valid_date("31/11"));
        assert!(!is_valid_date("30/02"));
    }

    #[test]
    fn test_leap_day_rejected() {
        assert!(!is_valid_date("29/02"));
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(!is_valid_date("00/01"));
        assert!(!is_valid_date("01/00"));
        assert!(!is_valid_date("32/01"));
        assert!(!is_valid_date("15/13"));
    }

    #[test]
    fn test_malformed_strings() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("1/1"));
        assert!(!is_valid_date("01-01"));
        assert!(!is_valid_date("01/01/2024"));
        assert!(!is_valid_date(" 01/01"));
        assert!(!is_valid_date("01/01 "));
        assert!(!is_valid_date("aa/bb"));
        assert!(!is_valid_date("٠١/٠١"));
    }

    #[test]
    fn test_exhaustive_against_month_table() {
        for month in 0..=13u8 {
            for day in 0..=32u8 {
                let input = format!("{:02}/{:02}", day, month);
                let expected = (1..=12).contains(&month)
                    && day >= 1
                    && day <= DAYS_IN_MONTH[usize::from(month) - 1];
                assert_eq!(is_valid_date(&input), expected, "input {}", input);
            }
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1), Some(31));
        assert_eq!(days_in_month(2), Some(28));
        assert_eq!(days_in_month(0), None);
        assert_eq!(days_in_month(13), None);
    }

    #[test]
    fn test_random_date_always_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let date = random_date(&mut rng);
            assert!(is_valid_date(&date.to_string()), "{}", date);
            assert!(date.day() <= RANDOM_DAY_MAX);
        }
    }

    #[test]
    fn test_today_is_valid() {
        assert!(is_valid_date(&today().to_string()));
    }
}
