use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

use crate::utils::dates::{days_in_month, is_valid_date};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar day without a year, always valid against the non-leap month table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayMonth {
    day: u8,
    month: u8,
}

impl DayMonth {
    /// Returns `None` when the day does not exist in that month (29/02 included)
    pub fn new(day: u8, month: u8) -> Option<Self> {
        let max_day = days_in_month(month)?;
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { day, month })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month - 1)]
    }
}

impl FromStr for DayMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if !is_valid_date(s) {
            bail!("Invalid date '{}': use DD/MM (e.g. 25/12)", s);
        }
        // The validator guarantees two ASCII digits on each side of the slash
        let day: u8 = s[..2].parse()?;
        let month: u8 = s[3..].parse()?;
        match Self::new(day, month) {
            Some(date) => Ok(date),
            None => bail!("Invalid date '{}': use DD/MM (e.g. 25/12)", s),
        }
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date: DayMonth = "07/09".parse().unwrap();
        assert_eq!(date.day(), 7);
        assert_eq!(date.month(), 9);
        assert_eq!(date.to_string(), "07/09");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!("31/04".parse::<DayMonth>().is_err());
        assert!("29/02".parse::<DayMonth>().is_err());
        assert!("7/9".parse::<DayMonth>().is_err());
        assert!("".parse::<DayMonth>().is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = "32/01".parse::<DayMonth>().unwrap_err();
        assert!(err.to_string().contains("use DD/MM"));
    }

    #[test]
    fn test_new_bounds() {
        assert!(DayMonth::new(31, 12).is_some());
        assert!(DayMonth::new(0, 1).is_none());
        assert!(DayMonth::new(1, 0).is_none());
        assert!(DayMonth::new(1, 13).is_none());
        assert!(DayMonth::new(29, 2).is_none());
        assert!(DayMonth::new(28, 2).is_some());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(DayMonth::new(1, 1).unwrap().month_name(), "January");
        assert_eq!(DayMonth::new(25, 12).unwrap().month_name(), "December");
    }
}
