//! Date of Easter Sunday in the Gregorian calendar.
//!
//! Easter anchors all the moveable French bank holidays (Lundi de Pâques,
//! Ascension, Lundi de Pentecôte, and Vendredi saint in Alsace-Moselle).

use chrono::NaiveDate;

/// Returns the date of Easter Sunday for the given year.
///
/// The computation is the anonymous Gregorian computus, exact integer
/// arithmetic valid for any year from 1583 to 4099.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let easter = computus::gregorian(year).expect("year outside of the Gregorian computus range");
    NaiveDate::from_ymd_opt(easter.year, easter.month, easter.day)
        .expect("computus yields a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn known_easter_dates() {
        assert_eq!(easter_sunday(1954), NaiveDate::from_ymd_opt(1954, 4, 18).unwrap());
        assert_eq!(easter_sunday(1981), NaiveDate::from_ymd_opt(1981, 4, 19).unwrap());
        assert_eq!(easter_sunday(2049), NaiveDate::from_ymd_opt(2049, 4, 18).unwrap());
        assert_eq!(easter_sunday(2018), NaiveDate::from_ymd_opt(2018, 4, 1).unwrap());
        assert_eq!(easter_sunday(2020), NaiveDate::from_ymd_opt(2020, 4, 12).unwrap());
    }

    #[test]
    fn easter_is_a_sunday_within_bounds() {
        for year in 1900..=2199 {
            let easter = easter_sunday(year);
            assert_eq!(easter.weekday(), Weekday::Sun, "easter {} is not a Sunday", easter);
            // Gregorian Easter falls between March 22 and April 25
            let in_bounds = match easter.month() {
                3 => easter.day() >= 22,
                4 => easter.day() <= 25,
                _ => false,
            };
            assert!(in_bounds, "easter {} outside of March 22 - April 25", easter);
        }
    }
}
