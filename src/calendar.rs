//! Bank holiday queries for a given year and zone.
//!
//! The queries evaluate the static rule table against the requested year
//! and zone. Every call is a pure recomputation; there is no cached or
//! shared state, so the functions can be called freely from any thread.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::easter::easter_sunday;
use crate::holiday::{ABOLITION_ESCLAVAGE, RULES};
use crate::zone::Zone;

/// All bank holidays of `year` in `zone`, keyed by their French name.
pub fn for_year(year: i32, zone: Zone) -> BTreeMap<&'static str, NaiveDate> {
    let easter = easter_sunday(year);
    let mut days = BTreeMap::new();
    for rule in RULES {
        if let Some(date) = rule.resolve(year, zone, easter) {
            days.insert(rule.label, date);
        }
    }
    debug!("{} bank holidays in {} for {}", days.len(), year, zone);
    days
}

/// True if `date` is a bank holiday in `zone`.
pub fn is_bank_holiday(date: NaiveDate, zone: Zone) -> bool {
    for_year(date.year(), zone).values().any(|day| *day == date)
}

/// The earliest bank holiday on or after `date` in `zone`, with its name.
///
/// A date that is itself a holiday is returned as the next one. When no
/// holiday is left in the year of `date`, the search rolls over to the
/// following year.
pub fn next_bank_holiday(date: NaiveDate, zone: Zone) -> Option<(&'static str, NaiveDate)> {
    let upcoming = |year: i32| {
        for_year(year, zone)
            .into_iter()
            .filter(|&(_, day)| day >= date)
            .min_by_key(|&(_, day)| day)
    };
    upcoming(date.year()).or_else(|| upcoming(date.year() + 1))
}

/// Date of the slavery abolition commemoration in `zone`, or `None` if
/// the zone does not observe it or it was not yet in force in `year`.
pub fn abolition_esclavage(year: i32, zone: Zone) -> Option<NaiveDate> {
    let easter = easter_sunday(year);
    RULES
        .iter()
        .filter(|rule| rule.label == ABOLITION_ESCLAVAGE)
        .find_map(|rule| rule.resolve(year, zone, easter))
}
