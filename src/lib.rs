//! # jours-feries-france
//!
//! Bank holidays ("jours fériés") for France. The library computes the
//! official holidays of a given year for metropolitan France,
//! Alsace-Moselle and the overseas territories, with the legally exact
//! dates, including the years in which the overseas commemorations of the
//! abolition of slavery came into force. On top of the per-year calendar
//! it answers whether a specific date is a bank holiday and which holiday
//! comes next after a given date.
//!
//! All values are pure calendar dates ([`chrono::NaiveDate`]); there is no
//! notion of time zone or time of day, and weekends are not treated
//! specially.
//!
//! ```
//! use chrono::NaiveDate;
//! use jours_feries_france::{for_year, is_bank_holiday, Zone};
//!
//! let holidays = for_year(2024, Zone::Metropole);
//! assert_eq!(
//!     holidays["14 juillet"],
//!     NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()
//! );
//! assert!(is_bank_holiday(
//!     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!     Zone::Metropole
//! ));
//! ```

pub mod calendar;
pub mod easter;
pub mod holiday;
pub mod zone;

pub use calendar::{abolition_esclavage, for_year, is_bank_holiday, next_bank_holiday};
pub use easter::easter_sunday;
pub use zone::{InvalidZoneError, Zone};
