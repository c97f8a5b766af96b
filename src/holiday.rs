//! Declarative bank holiday rules.
//!
//! Every French bank holiday is one entry in the static [`RULES`] table:
//! a French label, the set of zones observing it, and a tagged rule for
//! deriving its date in a given year. A single generic resolver,
//! [`HolidayRule::resolve`], evaluates any entry; zone-specific legal
//! subtleties (first year in force, later redefinitions of the date) live
//! in the data, not in scattered branches.

use chrono::{Duration, NaiveDate};

use crate::zone::Zone;

/// Label of the slavery abolition commemoration, shared by all the
/// overseas zones that observe it on their own date.
pub const ABOLITION_ESCLAVAGE: &str = "Abolition de l'esclavage";

/// How the date of a holiday is derived for a given year.
#[derive(Debug, Clone, Copy)]
pub enum DayRule {
    /// Same month and day every year.
    Fixed { month: u32, day: u32 },
    /// Signed offset in days from Easter Sunday.
    EasterOffset { days: i64 },
    /// Fixed month and day, legally in force only from the year `first`
    /// onward; `revised` moves the day from a later year onward.
    ConditionalFixed {
        month: u32,
        day: u32,
        first: i32,
        revised: Option<Revision>,
    },
}

/// Redefinition of a conditional holiday's date, applying from the year
/// `from` (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct Revision {
    pub from: i32,
    pub month: u32,
    pub day: u32,
}

/// The zones a rule applies to.
#[derive(Debug, Clone, Copy)]
pub enum ZoneScope {
    All,
    Only(&'static [Zone]),
}

/// A single named bank holiday rule.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    pub label: &'static str,
    pub scope: ZoneScope,
    pub rule: DayRule,
}

impl HolidayRule {
    /// True if the rule is observed in `zone` at all.
    pub fn applies_to(&self, zone: Zone) -> bool {
        match self.scope {
            ZoneScope::All => true,
            ZoneScope::Only(zones) => zones.contains(&zone),
        }
    }

    /// Date of the holiday for the given year and zone, or `None` if the
    /// rule does not apply there or was not yet in force.
    pub fn resolve(&self, year: i32, zone: Zone, easter_sunday: NaiveDate) -> Option<NaiveDate> {
        if !self.applies_to(zone) {
            return None;
        }
        match self.rule {
            DayRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            DayRule::EasterOffset { days } => {
                easter_sunday.checked_add_signed(Duration::days(days))
            }
            DayRule::ConditionalFixed {
                month,
                day,
                first,
                revised,
            } => {
                if year < first {
                    return None;
                }
                let (month, day) = match revised {
                    Some(rev) if year >= rev.from => (rev.month, rev.day),
                    _ => (month, day),
                };
                NaiveDate::from_ymd_opt(year, month, day)
            }
        }
    }
}

/// All French bank holiday rules.
///
/// The first eleven entries form the base calendar common to every zone.
/// Vendredi saint and the 2ème jour de Noël are observed in
/// Alsace-Moselle only. The abolition commemorations carry the year the
/// holiday was enacted in each territory; Saint-Martin moved its date
/// from May 27 to May 28 in 2018.
pub static RULES: &[HolidayRule] = &[
    HolidayRule {
        label: "1er janvier",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 1, day: 1 },
    },
    HolidayRule {
        label: "Lundi de Pâques",
        scope: ZoneScope::All,
        rule: DayRule::EasterOffset { days: 1 },
    },
    HolidayRule {
        label: "1er mai",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 5, day: 1 },
    },
    HolidayRule {
        label: "8 mai",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 5, day: 8 },
    },
    HolidayRule {
        label: "Ascension",
        scope: ZoneScope::All,
        rule: DayRule::EasterOffset { days: 39 },
    },
    HolidayRule {
        label: "Lundi de Pentecôte",
        scope: ZoneScope::All,
        rule: DayRule::EasterOffset { days: 50 },
    },
    HolidayRule {
        label: "14 juillet",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 7, day: 14 },
    },
    HolidayRule {
        label: "Assomption",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 8, day: 15 },
    },
    HolidayRule {
        label: "Toussaint",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 11, day: 1 },
    },
    HolidayRule {
        label: "11 novembre",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 11, day: 11 },
    },
    HolidayRule {
        label: "Jour de Noël",
        scope: ZoneScope::All,
        rule: DayRule::Fixed { month: 12, day: 25 },
    },
    HolidayRule {
        label: "Vendredi saint",
        scope: ZoneScope::Only(&[Zone::AlsaceMoselle]),
        rule: DayRule::EasterOffset { days: -2 },
    },
    HolidayRule {
        label: "2ème jour de Noël",
        scope: ZoneScope::Only(&[Zone::AlsaceMoselle]),
        rule: DayRule::Fixed { month: 12, day: 26 },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::Mayotte]),
        rule: DayRule::ConditionalFixed {
            month: 4,
            day: 27,
            first: 1983,
            revised: None,
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::Martinique]),
        rule: DayRule::ConditionalFixed {
            month: 5,
            day: 22,
            first: 1983,
            revised: None,
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::Guadeloupe]),
        rule: DayRule::ConditionalFixed {
            month: 5,
            day: 27,
            first: 1983,
            revised: None,
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::SaintMartin]),
        rule: DayRule::ConditionalFixed {
            month: 5,
            day: 27,
            first: 1983,
            revised: Some(Revision {
                from: 2018,
                month: 5,
                day: 28,
            }),
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::Guyane]),
        rule: DayRule::ConditionalFixed {
            month: 6,
            day: 10,
            first: 1983,
            revised: None,
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::SaintBarthelemy]),
        rule: DayRule::ConditionalFixed {
            month: 10,
            day: 9,
            first: 1983,
            revised: None,
        },
    },
    HolidayRule {
        label: ABOLITION_ESCLAVAGE,
        scope: ZoneScope::Only(&[Zone::LaReunion]),
        rule: DayRule::ConditionalFixed {
            month: 12,
            day: 20,
            first: 1981,
            revised: None,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easter::easter_sunday;

    #[test]
    fn base_rules_apply_everywhere() {
        let base: Vec<&HolidayRule> = RULES
            .iter()
            .filter(|rule| matches!(rule.scope, ZoneScope::All))
            .collect();
        assert_eq!(base.len(), 11);
        for rule in base {
            for zone in Zone::ALL {
                assert!(rule.applies_to(zone), "{} missing in {}", rule.label, zone);
            }
        }
    }

    #[test]
    fn easter_offset_crosses_month_boundary() {
        // Easter 2019 was April 21; Pentecôte Monday lands in June
        let easter = easter_sunday(2019);
        let rule = &RULES[5];
        assert_eq!(rule.label, "Lundi de Pentecôte");
        assert_eq!(
            rule.resolve(2019, Zone::Metropole, easter),
            NaiveDate::from_ymd_opt(2019, 6, 10)
        );
    }

    #[test]
    fn good_friday_restricted_to_alsace() {
        let easter = easter_sunday(2020);
        let rule = RULES
            .iter()
            .find(|rule| rule.label == "Vendredi saint")
            .unwrap();
        assert_eq!(
            rule.resolve(2020, Zone::AlsaceMoselle, easter),
            NaiveDate::from_ymd_opt(2020, 4, 10)
        );
        assert_eq!(rule.resolve(2020, Zone::Metropole, easter), None);
        assert_eq!(rule.resolve(2020, Zone::Guadeloupe, easter), None);
    }

    #[test]
    fn conditional_rule_absent_before_first_year() {
        let rule = RULES
            .iter()
            .find(|rule| rule.label == ABOLITION_ESCLAVAGE)
            .unwrap();
        // first abolition entry is Mayotte, enacted in 1983
        let easter = easter_sunday(1982);
        assert_eq!(rule.resolve(1982, Zone::Mayotte, easter), None);
        assert_eq!(
            rule.resolve(1983, Zone::Mayotte, easter_sunday(1983)),
            NaiveDate::from_ymd_opt(1983, 4, 27)
        );
    }

    #[test]
    fn unique_labels_per_zone() {
        // two rules may share a label only if their zone scopes are disjoint
        for zone in Zone::ALL {
            let mut labels: Vec<&str> = RULES
                .iter()
                .filter(|rule| rule.applies_to(zone))
                .map(|rule| rule.label)
                .collect();
            let total = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), total, "duplicate label in {}", zone);
        }
    }
}
