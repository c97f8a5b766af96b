//! Administrative zones of France with their own bank holiday rules.
//!
//! Metropolitan France shares a common base set of holidays; Alsace-Moselle
//! and several overseas territories observe additional days. The list of
//! zones is closed and ordered, with `Métropole` first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a zone argument does not match any registered zone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is an invalid zone")]
pub struct InvalidZoneError(pub String);

/// An administrative zone of France, metropolitan or overseas.
///
/// Each variant carries the official French name (diacritics included),
/// which is also its serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zone {
    #[serde(rename = "Métropole")]
    Metropole,
    #[serde(rename = "Alsace-Moselle")]
    AlsaceMoselle,
    #[serde(rename = "Guadeloupe")]
    Guadeloupe,
    #[serde(rename = "Guyane")]
    Guyane,
    #[serde(rename = "Martinique")]
    Martinique,
    #[serde(rename = "Mayotte")]
    Mayotte,
    #[serde(rename = "Nouvelle-Calédonie")]
    NouvelleCaledonie,
    #[serde(rename = "La Réunion")]
    LaReunion,
    #[serde(rename = "Polynésie Française")]
    PolynesieFrancaise,
    #[serde(rename = "Saint-Barthélémy")]
    SaintBarthelemy,
    #[serde(rename = "Saint-Martin")]
    SaintMartin,
    #[serde(rename = "Wallis-et-Futuna")]
    WallisEtFutuna,
    #[serde(rename = "Saint-Pierre-et-Miquelon")]
    SaintPierreEtMiquelon,
}

impl Zone {
    /// All zones, in registry order.
    pub const ALL: [Zone; 13] = [
        Zone::Metropole,
        Zone::AlsaceMoselle,
        Zone::Guadeloupe,
        Zone::Guyane,
        Zone::Martinique,
        Zone::Mayotte,
        Zone::NouvelleCaledonie,
        Zone::LaReunion,
        Zone::PolynesieFrancaise,
        Zone::SaintBarthelemy,
        Zone::SaintMartin,
        Zone::WallisEtFutuna,
        Zone::SaintPierreEtMiquelon,
    ];

    /// The official French name of the zone.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::Metropole => "Métropole",
            Zone::AlsaceMoselle => "Alsace-Moselle",
            Zone::Guadeloupe => "Guadeloupe",
            Zone::Guyane => "Guyane",
            Zone::Martinique => "Martinique",
            Zone::Mayotte => "Mayotte",
            Zone::NouvelleCaledonie => "Nouvelle-Calédonie",
            Zone::LaReunion => "La Réunion",
            Zone::PolynesieFrancaise => "Polynésie Française",
            Zone::SaintBarthelemy => "Saint-Barthélémy",
            Zone::SaintMartin => "Saint-Martin",
            Zone::WallisEtFutuna => "Wallis-et-Futuna",
            Zone::SaintPierreEtMiquelon => "Saint-Pierre-et-Miquelon",
        }
    }

    /// Resolve an optional zone name, treating `None` as `Métropole`.
    ///
    /// A name that matches no registered zone is an error; it is never
    /// silently replaced by the default.
    pub fn validate(zone: Option<&str>) -> Result<Zone, InvalidZoneError> {
        match zone {
            None => Ok(Zone::Metropole),
            Some(name) => name.parse(),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone::Metropole
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transform a string into a Zone. The match is exact, diacritics and
/// case included.
impl FromStr for Zone {
    type Err = InvalidZoneError;

    fn from_str(name: &str) -> Result<Zone, InvalidZoneError> {
        Zone::ALL
            .iter()
            .find(|zone| zone.name() == name)
            .copied()
            .ok_or_else(|| InvalidZoneError(name.to_string()))
    }
}
