//! # Pattern Catalogs
//!
//! Static SMARTS catalogs consumed by [`CatalogExtractor`](crate::engine::extract::CatalogExtractor).
//! The strings are kept verbatim so that scores stay reproducible across toolkits that
//! implement the same SMARTS dialect; they are data, not behaviour, for this crate.

mod acceptors;
mod alerts;

pub use acceptors::ACCEPTOR_SMARTS;
pub use alerts::STRUCTURAL_ALERT_SMARTS;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Matches ring atoms that are not aromatic and are bonded to a non-aromatic atom. Deleting
/// these before ring perception leaves only the aromatic ring systems.
pub const ALIPHATIC_RING_SMARTS: &str = "[$([A;R][!a])]";

/// Selects one of the static pattern catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Acceptors,
    Alerts,
    AliphaticRings,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown catalog '{0}'. Expected 'acceptors', 'alerts' or 'aliphatic-rings'.")]
pub struct ParseCatalogError(pub String);

impl Catalog {
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Catalog::Acceptors => &ACCEPTOR_SMARTS,
            Catalog::Alerts => &STRUCTURAL_ALERT_SMARTS,
            Catalog::AliphaticRings => &[ALIPHATIC_RING_SMARTS],
        }
    }
}

impl FromStr for Catalog {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acceptors" | "hba" => Ok(Catalog::Acceptors),
            "alerts" | "structural-alerts" => Ok(Catalog::Alerts),
            "aliphatic-rings" | "aliphatic" => Ok(Catalog::AliphaticRings),
            _ => Err(ParseCatalogError(s.to_string())),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Catalog::Acceptors => "acceptors",
                Catalog::Alerts => "alerts",
                Catalog::AliphaticRings => "aliphatic-rings",
            }
        )
    }
}
