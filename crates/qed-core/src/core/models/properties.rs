use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of molecular properties entering the QED score.
pub const PROPERTY_COUNT: usize = 8;

/// One of the eight molecular properties combined by QED, in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Property {
    /// Average molecular weight in Daltons.
    Mw,
    /// Octanol-water partition coefficient estimate.
    Alogp,
    /// Hydrogen-bond acceptor count.
    Hba,
    /// Hydrogen-bond donor count.
    Hbd,
    /// Topological polar surface area in square Angstroms.
    Psa,
    /// Rotatable bond count.
    Rotb,
    /// Aromatic ring count.
    Arom,
    /// Number of structural alerts matched at least once.
    Alerts,
}

static PROPERTY_ALIASES: Map<&'static str, Property> = phf_map! {
    "mw" => Property::Mw, "molwt" => Property::Mw, "molecular-weight" => Property::Mw,
    "alogp" => Property::Alogp, "logp" => Property::Alogp, "clogp" => Property::Alogp,
    "hba" => Property::Hba, "acceptors" => Property::Hba, "hbond-acceptors" => Property::Hba,
    "hbd" => Property::Hbd, "donors" => Property::Hbd, "hbond-donors" => Property::Hbd,
    "psa" => Property::Psa, "tpsa" => Property::Psa, "polar-surface-area" => Property::Psa,
    "rotb" => Property::Rotb, "rotatable-bonds" => Property::Rotb,
    "arom" => Property::Arom, "aromatic-rings" => Property::Arom,
    "alerts" => Property::Alerts, "structural-alerts" => Property::Alerts,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown molecular property name: '{0}'")]
pub struct ParsePropertyError(pub String);

impl Property {
    pub const ALL: [Property; PROPERTY_COUNT] = [
        Property::Mw,
        Property::Alogp,
        Property::Hba,
        Property::Hbd,
        Property::Psa,
        Property::Rotb,
        Property::Arom,
        Property::Alerts,
    ];

    /// Position of this property inside a [`PropertyVector`] and the parameter table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Property::Mw => "MW",
            Property::Alogp => "ALOGP",
            Property::Hba => "HBA",
            Property::Hbd => "HBD",
            Property::Psa => "PSA",
            Property::Rotb => "ROTB",
            Property::Arom => "AROM",
            Property::Alerts => "ALERTS",
        }
    }
}

impl FromStr for Property {
    type Err = ParsePropertyError;

    /// Parses a property label or one of its aliases.
    ///
    /// Matching is case-insensitive, ignores surrounding whitespace, and treats `_` and `-`
    /// as equivalent (e.g. `"Rotatable_Bonds"` resolves to [`Property::Rotb`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        PROPERTY_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ParsePropertyError(s.to_string()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight raw property values of one molecule, in [`Property::ALL`] order.
///
/// Produced once per molecule by a property extractor (or read from a precomputed table)
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyVector([f64; PROPERTY_COUNT]);

impl PropertyVector {
    pub const fn new(values: [f64; PROPERTY_COUNT]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn get(&self, property: Property) -> f64 {
        self.0[property.index()]
    }

    pub fn as_array(&self) -> &[f64; PROPERTY_COUNT] {
        &self.0
    }

    /// Iterates over `(property, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        Property::ALL.iter().map(move |&p| (p, self.0[p.index()]))
    }
}

impl From<[f64; PROPERTY_COUNT]> for PropertyVector {
    fn from(values: [f64; PROPERTY_COUNT]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_positional_order() {
        for (i, property) in Property::ALL.iter().enumerate() {
            assert_eq!(property.index(), i);
        }
        assert_eq!(Property::Alerts.index(), PROPERTY_COUNT - 1);
    }

    #[test]
    fn from_str_parses_labels_case_insensitively() {
        assert_eq!("MW".parse::<Property>().unwrap(), Property::Mw);
        assert_eq!("alogp".parse::<Property>().unwrap(), Property::Alogp);
        assert_eq!(" Hbd ".parse::<Property>().unwrap(), Property::Hbd);
        assert_eq!("ALERTS".parse::<Property>().unwrap(), Property::Alerts);
    }

    #[test]
    fn from_str_resolves_aliases() {
        assert_eq!("tpsa".parse::<Property>().unwrap(), Property::Psa);
        assert_eq!("logP".parse::<Property>().unwrap(), Property::Alogp);
        assert_eq!(
            "Rotatable_Bonds".parse::<Property>().unwrap(),
            Property::Rotb
        );
        assert_eq!(
            "aromatic-rings".parse::<Property>().unwrap(),
            Property::Arom
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "charge".parse::<Property>().unwrap_err();
        assert_eq!(err, ParsePropertyError("charge".to_string()));
        assert!("".parse::<Property>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for property in Property::ALL {
            assert_eq!(property.to_string().parse::<Property>().unwrap(), property);
        }
    }

    #[test]
    fn property_vector_get_reads_positional_slot() {
        let props = PropertyVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(props.get(Property::Mw), 1.0);
        assert_eq!(props.get(Property::Psa), 5.0);
        assert_eq!(props.get(Property::Alerts), 8.0);
    }

    #[test]
    fn property_vector_iter_pairs_values_with_properties() {
        let props = PropertyVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let pairs: Vec<_> = props.iter().collect();
        assert_eq!(pairs.len(), PROPERTY_COUNT);
        assert_eq!(pairs[0], (Property::Mw, 1.0));
        assert_eq!(pairs[7], (Property::Alerts, 8.0));
    }
}
