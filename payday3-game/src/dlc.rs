//! DLC catalogue and owned-content flags.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Heist DLC packs. Each pack unlocks one heist of the same name in both
/// the loud and stealth pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dlc {
    SyntaxError,
    BoysInBlue,
    HoustonBreakout,
    FearGreed,
    PartyPowder,
}

impl Dlc {
    pub const ALL: [Self; 5] = [
        Self::SyntaxError,
        Self::BoysInBlue,
        Self::HoustonBreakout,
        Self::FearGreed,
        Self::PartyPowder,
    ];

    /// Option identifier, which doubles as the unlocked heist name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SyntaxError => "Syntax Error",
            Self::BoysInBlue => "Boys In Blue",
            Self::HoustonBreakout => "Houston Breakout",
            Self::FearGreed => "Fear & Greed",
            Self::PartyPowder => "Party Powder",
        }
    }

    #[must_use]
    pub const fn heist(self) -> &'static str {
        self.label()
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dlc| dlc.label() == label)
    }
}

/// Set of owned DLC packs resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DlcOwned(BTreeSet<Dlc>);

impl DlcOwned {
    #[must_use]
    pub const fn none() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn all() -> Self {
        Self(Dlc::ALL.into_iter().collect())
    }

    /// Build from raw identifiers. Unrecognized identifiers are skipped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut owned = BTreeSet::new();
        for label in labels {
            let label = label.as_ref();
            match Dlc::from_label(label) {
                Some(dlc) => {
                    owned.insert(dlc);
                }
                None => log::debug!("ignoring unknown DLC identifier {label:?}"),
            }
        }
        Self(owned)
    }

    #[must_use]
    pub fn contains(&self, dlc: Dlc) -> bool {
        self.0.contains(&dlc)
    }

    pub fn insert(&mut self, dlc: Dlc) -> bool {
        self.0.insert(dlc)
    }

    pub fn iter(&self) -> impl Iterator<Item = Dlc> + '_ {
        self.0.iter().copied()
    }

    /// Heist names unlocked by the owned packs, in catalogue order.
    pub fn heists(&self) -> impl Iterator<Item = &'static str> + '_ {
        Dlc::ALL
            .into_iter()
            .filter(|dlc| self.contains(*dlc))
            .map(Dlc::heist)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Dlc> for DlcOwned {
    fn from_iter<T: IntoIterator<Item = Dlc>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for DlcOwned {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Dlc::label))
    }
}

impl<'de> Deserialize<'de> for DlcOwned {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_labels(labels))
    }
}
