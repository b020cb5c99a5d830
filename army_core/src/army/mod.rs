//! ArmyComposition - One side's units and active modifiers

mod hero;
mod wall;

pub use hero::HeroBonuses;
pub use wall::{WallLevel, MAX_WALL_LEVEL};

use crate::types::{ShrineKind, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Army validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    #[error("Wall level {0} is out of range (0-3)")]
    InvalidWallLevel(u8),
    #[error("Blood level must be a finite non-negative number, got {0}")]
    InvalidBloodLevel(f64),
    #[error("Hero {stat} bonus must be finite, got {value}")]
    InvalidHeroBonus { stat: StatKind, value: f64 },
}

/// An active shrine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shrine {
    pub kind: ShrineKind,
}

impl From<ShrineKind> for Shrine {
    fn from(kind: ShrineKind) -> Self {
        Shrine { kind }
    }
}

/// Full input for one side of a battle.
///
/// Unit counts are kept in a sorted map so every evaluation walks them in the
/// same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmyComposition {
    /// Display label for this side
    #[serde(default)]
    pub name: String,
    /// Unit name -> count. Names missing from the catalog are ignored.
    #[serde(default)]
    pub units: BTreeMap<String, u32>,
    #[serde(default)]
    pub hero: Option<HeroBonuses>,
    /// Applied in order
    #[serde(default)]
    pub shrines: Vec<Shrine>,
    /// Attack/defense multiplier for vampire units
    #[serde(default)]
    pub blood_level: Option<f64>,
    #[serde(default)]
    pub is_defender: bool,
    /// Only used when `is_defender` is set
    #[serde(default)]
    pub wall_level: WallLevel,
}

impl ArmyComposition {
    /// Create an empty army
    pub fn new(name: impl Into<String>) -> Self {
        ArmyComposition {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the count for a unit type, replacing any previous count
    pub fn with_unit(mut self, name: impl Into<String>, count: u32) -> Self {
        self.units.insert(name.into(), count);
        self
    }

    pub fn with_hero(mut self, hero: HeroBonuses) -> Self {
        self.hero = Some(hero);
        self
    }

    /// Append a shrine
    pub fn with_shrine(mut self, kind: ShrineKind) -> Self {
        self.shrines.push(Shrine::from(kind));
        self
    }

    pub fn with_blood_level(mut self, blood_level: f64) -> Self {
        self.blood_level = Some(blood_level);
        self
    }

    /// Mark this army as the defender behind a wall
    pub fn as_defender(mut self, wall_level: WallLevel) -> Self {
        self.is_defender = true;
        self.wall_level = wall_level;
        self
    }

    /// Count for a unit type (0 if absent)
    pub fn count(&self, name: &str) -> u32 {
        self.units.get(name).copied().unwrap_or(0)
    }

    /// Units with a non-zero count, in name order
    pub fn present_units(&self) -> impl Iterator<Item = (&str, u32)> {
        self.units
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.present_units().next().is_none()
    }

    /// Check the numeric modifiers for values the calculator cannot use
    pub fn validate(&self) -> Result<(), CompositionError> {
        if let Some(blood) = self.blood_level {
            if !blood.is_finite() || blood < 0.0 {
                return Err(CompositionError::InvalidBloodLevel(blood));
            }
        }

        if let Some(ref hero) = self.hero {
            for &stat in StatKind::all() {
                if let Some(value) = hero.pct(stat) {
                    if !value.is_finite() {
                        return Err(CompositionError::InvalidHeroBonus { stat, value });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let army = ArmyComposition::new("Verteidiger")
            .with_unit("Ritter", 10)
            .with_unit("Heiler", 0)
            .with_shrine(ShrineKind::Fire)
            .as_defender(WallLevel::new(2).unwrap());

        assert_eq!(army.name, "Verteidiger");
        assert_eq!(army.count("Ritter"), 10);
        assert_eq!(army.count("Unknown"), 0);
        assert_eq!(army.present_units().collect::<Vec<_>>(), vec![("Ritter", 10)]);
        assert!(army.is_defender);
        assert_eq!(army.wall_level.value(), 2);
    }

    #[test]
    fn test_empty_counts_zero_units() {
        let army = ArmyComposition::new("").with_unit("Ritter", 0);
        assert!(army.is_empty());
    }

    #[test]
    fn test_validate_blood_level() {
        let army = ArmyComposition::new("").with_blood_level(-1.0);
        assert_eq!(army.validate(), Err(CompositionError::InvalidBloodLevel(-1.0)));

        let army = ArmyComposition::new("").with_blood_level(2.5);
        assert!(army.validate().is_ok());
    }

    #[test]
    fn test_validate_hero() {
        let army = ArmyComposition::new("").with_hero(HeroBonuses::new().with_hp_pct(f64::INFINITY));
        assert!(matches!(
            army.validate(),
            Err(CompositionError::InvalidHeroBonus { stat: StatKind::Hp, .. })
        ));
    }
}
