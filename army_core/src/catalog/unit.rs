//! UnitDefinition - Static per-unit-type combat values

use crate::types::{SpecialEffect, UnitCategory};
use serde::{Deserialize, Serialize};

/// Base values for one unit type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Unique name, also the catalog key
    pub name: String,
    /// Attack per unit
    #[serde(rename = "attack")]
    pub base_attack: f64,
    /// Defense per unit
    #[serde(rename = "defense")]
    pub base_defense: f64,
    /// Hit points per unit
    #[serde(rename = "hp")]
    pub base_hp: f64,
    #[serde(default)]
    pub category: UnitCategory,
    /// Army-wide aura, applied once if this unit type is present
    #[serde(default, rename = "special", skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<SpecialEffect>,
}

impl UnitDefinition {
    /// Create a normal unit with no special effect
    pub fn new(name: impl Into<String>, attack: f64, defense: f64, hp: f64) -> Self {
        UnitDefinition {
            name: name.into(),
            base_attack: attack,
            base_defense: defense,
            base_hp: hp,
            category: UnitCategory::Normal,
            special_effect: None,
        }
    }

    /// Set the unit category
    pub fn with_category(mut self, category: UnitCategory) -> Self {
        self.category = category;
        self
    }

    /// Attach a special effect
    pub fn with_special(mut self, effect: SpecialEffect) -> Self {
        self.special_effect = Some(effect);
        self
    }

    pub fn is_vampire(&self) -> bool {
        self.category == UnitCategory::Vampire
    }

    /// Attack and defense of a single unit after blood-level scaling.
    ///
    /// Only vampires scale, and a blood level of zero counts as unset.
    pub fn scaled_offense(&self, blood_level: Option<f64>) -> (f64, f64) {
        match blood_level {
            Some(blood) if self.is_vampire() && blood != 0.0 => {
                (self.base_attack * blood, self.base_defense * blood)
            }
            _ => (self.base_attack, self.base_defense),
        }
    }
}
