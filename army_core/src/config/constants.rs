//! Calculator constants configuration

use crate::types::ShrineKind;
use serde::{Deserialize, Serialize};

/// Tunable calculator constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConstants {
    #[serde(default)]
    pub shrines: ShrineConstants,
    #[serde(default)]
    pub wall: WallConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShrineConstants {
    /// Attack per unit from an earth shrine
    #[serde(default = "default_earth_attack")]
    pub earth_attack: f64,
    /// Defense per unit from a fire shrine
    #[serde(default = "default_fire_defense")]
    pub fire_defense: f64,
    /// Hit points per unit from a shadow shrine
    #[serde(default = "default_shadow_hp")]
    pub shadow_hp: f64,
}

impl ShrineConstants {
    /// Per-unit bonus granted by a shrine kind
    pub fn bonus(&self, kind: ShrineKind) -> f64 {
        match kind {
            ShrineKind::Earth => self.earth_attack,
            ShrineKind::Fire => self.fire_defense,
            ShrineKind::Shadow => self.shadow_hp,
        }
    }
}

impl Default for ShrineConstants {
    fn default() -> Self {
        ShrineConstants {
            earth_attack: 2.0,
            fire_defense: 3.0,
            shadow_hp: 15.0,
        }
    }
}

fn default_earth_attack() -> f64 {
    2.0
}
fn default_fire_defense() -> f64 {
    3.0
}
fn default_shadow_hp() -> f64 {
    15.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallConstants {
    /// Formula: hp *= 1 - hp_reduction_per_level * wall_level
    #[serde(default = "default_hp_reduction_per_level")]
    pub hp_reduction_per_level: f64,
}

impl Default for WallConstants {
    fn default() -> Self {
        WallConstants {
            hp_reduction_per_level: 0.3,
        }
    }
}

fn default_hp_reduction_per_level() -> f64 {
    0.3
}
