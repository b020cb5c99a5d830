//! HeroBonuses - Percentage multipliers granted by an army's hero

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Hero percentage bonuses.
///
/// Each percentage is applied once to the running total after all flat
/// bonuses. When `level` is set the percentages scale linearly with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroBonuses {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Hero level; absent means the percentages are used as-is
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub attack_pct: Option<f64>,
    #[serde(default)]
    pub defense_pct: Option<f64>,
    #[serde(default)]
    pub hp_pct: Option<f64>,
}

impl HeroBonuses {
    /// Create a hero with no bonuses
    pub fn new() -> Self {
        HeroBonuses::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_attack_pct(mut self, pct: f64) -> Self {
        self.attack_pct = Some(pct);
        self
    }

    pub fn with_defense_pct(mut self, pct: f64) -> Self {
        self.defense_pct = Some(pct);
        self
    }

    pub fn with_hp_pct(mut self, pct: f64) -> Self {
        self.hp_pct = Some(pct);
        self
    }

    /// Raw configured percentage for a stat
    pub fn pct(&self, stat: StatKind) -> Option<f64> {
        match stat {
            StatKind::Attack => self.attack_pct,
            StatKind::Defense => self.defense_pct,
            StatKind::Hp => self.hp_pct,
        }
    }

    /// Multiplier to apply to a total, or `None` when the bonus is unset.
    ///
    /// An explicit zero percentage is treated the same as unset.
    pub fn multiplier(&self, stat: StatKind) -> Option<f64> {
        let pct = self.pct(stat).filter(|p| *p != 0.0)?;
        let level = self.level.map(f64::from).unwrap_or(1.0);
        Some(1.0 + pct * level / 100.0)
    }
}
