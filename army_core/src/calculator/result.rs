//! ArmyResult - Final totals of one evaluation, plus per-stage breakdown

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Aggregate stats of one army. Values are never rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmyResult {
    pub total_attack: f64,
    pub total_defense: f64,
    pub total_hp: f64,
}

impl ArmyResult {
    /// Get one total
    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Attack => self.total_attack,
            StatKind::Defense => self.total_defense,
            StatKind::Hp => self.total_hp,
        }
    }

    /// Get a summary string, rounded for display
    pub fn summary(&self) -> String {
        format!(
            "{:.0} attack, {:.0} defense, {:.0} hp",
            self.total_attack, self.total_defense, self.total_hp
        )
    }
}

/// Calculation stages, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Unit base values (with blood level)
    Base,
    /// Unit auras
    SpecialEffects,
    Shrines,
    /// Hero percentage multipliers
    Hero,
    /// Defender wall hit point mitigation
    Wall,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Base,
            Stage::SpecialEffects,
            Stage::Shrines,
            Stage::Hero,
            Stage::Wall,
        ]
    }
}

/// Totals as they stood after one stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub totals: ArmyResult,
}

/// Result of an evaluation with its breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmyReport {
    /// Final totals
    pub result: ArmyResult,
    /// One snapshot per stage, in application order
    pub stages: Vec<StageSnapshot>,
    /// Names in the army that the catalog does not know
    pub skipped_units: Vec<String>,
}

impl ArmyReport {
    /// Totals after a given stage
    pub fn after(&self, stage: Stage) -> Option<&ArmyResult> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| &s.totals)
    }

    /// Change a stage made to one total
    pub fn stage_delta(&self, stage: Stage, stat: StatKind) -> f64 {
        let index = match self.stages.iter().position(|s| s.stage == stage) {
            Some(i) => i,
            None => return 0.0,
        };
        let before = if index == 0 {
            0.0
        } else {
            self.stages[index - 1].totals.get(stat)
        };
        self.stages[index].totals.get(stat) - before
    }
}
