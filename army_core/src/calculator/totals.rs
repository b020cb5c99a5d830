//! ArmyTotals - Running attack/defense/hp totals during an evaluation

use super::ArmyResult;
use crate::army::ArmyComposition;
use crate::catalog::UnitCatalog;
use crate::types::StatKind;

/// Accumulates the three totals while the calculator walks an army.
///
/// Flat additions and multipliers are applied immediately, so the order of
/// calls is the order of the formula.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmyTotals {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
}

impl ArmyTotals {
    /// Create zeroed totals
    pub fn new() -> Self {
        ArmyTotals::default()
    }

    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Hp => self.hp,
        }
    }

    fn slot(&mut self, stat: StatKind) -> &mut f64 {
        match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Hp => &mut self.hp,
        }
    }

    /// Add a flat value to one total
    pub fn add(&mut self, stat: StatKind, value: f64) {
        *self.slot(stat) += value;
    }

    /// Multiply one total
    pub fn scale(&mut self, stat: StatKind, factor: f64) {
        *self.slot(stat) *= factor;
    }

    /// Add `amount` per unit in the army to one total.
    ///
    /// Each unit type known to the catalog contributes `amount * count`.
    /// Unknown names contribute nothing.
    pub fn apply_bonus(
        &mut self,
        stat: StatKind,
        amount: f64,
        composition: &ArmyComposition,
        catalog: &UnitCatalog,
    ) {
        for (name, count) in &composition.units {
            if !catalog.contains(name) {
                continue;
            }
            self.add(stat, f64::from(*count) * amount);
        }
    }

    /// Freeze into an immutable result
    pub fn to_result(&self) -> ArmyResult {
        ArmyResult {
            total_attack: self.attack,
            total_defense: self.defense,
            total_hp: self.hp,
        }
    }
}
