//! Army stat calculation - Reduce an army composition to three totals
//!
//! Order of application:
//! 1. Base values per unit (vampires scaled by blood level)
//! 2. Special effects of every unit type present
//! 3. Shrines, in order
//! 4. Hero percentage multipliers
//! 5. Wall mitigation of hit points (defender only)
//!
//! Steps 4 and 5 multiply the running totals, so they must stay last.

mod result;
mod totals;

pub use result::{ArmyReport, ArmyResult, Stage, StageSnapshot};
pub use totals::ArmyTotals;

use crate::army::ArmyComposition;
use crate::catalog::UnitCatalog;
use crate::config::CalculatorConstants;
use crate::types::StatKind;
use tracing::{debug, trace};

/// Evaluate an army with the default constants
pub fn evaluate(composition: &ArmyComposition, catalog: &UnitCatalog) -> ArmyResult {
    evaluate_with_constants(composition, catalog, &CalculatorConstants::default())
}

/// Evaluate an army with explicit shrine and wall constants
pub fn evaluate_with_constants(
    composition: &ArmyComposition,
    catalog: &UnitCatalog,
    constants: &CalculatorConstants,
) -> ArmyResult {
    run(composition, catalog, constants, |_, _| {})
}

/// Evaluate an army and record the totals after every stage
pub fn evaluate_detailed(composition: &ArmyComposition, catalog: &UnitCatalog) -> ArmyReport {
    evaluate_detailed_with_constants(composition, catalog, &CalculatorConstants::default())
}

/// `evaluate_detailed` with explicit constants
pub fn evaluate_detailed_with_constants(
    composition: &ArmyComposition,
    catalog: &UnitCatalog,
    constants: &CalculatorConstants,
) -> ArmyReport {
    let mut stages = Vec::with_capacity(Stage::all().len());
    let result = run(composition, catalog, constants, |stage, totals| {
        stages.push(StageSnapshot {
            stage,
            totals: totals.to_result(),
        });
    });

    let skipped_units = composition
        .units
        .keys()
        .filter(|name| !catalog.contains(name))
        .cloned()
        .collect();

    ArmyReport {
        result,
        stages,
        skipped_units,
    }
}

fn run<F>(
    composition: &ArmyComposition,
    catalog: &UnitCatalog,
    constants: &CalculatorConstants,
    mut on_stage: F,
) -> ArmyResult
where
    F: FnMut(Stage, &ArmyTotals),
{
    let mut totals = ArmyTotals::new();

    apply_base(&mut totals, composition, catalog);
    on_stage(Stage::Base, &totals);

    apply_special_effects(&mut totals, composition, catalog);
    on_stage(Stage::SpecialEffects, &totals);

    apply_shrines(&mut totals, composition, catalog, constants);
    on_stage(Stage::Shrines, &totals);

    apply_hero(&mut totals, composition);
    on_stage(Stage::Hero, &totals);

    apply_wall(&mut totals, composition, constants);
    on_stage(Stage::Wall, &totals);

    debug!(
        army = %composition.name,
        attack = totals.attack,
        defense = totals.defense,
        hp = totals.hp,
        "Evaluated army"
    );

    totals.to_result()
}

fn apply_base(totals: &mut ArmyTotals, composition: &ArmyComposition, catalog: &UnitCatalog) {
    for (name, count) in composition.present_units() {
        let Some(unit) = catalog.get(name) else {
            trace!(unit = name, "Skipping unknown unit");
            continue;
        };

        let count = f64::from(count);
        let (attack, defense) = unit.scaled_offense(composition.blood_level);
        totals.add(StatKind::Attack, attack * count);
        totals.add(StatKind::Defense, defense * count);
        totals.add(StatKind::Hp, unit.base_hp * count);
    }
}

fn apply_special_effects(
    totals: &mut ArmyTotals,
    composition: &ArmyComposition,
    catalog: &UnitCatalog,
) {
    for (name, _) in composition.present_units() {
        let Some(effect) = catalog.get(name).and_then(|u| u.special_effect) else {
            continue;
        };
        trace!(unit = name, ?effect, "Applying special effect");
        totals.apply_bonus(effect.stat(), effect.amount(), composition, catalog);
    }
}

fn apply_shrines(
    totals: &mut ArmyTotals,
    composition: &ArmyComposition,
    catalog: &UnitCatalog,
    constants: &CalculatorConstants,
) {
    for shrine in &composition.shrines {
        let amount = constants.shrines.bonus(shrine.kind);
        totals.apply_bonus(shrine.kind.stat(), amount, composition, catalog);
    }
}

fn apply_hero(totals: &mut ArmyTotals, composition: &ArmyComposition) {
    let Some(ref hero) = composition.hero else {
        return;
    };
    for &stat in StatKind::all() {
        if let Some(factor) = hero.multiplier(stat) {
            totals.scale(stat, factor);
        }
    }
}

fn apply_wall(totals: &mut ArmyTotals, composition: &ArmyComposition, constants: &CalculatorConstants) {
    if !composition.is_defender || composition.wall_level.value() == 0 {
        return;
    }
    let factor = composition
        .wall_level
        .hp_factor(constants.wall.hp_reduction_per_level);
    totals.scale(StatKind::Hp, factor);
}
