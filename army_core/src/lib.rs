//! army_core - Army stat calculator
//!
//! This library provides:
//! - UnitCatalog: Read-only table of unit types (19-unit reference table built in)
//! - ArmyComposition: Unit counts plus hero, shrine, blood level and wall modifiers
//! - evaluate: Pure reduction of an army to attack, defense and hit point totals
//! - Battle comparison: Winner from two evaluated armies, ties going to the defender

pub mod army;
pub mod battle;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use army::{ArmyComposition, CompositionError, HeroBonuses, Shrine, WallLevel};
pub use battle::{compare, simulate_battle, Battle, BattleOutcome};
pub use calculator::{evaluate, evaluate_detailed, evaluate_with_constants, ArmyReport, ArmyResult, Stage};
pub use catalog::{UnitCatalog, UnitDefinition};
pub use config::{default_catalog, CalculatorConstants, ConfigError};
pub use types::{ShrineKind, Side, SpecialEffect, StatKind, UnitCategory};
