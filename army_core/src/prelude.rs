//! Prelude module for convenient imports
//!
//! ```rust
//! use army_core::prelude::*;
//! ```

// Core types
pub use crate::army::{ArmyComposition, HeroBonuses, WallLevel};
pub use crate::catalog::{UnitCatalog, UnitDefinition};
pub use crate::types::{ShrineKind, Side, SpecialEffect, StatKind, UnitCategory};

// Calculation
pub use crate::calculator::{evaluate, evaluate_detailed, ArmyReport, ArmyResult};

// Battle
pub use crate::battle::{compare, simulate_battle, Battle, BattleOutcome};

// Config
pub use crate::config::{CalculatorConstants, ConfigError};
