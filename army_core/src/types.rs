//! Core enumerations shared by the catalog, armies and the calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three aggregate stats tracked per army
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Hp,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[StatKind::Attack, StatKind::Defense, StatKind::Hp]
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Attack => write!(f, "attack"),
            StatKind::Defense => write!(f, "defense"),
            StatKind::Hp => write!(f, "hp"),
        }
    }
}

/// Unit category. Vampire units scale with the army's blood level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    #[default]
    Normal,
    Vampire,
}

/// Army-wide aura granted by a unit type.
///
/// Each effect adds `amount` per unit in the army to one total, so a single
/// General in an army of 100 units grants +500 defense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum SpecialEffect {
    BoostAttack(f64),
    BoostDefense(f64),
    BoostHp(f64),
}

impl SpecialEffect {
    /// The total this effect feeds into
    pub fn stat(&self) -> StatKind {
        match self {
            SpecialEffect::BoostAttack(_) => StatKind::Attack,
            SpecialEffect::BoostDefense(_) => StatKind::Defense,
            SpecialEffect::BoostHp(_) => StatKind::Hp,
        }
    }

    /// Bonus per unit in the army
    pub fn amount(&self) -> f64 {
        match *self {
            SpecialEffect::BoostAttack(a)
            | SpecialEffect::BoostDefense(a)
            | SpecialEffect::BoostHp(a) => a,
        }
    }
}

/// Shrine kinds. Each grants a flat per-unit bonus to one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShrineKind {
    /// +attack per unit
    Earth,
    /// +defense per unit
    Fire,
    /// +hp per unit
    Shadow,
}

impl ShrineKind {
    /// Get all shrine kinds
    pub fn all() -> &'static [ShrineKind] {
        &[ShrineKind::Earth, ShrineKind::Fire, ShrineKind::Shadow]
    }

    /// The total this shrine feeds into
    pub fn stat(&self) -> StatKind {
        match self {
            ShrineKind::Earth => StatKind::Attack,
            ShrineKind::Fire => StatKind::Defense,
            ShrineKind::Shadow => StatKind::Hp,
        }
    }
}

/// Side of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    /// The opposing side
    pub fn opponent(&self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "Attacker"),
            Side::Defender => write!(f, "Defender"),
        }
    }
}
