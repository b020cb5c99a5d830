//! Battle comparison - Decide a winner from two army results
//!
//! Each side's score is its attack minus the opponent's defense. The higher
//! score wins; ties go to the defender.

use crate::army::ArmyComposition;
use crate::calculator::{evaluate, ArmyResult};
use crate::catalog::UnitCatalog;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scores and winner of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Attacker attack minus defender defense
    pub attack_score: f64,
    /// Defender attack minus attacker defense
    pub defense_score: f64,
    pub winner: Side,
}

impl BattleOutcome {
    /// Score difference in favor of the winner (0 on a tie)
    pub fn margin(&self) -> f64 {
        (self.attack_score - self.defense_score).abs()
    }

    pub fn is_tie(&self) -> bool {
        self.attack_score == self.defense_score
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_tie() {
            format!(
                "{} wins on tie ({:.0} vs {:.0})",
                self.winner, self.attack_score, self.defense_score
            )
        } else {
            format!(
                "{} wins ({:.0} vs {:.0})",
                self.winner, self.attack_score, self.defense_score
            )
        }
    }
}

/// Compare two evaluated armies
pub fn compare(attacker: &ArmyResult, defender: &ArmyResult) -> BattleOutcome {
    let attack_score = attacker.total_attack - defender.total_defense;
    let defense_score = defender.total_attack - attacker.total_defense;

    let winner = if attack_score > defense_score {
        Side::Attacker
    } else {
        Side::Defender
    };

    BattleOutcome {
        attack_score,
        defense_score,
        winner,
    }
}

/// Both evaluated sides and the outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub attacker_name: String,
    pub defender_name: String,
    pub attacker: ArmyResult,
    pub defender: ArmyResult,
    pub outcome: BattleOutcome,
}

impl Battle {
    /// Result for one side
    pub fn result(&self, side: Side) -> &ArmyResult {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    /// Display name for one side, falling back to the side label
    pub fn name(&self, side: Side) -> String {
        let name = match side {
            Side::Attacker => &self.attacker_name,
            Side::Defender => &self.defender_name,
        };
        if name.is_empty() {
            side.to_string()
        } else {
            name.clone()
        }
    }

    /// Display name of the winning side
    pub fn winner_name(&self) -> String {
        self.name(self.outcome.winner)
    }

    /// Get a multi-line summary
    pub fn summary(&self) -> String {
        format!(
            "{}: {}\n{}: {}\nWinner: {}",
            self.name(Side::Attacker),
            self.attacker.summary(),
            self.name(Side::Defender),
            self.defender.summary(),
            self.winner_name()
        )
    }
}

/// Evaluate both armies against one catalog and compare them.
///
/// The defender's wall only applies if its composition is marked as
/// defender.
pub fn simulate_battle(
    attacker: &ArmyComposition,
    defender: &ArmyComposition,
    catalog: &UnitCatalog,
) -> Battle {
    let attacker_result = evaluate(attacker, catalog);
    let defender_result = evaluate(defender, catalog);
    let outcome = compare(&attacker_result, &defender_result);

    debug!(
        attack_score = outcome.attack_score,
        defense_score = outcome.defense_score,
        winner = %outcome.winner,
        "Battle compared"
    );

    Battle {
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
        attacker: attacker_result,
        defender: defender_result,
        outcome,
    }
}
