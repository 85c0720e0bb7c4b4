//! Attack log - battle history the engine reads for boss detection

use serde::{Deserialize, Serialize};

use crate::combat::{AttackType, CombatResult, Side};
use crate::core::types::{EmpireId, Turn};

/// One resolved attack, as persisted by the caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub turn: Turn,
    pub attacker: EmpireId,
    pub defender: EmpireId,
    pub attack_type: AttackType,
    pub attacker_won: bool,
    pub capture_percent: Option<f64>,
}

impl AttackRecord {
    /// Summarize a combat result for the log
    pub fn from_result(turn: Turn, result: &CombatResult) -> Self {
        Self {
            turn,
            attacker: result.attacker,
            defender: result.defender,
            attack_type: result.attack_type,
            attacker_won: result.winner == Side::Attacker,
            capture_percent: result.capture_percent,
        }
    }
}

/// The attack history of one game
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttackLog {
    pub records: Vec<AttackRecord>,
}

impl AttackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: AttackRecord) {
        self.records.push(record);
    }

    pub fn records_for_empire(&self, empire: EmpireId) -> impl Iterator<Item = &AttackRecord> {
        self.records
            .iter()
            .filter(move |r| r.attacker == empire || r.defender == empire)
    }

    /// Attacks launched and won by `empire`
    pub fn battles_won(&self, empire: EmpireId) -> u32 {
        self.records
            .iter()
            .filter(|r| r.attacker == empire && r.attacker_won)
            .count() as u32
    }
}
