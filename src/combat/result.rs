//! Typed outcomes returned to the caller for persistence and narration

use serde::{Deserialize, Serialize};

use crate::core::types::EmpireId;
use crate::military::{CombatPhase, Forces};

/// The two sides of an engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Kind of attack being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    /// Full Space → Orbital → Ground sequence
    Invasion,
    /// Single-phase raid in Space or Ground; never captures
    Guerilla(CombatPhase),
}

/// Outcome of one phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: CombatPhase,
    pub attacker_power: f64,
    pub defender_power: f64,
    pub winner: Side,
    /// Equal power; the defender held
    pub tie: bool,
    pub attacker_before: Forces,
    pub defender_before: Forces,
    pub attacker_after: Forces,
    pub defender_after: Forces,
    pub attacker_casualties: Forces,
    pub defender_casualties: Forces,
    /// Whether the next phase may begin
    pub advances: bool,
}

/// How the engagement stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementOutcome {
    /// Attacker cleared every phase it could enter
    Completed,
    /// Attacker failed to clear this phase
    Halted { phase: CombatPhase },
    /// A side withdrew after this phase
    Retreated { side: Side, after: CombatPhase },
    /// Single-phase guerilla raid
    Raided { phase: CombatPhase },
}

/// Full resolution of an attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub attacker: EmpireId,
    pub defender: EmpireId,
    pub attack_type: AttackType,
    /// Phases actually executed, in order
    pub phases: Vec<PhaseResult>,
    pub outcome: EngagementOutcome,
    pub winner: Side,
    /// Survivors, including soldiers that never found carrier room
    pub attacker_survivors: Forces,
    pub defender_survivors: Forces,
    pub attacker_casualties: Forces,
    pub defender_casualties: Forces,
    /// Units lost while withdrawing, if anyone retreated
    pub retreat_casualties: Option<Forces>,
    /// Percent of the planet taken; `None` unless Ground was won
    pub capture_percent: Option<f64>,
    pub containment_applied: bool,
    pub force_cost_multiplier: f64,
    /// Credits charged for the attacker's committed forces
    pub commitment_cost: u64,
}

impl CombatResult {
    pub fn phase(&self, phase: CombatPhase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn ground_reached(&self) -> bool {
        self.phase(CombatPhase::Ground).is_some()
    }

    pub fn attacker_won(&self) -> bool {
        self.winner == Side::Attacker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Attacker.opponent(), Side::Defender);
        assert_eq!(Side::Defender.opponent(), Side::Attacker);
    }

    #[test]
    fn test_attack_type_serializes() {
        let json = serde_json::to_string(&AttackType::Guerilla(CombatPhase::Ground)).unwrap();
        assert_eq!(json, r#"{"Guerilla":"Ground"}"#);
        let back: AttackType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AttackType::Guerilla(CombatPhase::Ground));
    }
}
