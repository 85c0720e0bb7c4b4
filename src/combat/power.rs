//! Phase power calculation
//!
//! power = Σ contribution × stance × containment × defender advantage × diversity
//!
//! Stations count double when defending. Containment only ever reaches the
//! attacker and is folded in before the diversity bonus.

use serde::{Deserialize, Serialize};

use crate::combat::result::Side;
use crate::core::config::EngineConfig;
use crate::military::{can_participate, contribution, CombatPhase, CombatUnitType, Forces, Stance};

/// Everything about a side that shapes its power besides its units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideProfile {
    pub role: Side,
    pub stance: Stance,
    /// 1.0 + containment bonus for the attacker; 1.0 otherwise
    pub containment_multiplier: f64,
}

impl SideProfile {
    pub fn attacker(stance: Stance, containment_multiplier: f64) -> Self {
        Self {
            role: Side::Attacker,
            stance,
            containment_multiplier,
        }
    }

    pub fn defender(stance: Stance) -> Self {
        Self {
            role: Side::Defender,
            stance,
            containment_multiplier: 1.0,
        }
    }

    pub fn is_attacker(&self) -> bool {
        self.role == Side::Attacker
    }
}

/// Power breakdown for one side in one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePower {
    /// Sum of unit contributions (stations doubled on defense)
    pub raw: f64,
    pub total: f64,
    pub diversity_applied: bool,
}

/// Number of distinct unit types present and eligible in the phase
pub fn participating_type_count(forces: &Forces, phase: CombatPhase) -> usize {
    forces
        .present_types()
        .filter(|&unit| can_participate(unit, phase))
        .count()
}

/// Whether any unit on this side can fight in the phase
pub fn has_participants(forces: &Forces, phase: CombatPhase) -> bool {
    participating_type_count(forces, phase) > 0
}

/// Compute a side's power for a phase
pub fn calculate_phase_power(
    forces: &Forces,
    phase: CombatPhase,
    profile: &SideProfile,
    config: &EngineConfig,
) -> PhasePower {
    let is_attacker = profile.is_attacker();

    let raw: f64 = CombatUnitType::ALL
        .into_iter()
        .map(|unit| {
            let base = contribution(unit, forces.get(unit), phase);
            if unit == CombatUnitType::Stations && !is_attacker {
                base * config.station_defense_bonus
            } else {
                base
            }
        })
        .sum();

    let mut total = raw
        * profile
            .stance
            .power_multiplier(is_attacker, config.stance_application);

    if is_attacker {
        total *= profile.containment_multiplier;
    } else {
        total *= config.defender_advantage;
    }

    let diversity_applied =
        participating_type_count(forces, phase) >= config.diversity_min_unit_types;
    if diversity_applied {
        total *= config.diversity_bonus;
    }

    PhasePower {
        raw,
        total: total.max(0.0),
        diversity_applied,
    }
}
