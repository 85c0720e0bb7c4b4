//! Effectiveness matrix - how much each unit type counts in each phase
//!
//! A fixed lookup table. A unit at `None` in a phase neither adds power
//! nor takes a share of that phase's casualties.

use serde::{Deserialize, Serialize};

use crate::military::forces::CombatUnitType;

/// The three sequential phases of an engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatPhase {
    Space,
    Orbital,
    Ground,
}

impl CombatPhase {
    pub const ALL: [CombatPhase; 3] = [CombatPhase::Space, CombatPhase::Orbital, CombatPhase::Ground];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Phase that follows this one, if any
    pub fn next(self) -> Option<CombatPhase> {
        match self {
            CombatPhase::Space => Some(CombatPhase::Orbital),
            CombatPhase::Orbital => Some(CombatPhase::Ground),
            CombatPhase::Ground => None,
        }
    }
}

/// Coefficient a unit type brings to a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectivenessLevel {
    None,
    Low,
    Medium,
    High,
}

impl EffectivenessLevel {
    pub fn coefficient(self) -> f64 {
        match self {
            EffectivenessLevel::High => 1.0,
            EffectivenessLevel::Medium => 0.5,
            EffectivenessLevel::Low => 0.25,
            EffectivenessLevel::None => 0.0,
        }
    }
}

use EffectivenessLevel::{High, Low, Medium, None as Ineffective};

/// Rows follow `CombatUnitType::ALL`, columns follow `CombatPhase::ALL`
const EFFECTIVENESS_MATRIX: [[EffectivenessLevel; 3]; 6] = [
    // Space        Orbital      Ground
    [Ineffective, Ineffective, High],     // soldiers
    [High, Medium, Low],                  // fighters
    [Medium, High, Ineffective],          // stations
    [High, Medium, Ineffective],          // light cruisers
    [Medium, High, Low],                  // heavy cruisers
    [Medium, Low, Ineffective],           // carriers
];

/// Look up a unit's effectiveness in a phase
pub fn effectiveness(unit: CombatUnitType, phase: CombatPhase) -> EffectivenessLevel {
    EFFECTIVENESS_MATRIX[unit.index()][phase.index()]
}

/// Whether the unit adds power in this phase at all
pub fn can_participate(unit: CombatUnitType, phase: CombatPhase) -> bool {
    effectiveness(unit, phase) > EffectivenessLevel::None
}

/// First phase in which the unit fights at `High`
pub fn primary_phase(unit: CombatUnitType) -> Option<CombatPhase> {
    CombatPhase::ALL
        .into_iter()
        .find(|&phase| effectiveness(unit, phase) == EffectivenessLevel::High)
}

/// Power a stack of `count` units brings to a phase, before modifiers
pub fn contribution(unit: CombatUnitType, count: u64, phase: CombatPhase) -> f64 {
    count as f64 * unit.base_power() * effectiveness(unit, phase).coefficient()
}
