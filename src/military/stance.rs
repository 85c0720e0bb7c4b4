//! Combat stance system
//!
//! A stance is chosen once per engagement and held for every phase.
//! It scales the side's own power and its own losses, never the enemy's.

use serde::{Deserialize, Serialize};

use crate::core::config::StanceApplication;

/// Combat stance chosen by each side for the whole engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stance {
    /// Hits harder, bleeds more
    Aggressive,
    /// Neutral baseline
    #[default]
    Balanced,
    /// Holds ground well, weak on the offensive
    Defensive,
    /// Avoids losses at the cost of punch
    Evasive,
}

/// Multipliers carried by a stance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StanceModifiers {
    pub attack: f64,
    pub defense: f64,
    pub casualty: f64,
}

// attack, defense, casualty - every defense * 1.20 exceeds the attack value
const AGGRESSIVE: StanceModifiers = StanceModifiers {
    attack: 1.15,
    defense: 1.00,
    casualty: 1.25,
};

const BALANCED: StanceModifiers = StanceModifiers {
    attack: 1.00,
    defense: 1.00,
    casualty: 1.00,
};

const DEFENSIVE: StanceModifiers = StanceModifiers {
    attack: 0.85,
    defense: 1.15,
    casualty: 0.80,
};

const EVASIVE: StanceModifiers = StanceModifiers {
    attack: 0.75,
    defense: 0.90,
    casualty: 0.60,
};

impl Stance {
    pub const ALL: [Stance; 4] = [
        Stance::Aggressive,
        Stance::Balanced,
        Stance::Defensive,
        Stance::Evasive,
    ];

    /// Fixed modifier table lookup
    pub fn modifiers(self) -> StanceModifiers {
        match self {
            Stance::Aggressive => AGGRESSIVE,
            Stance::Balanced => BALANCED,
            Stance::Defensive => DEFENSIVE,
            Stance::Evasive => EVASIVE,
        }
    }

    /// Power multiplier for the side holding this stance
    pub fn power_multiplier(self, is_attacker: bool, application: StanceApplication) -> f64 {
        let mods = self.modifiers();
        match (application, is_attacker) {
            (StanceApplication::ByRole, true) => mods.attack,
            (StanceApplication::ByRole, false) => mods.defense,
            (StanceApplication::AttackOnly, _) => mods.attack,
        }
    }

    /// Scale this side's own base losses
    pub fn scale_losses(self, base_losses: u64) -> u64 {
        (base_losses as f64 * self.modifiers().casualty).floor() as u64
    }
}
