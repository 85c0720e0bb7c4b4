//! Launch gate - unlock turn, cost and cooldown

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::types::Turn;
use crate::empire::EmpireSnapshot;

/// Why a launch is not allowed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDenial {
    Locked { unlock_turn: Turn },
    InsufficientCredits { required: u64, available: u64 },
    CoolingDown { ready_turn: Turn },
}

impl std::fmt::Display for GateDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateDenial::Locked { unlock_turn } => {
                write!(f, "nuclear weapons unlock on turn {}", unlock_turn)
            }
            GateDenial::InsufficientCredits { required, available } => {
                write!(f, "strike costs {} credits, {} available", required, available)
            }
            GateDenial::CoolingDown { ready_turn } => {
                write!(f, "launch systems ready again on turn {}", ready_turn)
            }
        }
    }
}

/// Check every launch precondition, reporting the first one that fails
pub fn check_nuclear_gate(
    launcher: &EmpireSnapshot,
    turn: Turn,
    config: &EngineConfig,
) -> Result<(), GateDenial> {
    if turn < config.nuclear_unlock_turn {
        return Err(GateDenial::Locked {
            unlock_turn: config.nuclear_unlock_turn,
        });
    }

    if launcher.credits < config.nuclear_cost {
        return Err(GateDenial::InsufficientCredits {
            required: config.nuclear_cost,
            available: launcher.credits,
        });
    }

    if let Some(last) = launcher.last_nuclear_strike {
        let ready_turn = last.saturating_add(config.nuclear_cooldown_turns);
        if turn < ready_turn {
            return Err(GateDenial::CoolingDown { ready_turn });
        }
    }

    Ok(())
}

pub fn can_launch_nuclear_strike(
    launcher: &EmpireSnapshot,
    turn: Turn,
    config: &EngineConfig,
) -> bool {
    check_nuclear_gate(launcher, turn, config).is_ok()
}
