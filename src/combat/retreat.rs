//! Retreat and guerilla raids
//!
//! Both cut the full three-phase sequence short. A retreat ends the
//! engagement between phases; a guerilla raid is a single phase that never
//! advances and never captures.

use serde::{Deserialize, Serialize};

use crate::balance::ContainmentContext;
use crate::combat::engine::AttackOrder;
use crate::combat::phase::resolve_phase;
use crate::combat::power::SideProfile;
use crate::combat::result::{AttackType, CombatResult, EngagementOutcome, Side};
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::military::{CombatPhase, CombatUnitType, Forces};

/// Standing order to withdraw once a phase is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetreatPlan {
    pub side: Side,
    /// Withdraw after this phase completes, before the next begins
    pub after: CombatPhase,
}

impl RetreatPlan {
    pub fn new(side: Side, after: CombatPhase) -> Self {
        Self { side, after }
    }

    pub fn validate(&self) -> Result<()> {
        if self.after == CombatPhase::Ground {
            return Err(EngineError::InvalidInput(
                "retreat cannot follow the Ground phase".into(),
            ));
        }
        Ok(())
    }
}

/// Units lost while withdrawing: a fixed share of every type, floored
pub fn retreat_losses(forces: &Forces, rate: f64) -> Forces {
    let mut losses = Forces::default();
    for unit in CombatUnitType::ALL {
        let count = forces.get(unit);
        losses.set(unit, ((count as f64 * rate).floor() as u64).min(count));
    }
    losses
}

/// Survivors and losses of a withdrawing side
pub fn apply_retreat(forces: &Forces, config: &EngineConfig) -> (Forces, Forces) {
    let losses = retreat_losses(forces, config.retreat_casualty_rate);
    (forces.saturating_sub(&losses), losses)
}

/// Resolve a single-phase guerilla raid
pub fn resolve_guerilla(
    order: &AttackOrder,
    containment: &ContainmentContext,
    config: &EngineConfig,
) -> Result<CombatResult> {
    let phase = match order.attack_type {
        AttackType::Guerilla(phase @ (CombatPhase::Space | CombatPhase::Ground)) => phase,
        AttackType::Guerilla(CombatPhase::Orbital) => {
            return Err(EngineError::InvalidInput(
                "guerilla raids strike in Space or Ground only".into(),
            ));
        }
        AttackType::Invasion => {
            return Err(EngineError::InvalidInput(
                "invasion orders go through the full phase sequence".into(),
            ));
        }
    };

    if order.retreat.is_some() {
        return Err(EngineError::InvalidInput(
            "guerilla raids have no later phase to retreat before".into(),
        ));
    }

    // Ground raids still need carrier room for their soldiers
    let (committed, stranded) = if phase == CombatPhase::Ground {
        let landed = order
            .attacker_forces
            .deliverable_soldiers(config.carrier_capacity);
        let committed = order.attacker_forces.with(CombatUnitType::Soldiers, landed);
        let stranded = Forces::default().with(
            CombatUnitType::Soldiers,
            order.attacker_forces.soldiers - landed,
        );
        (committed, stranded)
    } else {
        (order.attacker_forces, Forces::default())
    };

    let attacker_profile =
        SideProfile::attacker(order.attacker_stance, containment.power_multiplier());
    let defender_profile = SideProfile::defender(order.defender_stance);

    let raid = resolve_phase(
        phase,
        &committed,
        &order.defender_forces,
        &attacker_profile,
        &defender_profile,
        config,
    );

    let attacker_survivors = raid.attacker_after + stranded;
    let defender_survivors = raid.defender_after;

    tracing::info!(
        "Guerilla raid by {} on {} in {:?}: {:?} prevails",
        order.attacker,
        order.defender,
        phase,
        raid.winner
    );

    Ok(CombatResult {
        attacker: order.attacker,
        defender: order.defender,
        attack_type: order.attack_type,
        winner: raid.winner,
        outcome: EngagementOutcome::Raided { phase },
        attacker_casualties: order.attacker_forces.saturating_sub(&attacker_survivors),
        defender_casualties: order.defender_forces.saturating_sub(&defender_survivors),
        attacker_survivors,
        defender_survivors,
        phases: vec![raid],
        retreat_casualties: None,
        capture_percent: None,
        containment_applied: containment.is_adjacent_to_boss,
        force_cost_multiplier: containment.force_cost_multiplier,
        commitment_cost: order
            .attacker_forces
            .commitment_cost(containment.force_cost_multiplier),
    })
}
