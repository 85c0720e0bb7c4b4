//! Attack resolution - drives the Space → Orbital → Ground state machine
//!
//! Each phase reports whether it `advances`; the loop stops at the first
//! phase the attacker fails to clear. Halting is a normal outcome.

use serde::{Deserialize, Serialize};

use crate::balance::{containment_bonus, BossStatus, ContainmentContext, SectorAdjacency};
use crate::combat::invasion::resolve_capture;
use crate::combat::phase::resolve_phase;
use crate::combat::power::SideProfile;
use crate::combat::result::{AttackType, CombatResult, EngagementOutcome, PhaseResult, Side};
use crate::combat::retreat::{apply_retreat, resolve_guerilla, RetreatPlan};
use crate::core::config::{config, EngineConfig};
use crate::core::error::{EngineError, Result};
use crate::core::types::EmpireId;
use crate::empire::{AttackLog, EmpireSnapshot};
use crate::military::{CombatPhase, CombatUnitType, Forces, Stance};
use crate::nuclear::{resolve_nuclear_strike, NuclearStrikeOutcome, NuclearStrikeRequest};

/// A pre-authorized attack, as produced by a player or bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackOrder {
    pub attacker: EmpireId,
    pub defender: EmpireId,
    pub attack_type: AttackType,
    pub attacker_forces: Forces,
    pub defender_forces: Forces,
    pub attacker_stance: Stance,
    pub defender_stance: Stance,
    #[serde(default)]
    pub retreat: Option<RetreatPlan>,
}

impl AttackOrder {
    pub fn invasion(
        attacker: EmpireId,
        defender: EmpireId,
        attacker_forces: Forces,
        defender_forces: Forces,
    ) -> Self {
        Self {
            attacker,
            defender,
            attack_type: AttackType::Invasion,
            attacker_forces,
            defender_forces,
            attacker_stance: Stance::Balanced,
            defender_stance: Stance::Balanced,
            retreat: None,
        }
    }

    pub fn guerilla(
        attacker: EmpireId,
        defender: EmpireId,
        phase: CombatPhase,
        attacker_forces: Forces,
        defender_forces: Forces,
    ) -> Self {
        Self {
            attack_type: AttackType::Guerilla(phase),
            ..Self::invasion(attacker, defender, attacker_forces, defender_forces)
        }
    }

    pub fn with_stances(mut self, attacker: Stance, defender: Stance) -> Self {
        self.attacker_stance = attacker;
        self.defender_stance = defender;
        self
    }

    pub fn with_retreat(mut self, plan: RetreatPlan) -> Self {
        self.retreat = Some(plan);
        self
    }

    /// Reject orders no valid engagement can be computed from
    pub fn validate(&self) -> Result<()> {
        if self.attacker == self.defender {
            return Err(EngineError::InvalidInput(format!(
                "{} cannot attack itself",
                self.attacker
            )));
        }
        if let Some(plan) = &self.retreat {
            plan.validate()?;
        }
        Ok(())
    }
}

/// Where the invasion state machine stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngagementState {
    Fighting(CombatPhase),
    Finished(EngagementOutcome),
}

/// Stateless resolver bound to one configuration
///
/// `Send + Sync`; share a single engine across every game and thread.
#[derive(Debug, Clone)]
pub struct CombatEngine {
    config: EngineConfig,
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self::new(config().clone())
    }
}

impl CombatEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate boss status and containment from this turn's snapshot
    pub fn containment_for(
        &self,
        attacker: &EmpireSnapshot,
        defender: &EmpireSnapshot,
        all_empires: &[EmpireSnapshot],
        attack_log: &AttackLog,
        adjacency: &impl SectorAdjacency,
    ) -> ContainmentContext {
        let status = BossStatus::evaluate(defender, all_empires, attack_log, &self.config);
        containment_bonus(attacker, defender, &status, adjacency, &self.config)
    }

    /// Resolve an invasion or a guerilla raid
    pub fn resolve_attack(
        &self,
        order: &AttackOrder,
        containment: &ContainmentContext,
    ) -> Result<CombatResult> {
        order.validate()?;
        match order.attack_type {
            AttackType::Invasion => self.resolve_invasion(order, containment),
            AttackType::Guerilla(_) => resolve_guerilla(order, containment, &self.config),
        }
    }

    /// Resolve a single-phase raid; rejects invasion orders
    pub fn resolve_guerilla(
        &self,
        order: &AttackOrder,
        containment: &ContainmentContext,
    ) -> Result<CombatResult> {
        order.validate()?;
        resolve_guerilla(order, containment, &self.config)
    }

    /// Resolve a nuclear strike, re-checking the launch gate
    pub fn resolve_nuclear_strike<R: rand::Rng + ?Sized>(
        &self,
        request: &NuclearStrikeRequest,
        empires: &[EmpireSnapshot],
        rng: &mut R,
    ) -> Result<NuclearStrikeOutcome> {
        resolve_nuclear_strike(request, empires, &self.config, rng)
    }

    fn resolve_invasion(
        &self,
        order: &AttackOrder,
        containment: &ContainmentContext,
    ) -> Result<CombatResult> {
        let config = &self.config;
        let attacker_profile =
            SideProfile::attacker(order.attacker_stance, containment.power_multiplier());
        let defender_profile = SideProfile::defender(order.defender_stance);

        let mut attacker = order.attacker_forces;
        let mut defender = order.defender_forces;
        // Soldiers without carrier room sit out the Ground phase
        let mut stranded = Forces::default();
        let mut phases: Vec<PhaseResult> = Vec::with_capacity(3);
        let mut retreat_casualties = None;

        let mut state = EngagementState::Fighting(CombatPhase::Space);
        let outcome = loop {
            let phase = match state {
                EngagementState::Fighting(phase) => phase,
                EngagementState::Finished(outcome) => break outcome,
            };

            let committed = if phase == CombatPhase::Ground {
                let landed = attacker.deliverable_soldiers(config.carrier_capacity);
                stranded = Forces::default()
                    .with(CombatUnitType::Soldiers, attacker.soldiers - landed);
                attacker.with(CombatUnitType::Soldiers, landed)
            } else {
                attacker
            };

            let result = resolve_phase(
                phase,
                &committed,
                &defender,
                &attacker_profile,
                &defender_profile,
                config,
            );
            attacker = result.attacker_after;
            defender = result.defender_after;
            let advances = result.advances;
            phases.push(result);

            state = if !advances {
                EngagementState::Finished(EngagementOutcome::Halted { phase })
            } else {
                self.next_state(phase, &attacker)
            };

            // Retreat only matters if another phase was about to begin
            if let (EngagementState::Fighting(_), Some(plan)) = (state, order.retreat) {
                if plan.after == phase {
                    let withdrawing = match plan.side {
                        Side::Attacker => &mut attacker,
                        Side::Defender => &mut defender,
                    };
                    let (survivors, losses) = apply_retreat(withdrawing, config);
                    *withdrawing = survivors;
                    retreat_casualties = Some(losses);
                    state = EngagementState::Finished(EngagementOutcome::Retreated {
                        side: plan.side,
                        after: phase,
                    });
                }
            }
        };

        let attacker_survivors = attacker + stranded;
        let defender_survivors = defender;

        let winner = match outcome {
            EngagementOutcome::Completed => Side::Attacker,
            EngagementOutcome::Retreated { side, .. } => side.opponent(),
            EngagementOutcome::Halted { .. } | EngagementOutcome::Raided { .. } => Side::Defender,
        };

        let capture_percent = phases
            .iter()
            .find(|p| p.phase == CombatPhase::Ground && p.advances)
            .map(|ground| {
                resolve_capture(
                    ground.attacker_after.soldiers,
                    order.defender_forces.soldiers,
                    config,
                )
                .capture_percent
            });

        tracing::info!(
            "Invasion by {} on {}: {:?} after {} phase(s), capture {:?}",
            order.attacker,
            order.defender,
            outcome,
            phases.len(),
            capture_percent
        );

        Ok(CombatResult {
            attacker: order.attacker,
            defender: order.defender,
            attack_type: order.attack_type,
            phases,
            outcome,
            winner,
            attacker_casualties: order.attacker_forces.saturating_sub(&attacker_survivors),
            defender_casualties: order.defender_forces.saturating_sub(&defender_survivors),
            attacker_survivors,
            defender_survivors,
            retreat_casualties,
            capture_percent,
            containment_applied: containment.is_adjacent_to_boss,
            force_cost_multiplier: containment.force_cost_multiplier,
            commitment_cost: order
                .attacker_forces
                .commitment_cost(containment.force_cost_multiplier),
        })
    }

    /// State after the attacker clears `phase`
    ///
    /// Ground only begins if at least one soldier can be landed.
    fn next_state(&self, phase: CombatPhase, attacker: &Forces) -> EngagementState {
        match phase.next() {
            Some(CombatPhase::Ground)
                if attacker.deliverable_soldiers(self.config.carrier_capacity) == 0 =>
            {
                tracing::debug!("No soldiers can be landed; Ground phase skipped");
                EngagementState::Finished(EngagementOutcome::Completed)
            }
            Some(next) => EngagementState::Fighting(next),
            None => EngagementState::Finished(EngagementOutcome::Completed),
        }
    }
}
