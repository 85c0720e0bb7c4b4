//! Nuclear strike resolution
//!
//! Requested → DetectionRolled → ConsequencesApplied. Population damage is
//! always the configured fraction of the target's population; the detection
//! roll only decides how much worse the diplomatic fallout gets.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{EmpireId, Turn};
use crate::empire::EmpireSnapshot;
use crate::nuclear::gate::check_nuclear_gate;

/// A launch order against one target on one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuclearStrikeRequest {
    pub attacker: EmpireId,
    pub target: EmpireId,
    pub turn: Turn,
}

/// How hard the galaxy reacts to a traced strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EscalationTier {
    Condemnation,
    Sanctions,
    Retaliation,
}

impl EscalationTier {
    pub const ALL: [EscalationTier; 3] = [
        EscalationTier::Condemnation,
        EscalationTier::Sanctions,
        EscalationTier::Retaliation,
    ];

    /// Probability of this tier once a strike is detected
    pub fn weight(self) -> f64 {
        match self {
            EscalationTier::Condemnation => 0.50,
            EscalationTier::Sanctions => 0.35,
            EscalationTier::Retaliation => 0.15,
        }
    }

    /// Pick a tier from a uniform roll in [0, 1)
    pub fn from_roll(roll: f64) -> Self {
        let mut cumulative = 0.0;
        for tier in Self::ALL {
            cumulative += tier.weight();
            if roll < cumulative {
                return tier;
            }
        }
        EscalationTier::Retaliation
    }

    pub fn extra_reputation(self) -> i32 {
        match self {
            EscalationTier::Condemnation => -10,
            EscalationTier::Sanctions => -20,
            EscalationTier::Retaliation => -35,
        }
    }

    pub fn extra_civil_status(self) -> i32 {
        match self {
            EscalationTier::Condemnation => 0,
            EscalationTier::Sanctions => -1,
            EscalationTier::Retaliation => -2,
        }
    }

    pub fn extra_relation_penalty(self) -> i32 {
        match self {
            EscalationTier::Retaliation => -20,
            _ => 0,
        }
    }
}

/// Result of the detection roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionOutcome {
    Undetected,
    Detected(EscalationTier),
}

impl DetectionOutcome {
    pub fn is_detected(self) -> bool {
        matches!(self, DetectionOutcome::Detected(_))
    }
}

/// Lifecycle of one strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeState {
    Requested,
    DetectionRolled(DetectionOutcome),
    ConsequencesApplied,
}

/// Everything the caller needs to apply a strike's effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclearStrikeOutcome {
    pub attacker: EmpireId,
    pub target: EmpireId,
    pub turn: Turn,
    pub detected: bool,
    pub detection: DetectionOutcome,
    pub target_population: u64,
    pub population_damage: u64,
    pub reputation_delta: i32,
    pub civil_status_delta: i32,
    /// The strike is announced to every empire
    pub global_broadcast: bool,
    /// Relation change from each broadcast recipient toward the attacker
    pub relation_penalty: i32,
    pub broadcast_to: Vec<EmpireId>,
    pub credits_spent: u64,
}

/// A strike moving through its state machine
#[derive(Debug, Clone)]
pub struct NuclearStrike {
    request: NuclearStrikeRequest,
    target_population: u64,
    observers: Vec<EmpireId>,
    state: StrikeState,
}

impl NuclearStrike {
    /// Open a strike, refusing anything the gate or the snapshot rules out
    pub fn request(
        request: NuclearStrikeRequest,
        empires: &[EmpireSnapshot],
        config: &EngineConfig,
    ) -> Result<Self> {
        if request.attacker == request.target {
            return Err(EngineError::InvalidInput(format!(
                "{} cannot strike itself",
                request.attacker
            )));
        }

        let find = |id: EmpireId| {
            empires
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| EngineError::InvalidInput(format!("{} not in snapshot", id)))
        };
        let attacker = find(request.attacker)?;
        let target = find(request.target)?;

        if attacker.eliminated || target.eliminated {
            return Err(EngineError::InvalidInput(
                "eliminated empires cannot launch or be targeted".into(),
            ));
        }

        check_nuclear_gate(attacker, request.turn, config)
            .map_err(EngineError::NuclearNotAuthorized)?;

        let observers = empires
            .iter()
            .filter(|e| e.is_active() && e.id != request.attacker)
            .map(|e| e.id)
            .collect();

        Ok(Self {
            request,
            target_population: target.population,
            observers,
            state: StrikeState::Requested,
        })
    }

    pub fn state(&self) -> StrikeState {
        self.state
    }

    /// Roll whether the strike is traced and, if so, how hard the response is
    pub fn roll_detection<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &EngineConfig,
    ) -> Result<DetectionOutcome> {
        if self.state != StrikeState::Requested {
            return Err(EngineError::InvalidInput(format!(
                "detection already rolled ({:?})",
                self.state
            )));
        }

        let detected = rng.gen_bool(config.nuclear_detection_chance.clamp(0.0, 1.0));
        let outcome = if detected {
            DetectionOutcome::Detected(EscalationTier::from_roll(rng.gen::<f64>()))
        } else {
            DetectionOutcome::Undetected
        };

        self.state = StrikeState::DetectionRolled(outcome);
        Ok(outcome)
    }

    /// Compute damage and fallout
    pub fn apply_consequences(&mut self, config: &EngineConfig) -> Result<NuclearStrikeOutcome> {
        let detection = match self.state {
            StrikeState::DetectionRolled(outcome) => outcome,
            other => {
                return Err(EngineError::InvalidInput(format!(
                    "consequences need a detection roll, strike is {:?}",
                    other
                )));
            }
        };

        let population_damage =
            (self.target_population as f64 * config.nuclear_population_damage).floor() as u64;

        let mut reputation_delta = config.nuclear_reputation_penalty;
        let mut civil_status_delta = config.nuclear_civil_status_penalty;
        let mut relation_penalty = config.nuclear_broadcast_relation_penalty;
        if let DetectionOutcome::Detected(tier) = detection {
            reputation_delta += tier.extra_reputation();
            civil_status_delta += tier.extra_civil_status();
            relation_penalty += tier.extra_relation_penalty();
        }

        self.state = StrikeState::ConsequencesApplied;

        tracing::info!(
            "Nuclear strike by {} on {}: {} killed, {:?}",
            self.request.attacker,
            self.request.target,
            population_damage,
            detection
        );

        Ok(NuclearStrikeOutcome {
            attacker: self.request.attacker,
            target: self.request.target,
            turn: self.request.turn,
            detected: detection.is_detected(),
            detection,
            target_population: self.target_population,
            population_damage,
            reputation_delta,
            civil_status_delta,
            global_broadcast: true,
            relation_penalty,
            broadcast_to: self.observers.clone(),
            credits_spent: config.nuclear_cost,
        })
    }
}

/// Run a strike through every state in one call
pub fn resolve_nuclear_strike<R: Rng + ?Sized>(
    request: &NuclearStrikeRequest,
    empires: &[EmpireSnapshot],
    config: &EngineConfig,
    rng: &mut R,
) -> Result<NuclearStrikeOutcome> {
    let mut strike = NuclearStrike::request(*request, empires, config)?;
    strike.roll_detection(rng, config)?;
    strike.apply_consequences(config)
}
