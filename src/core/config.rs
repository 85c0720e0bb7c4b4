//! Engine configuration with documented constants
//!
//! Every tunable number of the combat, containment and nuclear systems is
//! collected here. The effectiveness matrix and stance table are fixed
//! tables in `military` and are not configurable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::military::constants::{PLANET_CAPTURE_MAX_PERCENT, PLANET_CAPTURE_MIN_PERCENT};

/// How a side's stance multiplier is picked in each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StanceApplication {
    /// Attacking side uses its attack multiplier, defending side its defense multiplier
    #[default]
    ByRole,
    /// Both sides always use their attack multiplier
    AttackOnly,
}

/// Configuration for the resolution engine
///
/// Defaults are the live game balance. Changing them shifts every
/// concurrently running game, so load once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === PHASE COMBAT ===
    /// Multiplier on total defender power in every phase
    ///
    /// At 1.20 a defender with identical forces and stance always holds.
    pub defender_advantage: f64,

    /// Multiplier on the stations' contribution when they defend
    pub station_defense_bonus: f64,

    /// Distinct participating unit types needed for the diversity bonus
    pub diversity_min_unit_types: usize,

    /// Multiplier on total power for a diverse fleet
    pub diversity_bonus: f64,

    /// Scale on the loser's casualty fraction
    ///
    /// The loser loses `scale × L/(W+L)` of each participating unit type.
    /// At 1.0 an even fight costs the loser half its engaged units.
    pub casualty_scale: f64,

    /// Soldiers each carrier can bring into the Ground phase
    pub carrier_capacity: u64,

    /// Which stance multiplier a side applies per phase
    pub stance_application: StanceApplication,

    // === INVASION ===
    /// Lower bound of a successful capture (percent)
    pub capture_min_percent: f64,

    /// Upper bound of a successful capture (percent)
    pub capture_max_percent: f64,

    /// Percent captured per percent of surviving-soldiers-to-garrison ratio
    ///
    /// At 0.5, landing twice the garrison's size in survivors takes the
    /// whole planet.
    pub capture_efficiency: f64,

    // === RETREAT ===
    /// Fraction of each unit type lost while withdrawing
    pub retreat_casualty_rate: f64,

    // === CONTAINMENT ===
    /// Additive power multiplier for attacking an adjacent boss
    pub containment_attack_bonus: f64,

    /// Force-cost multiplier when the containment bonus applies
    pub containment_force_cost: f64,

    /// Force-cost multiplier for every other attack
    pub default_force_cost: f64,

    // === BOSS DETECTION ===
    /// Victories as attacker needed to qualify as a boss
    pub boss_min_battles_won: u32,

    /// Networth multiple of the galaxy average needed to qualify as a boss
    pub boss_networth_multiple: f64,

    // === NUCLEAR ===
    /// First turn on which nuclear strikes may be launched
    pub nuclear_unlock_turn: u32,

    /// Credits charged per strike
    pub nuclear_cost: u64,

    /// Turns between two strikes by the same empire
    pub nuclear_cooldown_turns: u32,

    /// Fraction of the target's population killed, detected or not
    pub nuclear_population_damage: f64,

    /// Chance that a strike is traced back to the attacker
    pub nuclear_detection_chance: f64,

    /// Reputation change applied to every launcher
    pub nuclear_reputation_penalty: i32,

    /// Civil status change applied to every launcher
    pub nuclear_civil_status_penalty: i32,

    /// Relation change from every other empire toward the launcher
    pub nuclear_broadcast_relation_penalty: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Phase combat
            defender_advantage: 1.20,
            station_defense_bonus: 2.0,
            diversity_min_unit_types: 4,
            diversity_bonus: 1.15,
            casualty_scale: 1.0,
            carrier_capacity: 100,
            stance_application: StanceApplication::ByRole,

            // Invasion
            capture_min_percent: PLANET_CAPTURE_MIN_PERCENT,
            capture_max_percent: PLANET_CAPTURE_MAX_PERCENT,
            capture_efficiency: 0.5,

            // Retreat
            retreat_casualty_rate: 0.10,

            // Containment (bonus vs default cost)
            containment_attack_bonus: 0.15,
            containment_force_cost: 1.1,
            default_force_cost: 1.2,

            // Boss thresholds
            boss_min_battles_won: 5,
            boss_networth_multiple: 2.0,

            // Nuclear
            nuclear_unlock_turn: 200,
            nuclear_cost: 500_000_000,
            nuclear_cooldown_turns: 10,
            nuclear_population_damage: 0.40,
            nuclear_detection_chance: 0.65,
            nuclear_reputation_penalty: -25,
            nuclear_civil_status_penalty: -2,
            nuclear_broadcast_relation_penalty: -20,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate().map_err(EngineError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.defender_advantage < 1.0 {
            return Err(format!(
                "defender_advantage ({}) must be >= 1.0",
                self.defender_advantage
            ));
        }

        if self.station_defense_bonus <= 0.0 || self.diversity_bonus <= 0.0 {
            return Err("Power multipliers must be positive".into());
        }

        if !(0.0..=1.0).contains(&self.casualty_scale)
            || !(0.0..=1.0).contains(&self.retreat_casualty_rate)
        {
            return Err("Casualty rates must be within [0, 1]".into());
        }

        // Capture bounds should be ordered and within a whole planet
        if self.capture_min_percent < 0.0
            || self.capture_min_percent > self.capture_max_percent
            || self.capture_max_percent > 100.0
        {
            return Err(format!(
                "capture bounds [{}, {}] must satisfy 0 <= min <= max <= 100",
                self.capture_min_percent, self.capture_max_percent
            ));
        }

        if self.containment_attack_bonus < 0.0 {
            return Err("containment_attack_bonus must not be negative".into());
        }

        if self.containment_force_cost > self.default_force_cost {
            return Err(format!(
                "containment_force_cost ({}) should be <= default_force_cost ({})",
                self.containment_force_cost, self.default_force_cost
            ));
        }

        if self.boss_networth_multiple <= 1.0 {
            return Err("boss_networth_multiple must exceed 1.0".into());
        }

        if !(0.0..=1.0).contains(&self.nuclear_population_damage)
            || !(0.0..=1.0).contains(&self.nuclear_detection_chance)
        {
            return Err("Nuclear fractions must be within [0, 1]".into());
        }

        Ok(())
    }

    /// Force-cost multiplier for an attack
    pub fn force_cost_multiplier(&self, containment_applies: bool) -> f64 {
        if containment_applies {
            self.containment_force_cost
        } else {
            self.default_force_cost
        }
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EngineConfig) -> std::result::Result<(), EngineConfig> {
    CONFIG.set(config)
}
