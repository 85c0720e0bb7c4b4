//! Forces - the six unit counts an empire commits to a battle

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::military::constants::*;

/// Unit types that take part in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatUnitType {
    Soldiers,
    Fighters,
    Stations,
    LightCruisers,
    HeavyCruisers,
    Carriers,
}

impl CombatUnitType {
    /// Every unit type, in `Forces` field order
    pub const ALL: [CombatUnitType; 6] = [
        CombatUnitType::Soldiers,
        CombatUnitType::Fighters,
        CombatUnitType::Stations,
        CombatUnitType::LightCruisers,
        CombatUnitType::HeavyCruisers,
        CombatUnitType::Carriers,
    ];

    /// Position in `ALL`, used to index fixed tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn base_power(self) -> f64 {
        match self {
            CombatUnitType::Soldiers => SOLDIER_BASE_POWER,
            CombatUnitType::Fighters => FIGHTER_BASE_POWER,
            CombatUnitType::Stations => STATION_BASE_POWER,
            CombatUnitType::LightCruisers => LIGHT_CRUISER_BASE_POWER,
            CombatUnitType::HeavyCruisers => HEAVY_CRUISER_BASE_POWER,
            CombatUnitType::Carriers => CARRIER_BASE_POWER,
        }
    }

    pub fn unit_cost(self) -> u64 {
        match self {
            CombatUnitType::Soldiers => SOLDIER_UNIT_COST,
            CombatUnitType::Fighters => FIGHTER_UNIT_COST,
            CombatUnitType::Stations => STATION_UNIT_COST,
            CombatUnitType::LightCruisers => LIGHT_CRUISER_UNIT_COST,
            CombatUnitType::HeavyCruisers => HEAVY_CRUISER_UNIT_COST,
            CombatUnitType::Carriers => CARRIER_UNIT_COST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CombatUnitType::Soldiers => "soldiers",
            CombatUnitType::Fighters => "fighters",
            CombatUnitType::Stations => "stations",
            CombatUnitType::LightCruisers => "light cruisers",
            CombatUnitType::HeavyCruisers => "heavy cruisers",
            CombatUnitType::Carriers => "carriers",
        }
    }
}

/// Unit counts committed by one side
///
/// Value data: resolution never mutates a caller's record, it returns
/// new `Forces` describing survivors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Forces {
    pub soldiers: u64,
    pub fighters: u64,
    pub stations: u64,
    pub light_cruisers: u64,
    pub heavy_cruisers: u64,
    pub carriers: u64,
}

impl Forces {
    pub fn new(
        soldiers: u64,
        fighters: u64,
        stations: u64,
        light_cruisers: u64,
        heavy_cruisers: u64,
        carriers: u64,
    ) -> Self {
        Self {
            soldiers,
            fighters,
            stations,
            light_cruisers,
            heavy_cruisers,
            carriers,
        }
    }

    /// Build from signed counts as stored by the persistence layer
    ///
    /// Negative counts are a caller defect and are rejected, never clamped.
    pub fn try_from_counts(counts: [i64; 6]) -> Result<Self> {
        let mut forces = Forces::default();
        for (unit, count) in CombatUnitType::ALL.into_iter().zip(counts) {
            let count = u64::try_from(count).map_err(|_| {
                EngineError::InvalidInput(format!("negative {} count: {}", unit.name(), count))
            })?;
            forces.set(unit, count);
        }
        Ok(forces)
    }

    pub fn get(&self, unit: CombatUnitType) -> u64 {
        match unit {
            CombatUnitType::Soldiers => self.soldiers,
            CombatUnitType::Fighters => self.fighters,
            CombatUnitType::Stations => self.stations,
            CombatUnitType::LightCruisers => self.light_cruisers,
            CombatUnitType::HeavyCruisers => self.heavy_cruisers,
            CombatUnitType::Carriers => self.carriers,
        }
    }

    pub fn set(&mut self, unit: CombatUnitType, count: u64) {
        let slot = match unit {
            CombatUnitType::Soldiers => &mut self.soldiers,
            CombatUnitType::Fighters => &mut self.fighters,
            CombatUnitType::Stations => &mut self.stations,
            CombatUnitType::LightCruisers => &mut self.light_cruisers,
            CombatUnitType::HeavyCruisers => &mut self.heavy_cruisers,
            CombatUnitType::Carriers => &mut self.carriers,
        };
        *slot = count;
    }

    /// Copy with one count replaced
    pub fn with(mut self, unit: CombatUnitType, count: u64) -> Self {
        self.set(unit, count);
        self
    }

    pub fn total_units(&self) -> u64 {
        CombatUnitType::ALL.iter().map(|&u| self.get(u)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_units() == 0
    }

    /// Unit types with a non-zero count
    pub fn present_types(&self) -> impl Iterator<Item = CombatUnitType> + '_ {
        CombatUnitType::ALL
            .into_iter()
            .filter(move |&u| self.get(u) > 0)
    }

    /// Per-type subtraction floored at zero
    pub fn saturating_sub(&self, other: &Forces) -> Forces {
        let mut out = Forces::default();
        for unit in CombatUnitType::ALL {
            out.set(unit, self.get(unit).saturating_sub(other.get(unit)));
        }
        out
    }

    /// Whether every count is at most the matching count in `other`
    pub fn fits_within(&self, other: &Forces) -> bool {
        CombatUnitType::ALL
            .iter()
            .all(|&u| self.get(u) <= other.get(u))
    }

    /// Soldiers the carriers can bring down to the surface
    pub fn deliverable_soldiers(&self, carrier_capacity: u64) -> u64 {
        self.soldiers
            .min(self.carriers.saturating_mul(carrier_capacity))
    }

    /// Credits charged for committing these forces
    pub fn commitment_cost(&self, force_cost_multiplier: f64) -> u64 {
        let base: u64 = CombatUnitType::ALL
            .iter()
            .map(|&u| self.get(u).saturating_mul(u.unit_cost()))
            .fold(0u64, u64::saturating_add);
        (base as f64 * force_cost_multiplier).round() as u64
    }
}

impl std::ops::Add for Forces {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = Forces::default();
        for unit in CombatUnitType::ALL {
            out.set(unit, self.get(unit).saturating_add(rhs.get(unit)));
        }
        out
    }
}
