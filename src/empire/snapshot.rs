//! Empire snapshot - the slice of empire state resolution reads

use serde::{Deserialize, Serialize};

use crate::core::types::{EmpireId, SectorId, Turn};

/// An empire as seen by the engine at the start of a resolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmpireSnapshot {
    pub id: EmpireId,
    pub name: String,
    /// Home sector, used for containment adjacency
    pub sector: SectorId,
    pub networth: u64,
    pub population: u64,
    pub credits: u64,
    pub eliminated: bool,
    /// Turn of this empire's most recent nuclear launch
    pub last_nuclear_strike: Option<Turn>,
}

impl EmpireSnapshot {
    pub fn new(id: EmpireId, name: impl Into<String>, sector: SectorId) -> Self {
        Self {
            id,
            name: name.into(),
            sector,
            networth: 0,
            population: 0,
            credits: 0,
            eliminated: false,
            last_nuclear_strike: None,
        }
    }

    pub fn with_networth(mut self, networth: u64) -> Self {
        self.networth = networth;
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_credits(mut self, credits: u64) -> Self {
        self.credits = credits;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let empire = EmpireSnapshot::new(EmpireId(1), "Vega Concord", SectorId(4))
            .with_networth(1_000)
            .with_population(50_000);

        assert_eq!(empire.networth, 1_000);
        assert_eq!(empire.population, 50_000);
        assert_eq!(empire.credits, 0);
        assert!(empire.is_active());
        assert!(empire.last_nuclear_strike.is_none());
    }

    #[test]
    fn test_persisted_record_extra_columns_ignored() {
        // Diplomacy columns stay with the caller; the engine only reports deltas
        let json = r#"{
            "id": 3,
            "name": "Orion League",
            "sector": 7,
            "networth": 4200,
            "population": 90000,
            "credits": 12,
            "eliminated": false,
            "last_nuclear_strike": 180,
            "reputation": -40,
            "civil_status": 3
        }"#;
        let empire: EmpireSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(empire.id, EmpireId(3));
        assert_eq!(empire.sector, SectorId(7));
        assert_eq!(empire.last_nuclear_strike, Some(180));
        assert!(!serde_json::to_string(&empire).unwrap().contains("reputation"));
    }
}
