//! Containment bonus - the anti-snowball edge against neighbouring bosses

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::balance::boss::BossStatus;
use crate::core::config::EngineConfig;
use crate::core::types::SectorId;
use crate::empire::EmpireSnapshot;

/// Sector neighbourhood, owned by the galaxy map
pub trait SectorAdjacency {
    fn are_adjacent(&self, a: SectorId, b: SectorId) -> bool;
}

/// Undirected sector graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectorGraph {
    links: AHashMap<SectorId, AHashSet<SectorId>>,
}

impl SectorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of undirected links
    pub fn from_links(links: &[(SectorId, SectorId)]) -> Self {
        let mut graph = Self::new();
        for &(a, b) in links {
            graph.add_link(a, b);
        }
        graph
    }

    pub fn add_link(&mut self, a: SectorId, b: SectorId) {
        self.links.entry(a).or_default().insert(b);
        self.links.entry(b).or_default().insert(a);
    }

    pub fn neighbors(&self, sector: SectorId) -> impl Iterator<Item = SectorId> + '_ {
        self.links.get(&sector).into_iter().flatten().copied()
    }
}

impl SectorAdjacency for SectorGraph {
    fn are_adjacent(&self, a: SectorId, b: SectorId) -> bool {
        a == b || self.links.get(&a).is_some_and(|n| n.contains(&b))
    }
}

/// Containment eligibility for one attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainmentContext {
    pub is_adjacent_to_boss: bool,
    /// Additive power multiplier (0.15 when eligible)
    pub attack_bonus: f64,
    pub force_cost_multiplier: f64,
}

impl ContainmentContext {
    /// Context for an ordinary attack
    pub fn none(config: &EngineConfig) -> Self {
        Self {
            is_adjacent_to_boss: false,
            attack_bonus: 0.0,
            force_cost_multiplier: config.force_cost_multiplier(false),
        }
    }

    /// Context for an attack on an adjacent boss
    pub fn eligible(config: &EngineConfig) -> Self {
        Self {
            is_adjacent_to_boss: true,
            attack_bonus: config.containment_attack_bonus,
            force_cost_multiplier: config.force_cost_multiplier(true),
        }
    }

    /// Factor applied to the attacker's power in every phase
    pub fn power_multiplier(&self) -> f64 {
        1.0 + self.attack_bonus
    }
}

/// Decide whether `attacker` gets the containment bonus against `defender`
///
/// `defender_status` must be freshly evaluated for this turn.
pub fn containment_bonus(
    attacker: &EmpireSnapshot,
    defender: &EmpireSnapshot,
    defender_status: &BossStatus,
    adjacency: &impl SectorAdjacency,
    config: &EngineConfig,
) -> ContainmentContext {
    let defender_is_boss = defender_status.empire == defender.id && defender_status.is_boss;
    if !defender_is_boss || attacker.id == defender.id {
        return ContainmentContext::none(config);
    }

    if adjacency.are_adjacent(attacker.sector, defender.sector) {
        tracing::debug!(
            "{} gains containment bonus against boss {}",
            attacker.id,
            defender.id
        );
        ContainmentContext::eligible(config)
    } else {
        ContainmentContext::none(config)
    }
}
