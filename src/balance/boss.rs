//! Boss detection - which empires dominate the galaxy
//!
//! A boss has won at least `boss_min_battles_won` attacks and holds at
//! least `boss_networth_multiple` times the average networth of the
//! empires still in the game.

use serde::{Deserialize, Serialize};

use crate::core::config::{config, EngineConfig};
use crate::core::types::EmpireId;
use crate::empire::{AttackLog, EmpireSnapshot};

/// Boss evaluation for one empire at one moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossStatus {
    pub empire: EmpireId,
    pub battles_won: u32,
    pub networth: u64,
    pub average_networth: f64,
    pub is_boss: bool,
}

impl BossStatus {
    /// Evaluate `empire` against the current galaxy snapshot
    pub fn evaluate(
        empire: &EmpireSnapshot,
        all_empires: &[EmpireSnapshot],
        attack_log: &AttackLog,
        config: &EngineConfig,
    ) -> Self {
        let battles_won = attack_log.battles_won(empire.id);
        let average_networth = calculate_average_networth(all_empires);

        // An empty galaxy has no one to dominate
        let dominates = average_networth > 0.0
            && empire.networth as f64 >= config.boss_networth_multiple * average_networth;

        let is_boss = !empire.eliminated
            && battles_won >= config.boss_min_battles_won
            && dominates;

        Self {
            empire: empire.id,
            battles_won,
            networth: empire.networth,
            average_networth,
            is_boss,
        }
    }

    /// Status for an empire known not to be a boss
    pub fn not_boss(empire: EmpireId) -> Self {
        Self {
            empire,
            battles_won: 0,
            networth: 0,
            average_networth: 0.0,
            is_boss: false,
        }
    }
}

/// Mean networth of the empires that are still in the game
pub fn calculate_average_networth(empires: &[EmpireSnapshot]) -> f64 {
    let (total, count) = empires
        .iter()
        .filter(|e| e.is_active())
        .fold((0u128, 0u64), |(total, count), e| {
            (total + e.networth as u128, count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    total as f64 / count as f64
}

/// Boss check against the global config
pub fn is_boss_qualified(
    empire: &EmpireSnapshot,
    all_empires: &[EmpireSnapshot],
    attack_log: &AttackLog,
) -> bool {
    BossStatus::evaluate(empire, all_empires, attack_log, config()).is_boss
}

/// Every empire currently qualifying as a boss
pub fn find_bosses(
    all_empires: &[EmpireSnapshot],
    attack_log: &AttackLog,
    config: &EngineConfig,
) -> Vec<EmpireId> {
    let bosses: Vec<EmpireId> = all_empires
        .iter()
        .map(|e| BossStatus::evaluate(e, all_empires, attack_log, config))
        .filter(|status| status.is_boss)
        .map(|status| status.empire)
        .collect();

    if !bosses.is_empty() {
        tracing::debug!("Boss empires this evaluation: {:?}", bosses);
    }

    bosses
}
