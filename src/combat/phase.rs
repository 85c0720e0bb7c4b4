//! Single-phase resolution
//!
//! Strictly greater power wins; equal power means the defender holds.
//! No randomness enters the comparison.

use crate::combat::casualties::{casualty_fractions, ensure_blooded, side_losses};
use crate::combat::power::{calculate_phase_power, SideProfile};
use crate::combat::result::{PhaseResult, Side};
use crate::core::config::EngineConfig;
use crate::military::{CombatPhase, Forces};

/// Resolve one phase between the forces each side brings into it
pub fn resolve_phase(
    phase: CombatPhase,
    attacker: &Forces,
    defender: &Forces,
    attacker_profile: &SideProfile,
    defender_profile: &SideProfile,
    config: &EngineConfig,
) -> PhaseResult {
    let attacker_power = calculate_phase_power(attacker, phase, attacker_profile, config).total;
    let defender_power = calculate_phase_power(defender, phase, defender_profile, config).total;

    let tie = attacker_power == defender_power;
    let winner = if attacker_power > defender_power {
        Side::Attacker
    } else {
        Side::Defender
    };

    let (winner_power, loser_power) = match winner {
        Side::Attacker => (attacker_power, defender_power),
        Side::Defender => (defender_power, attacker_power),
    };
    let (winner_fraction, loser_fraction) =
        casualty_fractions(winner_power, loser_power, config.casualty_scale);

    let (attacker_fraction, defender_fraction) = match winner {
        Side::Attacker => (winner_fraction, loser_fraction),
        Side::Defender => (loser_fraction, winner_fraction),
    };

    let mut attacker_casualties =
        side_losses(attacker, phase, attacker_fraction, attacker_profile.stance);
    let mut defender_casualties =
        side_losses(defender, phase, defender_fraction, defender_profile.stance);

    // A winner that faced real opposition never walks away untouched
    if !tie && attacker_power > 0.0 && defender_power > 0.0 {
        match winner {
            Side::Attacker => {
                attacker_casualties = ensure_blooded(attacker_casualties, attacker, phase)
            }
            Side::Defender => {
                defender_casualties = ensure_blooded(defender_casualties, defender, phase)
            }
        }
    }

    let attacker_after = attacker.saturating_sub(&attacker_casualties);
    let defender_after = defender.saturating_sub(&defender_casualties);

    tracing::debug!(
        "{:?} phase: attacker {:.1} vs defender {:.1} -> {:?}{}",
        phase,
        attacker_power,
        defender_power,
        winner,
        if tie { " (tie)" } else { "" }
    );

    PhaseResult {
        phase,
        attacker_power,
        defender_power,
        winner,
        tie,
        attacker_before: *attacker,
        defender_before: *defender,
        attacker_after,
        defender_after,
        attacker_casualties,
        defender_casualties,
        advances: winner == Side::Attacker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::military::Stance;

    fn balanced_profiles() -> (SideProfile, SideProfile) {
        (
            SideProfile::attacker(Stance::Balanced, 1.0),
            SideProfile::defender(Stance::Balanced),
        )
    }

    #[test]
    fn test_fighter_duel_in_space() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 50, 0, 0, 0, 0),
            &Forces::new(0, 30, 0, 0, 0, 0),
            &att,
            &def,
            &config,
        );

        assert_eq!(result.attacker_power, 150.0);
        assert!((result.defender_power - 108.0).abs() < 1e-9);
        assert_eq!(result.winner, Side::Attacker);
        assert!(result.advances);

        // Loser fraction 108/258 -> floor(30 * 0.4186) = 12
        assert_eq!(result.defender_casualties.fighters, 12);
        // Winner fraction 0.4186 * 0.72 -> floor(50 * 0.3014) = 15
        assert_eq!(result.attacker_casualties.fighters, 15);
        assert_eq!(result.attacker_after.fighters, 35);
        assert_eq!(result.defender_after.fighters, 18);
    }

    #[test]
    fn test_identical_forces_defender_holds() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let fleet = Forces::new(0, 40, 2, 10, 5, 3);
        let result = resolve_phase(CombatPhase::Space, &fleet, &fleet, &att, &def, &config);

        assert_eq!(result.winner, Side::Defender);
        assert!(!result.advances);
    }

    #[test]
    fn test_exact_tie_defender_holds() {
        let mut config = EngineConfig::default();
        config.defender_advantage = 1.0;
        let (att, def) = balanced_profiles();
        let fleet = Forces::new(0, 10, 0, 0, 0, 0);
        let result = resolve_phase(CombatPhase::Space, &fleet, &fleet, &att, &def, &config);

        assert!(result.tie);
        assert_eq!(result.winner, Side::Defender);
        assert!(!result.advances);
        // Symmetric ratio 0.5 for both sides
        assert_eq!(result.attacker_casualties.fighters, 5);
        assert_eq!(result.defender_casualties.fighters, 5);
    }

    #[test]
    fn test_empty_defender_loses_without_attacker_losses() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 5, 0, 0, 0, 0),
            &Forces::default(),
            &att,
            &def,
            &config,
        );

        assert_eq!(result.winner, Side::Attacker);
        assert!(result.attacker_casualties.is_empty());
        assert_eq!(result.defender_power, 0.0);
    }

    #[test]
    fn test_no_eligible_units_on_either_side() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let soldiers = Forces::new(100, 0, 0, 0, 0, 0);
        let result = resolve_phase(CombatPhase::Orbital, &soldiers, &soldiers, &att, &def, &config);

        assert!(result.tie);
        assert_eq!(result.winner, Side::Defender);
        assert!(result.attacker_casualties.is_empty());
        assert!(result.defender_casualties.is_empty());
    }

    #[test]
    fn test_overwhelmed_winner_still_bleeds() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 0, 0, 0, 1000, 0),
            &Forces::new(0, 1, 0, 0, 0, 0),
            &att,
            &def,
            &config,
        );

        assert_eq!(result.winner, Side::Attacker);
        assert_eq!(result.attacker_casualties.heavy_cruisers, 1);
        assert!(result.defender_casualties.fighters <= 1);
    }

    #[test]
    fn test_loser_keeps_formula_losses() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 0, 0, 0, 100, 0),
            &Forces::new(0, 1, 0, 0, 0, 0),
            &att,
            &def,
            &config,
        );

        // 750 vs 3.6: the lone fighter's share floors to zero
        assert_eq!(result.winner, Side::Attacker);
        assert!(result.defender_casualties.is_empty());
        assert_eq!(result.defender_after.fighters, 1);
        assert_eq!(result.attacker_casualties.heavy_cruisers, 1);
    }

    #[test]
    fn test_tie_takes_only_formula_losses() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        // 1 fighter (3.0) vs 1 carrier (5 * 0.5 * 1.2 = 3.0)
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 1, 0, 0, 0, 0),
            &Forces::new(0, 0, 0, 0, 0, 1),
            &att,
            &def,
            &config,
        );

        assert!(result.tie);
        assert_eq!(result.winner, Side::Defender);
        assert!(result.attacker_casualties.is_empty());
        assert!(result.defender_casualties.is_empty());
    }

    #[test]
    fn test_defending_winner_still_bleeds() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let result = resolve_phase(
            CombatPhase::Space,
            &Forces::new(0, 1, 0, 0, 0, 0),
            &Forces::new(0, 0, 0, 0, 100, 0),
            &att,
            &def,
            &config,
        );

        assert_eq!(result.winner, Side::Defender);
        assert_eq!(result.defender_casualties.heavy_cruisers, 1);
    }

    #[test]
    fn test_conservation() {
        let config = EngineConfig::default();
        let (att, def) = balanced_profiles();
        let attacker = Forces::new(300, 80, 0, 20, 10, 5);
        let defender = Forces::new(200, 60, 6, 10, 5, 0);
        let result = resolve_phase(CombatPhase::Orbital, &attacker, &defender, &att, &def, &config);

        assert_eq!(result.attacker_after + result.attacker_casualties, attacker);
        assert_eq!(result.defender_after + result.defender_casualties, defender);
    }
}
