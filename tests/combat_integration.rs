//! Combat engine integration tests
//!
//! End-to-end invasions, raids and retreats through `CombatEngine`.

use empire_conflict::balance::ContainmentContext;
use empire_conflict::combat::{
    AttackOrder, AttackType, CombatEngine, EngagementOutcome, RetreatPlan, Side,
};
use empire_conflict::core::{EmpireId, EngineConfig, EngineError};
use empire_conflict::military::{CombatPhase, Forces, Stance};

fn engine() -> CombatEngine {
    CombatEngine::new(EngineConfig::default())
}

fn none() -> ContainmentContext {
    ContainmentContext::none(&EngineConfig::default())
}

fn fighters(count: u64) -> Forces {
    Forces::new(0, count, 0, 0, 0, 0)
}

/// 50 fighters attack 30 fighters, both Balanced
#[test]
fn test_fighter_skirmish_example() {
    let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(50), fighters(30));
    let result = engine().resolve_attack(&order, &none()).unwrap();

    let space = result.phase(CombatPhase::Space).unwrap();
    assert_eq!(space.attacker_power, 150.0);
    assert!((space.defender_power - 108.0).abs() < 1e-9);
    assert_eq!(space.winner, Side::Attacker);

    // Orbital is fought with what survived Space
    let orbital = result.phase(CombatPhase::Orbital).unwrap();
    assert_eq!(orbital.attacker_before.fighters, 35);
    assert_eq!(orbital.defender_before.fighters, 18);

    // No soldiers, no Ground
    assert!(!result.ground_reached());
    assert!(result.capture_percent.is_none());
}

#[test]
fn test_phases_run_in_order_and_gate() {
    let order = AttackOrder::invasion(
        EmpireId(1),
        EmpireId(2),
        Forces::new(3_000, 300, 0, 40, 30, 30),
        Forces::new(800, 50, 2, 5, 2, 0),
    );
    let result = engine().resolve_attack(&order, &none()).unwrap();

    for (i, phase) in result.phases.iter().enumerate() {
        assert_eq!(phase.phase, CombatPhase::ALL[i]);
        // Every phase before the last one must have advanced
        if i + 1 < result.phases.len() {
            assert!(phase.advances);
        }
    }
    assert_eq!(result.phases.len(), 3);
    assert!(result.ground_reached());
}

#[test]
fn test_missing_carriers_skip_ground() {
    let order = AttackOrder::invasion(
        EmpireId(1),
        EmpireId(2),
        Forces::new(1_000, 100, 0, 20, 0, 0),
        fighters(10),
    );
    let result = engine().resolve_attack(&order, &none()).unwrap();

    assert_eq!(result.phases.len(), 2);
    assert_eq!(result.outcome, EngagementOutcome::Completed);
    assert!(!result.ground_reached());
    assert!(result.capture_percent.is_none());
    assert_eq!(result.attacker_survivors.soldiers, 1_000);
}

#[test]
fn test_engagement_conserves_units() {
    let attacker = Forces::new(2_500, 180, 0, 25, 15, 12);
    let defender = Forces::new(900, 60, 3, 8, 4, 0);
    let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), attacker, defender)
        .with_stances(Stance::Aggressive, Stance::Defensive);
    let result = engine().resolve_attack(&order, &none()).unwrap();

    assert_eq!(result.attacker_survivors + result.attacker_casualties, attacker);
    assert_eq!(result.defender_survivors + result.defender_casualties, defender);

    for phase in &result.phases {
        assert_eq!(phase.attacker_after + phase.attacker_casualties, phase.attacker_before);
        assert_eq!(phase.defender_after + phase.defender_casualties, phase.defender_before);
    }
}

#[test]
fn test_mirror_match_defender_holds_every_stance() {
    let fleet = Forces::new(400, 60, 2, 10, 6, 4);
    for stance in Stance::ALL {
        let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), fleet, fleet)
            .with_stances(stance, stance);
        let result = engine().resolve_attack(&order, &none()).unwrap();

        assert_eq!(result.winner, Side::Defender, "{:?}", stance);
        assert_eq!(
            result.outcome,
            EngagementOutcome::Halted { phase: CombatPhase::Space }
        );
    }
}

#[test]
fn test_attacker_retreat_after_space() {
    let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(50), fighters(30))
        .with_retreat(RetreatPlan::new(Side::Attacker, CombatPhase::Space));
    let result = engine().resolve_attack(&order, &none()).unwrap();

    assert_eq!(result.phases.len(), 1);
    assert_eq!(result.winner, Side::Defender);
    assert!(result.capture_percent.is_none());

    // 35 left Space; 10% of them are lost on the way out
    assert_eq!(result.retreat_casualties.unwrap().fighters, 3);
    assert_eq!(result.attacker_survivors.fighters, 32);
    assert_eq!(result.defender_survivors.fighters, 18);
}

#[test]
fn test_defender_retreat_hands_attacker_the_win() {
    let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(50), fighters(30))
        .with_retreat(RetreatPlan::new(Side::Defender, CombatPhase::Space));
    let result = engine().resolve_attack(&order, &none()).unwrap();

    assert_eq!(
        result.outcome,
        EngagementOutcome::Retreated { side: Side::Defender, after: CombatPhase::Space }
    );
    assert!(result.attacker_won());
    assert!(result.capture_percent.is_none());
    assert_eq!(result.defender_survivors.fighters, 17);
    assert_eq!(result.attacker_survivors.fighters, 35);
}

#[test]
fn test_retreat_ignored_when_engagement_already_halted() {
    let order = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(10), fighters(100))
        .with_retreat(RetreatPlan::new(Side::Attacker, CombatPhase::Space));
    let result = engine().resolve_attack(&order, &none()).unwrap();

    assert_eq!(
        result.outcome,
        EngagementOutcome::Halted { phase: CombatPhase::Space }
    );
    assert!(result.retreat_casualties.is_none());
}

#[test]
fn test_space_guerilla_raid() {
    let order = AttackOrder::guerilla(
        EmpireId(1),
        EmpireId(2),
        CombatPhase::Space,
        fighters(50),
        fighters(30),
    );
    let result = engine().resolve_guerilla(&order, &none()).unwrap();

    assert_eq!(result.phases.len(), 1);
    assert_eq!(result.outcome, EngagementOutcome::Raided { phase: CombatPhase::Space });
    assert_eq!(result.winner, Side::Attacker);
    assert!(result.capture_percent.is_none());
    assert_eq!(result.attacker_survivors.fighters, 35);
}

#[test]
fn test_ground_guerilla_respects_carriers() {
    let order = AttackOrder::guerilla(
        EmpireId(1),
        EmpireId(2),
        CombatPhase::Ground,
        Forces::new(500, 0, 0, 0, 0, 2),
        Forces::new(50, 0, 0, 0, 0, 0),
    );
    let result = engine().resolve_attack(&order, &none()).unwrap();

    let raid = &result.phases[0];
    assert_eq!(raid.attacker_before.soldiers, 200);
    assert!(result.capture_percent.is_none());
    // Stranded soldiers come back untouched
    assert!(result.attacker_survivors.soldiers >= 300);
}

#[test]
fn test_rejected_orders() {
    let orbital_raid = AttackOrder::guerilla(
        EmpireId(1),
        EmpireId(2),
        CombatPhase::Orbital,
        fighters(10),
        fighters(10),
    );
    let err = engine().resolve_attack(&orbital_raid, &none()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let ground_retreat = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(10), fighters(10))
        .with_retreat(RetreatPlan::new(Side::Attacker, CombatPhase::Ground));
    assert!(engine().resolve_attack(&ground_retreat, &none()).is_err());

    let invasion = AttackOrder::invasion(EmpireId(1), EmpireId(2), fighters(10), fighters(10));
    assert!(engine().resolve_guerilla(&invasion, &none()).is_err());

    assert!(Forces::try_from_counts([10, -1, 0, 0, 0, 0]).is_err());
}

#[test]
fn test_guerilla_type_survives_json() {
    let order = AttackOrder::guerilla(
        EmpireId(4),
        EmpireId(9),
        CombatPhase::Ground,
        Forces::new(100, 0, 0, 0, 0, 1),
        Forces::default(),
    );
    let json = serde_json::to_string(&order).unwrap();
    let back: AttackOrder = serde_json::from_str(&json).unwrap();
    assert_eq!(back.attack_type, AttackType::Guerilla(CombatPhase::Ground));
    assert!(back.retreat.is_none());
}
