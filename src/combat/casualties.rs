//! Phase casualties
//!
//! With winner power W and loser power L, the loser loses
//! `scale × (1 − W/(W+L))` of each participating unit type and the winner
//! loses that fraction scaled down by L/W. Counts are floored per type,
//! then scaled by the side's own stance casualty multiplier.

use crate::military::{can_participate, CombatPhase, CombatUnitType, Forces, Stance};

/// Loss fractions for (winner, loser)
///
/// A side facing zero power takes nothing, which also covers the
/// all-zero tie.
pub fn casualty_fractions(winner_power: f64, loser_power: f64, scale: f64) -> (f64, f64) {
    if winner_power <= 0.0 || loser_power <= 0.0 {
        return (0.0, 0.0);
    }

    let ratio = 1.0 - winner_power / (winner_power + loser_power);
    let loser = (scale * ratio).clamp(0.0, 1.0);
    let winner = (loser * (loser_power / winner_power)).clamp(0.0, 1.0);

    (winner, loser)
}

/// Losses for one side at `fraction` of each participating unit type
pub fn side_losses(forces: &Forces, phase: CombatPhase, fraction: f64, stance: Stance) -> Forces {
    let mut losses = Forces::default();
    if fraction <= 0.0 {
        return losses;
    }

    for unit in CombatUnitType::ALL {
        if !can_participate(unit, phase) {
            continue;
        }
        let count = forces.get(unit);
        let base = (count as f64 * fraction).floor() as u64;
        losses.set(unit, stance.scale_losses(base).min(count));
    }

    losses
}

/// Guarantee a winner at least one loss when it fought non-zero opposition
///
/// The unit is taken from the most numerous participating type.
pub fn ensure_blooded(losses: Forces, forces: &Forces, phase: CombatPhase) -> Forces {
    if !losses.is_empty() {
        return losses;
    }

    let largest = forces
        .present_types()
        .filter(|&unit| can_participate(unit, phase))
        .max_by_key(|&unit| forces.get(unit));

    match largest {
        Some(unit) => losses.with(unit, 1),
        None => losses,
    }
}
