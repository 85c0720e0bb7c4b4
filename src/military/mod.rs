//! Military data - forces, unit constants, effectiveness and stances
//!
//! Fixed tables only; nothing in here changes after startup.

pub mod constants;
pub mod effectiveness;
pub mod forces;
pub mod stance;

pub use effectiveness::{
    can_participate, contribution, effectiveness, primary_phase, CombatPhase, EffectivenessLevel,
};
pub use forces::{CombatUnitType, Forces};
pub use stance::{Stance, StanceModifiers};
