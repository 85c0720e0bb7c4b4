//! Multi-phase combat resolution
//!
//! Space → Orbital → Ground, each phase gating the next. Guerilla raids
//! and retreats share the same power and casualty primitives.

pub mod casualties;
pub mod engine;
pub mod invasion;
pub mod phase;
pub mod power;
pub mod result;
pub mod retreat;

pub use casualties::{casualty_fractions, ensure_blooded, side_losses};
pub use engine::{AttackOrder, CombatEngine};
pub use invasion::{resolve_capture, CaptureOutcome};
pub use phase::resolve_phase;
pub use power::{calculate_phase_power, has_participants, PhasePower, SideProfile};
pub use result::{AttackType, CombatResult, EngagementOutcome, PhaseResult, Side};
pub use retreat::{apply_retreat, resolve_guerilla, retreat_losses, RetreatPlan};
