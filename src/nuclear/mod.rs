//! Nuclear strikes - the superweapon resolution path
//!
//! The launch gate is checked by the caller and again by the resolver.
//! Physical damage is fixed; only the diplomatic fallout is rolled.

pub mod gate;
pub mod strike;

pub use gate::{can_launch_nuclear_strike, check_nuclear_gate, GateDenial};
pub use strike::{
    resolve_nuclear_strike, DetectionOutcome, EscalationTier, NuclearStrike, NuclearStrikeOutcome,
    NuclearStrikeRequest, StrikeState,
};
