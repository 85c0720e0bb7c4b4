//! Empire Conflict - combat resolution for turn-based empire simulations
//!
//! Three-phase invasions, guerilla raids, retreats, boss containment and
//! nuclear strikes. The engine is a pure function over snapshots; callers
//! own persistence and apply the returned deltas themselves.

pub mod balance;
pub mod combat;
pub mod core;
pub mod empire;
pub mod military;
pub mod nuclear;

pub use crate::combat::{AttackOrder, CombatEngine, CombatResult};
pub use crate::core::{EngineConfig, EngineError, Result};
