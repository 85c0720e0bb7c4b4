//! Read-only empire state handed to the engine by the persistence layer

pub mod attack_log;
pub mod snapshot;

pub use attack_log::{AttackLog, AttackRecord};
pub use snapshot::EmpireSnapshot;
