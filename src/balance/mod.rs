//! Military balance - boss detection and the containment bonus
//!
//! Both are recomputed from a snapshot on every call. Nothing here is
//! cached, since boss status can change from one turn to the next.

pub mod boss;
pub mod containment;

pub use boss::{calculate_average_networth, find_bosses, is_boss_qualified, BossStatus};
pub use containment::{containment_bonus, ContainmentContext, SectorAdjacency, SectorGraph};
