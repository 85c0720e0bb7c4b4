//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game turn counter (simulation time unit)
pub type Turn = u32;

/// Unique identifier for empires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmpireId(pub u32);

impl EmpireId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmpireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "empire#{}", self.0)
    }
}

/// Unique identifier for galaxy sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectorId(pub u32);

impl SectorId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
