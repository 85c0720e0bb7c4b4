pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, EngineConfig, StanceApplication};
pub use error::{EngineError, Result};
pub use types::{EmpireId, SectorId, Turn};
