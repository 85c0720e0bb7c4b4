//! Invasion and capture
//!
//! Only reached when the attacker wins the Ground phase. The resolver emits
//! the captured percentage; splitting ownership is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;

/// Result of a won Ground phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    pub capture_percent: f64,
    /// Share the defender keeps as a contested holding
    pub contested_remainder: f64,
    pub landed_survivors: u64,
    pub garrison: u64,
}

/// Capture percent from surviving landed soldiers versus the pre-battle garrison
pub fn resolve_capture(
    landed_survivors: u64,
    garrison: u64,
    config: &EngineConfig,
) -> CaptureOutcome {
    let raw = if garrison == 0 {
        config.capture_max_percent
    } else {
        landed_survivors as f64 / garrison as f64 * 100.0 * config.capture_efficiency
    };

    let capture_percent = raw.clamp(config.capture_min_percent, config.capture_max_percent);

    CaptureOutcome {
        capture_percent,
        contested_remainder: 100.0 - capture_percent,
        landed_survivors,
        garrison,
    }
}
