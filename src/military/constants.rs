//! Military constants - unit base values and capture bounds

// Base combat power per unit, before phase effectiveness
pub const SOLDIER_BASE_POWER: f64 = 1.0;
pub const FIGHTER_BASE_POWER: f64 = 3.0;
pub const STATION_BASE_POWER: f64 = 25.0;
pub const LIGHT_CRUISER_BASE_POWER: f64 = 8.0;
pub const HEAVY_CRUISER_BASE_POWER: f64 = 15.0;
pub const CARRIER_BASE_POWER: f64 = 5.0;

// Credits charged per committed unit, before the force-cost multiplier
pub const SOLDIER_UNIT_COST: u64 = 1;
pub const FIGHTER_UNIT_COST: u64 = 5;
pub const STATION_UNIT_COST: u64 = 60;
pub const LIGHT_CRUISER_UNIT_COST: u64 = 20;
pub const HEAVY_CRUISER_UNIT_COST: u64 = 40;
pub const CARRIER_UNIT_COST: u64 = 25;

// Capture bounds for a successful invasion (percent of the planet)
pub const PLANET_CAPTURE_MIN_PERCENT: f64 = 10.0;
pub const PLANET_CAPTURE_MAX_PERCENT: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_power_ordering() {
        assert!(STATION_BASE_POWER > HEAVY_CRUISER_BASE_POWER);
        assert!(HEAVY_CRUISER_BASE_POWER > LIGHT_CRUISER_BASE_POWER);
        assert!(LIGHT_CRUISER_BASE_POWER > FIGHTER_BASE_POWER);
        assert!(FIGHTER_BASE_POWER > SOLDIER_BASE_POWER);
    }

    #[test]
    fn test_capture_bounds_reasonable() {
        assert!(PLANET_CAPTURE_MIN_PERCENT > 0.0);
        assert!(PLANET_CAPTURE_MIN_PERCENT < PLANET_CAPTURE_MAX_PERCENT);
        assert!(PLANET_CAPTURE_MAX_PERCENT <= 100.0);
    }
}
