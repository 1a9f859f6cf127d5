// Publishing
pub const DEFAULT_AUTO_RESET_INTERVAL_US: u64 = 4000; // 250 Hz
pub const DEFAULT_CONING_COMPENSATION: bool = false;

// Coning compensation, Tian et al (2010) Three-loop Integration of GPS and
// Strapdown INS with Coning and Sculling Compensation
pub const CONING_PREVIOUS_DELTA_WEIGHT: f32 = 1.0_f32 / 6.0_f32;
pub const CONING_CORRECTION_GAIN: f32 = 0.5_f32;

// Trapezoidal rule, average of both interval endpoints
pub const TRAPEZOID_WEIGHT: f32 = 0.5_f32;
