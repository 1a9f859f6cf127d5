use crate::util::math::vectors::Vector3D;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ImuSample {
    pub timestamp_us: u64,
    pub rotation_rate: Vector3D,
    pub acceleration: Vector3D,
}

/// Anything that hands out timestamped gyro and accelerometer readings together.
/// Bus access and calibration live behind the implementation.
pub trait CombinedGyroscopeAccelerometer {
    /// `None` when no new reading is available.
    fn get_combined_gyro_accel_output(&mut self) -> Option<ImuSample>;
}
