use log::debug;

use crate::util::error::IntegratorError;
use crate::util::math::vectors::Vector3D;

use super::imu_sensor_traits::{CombinedGyroscopeAccelerometer, ImuSample};
use super::integrator::Integrator;

/// One published window of gyro and accelerometer integrals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialDeltas {
    pub timestamp_us: u64,
    pub delta_angle: Vector3D,
    pub delta_velocity: Vector3D,
    pub integral_dt_us: u64,
}

/// Gyro integrator with coning compensation next to an accelerometer
/// integrator without it. Both see the same timestamps, so their windows
/// always close together.
#[derive(Debug)]
pub struct InertialDeltaIntegrator {
    gyro: Integrator,
    accel: Integrator,
}

impl InertialDeltaIntegrator {
    pub fn new(auto_reset_interval_us: u64) -> Result<Self, IntegratorError> {
        let gyro = Integrator::new(auto_reset_interval_us, true)?;
        let accel = Integrator::new(auto_reset_interval_us, false)?;
        debug!(
            "Inertial delta integrator publishing every {} us",
            auto_reset_interval_us
        );

        Ok(InertialDeltaIntegrator { gyro, accel })
    }

    pub fn put(&mut self, sample: ImuSample) -> Result<Option<InertialDeltas>, IntegratorError> {
        // A rejected reading must leave both channels untouched
        self.gyro.check_sample(sample.timestamp_us, &sample.rotation_rate)?;
        self.accel.check_sample(sample.timestamp_us, &sample.acceleration)?;

        let gyro_report = self.gyro.put(sample.timestamp_us, sample.rotation_rate)?;
        let accel_report = self.accel.put(sample.timestamp_us, sample.acceleration)?;

        match (gyro_report, accel_report) {
            (Some(angle), Some(velocity)) => Ok(Some(InertialDeltas {
                timestamp_us: sample.timestamp_us,
                delta_angle: angle.integral,
                delta_velocity: velocity.integral,
                integral_dt_us: angle.elapsed_us,
            })),
            _ => Ok(None),
        }
    }

    pub fn poll<S>(&mut self, source: &mut S) -> Result<Option<InertialDeltas>, IntegratorError>
    where
        S: CombinedGyroscopeAccelerometer,
    {
        match source.get_combined_gyro_accel_output() {
            Some(sample) => self.put(sample),
            None => Ok(None),
        }
    }

    pub fn read_delta_angle(&mut self, reset: bool) -> Vector3D {
        self.gyro.read(reset)
    }

    pub fn read_delta_velocity(&mut self, reset: bool) -> Vector3D {
        self.accel.read(reset)
    }

    pub fn current_integral_start(&self) -> u64 {
        self.gyro.current_integral_start()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn sample(timestamp_us: u64, rotation_rate: Vector3D, acceleration: Vector3D) -> ImuSample {
        ImuSample {
            timestamp_us,
            rotation_rate,
            acceleration,
        }
    }

    #[test]
    fn both_channels_publish_together() {
        let mut deltas = InertialDeltaIntegrator::new(4000).unwrap();
        let rate = Vector3D::new(0.0, 0.0, 1.0);
        let gravity = Vector3D::new(0.0, 0.0, -9.81);

        assert_eq!(deltas.put(sample(0, rate, gravity)).unwrap(), None);
        assert_eq!(deltas.put(sample(2_500, rate, gravity)).unwrap(), None);

        let published = deltas.put(sample(5_000, rate, gravity)).unwrap().unwrap();
        assert_eq!(published.timestamp_us, 5_000);
        assert_eq!(published.integral_dt_us, 5_000);
        assert_relative_eq!(published.delta_angle.z, 0.005, epsilon = 1e-7);
        assert_relative_eq!(published.delta_velocity.z, -0.04905, epsilon = 1e-6);
        assert_eq!(deltas.current_integral_start(), 5_000);
    }

    #[test]
    fn bad_acceleration_does_not_advance_gyro() {
        let mut deltas = InertialDeltaIntegrator::new(4000).unwrap();
        let rate = Vector3D::new(1.0, 0.0, 0.0);
        let still = Vector3D::zero();

        deltas.put(sample(0, rate, still)).unwrap();
        let err = deltas
            .put(sample(1_000, rate, Vector3D::new(f32::INFINITY, 0.0, 0.0)))
            .unwrap_err();

        assert_eq!(
            err,
            IntegratorError::NonFiniteSample { timestamp_us: 1_000 }
        );
        assert_eq!(deltas.read_delta_angle(false), Vector3D::zero());
    }

    #[test]
    fn read_channels_drain_independently() {
        let mut deltas = InertialDeltaIntegrator::new(4000).unwrap();
        let rate = Vector3D::new(1.0, 0.0, 0.0);
        let accel = Vector3D::new(2.0, 0.0, 0.0);

        deltas.put(sample(0, rate, accel)).unwrap();
        deltas.put(sample(1_000, rate, accel)).unwrap();

        assert_relative_eq!(deltas.read_delta_angle(true).x, 0.001, epsilon = 1e-7);
        assert_eq!(deltas.read_delta_angle(false), Vector3D::zero());
        assert_relative_eq!(deltas.read_delta_velocity(false).x, 0.002, epsilon = 1e-7);
    }
}
