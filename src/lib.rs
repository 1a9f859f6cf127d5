//! Resettable vector integration of timestamped sensor samples.
//!
//! [`Integrator`] turns rotation rates or accelerations into delta angles or
//! delta velocities with the trapezoidal rule, optionally applying coning
//! compensation, and drains its integral on a fixed publish interval.
//! [`InertialDeltaIntegrator`] pairs a gyro and an accelerometer integrator
//! the way an IMU driver publishes them.

pub mod config;
pub mod control;
pub mod util;

pub use control::imu_sensor_traits::{CombinedGyroscopeAccelerometer, ImuSample};
pub use control::inertial_deltas::{InertialDeltaIntegrator, InertialDeltas};
pub use control::integrator::{AutoResetCallback, IntegralReport, Integrator};
pub use util::error::IntegratorError;
pub use util::math::vectors::Vector3D;
