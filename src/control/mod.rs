pub mod imu_sensor_traits;
pub mod inertial_deltas;
pub mod integrator;
