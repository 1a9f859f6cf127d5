use core::fmt;

use log::{debug, trace, warn};

use crate::config::constants::{
    CONING_CORRECTION_GAIN, CONING_PREVIOUS_DELTA_WEIGHT, DEFAULT_AUTO_RESET_INTERVAL_US,
    DEFAULT_CONING_COMPENSATION, TRAPEZOID_WEIGHT,
};
use crate::util::error::IntegratorError;
use crate::util::math::vectors::Vector3D;
use crate::util::time::{elapsed_micros, micros_to_seconds};

/// Called with `(timestamp_us, integral)` right before the auto integral is cleared.
pub type AutoResetCallback = Box<dyn FnMut(u64, Vector3D) + Send>;

/// The integral drained by an auto reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralReport {
    pub integral: Vector3D,
    pub elapsed_us: u64,
}

/// Resettable trapezoidal integrator.
///
/// Keeps two running sums of the same per step contributions. The auto integral
/// is drained by `put` once more than `auto_reset_interval_us` has elapsed since
/// the last drain; the read integral is drained only when the owner asks for it
/// through `read(true)`.
pub struct Integrator {
    auto_reset_interval_us: u64,
    last_integration_us: Option<u64>,
    last_auto_us: u64,
    integral_auto: Vector3D,
    integral_read: Vector3D,
    last_value: Vector3D,
    last_delta: Vector3D,
    auto_reset_callback: Option<AutoResetCallback>,
    coning_compensation: bool,
}

impl Integrator {
    pub fn new(
        auto_reset_interval_us: u64,
        coning_compensation: bool,
    ) -> Result<Self, IntegratorError> {
        if auto_reset_interval_us == 0 {
            return Err(IntegratorError::ZeroResetInterval);
        }

        debug!(
            "Integrator created, auto reset after {} us, coning compensation {}",
            auto_reset_interval_us, coning_compensation
        );

        Ok(Integrator {
            auto_reset_interval_us,
            last_integration_us: None,
            last_auto_us: 0,
            integral_auto: Vector3D::zero(),
            integral_read: Vector3D::zero(),
            last_value: Vector3D::zero(),
            last_delta: Vector3D::zero(),
            auto_reset_callback: None,
            coning_compensation,
        })
    }

    pub fn with_auto_reset_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u64, Vector3D) + Send + 'static,
    {
        self.set_auto_reset_callback(callback);
        self
    }

    pub fn set_auto_reset_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u64, Vector3D) + Send + 'static,
    {
        self.auto_reset_callback = Some(Box::new(callback));
    }

    pub fn clear_auto_reset_callback(&mut self) {
        self.auto_reset_callback = None;
    }

    /// Checks whether `put(timestamp_us, value)` would accept the sample, without touching any state.
    pub fn check_sample(
        &self,
        timestamp_us: u64,
        value: &Vector3D,
    ) -> Result<(), IntegratorError> {
        if !value.is_finite() {
            warn!("Rejected non finite sample at {} us", timestamp_us);
            return Err(IntegratorError::NonFiniteSample { timestamp_us });
        }

        match self.last_integration_us {
            Some(last_us) if elapsed_micros(last_us, timestamp_us).is_none() => {
                warn!(
                    "Rejected sample at {} us, last sample was at {} us",
                    timestamp_us, last_us
                );
                Err(IntegratorError::TimestampRegression {
                    last_us,
                    current_us: timestamp_us,
                })
            }
            _ => Ok(()),
        }
    }

    /// Put a sample into the integral.
    ///
    /// Returns `Some` with the drained auto integral when this sample closed the
    /// current window, `None` otherwise. The first sample only sets the
    /// baseline for the trapezoid and never integrates. A rejected sample leaves
    /// the integrator untouched.
    pub fn put(
        &mut self,
        timestamp_us: u64,
        value: Vector3D,
    ) -> Result<Option<IntegralReport>, IntegratorError> {
        self.check_sample(timestamp_us, &value)?;

        let Some(last_integration_us) = self.last_integration_us else {
            self.last_integration_us = Some(timestamp_us);
            self.last_auto_us = timestamp_us;
            self.last_value = value;
            return Ok(None);
        };

        let dt = micros_to_seconds(timestamp_us - last_integration_us) as f32;
        let mut delta = (value + self.last_value) * (dt * TRAPEZOID_WEIGHT);

        if self.coning_compensation {
            // Both terms are taken before this step is accumulated
            let coning = (self.integral_auto + self.last_delta * CONING_PREVIOUS_DELTA_WEIGHT)
                .cross(&delta)
                * CONING_CORRECTION_GAIN;
            delta += coning;
        }

        self.integral_auto += delta;
        self.integral_read += delta;

        self.last_integration_us = Some(timestamp_us);
        self.last_value = value;
        self.last_delta = delta;

        let elapsed_us = timestamp_us - self.last_auto_us;
        if elapsed_us <= self.auto_reset_interval_us {
            return Ok(None);
        }

        let integral = self.integral_auto;
        if let Some(callback) = self.auto_reset_callback.as_mut() {
            callback(timestamp_us, integral);
        }

        trace!(
            "Auto reset at {} us after {} us: {:?} (magnitude {})",
            timestamp_us,
            elapsed_us,
            integral,
            integral.magnitude()
        );

        self.last_auto_us = timestamp_us;
        self.integral_auto = Vector3D::zero();

        Ok(Some(IntegralReport {
            integral,
            elapsed_us,
        }))
    }

    /// The integral since the last auto reset.
    pub fn get(&self) -> Vector3D {
        self.integral_auto
    }

    /// The integral since the last read reset, cleared afterwards when `reset` is set.
    pub fn read(&mut self, reset: bool) -> Vector3D {
        let value = self.integral_read;
        if reset {
            self.integral_read = Vector3D::zero();
        }
        value
    }

    /// Timestamp at which the current auto window started, 0 before the first sample.
    pub fn current_integral_start(&self) -> u64 {
        self.last_auto_us
    }

    pub fn is_initialized(&self) -> bool {
        self.last_integration_us.is_some()
    }

    pub fn auto_reset_interval_us(&self) -> u64 {
        self.auto_reset_interval_us
    }

    pub fn coning_compensation(&self) -> bool {
        self.coning_compensation
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator {
            auto_reset_interval_us: DEFAULT_AUTO_RESET_INTERVAL_US,
            last_integration_us: None,
            last_auto_us: 0,
            integral_auto: Vector3D::zero(),
            integral_read: Vector3D::zero(),
            last_value: Vector3D::zero(),
            last_delta: Vector3D::zero(),
            auto_reset_callback: None,
            coning_compensation: DEFAULT_CONING_COMPENSATION,
        }
    }
}

impl fmt::Debug for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integrator")
            .field("auto_reset_interval_us", &self.auto_reset_interval_us)
            .field("last_integration_us", &self.last_integration_us)
            .field("last_auto_us", &self.last_auto_us)
            .field("integral_auto", &self.integral_auto)
            .field("integral_read", &self.integral_read)
            .field("coning_compensation", &self.coning_compensation)
            .field("has_auto_reset_callback", &self.auto_reset_callback.is_some())
            .finish()
    }
}
