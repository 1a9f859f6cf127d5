use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegratorError {
    #[error("auto reset interval must be greater than zero")]
    ZeroResetInterval,

    #[error("timestamp went backwards: last sample at {last_us} us, got {current_us} us")]
    TimestampRegression { last_us: u64, current_us: u64 },

    #[error("sample at {timestamp_us} us contains a non finite value")]
    NonFiniteSample { timestamp_us: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regression_message_carries_both_timestamps() {
        let err = IntegratorError::TimestampRegression {
            last_us: 5_000,
            current_us: 1_000,
        };
        let msg = format!("{err}");
        assert!(msg.contains("5000"));
        assert!(msg.contains("1000"));
    }

    #[test]
    fn non_finite_message_carries_timestamp() {
        let msg = IntegratorError::NonFiniteSample { timestamp_us: 42 }.to_string();
        assert!(msg.contains("42"));
    }
}
