pub const US_IN_SECOND: f64 = 1_000_000.0_f64;

pub fn micros_to_seconds(micros: u64) -> f64 {
    micros as f64 / US_IN_SECOND
}

/// `None` when `current` is older than `previous`.
pub fn elapsed_micros(previous: u64, current: u64) -> Option<u64> {
    current.checked_sub(previous)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn converts_micros_to_seconds() {
        assert_relative_eq!(micros_to_seconds(4_000), 0.004);
        assert_relative_eq!(micros_to_seconds(0), 0.0);
    }

    #[test]
    fn elapsed_rejects_regression() {
        assert_eq!(elapsed_micros(1_000, 5_000), Some(4_000));
        assert_eq!(elapsed_micros(5_000, 5_000), Some(0));
        assert_eq!(elapsed_micros(5_000, 1_000), None);
    }
}
