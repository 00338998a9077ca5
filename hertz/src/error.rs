use thiserror::Error;

#[derive(Error, Debug, PartialEq, Copy, Clone)]
/// An error produced by a checked conversion.
pub enum FrequencyError {
    /// The count overflowed while being scaled.
    #[error("Count overflowed while scaling by {num}/{den}")]
    Overflow {
        /// Numerator of the scale.
        num: u128,
        /// Denominator of the scale.
        den: u128,
    },
    /// The scaled count is out of range of the target storage type.
    #[error("Scaled count is not representable in the target type")]
    NotRepresentable,
    /// A floating point count is NaN or infinite.
    #[error("Count is not finite")]
    NotFinite,
    /// A negative count was converted into a duration.
    #[error("Negative count cannot be converted into a duration")]
    NegativeDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(
        "Count overflowed while scaling by 1000/1",
        FrequencyError::Overflow { num: 1000, den: 1 }
    )]
    #[case(
        "Scaled count is not representable in the target type",
        FrequencyError::NotRepresentable
    )]
    #[case("Count is not finite", FrequencyError::NotFinite)]
    #[case(
        "Negative count cannot be converted into a duration",
        FrequencyError::NegativeDuration
    )]
    fn display(#[case] expected: &str, #[case] err: FrequencyError) {
        assert_eq!(expected, err.to_string());
    }
}
