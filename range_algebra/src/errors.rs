use crate::boundary::Side;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A boundary value was refused by the range's validator
    #[error("invalid {side} boundary: {reason}")]
    InvalidBoundary { side: Side, reason: String },

    #[error("{left} and {right} do not use compatible orderings")]
    IncompatibleRange { left: String, right: String },

    #[error("malformed range options: {0}")]
    MalformedRangeOptions(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RangeError::InvalidBoundary {
            side: Side::Upper,
            reason: "2.5 is not an integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid upper boundary: 2.5 is not an integer"
        );

        let err = RangeError::IncompatibleRange {
            left: "hours".into(),
            right: "unnamed range".into(),
        };
        assert_eq!(
            err.to_string(),
            "hours and unnamed range do not use compatible orderings"
        );

        let err = RangeError::MalformedRangeOptions("empty name".into());
        assert_eq!(err.to_string(), "malformed range options: empty name");
    }
}
