use thiserror::Error;

/// The one way a split can fail: a caller broke a precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Invalid argument: n must be positive, got {value}")]
    NonPositive { value: i64 },

    #[error("Invalid argument: sequence must not be absent")]
    Absent,

    #[error("Invalid argument: sequence must not be empty")]
    Empty,
}
