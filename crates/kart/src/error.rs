use thiserror::Error;

/// Rejected tuning values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("tuning field `{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("tuning field `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}
