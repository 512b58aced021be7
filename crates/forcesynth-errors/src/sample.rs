//! Telemetry sample errors.

/// Reasons a telemetry sample is rejected before it reaches the filters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// The host had no sample for this tick
    #[error("Telemetry sample missing")]
    Missing,

    /// A float field is NaN or infinite
    #[error("Telemetry field '{field}' is not finite: {value}")]
    NonFinite {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f32,
    },
}

impl SampleError {
    /// Create a non-finite field error.
    pub fn non_finite(field: &'static str, value: f32) -> Self {
        SampleError::NonFinite { field, value }
    }

    /// Name of the offending field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SampleError::Missing => None,
            SampleError::NonFinite { field, .. } => Some(*field),
        }
    }
}
