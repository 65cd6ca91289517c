use thiserror::Error;

/// Failures surfaced while building a session or reading control values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetronomeError {
    #[error("surface size must be finite and positive, got {0}")]
    InvalidSurfaceSize(f64),
    #[error("could not parse {field} from {value:?}")]
    InvalidControlValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MetronomeError>;
