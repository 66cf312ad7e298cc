/// Errors produced while collecting and validating patient input.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type ScreeningResult<T> = std::result::Result<T, ScreeningError>;
