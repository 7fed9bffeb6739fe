use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid size must be positive")]
    ZeroSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },

    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, GridError>;
