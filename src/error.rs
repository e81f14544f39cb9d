use thiserror::Error;

/// Top-level error type for the segment engine.
#[derive(Debug, Error)]
pub enum PcsError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to segment construction and validation.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("non-finite segment endpoints ({x1}, {y1}) -> ({x2}, {y2})")]
    NonFinite { x1: f32, y1: f32, x2: f32, y2: f32 },

    #[error("degenerate segment: squared length {length_squared} is within tolerance")]
    Degenerate { length_squared: f32 },
}

/// Convenience type alias for results using [`PcsError`].
pub type Result<T> = std::result::Result<T, PcsError>;
