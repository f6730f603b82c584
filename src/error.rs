use thiserror::Error;

/// Top-level error type for feature measurement.
#[derive(Debug, Error)]
pub enum CaliperError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors related to the input geometry or body parameters.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("geometry has no vertices")]
    EmptyGeometry,

    #[error("degenerate hull: {0}")]
    DegenerateHull(String),

    #[error("invalid ellipsoid: a = {a}, b = {b}")]
    InvalidEllipsoid { a: f64, b: f64 },
}

/// Errors raised while moving points between spatial references.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("{reference}: point out of domain: {reason}")]
    OutOfDomain { reference: String, reason: String },

    #[error("{reference}: singular projection: {reason}")]
    Singular { reference: String, reason: String },
}

/// Convenience type alias for results using [`CaliperError`].
pub type Result<T> = std::result::Result<T, CaliperError>;
