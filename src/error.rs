use thiserror::Error;

/// Top-level error type for the archline curve engine.
#[derive(Debug, Error)]
pub enum ArchlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl ArchlineError {
    /// Returns `true` if the construction itself has no unique solution
    /// (coincident points, zero vectors, parallel construction lines).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }

    /// Returns `true` if a shape parameter was rejected before construction.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("vector has non-finite components")]
    NonFinite,

    #[error("construction lines are parallel")]
    Parallel,
}

/// Errors related to shape parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("tension {tension} is below the minimum viable tension {min}")]
    TensionTooLow { tension: f64, min: f64 },

    #[error("{count} samples requested, at least {min} are required")]
    TooFewSamples { count: usize, min: usize },

    #[error("{count} samples requested, at most {max} are allowed")]
    TooManySamples { count: usize, max: usize },

    #[error("unsupported center count {0}, expected 3 or 7")]
    UnsupportedCenterCount(u8),
}

/// Errors related to reading or writing curve settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Convenience type alias for results using [`ArchlineError`].
pub type Result<T> = std::result::Result<T, ArchlineError>;
