use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum HError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The front must contain at least one point")]
    EmptyFront,
    #[error("The size of the {0} ({1}) does not match the number of objectives ({2})")]
    ShapeMismatch(String, usize, usize),
    #[error("The number of points to remove ({0}) must be between 1 and the front size ({1})")]
    InvalidRank(usize, usize),
    #[error("NaN detected in the objective values of point #{0}")]
    NaN(usize),
    #[error("An error occurred in the calculation of the '{0}' metric: {1}")]
    Metric(String, String),
    #[error("An error occurred in the selector operator '{0}': {1}")]
    SelectorOperator(String, String),
    #[error("Cannot load the configuration: {0}")]
    Config(String),
}
