//! Result and Error types for the half-life model helper

/// Type alias for `Result<T, livechart_ml::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `livechart-ml`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Fetching the training data failed
    #[error("failed to fetch training data")]
    Client(#[from] livechart_client::Error),

    /// A required feature or target column is missing from the table
    #[error("column \"{0}\" not found in table")]
    MissingColumn(String),

    /// Too few usable samples left after preprocessing or splitting
    #[error("not enough samples, found {found} but {required} required")]
    InsufficientData { found: usize, required: usize },

    /// Test fraction outside of the open interval (0, 1)
    #[error("test size {0} must be between 0 and 1")]
    InvalidTestSize(f64),

    /// Wrong number of feature values for the model
    #[error("expected {expected} feature values, found {found}")]
    FeatureMismatch { expected: usize, found: usize },

    /// The least squares solve did not produce a solution
    #[error("least squares fit failed: {0}")]
    SingularFit(String),
}
