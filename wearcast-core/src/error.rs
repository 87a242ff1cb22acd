use thiserror::Error;

/// Errors from the temperature analyzer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The caller supplied zero hourly samples. Not recoverable here; the
    /// caller should surface a "no forecast data" state.
    #[error("no hourly forecast samples were supplied")]
    EmptyInput,
}

/// Errors from the recommendation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// An internal lookup key was missing from the clothing catalog. This is
    /// a catalog/code mismatch, not a user error, and should not be retried.
    #[error("clothing item not found in catalog: {0}")]
    UnknownCatalogItem(String),
}
