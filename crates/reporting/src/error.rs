use analytics::AnalyticsError;
use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// A required dataset collection is empty. Raised before any aggregation
    /// work begins; the message names the offending field.
    #[error("Dataset validation failed: '{0}' must not be empty")]
    EmptyCollection(&'static str),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
