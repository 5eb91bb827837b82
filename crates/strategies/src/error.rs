use analytics::AnalyticsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Bonus rule received invalid parameters: {0}")]
    InvalidParameters(String),

    /// The Best-Customer-Seller rule was evaluated against statistics with no
    /// customers at all. The original behavior here was an unguarded crash;
    /// it is an explicit error instead.
    #[error("No customers present in the aggregated statistics")]
    NoEligibleCustomer,

    /// The selected best customer has an empty seller set, so no winner can
    /// be derived from them.
    #[error("Best customer '{0}' has no recorded sellers")]
    NoEligibleSeller(String),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}
