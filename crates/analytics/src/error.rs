use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// A line item references a SKU absent from the product table. This is a
    /// data-integrity failure: continuing would silently corrupt every total
    /// downstream, so aggregation stops immediately.
    #[error("Line item references unknown SKU '{0}'")]
    UnknownSku(String),

    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}
