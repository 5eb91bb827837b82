use analytics::TopProduct;
use core_types::OrderingMode;
use rust_decimal::Decimal;
use serde::Serialize;

/// One assembled report row. Revenue, profit, and bonus are rounded to
/// exactly 2 decimal places here and nowhere earlier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub bonus: Decimal,
    pub sale_count: usize,
    /// The seller's best-selling SKUs, descending by units sold, capped by
    /// the configured top-N.
    pub top_products: Vec<TopProduct>,
}

/// The final per-seller performance report.
///
/// `ordering` states how the rows are sequenced — dataset input order for the
/// aggregate rule family, descending-profit rank for the ranked family — so
/// consumers never have to infer it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub ordering: OrderingMode,
    pub rows: Vec<SellerReport>,
}
