use analytics::{OrderedMap, ProductIndex, SalesStats};
use core_types::{Customer, LineItem, PurchaseRecord, RevenueModel, Seller};

/// Everything an aggregate bonus rule may consult: the accumulated statistics,
/// the ordered groupings of the raw records, the raw tables, and the active
/// revenue model.
///
/// Built once per report run by the orchestrator and shared read-only across
/// whichever rules execute. All groupings iterate in first-encounter order,
/// which is the tie-break order the rules rely on.
pub struct BonusContext<'a> {
    pub stats: &'a SalesStats,
    pub records_by_seller: &'a OrderedMap<String, Vec<&'a PurchaseRecord>>,
    pub records_by_customer: &'a OrderedMap<String, Vec<&'a PurchaseRecord>>,
    pub items_by_sku: &'a OrderedMap<String, Vec<&'a LineItem>>,
    pub sellers: &'a [Seller],
    pub customers: &'a [Customer],
    pub products: &'a ProductIndex<'a>,
    pub revenue_model: RevenueModel,
}
