use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::{group_by, AggregationEngine, ProductIndex};
use chrono::NaiveDate;
use core_types::{BonusAward, LineItem, Product, PurchaseRecord, RevenueModel};
use rust_decimal::Decimal;

pub(crate) fn product(sku: &str, purchase_price: Decimal) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
    }
}

pub(crate) fn item(sku: &str, sale_price: Decimal, quantity: u32) -> LineItem {
    LineItem {
        sku: sku.to_string(),
        sale_price,
        quantity,
        discount_percent: Decimal::ZERO,
    }
}

pub(crate) fn record_on(
    seller: &str,
    customer: &str,
    date: &str,
    items: Vec<LineItem>,
) -> PurchaseRecord {
    let total_amount = items.iter().map(RevenueModel::gross).sum();
    PurchaseRecord {
        seller_id: seller.to_string(),
        customer_id: customer.to_string(),
        date: date.parse::<NaiveDate>().unwrap(),
        total_amount,
        items,
    }
}

pub(crate) fn record(seller: &str, customer: &str, items: Vec<LineItem>) -> PurchaseRecord {
    record_on(seller, customer, "2024-03-05", items)
}

/// Aggregates `records`, builds the full context, and evaluates `rule`
/// against it, the same way the report orchestrator would.
pub(crate) fn evaluate(
    rule: &dyn AggregateBonusRule,
    revenue_model: RevenueModel,
    products: &[Product],
    records: &[PurchaseRecord],
) -> Result<Option<BonusAward>, StrategyError> {
    let index = ProductIndex::build(products);
    let stats = AggregationEngine::new(revenue_model).aggregate(records, &index)?;
    let records_by_seller = group_by(records.iter(), |r| r.seller_id.clone());
    let records_by_customer = group_by(records.iter(), |r| r.customer_id.clone());
    let items_by_sku = group_by(records.iter().flat_map(|r| r.items.iter()), |i| i.sku.clone());

    let ctx = BonusContext {
        stats: &stats,
        records_by_seller: &records_by_seller,
        records_by_customer: &records_by_customer,
        items_by_sku: &items_by_sku,
        sellers: &[],
        customers: &[],
        products: &index,
        revenue_model,
    };
    rule.evaluate(&ctx)
}
