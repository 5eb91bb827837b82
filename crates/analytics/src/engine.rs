use crate::error::AnalyticsError;
use crate::stats::{CustomerStats, ProductStats, SalesStats, SellerStats};
use core_types::{Product, PurchaseRecord, RevenueModel};
use std::collections::HashMap;

/// O(1) SKU → product resolution over the immutable catalog.
///
/// A SKU the index cannot resolve is a corrupt dataset, so resolution is
/// fallible rather than optional — every caller treats a miss as fatal.
#[derive(Debug)]
pub struct ProductIndex<'a> {
    by_sku: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn build(products: &'a [Product]) -> Self {
        Self {
            by_sku: products.iter().map(|p| (p.sku.as_str(), p)).collect(),
        }
    }

    pub fn resolve(&self, sku: &str) -> Result<&'a Product, AnalyticsError> {
        self.by_sku
            .get(sku)
            .copied()
            .ok_or_else(|| AnalyticsError::UnknownSku(sku.to_string()))
    }
}

/// A stateless calculator that walks every purchase record exactly once and
/// builds the per-seller, per-customer, and per-product running totals.
#[derive(Debug, Clone, Copy)]
pub struct AggregationEngine {
    revenue_model: RevenueModel,
}

impl AggregationEngine {
    pub fn new(revenue_model: RevenueModel) -> Self {
        Self { revenue_model }
    }

    /// Runs the single linear aggregation pass — O(total line items) with
    /// O(1) amortized accumulator lookups.
    ///
    /// Revenue always accumulates the gross discounted sale value; profit
    /// accumulates whatever the injected revenue model computes. Accumulator
    /// entries are created lazily on first sight, and the finished `SalesStats`
    /// is only returned once fully built. No sorting happens here; ranking is
    /// deferred to the bonus rules and the report assembly.
    ///
    /// # Errors
    ///
    /// `AnalyticsError::UnknownSku` if any line item references a SKU missing
    /// from the product index. Nothing partial is returned: downstream totals
    /// computed from a half-processed dataset would be silently wrong.
    pub fn aggregate(
        &self,
        records: &[PurchaseRecord],
        products: &ProductIndex<'_>,
    ) -> Result<SalesStats, AnalyticsError> {
        let mut stats = SalesStats::new();

        for record in records {
            // Accumulators come into existence on the first record that
            // mentions the seller or customer, even if it carries no items.
            stats
                .sellers
                .get_or_insert_with(record.seller_id.clone(), SellerStats::new);
            stats
                .customers
                .get_or_insert_with(record.customer_id.clone(), CustomerStats::new);

            for item in &record.items {
                let product = products.resolve(&item.sku)?;
                let gross = RevenueModel::gross(item);
                let profit = self.revenue_model.line_value(item, product);

                let seller = stats
                    .sellers
                    .get_or_insert_with(record.seller_id.clone(), SellerStats::new);
                seller.revenue += gross;
                seller.profit += profit;
                seller.sale_count += 1;
                seller.customers.insert(record.customer_id.clone());
                *seller
                    .units_by_sku
                    .get_or_insert_with(item.sku.clone(), || 0) += u64::from(item.quantity);

                let customer = stats
                    .customers
                    .get_or_insert_with(record.customer_id.clone(), CustomerStats::new);
                customer.revenue += gross;
                customer.profit += profit;
                customer.sellers.insert(record.seller_id.clone());

                let product_stats = stats
                    .products
                    .get_or_insert_with(item.sku.clone(), ProductStats::new);
                product_stats.quantity += u64::from(item.quantity);
                product_stats.revenue += gross;
            }
        }

        tracing::debug!(
            sellers = stats.sellers.len(),
            customers = stats.customers.len(),
            products = stats.products.len(),
            records = records.len(),
            "aggregation pass complete"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::LineItem;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(sku: &str, purchase_price: Decimal) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
        }
    }

    fn item(sku: &str, sale_price: Decimal, quantity: u32, discount: Decimal) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            sale_price,
            quantity,
            discount_percent: discount,
        }
    }

    fn record(seller: &str, customer: &str, items: Vec<LineItem>) -> PurchaseRecord {
        let total_amount = items.iter().map(RevenueModel::gross).sum();
        PurchaseRecord {
            seller_id: seller.to_string(),
            customer_id: customer.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            total_amount,
            items,
        }
    }

    #[test]
    fn single_record_accumulates_revenue_and_profit() {
        let products = vec![product("SKU-1", dec!(10))];
        let index = ProductIndex::build(&products);
        let records = vec![record(
            "s1",
            "c1",
            vec![item("SKU-1", dec!(20), 2, Decimal::ZERO)],
        )];

        let stats = AggregationEngine::new(RevenueModel::NetProfit)
            .aggregate(&records, &index)
            .unwrap();

        let seller = stats.sellers.get(&"s1".to_string()).unwrap();
        assert_eq!(seller.revenue, dec!(40));
        assert_eq!(seller.profit, dec!(20));
        assert_eq!(seller.sale_count, 1);
        assert!(seller.customers.contains("c1"));

        let customer = stats.customers.get(&"c1".to_string()).unwrap();
        assert_eq!(customer.revenue, dec!(40));
        assert_eq!(customer.profit, dec!(20));
        assert!(customer.sellers.contains("s1"));

        let sku = stats.products.get(&"SKU-1".to_string()).unwrap();
        assert_eq!(sku.quantity, 2);
        assert_eq!(sku.revenue, dec!(40));
    }

    #[test]
    fn seller_and_customer_revenue_totals_always_match() {
        let products = vec![product("A", dec!(5)), product("B", dec!(3))];
        let index = ProductIndex::build(&products);
        let records = vec![
            record("s1", "c1", vec![item("A", dec!(12.50), 3, dec!(10))]),
            record("s2", "c1", vec![item("B", dec!(7.99), 1, Decimal::ZERO)]),
            record("s1", "c2", vec![item("B", dec!(7.99), 4, dec!(25))]),
        ];

        let stats = AggregationEngine::new(RevenueModel::NetProfit)
            .aggregate(&records, &index)
            .unwrap();

        let seller_total: Decimal = stats.sellers.values().map(|s| s.revenue).sum();
        let customer_total: Decimal = stats.customers.values().map(|c| c.revenue).sum();
        assert_eq!(seller_total, customer_total);
    }

    #[test]
    fn unknown_sku_fails_the_whole_pass() {
        let products = vec![product("KNOWN", dec!(1))];
        let index = ProductIndex::build(&products);
        let records = vec![record(
            "s1",
            "c1",
            vec![item("MISSING", dec!(10), 1, Decimal::ZERO)],
        )];

        let err = AggregationEngine::new(RevenueModel::NetProfit)
            .aggregate(&records, &index)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownSku(sku) if sku == "MISSING"));
    }

    #[test]
    fn gross_model_accumulates_revenue_as_profit() {
        let products = vec![product("A", dec!(999))];
        let index = ProductIndex::build(&products);
        let records = vec![record(
            "s1",
            "c1",
            vec![item("A", dec!(10), 1, Decimal::ZERO)],
        )];

        let stats = AggregationEngine::new(RevenueModel::Gross)
            .aggregate(&records, &index)
            .unwrap();
        let seller = stats.sellers.get(&"s1".to_string()).unwrap();
        // Under the gross model the purchase price never enters the pass.
        assert_eq!(seller.profit, seller.revenue);
    }
}
