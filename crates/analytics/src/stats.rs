use crate::grouping::OrderedMap;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// Running totals for one seller. Created empty on the seller's first record,
/// mutated once per line item, read out after the aggregation pass completes.
#[derive(Debug, Clone)]
pub struct SellerStats {
    /// Gross discounted sale value attributed to this seller, full precision.
    pub revenue: Decimal,
    /// Accumulated value under the active revenue model, full precision.
    pub profit: Decimal,
    /// Number of line items this seller sold.
    pub sale_count: usize,
    /// Units sold per SKU, keyed in first-encounter order.
    pub units_by_sku: OrderedMap<String, u64>,
    /// Distinct customers this seller served.
    pub customers: HashSet<String>,
}

impl SellerStats {
    pub(crate) fn new() -> Self {
        Self {
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sale_count: 0,
            units_by_sku: OrderedMap::new(),
            customers: HashSet::new(),
        }
    }

    /// Average profit per line item. The divisor is floored at 1 so a seller
    /// with no items averages to zero instead of dividing by zero.
    pub fn average_profit(&self) -> Decimal {
        self.profit / Decimal::from(self.sale_count.max(1) as u64)
    }

    /// The seller's `n` best-selling SKUs by unit count, descending. Ties keep
    /// first-encounter SKU order because the sort is stable over the ordered
    /// map's iteration.
    pub fn top_products(&self, n: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .units_by_sku
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(n);
        ranked
    }
}

/// Running totals for one customer.
#[derive(Debug, Clone)]
pub struct CustomerStats {
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Distinct sellers who served this customer.
    pub sellers: HashSet<String>,
}

impl CustomerStats {
    pub(crate) fn new() -> Self {
        Self {
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sellers: HashSet::new(),
        }
    }
}

/// Cumulative movement of one SKU across the whole dataset.
#[derive(Debug, Clone)]
pub struct ProductStats {
    pub quantity: u64,
    pub revenue: Decimal,
}

impl ProductStats {
    pub(crate) fn new() -> Self {
        Self {
            quantity: 0,
            revenue: Decimal::ZERO,
        }
    }
}

/// The complete output of one aggregation pass. All three maps iterate in
/// first-encounter order, which is the tie-break order bonus rules use.
#[derive(Debug, Clone)]
pub struct SalesStats {
    pub sellers: OrderedMap<String, SellerStats>,
    pub customers: OrderedMap<String, CustomerStats>,
    pub products: OrderedMap<String, ProductStats>,
}

impl SalesStats {
    pub(crate) fn new() -> Self {
        Self {
            sellers: OrderedMap::new(),
            customers: OrderedMap::new(),
            products: OrderedMap::new(),
        }
    }
}

/// One entry of a seller's top-products ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn average_profit_floors_the_divisor_at_one() {
        let mut stats = SellerStats::new();
        assert_eq!(stats.average_profit(), Decimal::ZERO);

        stats.profit = dec!(30);
        stats.sale_count = 3;
        assert_eq!(stats.average_profit(), dec!(10));
    }

    #[test]
    fn top_products_caps_sorts_and_keeps_first_seen_on_ties() {
        let mut stats = SellerStats::new();
        for (sku, units) in [("A", 3u64), ("B", 7), ("C", 3), ("D", 9)] {
            *stats.units_by_sku.get_or_insert_with(sku.to_string(), || 0) += units;
        }

        let top = stats.top_products(3);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        // D and B lead; A ties with C at 3 units but was seen first.
        assert_eq!(skus, vec!["D", "B", "A"]);
    }

    #[test]
    fn fifteen_skus_yield_exactly_ten_entries() {
        let mut stats = SellerStats::new();
        for i in 0..15u64 {
            *stats
                .units_by_sku
                .get_or_insert_with(format!("SKU-{i}"), || 0) += i + 1;
        }

        let top = stats.top_products(10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        assert_eq!(top[0].quantity, 15);
    }
}
