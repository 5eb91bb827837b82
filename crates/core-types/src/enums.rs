use crate::structs::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The pluggable per-line-item valuation used for profit accumulation and
/// ranking. Callers select the variant; the aggregator and bonus rules never
/// hard-code which one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModel {
    /// Discounted sale value only: `sale_price × quantity × (1 − discount/100)`.
    Gross,
    /// Discounted sale value minus acquisition cost:
    /// `gross − purchase_price × quantity`.
    NetProfit,
}

impl RevenueModel {
    /// The discounted sale value of a line item, independent of the model.
    /// This is what seller/customer/product *revenue* always accumulates.
    pub fn gross(item: &LineItem) -> Decimal {
        let discount_multiplier = Decimal::ONE - item.discount_percent / dec!(100);
        item.sale_price * Decimal::from(item.quantity) * discount_multiplier
    }

    /// The value of a line item under this model. This is what *profit*
    /// accumulates and what rank-sensitive rules score by.
    pub fn line_value(&self, item: &LineItem, product: &Product) -> Decimal {
        let gross = Self::gross(item);
        match self {
            RevenueModel::Gross => gross,
            RevenueModel::NetProfit => {
                gross - product.purchase_price * Decimal::from(item.quantity)
            }
        }
    }
}

/// Identifies which bonus rule the factory should construct.
///
/// The first five select rules from the aggregate-context family; `ProfitRank`
/// selects the rank-position family. The compiler forces the factory to
/// handle every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusRuleId {
    BestCustomerSeller,
    CustomerRetention,
    LargestSingleSale,
    HighestAverageProfit,
    StableGrowth,
    ProfitRank,
}

/// The row ordering of an assembled report. Aggregate-family rules preserve
/// dataset input order; the ranked family orders by descending profit. The
/// report carries this explicitly so consumers never have to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    InputOrder,
    ProfitRank,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sale_price: Decimal, quantity: u32, discount_percent: Decimal) -> LineItem {
        LineItem {
            sku: "SKU-1".to_string(),
            sale_price,
            quantity,
            discount_percent,
        }
    }

    fn product(purchase_price: Decimal) -> Product {
        Product {
            sku: "SKU-1".to_string(),
            purchase_price,
        }
    }

    #[test]
    fn gross_applies_discount_multiplicatively() {
        let it = item(dec!(100), 2, dec!(25));
        assert_eq!(RevenueModel::gross(&it), dec!(150));
    }

    #[test]
    fn net_profit_subtracts_acquisition_cost() {
        let it = item(dec!(20), 2, Decimal::ZERO);
        let p = product(dec!(10));
        assert_eq!(RevenueModel::Gross.line_value(&it, &p), dec!(40));
        assert_eq!(RevenueModel::NetProfit.line_value(&it, &p), dec!(20));
    }

    #[test]
    fn full_discount_zeroes_the_line() {
        let it = item(dec!(99.99), 3, dec!(100));
        assert_eq!(RevenueModel::gross(&it), Decimal::ZERO);
    }
}
