use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::util::round_money;
use configuration::LargestSingleSaleParams;
use core_types::{BonusAward, PurchaseRecord};
use rust_decimal::Decimal;

/// Rewards the seller who closed the single largest receipt in the dataset.
/// The award is a fraction of that receipt's recorded total.
pub struct LargestSingleSale {
    bonus_pct: Decimal,
}

impl LargestSingleSale {
    pub fn new(params: &LargestSingleSaleParams) -> Result<Self, StrategyError> {
        if params.bonus_pct < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(
                "largest_single_sale.bonus_pct must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            bonus_pct: params.bonus_pct,
        })
    }
}

impl AggregateBonusRule for LargestSingleSale {
    fn category(&self) -> &'static str {
        "Largest Single Sale"
    }

    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError> {
        // The maximum-total receipt across every seller's records. Strict
        // comparison keeps the first encountered on ties.
        let mut largest: Option<&PurchaseRecord> = None;
        for records in ctx.records_by_seller.values() {
            for &record in records {
                let beats = match largest {
                    None => true,
                    Some(max) => record.total_amount > max.total_amount,
                };
                if beats {
                    largest = Some(record);
                }
            }
        }

        Ok(largest.map(|record| BonusAward {
            seller_id: record.seller_id.clone(),
            category: self.category().to_string(),
            bonus: round_money(record.total_amount * self.bonus_pct),
        }))
    }
}
