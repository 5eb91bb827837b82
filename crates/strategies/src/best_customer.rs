use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::util::round_money;
use configuration::BestCustomerSellerParams;
use core_types::BonusAward;
use rust_decimal::Decimal;

/// Rewards the seller who attracted the dataset's best customer.
///
/// The best customer is the one with the highest aggregated revenue; the
/// winner is then the highest-revenue seller among those who served that
/// customer. The award is a fraction of the best customer's revenue, not the
/// seller's own.
pub struct BestCustomerSeller {
    bonus_pct: Decimal,
}

impl BestCustomerSeller {
    pub fn new(params: &BestCustomerSellerParams) -> Result<Self, StrategyError> {
        if params.bonus_pct < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(
                "best_customer_seller.bonus_pct must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            bonus_pct: params.bonus_pct,
        })
    }
}

impl AggregateBonusRule for BestCustomerSeller {
    fn category(&self) -> &'static str {
        "Best Customer Seller"
    }

    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError> {
        // Highest-revenue customer; strict comparison keeps the first
        // encountered on ties.
        let mut best_customer = None;
        for (id, customer) in ctx.stats.customers.iter() {
            let beats = match best_customer {
                None => true,
                Some((_, revenue)) => customer.revenue > revenue,
            };
            if beats {
                best_customer = Some((id, customer.revenue));
            }
        }
        let (customer_id, customer_revenue) =
            best_customer.ok_or(StrategyError::NoEligibleCustomer)?;
        let customer = ctx
            .stats
            .customers
            .get(customer_id)
            .ok_or(StrategyError::NoEligibleCustomer)?;

        // Highest-revenue seller among those who served the best customer.
        // Walking the ordered seller map (rather than the membership set)
        // keeps the selection deterministic.
        let mut winner = None;
        for (seller_id, seller) in ctx.stats.sellers.iter() {
            if !customer.sellers.contains(seller_id) {
                continue;
            }
            let beats = match winner {
                None => true,
                Some((_, revenue)) => seller.revenue > revenue,
            };
            if beats {
                winner = Some((seller_id, seller.revenue));
            }
        }
        let (seller_id, _) = winner
            .ok_or_else(|| StrategyError::NoEligibleSeller(customer_id.clone()))?;

        tracing::debug!(%seller_id, %customer_id, "best-customer-seller winner");

        Ok(Some(BonusAward {
            seller_id: seller_id.clone(),
            category: self.category().to_string(),
            bonus: round_money(customer_revenue * self.bonus_pct),
        }))
    }
}
