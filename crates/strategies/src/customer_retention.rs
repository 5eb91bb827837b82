use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::util::round_money;
use configuration::CustomerRetentionParams;
use core_types::BonusAward;
use rust_decimal::Decimal;

/// Rewards the seller whose single best customer is the largest across all
/// sellers — a proxy for how well a seller retains a high-value relationship.
/// The award is a flat amount, independent of the revenue that selected the
/// winner.
pub struct CustomerRetention {
    fixed_bonus: Decimal,
}

impl CustomerRetention {
    pub fn new(params: &CustomerRetentionParams) -> Result<Self, StrategyError> {
        if params.fixed_bonus < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(
                "customer_retention.fixed_bonus must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            fixed_bonus: params.fixed_bonus,
        })
    }
}

impl AggregateBonusRule for CustomerRetention {
    fn category(&self) -> &'static str {
        "Best Customer Retention"
    }

    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError> {
        // For each seller, the total revenue of their single best customer.
        // Strict comparison across sellers keeps the first encountered on
        // ties; a seller with no customers never participates.
        let mut winner: Option<(&String, Decimal)> = None;
        for (seller_id, seller) in ctx.stats.sellers.iter() {
            let best_customer_revenue = seller
                .customers
                .iter()
                .filter_map(|customer_id| ctx.stats.customers.get(customer_id))
                .map(|customer| customer.revenue)
                .fold(None, |best: Option<Decimal>, revenue| match best {
                    Some(b) if b >= revenue => Some(b),
                    _ => Some(revenue),
                });

            let Some(revenue) = best_customer_revenue else {
                continue;
            };
            let beats = match winner {
                None => true,
                Some((_, best)) => revenue > best,
            };
            if beats {
                winner = Some((seller_id, revenue));
            }
        }

        Ok(winner.map(|(seller_id, _)| BonusAward {
            seller_id: seller_id.clone(),
            category: self.category().to_string(),
            bonus: round_money(self.fixed_bonus),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{evaluate, item, product, record};
    use core_types::RevenueModel;
    use rust_decimal_macros::dec;

    fn rule() -> CustomerRetention {
        CustomerRetention::new(&CustomerRetentionParams {
            fixed_bonus: dec!(1000),
        })
        .unwrap()
    }

    #[test]
    fn awards_the_seller_with_the_largest_single_customer() {
        let products = vec![product("A", dec!(1))];
        // s1's best customer is worth 80; s2's best customer c3 is worth 120.
        let records = vec![
            record("s1", "c1", vec![item("A", dec!(80), 1)]),
            record("s1", "c2", vec![item("A", dec!(40), 1)]),
            record("s2", "c3", vec![item("A", dec!(120), 1)]),
        ];

        let award = evaluate(&rule(), RevenueModel::NetProfit, &products, &records)
            .unwrap()
            .unwrap();
        assert_eq!(award.seller_id, "s2");
        assert_eq!(award.category, "Best Customer Retention");
        assert_eq!(award.bonus, dec!(1000));
    }

    #[test]
    fn ties_go_to_the_first_encountered_seller() {
        let products = vec![product("A", dec!(1))];
        let records = vec![
            record("s1", "c1", vec![item("A", dec!(100), 1)]),
            record("s2", "c2", vec![item("A", dec!(100), 1)]),
        ];

        let award = evaluate(&rule(), RevenueModel::NetProfit, &products, &records)
            .unwrap()
            .unwrap();
        assert_eq!(award.seller_id, "s1");
    }

    #[test]
    fn no_sellers_means_no_winner() {
        let products = vec![product("A", dec!(1))];
        let outcome = evaluate(&rule(), RevenueModel::NetProfit, &products, &[]).unwrap();
        assert!(outcome.is_none());
    }
}
