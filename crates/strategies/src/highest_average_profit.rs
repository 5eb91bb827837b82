use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::util::round_money;
use configuration::HighestAverageProfitParams;
use core_types::BonusAward;
use rust_decimal::Decimal;

/// Rewards the seller with the highest average profit per line item. The
/// award is a fraction of that average.
pub struct HighestAverageProfit {
    bonus_pct: Decimal,
}

impl HighestAverageProfit {
    pub fn new(params: &HighestAverageProfitParams) -> Result<Self, StrategyError> {
        if params.bonus_pct < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(
                "highest_average_profit.bonus_pct must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            bonus_pct: params.bonus_pct,
        })
    }
}

impl AggregateBonusRule for HighestAverageProfit {
    fn category(&self) -> &'static str {
        "Highest Average Profit"
    }

    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError> {
        // `average_profit` floors its divisor at 1, so an item-less seller
        // scores zero instead of dividing by zero. Strict comparison keeps
        // the first encountered on ties.
        let mut winner: Option<(&String, Decimal)> = None;
        for (seller_id, seller) in ctx.stats.sellers.iter() {
            let average = seller.average_profit();
            let beats = match winner {
                None => true,
                Some((_, best)) => average > best,
            };
            if beats {
                winner = Some((seller_id, average));
            }
        }

        Ok(winner.map(|(seller_id, average)| BonusAward {
            seller_id: seller_id.clone(),
            category: self.category().to_string(),
            bonus: round_money(average * self.bonus_pct),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{evaluate, item, product, record};
    use core_types::RevenueModel;
    use rust_decimal_macros::dec;

    fn rule() -> HighestAverageProfit {
        HighestAverageProfit::new(&HighestAverageProfitParams {
            bonus_pct: dec!(0.10),
        })
        .unwrap()
    }

    #[test]
    fn awards_ten_percent_of_the_best_per_item_average() {
        let products = vec![product("A", dec!(10))];
        // s1 averages (40 + 10) / 2 = 25 profit per item; s2 averages 40.
        let records = vec![
            record(
                "s1",
                "c1",
                vec![item("A", dec!(50), 1), item("A", dec!(20), 1)],
            ),
            record("s2", "c2", vec![item("A", dec!(50), 1)]),
        ];

        let award = evaluate(&rule(), RevenueModel::NetProfit, &products, &records)
            .unwrap()
            .unwrap();
        assert_eq!(award.seller_id, "s2");
        assert_eq!(award.category, "Highest Average Profit");
        assert_eq!(award.bonus, dec!(4.00));
    }
}
