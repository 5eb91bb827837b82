use crate::context::BonusContext;
use crate::error::StrategyError;
use crate::AggregateBonusRule;
use analytics::util::{mean, round_money};
use analytics::{analyze_sequence, group_by, AnalyticsError};
use configuration::StableGrowthParams;
use core_types::BonusAward;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Rewards the seller whose average per-line-item profit grows steadily month
/// over month.
///
/// Each seller's records are bucketed by calendar month; the monthly series
/// of average line profits is classified by the trend analyzer, and only a
/// series that is both stable and increasing makes the seller eligible. Among
/// eligible sellers the highest overall monthly average wins. No eligible
/// seller is a valid outcome, not an error.
pub struct StableGrowth {
    tolerance: f64,
    bonus_pct: Decimal,
}

impl StableGrowth {
    pub fn new(params: &StableGrowthParams) -> Result<Self, StrategyError> {
        if params.tolerance < 0.0 {
            return Err(StrategyError::InvalidParameters(
                "stable_growth.tolerance must be non-negative".to_string(),
            ));
        }
        if params.bonus_pct < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(
                "stable_growth.bonus_pct must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            tolerance: params.tolerance,
            bonus_pct: params.bonus_pct,
        })
    }
}

impl AggregateBonusRule for StableGrowth {
    fn category(&self) -> &'static str {
        "Stable Growth"
    }

    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError> {
        let mut winner: Option<(&String, Decimal)> = None;

        for (seller_id, records) in ctx.records_by_seller.iter() {
            // Bucket by month, then order chronologically. The %Y-%m key
            // sorts lexicographically in date order.
            let by_month = group_by(records.iter().copied(), |r| r.month_key());
            let mut buckets: Vec<_> = by_month.iter().collect();
            buckets.sort_by(|a, b| a.0.cmp(b.0));

            let mut monthly_averages = Vec::with_capacity(buckets.len());
            for (_, bucket) in buckets {
                let mut line_profits = Vec::new();
                for record in bucket {
                    for item in &record.items {
                        let product = ctx.products.resolve(&item.sku)?;
                        line_profits.push(ctx.revenue_model.line_value(item, product));
                    }
                }
                monthly_averages.push(mean(&line_profits));
            }

            let series: Vec<f64> = monthly_averages
                .iter()
                .map(|avg| {
                    avg.to_f64().ok_or_else(|| {
                        AnalyticsError::Calculation(format!(
                            "monthly average {avg} not representable as f64"
                        ))
                    })
                })
                .collect::<Result<_, _>>()?;

            let trend = analyze_sequence(&series, self.tolerance);
            tracing::trace!(%seller_id, ?trend, months = series.len(), "monthly profit trend");
            if !(trend.is_stable && trend.is_increasing) {
                continue;
            }

            let overall_average = mean(&monthly_averages);
            let beats = match winner {
                None => true,
                Some((_, best)) => overall_average > best,
            };
            if beats {
                winner = Some((seller_id, overall_average));
            }
        }

        Ok(winner.map(|(seller_id, average)| BonusAward {
            seller_id: seller_id.clone(),
            category: self.category().to_string(),
            bonus: round_money(average * self.bonus_pct),
        }))
    }
}
