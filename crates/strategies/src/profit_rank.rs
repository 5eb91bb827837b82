use crate::error::StrategyError;
use crate::RankedBonusRule;
use analytics::util::round_money;
use configuration::ProfitRankParams;
use rust_decimal::Decimal;

/// The rank-position bonus family: every seller receives a bonus computed
/// purely from their position after sorting all sellers by descending profit.
///
/// Tier order matters: rank 0 takes the top percentage even in a field of
/// one, ranks 1–2 take the runner-up percentage even when one of them is
/// last, and otherwise the last rank receives nothing.
pub struct ProfitRank {
    top_pct: Decimal,
    runner_up_pct: Decimal,
    default_pct: Decimal,
}

impl ProfitRank {
    pub fn new(params: &ProfitRankParams) -> Result<Self, StrategyError> {
        for (name, pct) in [
            ("top_pct", params.top_pct),
            ("runner_up_pct", params.runner_up_pct),
            ("default_pct", params.default_pct),
        ] {
            if pct < Decimal::ZERO {
                return Err(StrategyError::InvalidParameters(format!(
                    "profit_rank.{name} must be non-negative"
                )));
            }
        }
        Ok(Self {
            top_pct: params.top_pct,
            runner_up_pct: params.runner_up_pct,
            default_pct: params.default_pct,
        })
    }
}

impl RankedBonusRule for ProfitRank {
    fn category(&self) -> &'static str {
        "Profit Rank"
    }

    fn bonus_for_rank(&self, rank: usize, field_size: usize, profit: Decimal) -> Decimal {
        let pct = if rank == 0 {
            self.top_pct
        } else if rank <= 2 {
            self.runner_up_pct
        } else if rank + 1 == field_size {
            Decimal::ZERO
        } else {
            self.default_pct
        };
        round_money(profit * pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rule() -> ProfitRank {
        ProfitRank::new(&ProfitRankParams {
            top_pct: dec!(0.15),
            runner_up_pct: dec!(0.10),
            default_pct: dec!(0.05),
        })
        .unwrap()
    }

    #[test]
    fn tiers_follow_rank_position() {
        let rule = rule();
        let profit = dec!(1000);
        assert_eq!(rule.bonus_for_rank(0, 6, profit), dec!(150));
        assert_eq!(rule.bonus_for_rank(1, 6, profit), dec!(100));
        assert_eq!(rule.bonus_for_rank(2, 6, profit), dec!(100));
        assert_eq!(rule.bonus_for_rank(3, 6, profit), dec!(50));
        assert_eq!(rule.bonus_for_rank(5, 6, profit), Decimal::ZERO);
    }

    #[test]
    fn sole_seller_takes_the_top_tier() {
        assert_eq!(rule().bonus_for_rank(0, 1, dec!(200)), dec!(30));
    }

    #[test]
    fn third_place_outranks_the_zero_tier_in_a_field_of_three() {
        // Rank 2 is both a runner-up and last; the runner-up tier wins.
        assert_eq!(rule().bonus_for_rank(2, 3, dec!(100)), dec!(10));
    }
}
