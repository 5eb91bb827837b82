use crate::best_customer::BestCustomerSeller;
use crate::customer_retention::CustomerRetention;
use crate::error::StrategyError;
use crate::highest_average_profit::HighestAverageProfit;
use crate::largest_single_sale::LargestSingleSale;
use crate::profit_rank::ProfitRank;
use crate::stable_growth::StableGrowth;
use crate::BonusPolicy;
use configuration::Config;
use core_types::BonusRuleId;

/// Creates a bonus policy from its id and the rule parameters in `config`.
///
/// The match is exhaustive: adding a new `BonusRuleId` without handling it
/// here is a compile error. The returned `BonusPolicy` variant tells the
/// orchestrator which family — and therefore which row ordering — is active.
pub fn create_bonus_policy(id: BonusRuleId, config: &Config) -> Result<BonusPolicy, StrategyError> {
    match id {
        BonusRuleId::BestCustomerSeller => {
            let params = &config.rules.best_customer_seller;
            Ok(BonusPolicy::Aggregate(Box::new(BestCustomerSeller::new(
                params,
            )?)))
        }
        BonusRuleId::CustomerRetention => {
            let params = &config.rules.customer_retention;
            Ok(BonusPolicy::Aggregate(Box::new(CustomerRetention::new(
                params,
            )?)))
        }
        BonusRuleId::LargestSingleSale => {
            let params = &config.rules.largest_single_sale;
            Ok(BonusPolicy::Aggregate(Box::new(LargestSingleSale::new(
                params,
            )?)))
        }
        BonusRuleId::HighestAverageProfit => {
            let params = &config.rules.highest_average_profit;
            Ok(BonusPolicy::Aggregate(Box::new(HighestAverageProfit::new(
                params,
            )?)))
        }
        BonusRuleId::StableGrowth => {
            let params = &config.rules.stable_growth;
            Ok(BonusPolicy::Aggregate(Box::new(StableGrowth::new(params)?)))
        }
        BonusRuleId::ProfitRank => {
            let params = &config.rules.profit_rank;
            Ok(BonusPolicy::Ranked(Box::new(ProfitRank::new(params)?)))
        }
    }
}
