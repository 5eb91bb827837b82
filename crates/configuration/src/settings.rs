use core_types::{BonusRuleId, RevenueModel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the reporting pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub report: ReportSettings,
    pub rules: RuleSettings,
}

/// Selects the active strategies and shapes the assembled report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// The valuation injected into the aggregator and the bonus rules.
    pub revenue_model: RevenueModel,
    /// The bonus rule the factory constructs for this run.
    pub bonus_rule: BonusRuleId,
    /// How many top-selling SKUs each report row carries.
    pub top_products: usize,
}

/// Contains the parameter sets for all available bonus rules.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSettings {
    pub best_customer_seller: BestCustomerSellerParams,
    pub customer_retention: CustomerRetentionParams,
    pub largest_single_sale: LargestSingleSaleParams,
    pub highest_average_profit: HighestAverageProfitParams,
    pub stable_growth: StableGrowthParams,
    pub profit_rank: ProfitRankParams,
}

/// Parameters for the Best-Customer-Seller rule.
#[derive(Debug, Clone, Deserialize)]
pub struct BestCustomerSellerParams {
    /// Fraction of the best customer's revenue awarded (0.05 for 5%).
    pub bonus_pct: Decimal,
}

/// Parameters for the Customer-Retention rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRetentionParams {
    /// The flat award, independent of any revenue figure.
    pub fixed_bonus: Decimal,
}

/// Parameters for the Largest-Single-Sale rule.
#[derive(Debug, Clone, Deserialize)]
pub struct LargestSingleSaleParams {
    /// Fraction of the winning receipt's total awarded.
    pub bonus_pct: Decimal,
}

/// Parameters for the Highest-Average-Profit rule.
#[derive(Debug, Clone, Deserialize)]
pub struct HighestAverageProfitParams {
    /// Fraction of the winning average awarded.
    pub bonus_pct: Decimal,
}

/// Parameters for the Stable-Growth rule.
#[derive(Debug, Clone, Deserialize)]
pub struct StableGrowthParams {
    /// Maximum relative month-over-month change for a series to count as
    /// stable (0.05 for 5%).
    pub tolerance: f64,
    /// Fraction of the winning monthly average awarded.
    pub bonus_pct: Decimal,
}

/// Tier percentages for the rank-position bonus family. The last-ranked
/// seller always receives zero.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfitRankParams {
    /// Awarded to rank 0.
    pub top_pct: Decimal,
    /// Awarded to ranks 1 and 2.
    pub runner_up_pct: Decimal,
    /// Awarded to every other rank except the last.
    pub default_pct: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportSettings {
                revenue_model: RevenueModel::NetProfit,
                bonus_rule: BonusRuleId::HighestAverageProfit,
                top_products: 10,
            },
            rules: RuleSettings::default(),
        }
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            best_customer_seller: BestCustomerSellerParams {
                bonus_pct: dec!(0.05),
            },
            customer_retention: CustomerRetentionParams {
                fixed_bonus: dec!(1000),
            },
            largest_single_sale: LargestSingleSaleParams {
                bonus_pct: dec!(0.10),
            },
            highest_average_profit: HighestAverageProfitParams {
                bonus_pct: dec!(0.10),
            },
            stable_growth: StableGrowthParams {
                tolerance: 0.05,
                bonus_pct: dec!(0.15),
            },
            profit_rank: ProfitRankParams {
                top_pct: dec!(0.15),
                runner_up_pct: dec!(0.10),
                default_pct: dec!(0.05),
            },
        }
    }
}
