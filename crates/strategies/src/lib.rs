//! # Meridian Bonus Rule Library
//!
//! This crate contains the pluggable bonus rules of the Meridian reporting
//! system. It defines the two rule-family traits and provides one concrete
//! implementation per rule.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It knows nothing about
//!   loaders or report assembly. It depends only on `core-types`, `analytics`,
//!   and `configuration`.
//! - **Rule-Agnostic Orchestrator:** The orchestrator holds a `BonusPolicy`
//!   and never learns which concrete rule is inside. The two families have
//!   incompatible input shapes (aggregate context vs. profit rank), so the
//!   policy enum makes the shape explicit at construction time instead of at
//!   call time.
//! - **No silent winners:** an aggregate rule that finds no eligible seller
//!   returns `Ok(None)` — a valid outcome, distinct from an error.
//!
//! ## Public API
//!
//! - `AggregateBonusRule` / `RankedBonusRule`: the two family traits.
//! - `BonusPolicy`: the tagged pair of boxed rule families.
//! - `BonusContext`: everything an aggregate rule may consult.
//! - `create_bonus_policy`: the factory that constructs a rule from its id.

// Declare all the modules that constitute this crate.
pub mod best_customer;
pub mod context;
pub mod customer_retention;
pub mod error;
pub mod factory;
pub mod highest_average_profit;
pub mod largest_single_sale;
pub mod profit_rank;
pub mod stable_growth;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the key components to create a clean, public-facing API.
pub use best_customer::BestCustomerSeller;
pub use context::BonusContext;
pub use customer_retention::CustomerRetention;
pub use error::StrategyError;
pub use factory::create_bonus_policy;
pub use highest_average_profit::HighestAverageProfit;
pub use largest_single_sale::LargestSingleSale;
pub use profit_rank::ProfitRank;
pub use stable_growth::StableGrowth;

use core_types::{BonusAward, OrderingMode};
use rust_decimal::Decimal;

/// A bonus rule that consumes the full aggregation context and selects at
/// most one winning seller.
///
/// The `Send + Sync` bounds allow policies to be shared across threads if a
/// caller ever evaluates several datasets in parallel.
pub trait AggregateBonusRule: Send + Sync {
    /// The display label carried on awards this rule produces.
    fn category(&self) -> &'static str;

    /// Evaluates the rule against one aggregated dataset.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(award))` — a winner was selected.
    /// * `Ok(None)` — no seller is eligible; the report falls back to a zero
    ///   bonus for everyone.
    /// * `Err(StrategyError)` — the context is unusable (e.g. no customers).
    fn evaluate(&self, ctx: &BonusContext<'_>) -> Result<Option<BonusAward>, StrategyError>;
}

/// A bonus rule that scores each seller purely from their position after
/// sorting all sellers by descending profit.
pub trait RankedBonusRule: Send + Sync {
    fn category(&self) -> &'static str;

    /// The bonus for the seller at `rank` (0 = most profitable) in a field of
    /// `field_size` sellers, given that seller's accumulated profit.
    fn bonus_for_rank(&self, rank: usize, field_size: usize, profit: Decimal) -> Decimal;
}

/// The tagged strategy handed to the orchestrator. The variant decides both
/// how bonuses are computed and how report rows are ordered.
pub enum BonusPolicy {
    Aggregate(Box<dyn AggregateBonusRule>),
    Ranked(Box<dyn RankedBonusRule>),
}

impl std::fmt::Debug for BonusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BonusPolicy::Aggregate(rule) => {
                f.debug_tuple("Aggregate").field(&rule.category()).finish()
            }
            BonusPolicy::Ranked(rule) => {
                f.debug_tuple("Ranked").field(&rule.category()).finish()
            }
        }
    }
}

impl BonusPolicy {
    /// The row ordering this policy implies: aggregate rules preserve dataset
    /// input order, ranked rules order by descending profit.
    pub fn ordering_mode(&self) -> OrderingMode {
        match self {
            BonusPolicy::Aggregate(_) => OrderingMode::InputOrder,
            BonusPolicy::Ranked(_) => OrderingMode::ProfitRank,
        }
    }
}
