//! # Meridian Report Orchestrator
//!
//! This crate wires the analytics engine and the bonus rules into the final
//! per-seller performance report. It is the top layer of the core: validate
//! the dataset shape, run one aggregation pass, evaluate the configured bonus
//! policy, and assemble rounded, ranked report rows.
//!
//! ## Architectural Principles
//!
//! - **Fail fast:** empty dataset collections are rejected by name before any
//!   computation starts. Missing strategies cannot happen at all — a
//!   `Reporter` cannot be constructed without a revenue model and a bonus
//!   policy, which moves the original call-time shape errors to compile time.
//! - **Presentation-time rounding:** every monetary figure stays at full
//!   precision until the row is assembled, so rounding error never compounds
//!   through the aggregation.

pub mod error;
pub mod report;

pub use error::ReportError;
pub use report::{SalesReport, SellerReport};

use analytics::util::round_money;
use analytics::{group_by, AggregationEngine, ProductIndex, SalesStats};
use configuration::Config;
use core_types::{BonusAward, RevenueModel, SalesDataset, Seller};
use rust_decimal::Decimal;
use strategies::{create_bonus_policy, BonusContext, BonusPolicy};

/// The report orchestrator. Construct it once from configuration (or directly
/// from a policy) and run it over any number of datasets.
pub struct Reporter {
    revenue_model: RevenueModel,
    bonus_policy: BonusPolicy,
    top_products: usize,
}

impl Reporter {
    pub fn new(
        revenue_model: RevenueModel,
        bonus_policy: BonusPolicy,
        top_products: usize,
    ) -> Self {
        Self {
            revenue_model,
            bonus_policy,
            top_products,
        }
    }

    /// Builds a reporter from the loaded configuration, constructing the
    /// configured bonus rule through the factory.
    pub fn from_config(config: &Config) -> Result<Self, ReportError> {
        let bonus_policy = create_bonus_policy(config.report.bonus_rule, config)?;
        Ok(Self::new(
            config.report.revenue_model,
            bonus_policy,
            config.report.top_products,
        ))
    }

    /// Runs the full pipeline over one dataset: validate, group, aggregate,
    /// evaluate the bonus policy, assemble rows.
    ///
    /// Row ordering follows the active policy family and is recorded on the
    /// returned report. Sellers that never appear in a purchase record still
    /// get a row, zeroed out.
    pub fn build_report(&self, dataset: &SalesDataset) -> Result<SalesReport, ReportError> {
        validate_dataset(dataset)?;

        let products = ProductIndex::build(&dataset.products);
        let records = &dataset.purchase_records;
        let records_by_seller = group_by(records.iter(), |r| r.seller_id.clone());
        let records_by_customer = group_by(records.iter(), |r| r.customer_id.clone());
        let items_by_sku = group_by(records.iter().flat_map(|r| r.items.iter()), |i| {
            i.sku.clone()
        });

        let engine = AggregationEngine::new(self.revenue_model);
        let stats = engine.aggregate(records, &products)?;

        let report = match &self.bonus_policy {
            BonusPolicy::Aggregate(rule) => {
                let ctx = BonusContext {
                    stats: &stats,
                    records_by_seller: &records_by_seller,
                    records_by_customer: &records_by_customer,
                    items_by_sku: &items_by_sku,
                    sellers: &dataset.sellers,
                    customers: &dataset.customers,
                    products: &products,
                    revenue_model: self.revenue_model,
                };
                let award = rule.evaluate(&ctx)?;
                self.assemble_input_order(dataset, &stats, award.as_ref())
            }
            BonusPolicy::Ranked(rule) => self.assemble_profit_rank(dataset, &stats, rule.as_ref()),
        };

        tracing::debug!(
            rows = report.rows.len(),
            ordering = ?report.ordering,
            "report assembled"
        );
        Ok(report)
    }

    /// Rows in dataset input order; the single award (if any) lands on its
    /// seller, everyone else gets a zero bonus.
    fn assemble_input_order(
        &self,
        dataset: &SalesDataset,
        stats: &SalesStats,
        award: Option<&BonusAward>,
    ) -> SalesReport {
        let rows = dataset
            .sellers
            .iter()
            .map(|seller| {
                let bonus = match award {
                    Some(a) if a.seller_id == seller.id => a.bonus,
                    _ => Decimal::ZERO,
                };
                self.assemble_row(seller, stats, bonus)
            })
            .collect();

        SalesReport {
            ordering: core_types::OrderingMode::InputOrder,
            rows,
        }
    }

    /// Rows in descending-profit order; each seller's bonus comes from their
    /// rank position. The sort is stable, so equal profits keep input order.
    fn assemble_profit_rank(
        &self,
        dataset: &SalesDataset,
        stats: &SalesStats,
        rule: &dyn strategies::RankedBonusRule,
    ) -> SalesReport {
        let mut ranked: Vec<(&Seller, Decimal)> = dataset
            .sellers
            .iter()
            .map(|seller| {
                let profit = stats
                    .sellers
                    .get(&seller.id)
                    .map(|s| s.profit)
                    .unwrap_or(Decimal::ZERO);
                (seller, profit)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let field_size = ranked.len();
        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (seller, profit))| {
                let bonus = rule.bonus_for_rank(rank, field_size, profit);
                self.assemble_row(seller, stats, bonus)
            })
            .collect();

        SalesReport {
            ordering: core_types::OrderingMode::ProfitRank,
            rows,
        }
    }

    fn assemble_row(&self, seller: &Seller, stats: &SalesStats, bonus: Decimal) -> SellerReport {
        match stats.sellers.get(&seller.id) {
            Some(s) => SellerReport {
                seller_id: seller.id.clone(),
                name: seller.display_name(),
                revenue: round_money(s.revenue),
                profit: round_money(s.profit),
                bonus,
                sale_count: s.sale_count,
                top_products: s.top_products(self.top_products),
            },
            None => SellerReport {
                seller_id: seller.id.clone(),
                name: seller.display_name(),
                revenue: Decimal::ZERO,
                profit: Decimal::ZERO,
                bonus,
                sale_count: 0,
                top_products: Vec::new(),
            },
        }
    }
}

/// Rejects datasets with empty required collections, naming the field.
fn validate_dataset(dataset: &SalesDataset) -> Result<(), ReportError> {
    if dataset.sellers.is_empty() {
        return Err(ReportError::EmptyCollection("sellers"));
    }
    if dataset.products.is_empty() {
        return Err(ReportError::EmptyCollection("products"));
    }
    if dataset.purchase_records.is_empty() {
        return Err(ReportError::EmptyCollection("purchase_records"));
    }
    Ok(())
}
