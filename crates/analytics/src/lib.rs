//! # Meridian Analytics Engine
//!
//! This crate provides the statistics core of the Meridian sales reporting
//! system: a generic grouping utility, a numeric trend analyzer, and the
//! single-pass aggregation engine that turns raw purchase records into
//! per-seller, per-customer, and per-product running totals.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   loaders, formats, or reports. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AggregationEngine` is a stateless
//!   calculator. It takes raw records as input and produces a `SalesStats`
//!   accumulator as output, built once and returned by value — never exposed
//!   partially built.
//! - **Deterministic iteration:** every mapping produced here remembers
//!   first-encounter order. Downstream tie-breaks ("first seen wins") lean on
//!   that guarantee.
//!
//! ## Public API
//!
//! - `AggregationEngine`: the single-pass statistics aggregator.
//! - `SalesStats` / `SellerStats` / `CustomerStats` / `ProductStats`: the
//!   accumulated totals.
//! - `group_by` / `OrderedMap`: the order-preserving partition utility.
//! - `analyze_sequence` / `TrendProfile`: stability and direction
//!   classification of a numeric series.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod grouping;
pub mod stats;
pub mod trend;
pub mod util;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AggregationEngine, ProductIndex};
pub use error::AnalyticsError;
pub use grouping::{group_by, OrderedMap};
pub use stats::{CustomerStats, ProductStats, SalesStats, SellerStats, TopProduct};
pub use trend::{analyze_sequence, TrendProfile, DEFAULT_TOLERANCE};
