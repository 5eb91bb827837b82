//! # Meridian Core Types
//!
//! This crate defines the shared data model for the Meridian sales analytics
//! system. It is the foundation layer (Layer 0) of the workspace: every other
//! crate depends on it, and it depends on nothing but serialization and
//! numeric primitives.
//!
//! ## Architectural Principles
//!
//! - **Immutable inputs:** `Seller`, `Product`, and `PurchaseRecord` describe
//!   the dataset exactly as the loader hands it over. The analytics layer
//!   never mutates them.
//! - **Precise money:** every monetary value is a `rust_decimal::Decimal`.
//!   Floating point is only permitted in the trend analyzer, where the
//!   dimensionless ratios make `f64` the right tool.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusRuleId, OrderingMode, RevenueModel};
pub use error::CoreError;
pub use structs::{BonusAward, Customer, LineItem, Product, PurchaseRecord, SalesDataset, Seller};
