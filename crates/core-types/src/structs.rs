use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A seller participating in the reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// The display name used on report rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A product in the catalog. The SKU is the unique key every line item
/// resolves against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// The price the business paid to acquire one unit.
    pub purchase_price: Decimal,
}

/// One product entry inside a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// The per-unit price the customer was charged before discount.
    pub sale_price: Decimal,
    pub quantity: u32,
    /// Discount applied multiplicatively, expressed in percent (0–100).
    pub discount_percent: Decimal,
}

/// A single completed sale: one seller, one customer, one or more line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub customer_id: String,
    pub date: NaiveDate,
    /// The receipt total as recorded at the point of sale.
    pub total_amount: Decimal,
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    /// The calendar-month bucket this record falls into, e.g. `"2024-03"`.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// The full in-memory dataset the report is computed over. Produced by an
/// external loader; consumed read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    pub sellers: Vec<Seller>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// A customer appearing in the dataset. Only the identity matters to the
/// analytics core; the name is carried through for report consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A single bonus awarded by one rule: the winning seller, the rule's display
/// label, and the monetary amount rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusAward {
    pub seller_id: String,
    pub category: String,
    pub bonus: Decimal,
}
