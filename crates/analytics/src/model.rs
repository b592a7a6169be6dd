use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One product line of a receipt. `discount` is a percentage, 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u64,
    pub sale_price: f64,
    #[serde(default)]
    pub discount: f64,
}

/// One receipt, attributed to exactly one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    /// Label used in error messages: the receipt id, or `#<index>` when absent.
    pub fn label(&self, index: usize) -> String {
        match &self.receipt_id {
            Some(id) => id.clone(),
            None => format!("#{index}"),
        }
    }
}

/// The four collections an analysis run consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

/// Running totals for one seller while purchase records are folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub products_sold: HashMap<String, u64>,
}

impl SellerStat {
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub sku: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<ProductSales>,
    pub bonus: f64,
}
