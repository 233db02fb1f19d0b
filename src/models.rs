use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

/// A cart line freezes the product as it looked when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub qty: u32,
}

/// Product id -> line. Never holds a line with `qty == 0`.
pub type Cart = HashMap<String, CartLine>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    pub door_no: String,
    pub street: String,
    pub area: String,
    pub district: String,
    pub pincode: String,
    pub mobile: String,
    #[serde(default)]
    pub landmark: String,
}

impl Address {
    /// Gate for the checkout "proceed" action. Pure; safe to call on every
    /// keystroke.
    pub fn is_complete(&self) -> bool {
        let required = [
            &self.name,
            &self.door_no,
            &self.street,
            &self.area,
            &self.district,
        ];
        required.iter().all(|field| !field.trim().is_empty())
            && digits_exactly(&self.mobile, 10)
            && digits_exactly(&self.pincode, 6)
    }
}

fn digits_exactly(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub price: Decimal,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub address: Address,
    pub payment_method: PaymentMethod,
    pub payment_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Written by an external payment collaborator; this crate only reads it.
/// `status` stays an open string because we never produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_id: String,
    pub order_id: String,
    pub amount: Decimal,
    pub status: String,
    pub method: String,
    pub timestamp: DateTime<Utc>,
    pub customer_info: CustomerInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub mobile: String,
}
