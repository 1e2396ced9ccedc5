use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order record as served by `GET /api/order/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_uid: String,
    pub track_number: String,
    pub entry: String,
    pub delivery: Delivery,
    pub payment: Payment,
    pub items: Vec<Item>,
    pub locale: String,
    pub internal_signature: String,
    pub customer_id: String,
    pub delivery_service: String,
    pub shardkey: String,
    pub sm_id: i64,
    pub date_created: DateTime<Utc>,
    pub oof_shard: String,
}

/// Recipient and destination details of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

/// Payment details of an order; monetary fields are integers in minor
/// currency units (cents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub transaction: String,
    pub request_id: String,
    pub currency: String,     // e.g., "USD"
    pub provider: String,
    pub amount: i64,
    pub payment_dt: i64,      // epoch seconds
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

/// One order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub chrt_id: i64,
    pub track_number: String,
    pub price: i64,           // minor currency units
    pub rid: String,
    pub name: String,
    pub sale: i64,            // discount percentage
    pub size: String,
    pub total_price: i64,     // minor currency units
    pub nm_id: i64,
    pub brand: String,
    pub status: i64,
}
