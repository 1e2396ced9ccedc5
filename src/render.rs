use chrono::{DateTime, Utc};

use crate::models::{Item, Order};
use crate::view::ViewState;

/// Render the current view state as terminal text.
///
/// Pure: no I/O happens here, the caller decides where the text goes.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Enter an order ID to look it up.".to_string(),
        ViewState::Loading => "Searching...".to_string(),
        ViewState::Failed(message) => format!("❌ {}", message),
        ViewState::Loaded(order) => render_order(order),
    }
}

fn render_order(order: &Order) -> String {
    let mut out = String::new();

    out.push_str(&format!("Order Details [{}]\n", order.order_uid));
    out.push_str("📋 Order Info\n");
    out.push_str(&format!("  Track Number: {}\n", order.track_number));
    out.push_str(&format!("  Customer: {}\n", order.customer_id));
    out.push_str(&format!("  Entry: {}\n", order.entry));
    out.push_str(&format!("  Created: {}\n", format_timestamp(&order.date_created)));

    out.push_str("🚚 Delivery\n");
    out.push_str(&format!("  Name: {}\n", order.delivery.name));
    out.push_str(&format!("  Phone: {}\n", order.delivery.phone));
    out.push_str(&format!("  Address: {}, {}\n", order.delivery.city, order.delivery.address));
    out.push_str(&format!("  Email: {}\n", order.delivery.email));

    out.push_str("💳 Payment\n");
    out.push_str(&format!("  Amount: {}\n", format_currency(order.payment.amount)));
    out.push_str(&format!("  Provider: {}\n", order.payment.provider));
    out.push_str(&format!("  Bank: {}\n", order.payment.bank));
    out.push_str(&format!("  Currency: {}\n", order.payment.currency));

    out.push_str(&format!("🛍️ Items ({})\n", order.items.len()));
    for item in &order.items {
        out.push_str(&render_item(item));
    }

    out
}

fn render_item(item: &Item) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {} [{}]\n", item.name, item.brand));
    out.push_str(&format!(
        "    Price: {}  Sale: {}%  Total: {}  Status: {}\n",
        format_currency(item.price),
        item.sale,
        format_currency(item.total_price),
        item.status,
    ));

    out
}

/// Format an integer amount of minor currency units as major units with
/// exactly two fractional digits, e.g. 12345 -> "$123.45".
///
/// Integer arithmetic only, so the two-digit rule holds for every input.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let amount = amount.unsigned_abs();
    format!("{}${}.{:02}", sign, amount / 100, amount % 100)
}

fn format_timestamp(date_created: &DateTime<Utc>) -> String {
    date_created.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
