use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Address, Order, OrderItem, OrderStatus, PaymentMethod, PaymentRecord},
    services::cart_service,
    state::AppState,
    store::{KvStore, ORDERS_KEY, PAYMENTS_KEY},
};

/// Builds one completed order from the current cart and appends it to the
/// durable order log (read-modify-write; callers must not run two checkouts
/// against the same store concurrently). The cart is cleared only after the
/// append succeeds; a failed append propagates with nothing rolled back.
pub fn place_order<S: KvStore>(
    state: &mut AppState<S>,
    address: &Address,
    method: PaymentMethod,
) -> AppResult<Order> {
    if state.cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let mut items: Vec<OrderItem> = state
        .cart
        .values()
        .map(|line| OrderItem {
            id: line.product.id.clone(),
            name: line.product.name.clone(),
            desc: line.product.description.clone(),
            price: line.product.price,
            qty: line.qty,
        })
        .collect();
    // Map iteration order is arbitrary; sort for a deterministic record.
    items.sort_by(|a, b| a.id.cmp(&b.id));

    let order = Order {
        id: build_id("ord"),
        items,
        total: cart_service::cart_total(&state.cart),
        address: address.clone(),
        payment_method: method,
        payment_id: build_id("pay"),
        status: OrderStatus::Completed,
        created_at: Utc::now(),
    };

    let mut orders = list_orders(&state.store);
    orders.push(order.clone());
    let raw = serde_json::to_string(&orders)?;
    state.store.set(ORDERS_KEY, &raw)?;
    tracing::info!(order_id = %order.id, total = %order.total, "order recorded");

    cart_service::clear_cart(state)?;

    Ok(order)
}

/// Admin read of the order log. Absent or corrupt data lists as empty.
pub fn list_orders(store: &impl KvStore) -> Vec<Order> {
    read_list(store, ORDERS_KEY)
}

/// Admin read of payment records produced by the external payment
/// collaborator.
pub fn list_payments(store: &impl KvStore) -> Vec<PaymentRecord> {
    read_list(store, PAYMENTS_KEY)
}

fn read_list<T: serde::de::DeserializeOwned>(store: &impl KvStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, key, "stored list unreadable, treating as empty");
            Vec::new()
        }),
        None => Vec::new(),
    }
}

/// Millisecond timestamp plus a short uuid suffix: ordered within a session,
/// collision-free across checkouts in the same millisecond.
fn build_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().to_string();
    let short = &suffix[..8];
    format!("{prefix}_{millis}_{short}")
}
