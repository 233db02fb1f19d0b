use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::{Cart, CartLine, Product},
    state::AppState,
    store::{CART_KEY, KvStore},
};

/// Adds `qty` of `product`, merging into an existing line. No upper bound.
/// A zero `qty` is normalized to a no-op so the cart never gains an empty
/// line. The whole cart is persisted afterwards.
pub fn add_to_cart<S: KvStore>(
    state: &mut AppState<S>,
    product: &Product,
    qty: u32,
) -> AppResult<()> {
    if qty == 0 {
        return Ok(());
    }
    state
        .cart
        .entry(product.id.clone())
        .and_modify(|line| line.qty += qty)
        .or_insert_with(|| CartLine {
            product: product.clone(),
            qty,
        });
    persist_cart(state)
}

/// Clamps `qty` below zero to zero; zero removes the line. Unknown ids are
/// a no-op.
pub fn set_quantity<S: KvStore>(
    state: &mut AppState<S>,
    product_id: &str,
    qty: i64,
) -> AppResult<()> {
    if !state.cart.contains_key(product_id) {
        return Ok(());
    }
    let qty = qty.clamp(0, i64::from(u32::MAX)) as u32;
    if qty == 0 {
        state.cart.remove(product_id);
    } else if let Some(line) = state.cart.get_mut(product_id) {
        line.qty = qty;
    }
    persist_cart(state)
}

/// Unconditional delete; removing an absent id is a no-op, so the call is
/// idempotent.
pub fn remove_from_cart<S: KvStore>(state: &mut AppState<S>, product_id: &str) -> AppResult<()> {
    state.cart.remove(product_id);
    persist_cart(state)
}

pub fn clear_cart<S: KvStore>(state: &mut AppState<S>) -> AppResult<()> {
    state.cart.clear();
    persist_cart(state)
}

/// Re-derived from the cart contents on every call; never cached.
pub fn cart_total(cart: &Cart) -> Decimal {
    cart.values()
        .map(|line| line.product.price * Decimal::from(line.qty))
        .sum()
}

pub fn item_count(cart: &Cart) -> u32 {
    cart.values().map(|line| line.qty).sum()
}

fn persist_cart<S: KvStore>(state: &mut AppState<S>) -> AppResult<()> {
    let raw = serde_json::to_string(&state.cart)?;
    state.store.set(CART_KEY, &raw)
}
