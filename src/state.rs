use crate::models::Cart;
use crate::store::{CART_KEY, KvStore};

/// The live cart plus the durable store it mirrors into.
pub struct AppState<S: KvStore> {
    pub store: S,
    pub cart: Cart,
}

impl<S: KvStore> AppState<S> {
    /// Restores the cart from the store. Absent or corrupt data yields an
    /// empty cart; no error is surfaced.
    pub fn new(store: S) -> Self {
        let cart = match store.get(CART_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored cart unreadable, starting empty");
                Cart::new()
            }),
            None => Cart::new(),
        };
        Self { store, cart }
    }
}
