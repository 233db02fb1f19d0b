use rust_decimal::Decimal;
use storefront::{
    currency::currency,
    models::Product,
    services::cart_service,
    state::AppState,
    store::{CART_KEY, FileStore, KvStore, MemoryStore},
};

#[test]
fn adding_same_product_merges_lines() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    let p1 = product("p1", 2499);

    cart_service::add_to_cart(&mut state, &p1, 1)?;
    cart_service::add_to_cart(&mut state, &p1, 2)?;

    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart["p1"].qty, 3);
    assert_eq!(
        cart_service::cart_total(&state.cart),
        Decimal::from(7497)
    );
    assert_eq!(
        currency(cart_service::cart_total(&state.cart)),
        "₹7497.00"
    );
    Ok(())
}

#[test]
fn adding_zero_qty_is_a_noop() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 100), 0)?;
    assert!(state.cart.is_empty());
    Ok(())
}

#[test]
fn set_quantity_zero_removes_the_line() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 2499), 2)?;

    cart_service::set_quantity(&mut state, "p1", 0)?;
    assert!(!state.cart.contains_key("p1"));
    Ok(())
}

#[test]
fn set_quantity_clamps_negative_to_removal() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 2499), 2)?;

    cart_service::set_quantity(&mut state, "p1", -5)?;
    assert!(state.cart.is_empty());
    Ok(())
}

#[test]
fn set_quantity_on_unknown_id_is_a_noop() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 100), 1)?;

    cart_service::set_quantity(&mut state, "nope", 4)?;
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart["p1"].qty, 1);
    Ok(())
}

#[test]
fn remove_is_idempotent() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 100), 1)?;

    cart_service::remove_from_cart(&mut state, "p1")?;
    let after_first = state.cart.clone();
    cart_service::remove_from_cart(&mut state, "p1")?;

    assert_eq!(state.cart, after_first);
    assert!(state.cart.is_empty());
    Ok(())
}

// Invariant: no sequence of mutations leaves a line with qty == 0.
#[test]
fn mixed_mutations_never_leave_zero_qty_lines() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    let p1 = product("p1", 2499);
    let p2 = product("p2", 3499);

    cart_service::add_to_cart(&mut state, &p1, 1)?;
    cart_service::add_to_cart(&mut state, &p2, 3)?;
    cart_service::set_quantity(&mut state, "p2", -1)?;
    cart_service::add_to_cart(&mut state, &p2, 0)?;
    cart_service::set_quantity(&mut state, "p1", 5)?;
    cart_service::remove_from_cart(&mut state, "gone")?;

    assert!(state.cart.values().all(|line| line.qty > 0));
    Ok(())
}

#[test]
fn total_is_rederived_after_every_mutation() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    let p1 = product("p1", 2499);
    let p2 = product("p2", 1299);

    cart_service::add_to_cart(&mut state, &p1, 2)?;
    cart_service::add_to_cart(&mut state, &p2, 1)?;
    assert_eq!(cart_service::cart_total(&state.cart), Decimal::from(6297));

    cart_service::set_quantity(&mut state, "p1", 1)?;
    assert_eq!(cart_service::cart_total(&state.cart), Decimal::from(3798));

    cart_service::remove_from_cart(&mut state, "p2")?;
    assert_eq!(cart_service::cart_total(&state.cart), Decimal::from(2499));

    cart_service::clear_cart(&mut state)?;
    assert_eq!(cart_service::cart_total(&state.cart), Decimal::ZERO);
    Ok(())
}

#[test]
fn item_count_sums_quantities() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 100), 2)?;
    cart_service::add_to_cart(&mut state, &product("p2", 200), 3)?;
    assert_eq!(cart_service::item_count(&state.cart), 5);
    Ok(())
}

#[test]
fn cart_round_trips_through_the_store() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 2499), 2)?;
    cart_service::add_to_cart(&mut state, &product("p2", 1299), 1)?;
    let before = state.cart.clone();

    let restored = AppState::new(state.store);
    assert_eq!(restored.cart, before);
    Ok(())
}

#[test]
fn corrupt_stored_cart_restores_empty() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    store.set(CART_KEY, "{not valid json")?;

    let state = AppState::new(store);
    assert!(state.cart.is_empty());
    Ok(())
}

#[test]
fn clear_persists_an_empty_mapping() -> anyhow::Result<()> {
    let mut state = AppState::new(MemoryStore::new());
    cart_service::add_to_cart(&mut state, &product("p1", 100), 1)?;
    cart_service::clear_cart(&mut state)?;

    let raw = state.store.get(CART_KEY).unwrap();
    assert_eq!(raw, "{}");
    Ok(())
}

#[test]
fn file_store_round_trips_across_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.json");

    let mut state = AppState::new(FileStore::open(&path));
    cart_service::add_to_cart(&mut state, &product("p1", 2499), 2)?;
    let before = state.cart.clone();
    drop(state);

    let reopened = AppState::new(FileStore::open(&path));
    assert_eq!(reopened.cart, before);
    Ok(())
}

#[test]
fn corrupt_store_file_starts_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.json");
    std::fs::write(&path, "definitely not json")?;

    let state = AppState::new(FileStore::open(&path));
    assert!(state.cart.is_empty());
    Ok(())
}

#[test]
fn currency_always_shows_two_decimals() {
    assert_eq!(currency(Decimal::from(1299)), "₹1299.00");
    assert_eq!(currency(Decimal::new(105, 1)), "₹10.50");
    assert_eq!(currency(Decimal::ZERO), "₹0.00");
}

fn product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: Decimal::from(price),
        image: format!("/{id}.svg"),
        description: "A test product".to_string(),
    }
}
