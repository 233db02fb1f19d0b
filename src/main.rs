use std::thread;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{
    checkout::{CONFIRMATION_DISPLAY, CheckoutFlow, SUCCESS_REDIRECT},
    config::AppConfig,
    currency::currency,
    export,
    models::{Address, PaymentMethod},
    services::{cart_service, catalog_service, order_service},
    state::AppState,
    store::FileStore,
};

// Scripted walk through the storefront: browse, fill the cart, check out
// with a simulated UPI payment, then read everything back the way the admin
// view does.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let store = FileStore::open(&config.store_path);
    let mut state = AppState::new(store);

    let products = catalog_service::load_catalog(&config.catalog_path);
    println!("Products:");
    for product in &products {
        println!(
            "  {} — {} — {}",
            product.name,
            currency(product.price),
            product.description
        );
    }
    let Some(first) = products.first() else {
        anyhow::bail!("catalog is empty");
    };

    cart_service::add_to_cart(&mut state, first, 1)?;
    cart_service::add_to_cart(&mut state, first, 1)?;
    println!(
        "Cart: {} item(s), total {}",
        cart_service::item_count(&state.cart),
        currency(cart_service::cart_total(&state.cart))
    );

    let mut flow = CheckoutFlow::new();
    flow.view_cart()?;
    flow.begin_checkout(state.cart.is_empty())?;

    let address = Address {
        name: "Asha Rao".into(),
        door_no: "12B".into(),
        street: "MG Road".into(),
        area: "Indiranagar".into(),
        district: "Bengaluru".into(),
        pincode: "560038".into(),
        mobile: "9876543210".into(),
        landmark: "Opposite the metro station".into(),
    };
    let proceed = flow.submit_address(&address)?;
    anyhow::ensure!(proceed, "delivery address incomplete");

    flow.proceed_to_payment(PaymentMethod::Upi)?;
    flow.confirm_payment()?;

    let order = match flow.confirmed() {
        Some((address, method)) => {
            let address = address.clone();
            order_service::place_order(&mut state, &address, method)?
        }
        None => anyhow::bail!("payment was not confirmed"),
    };
    flow.order_recorded(order.id.clone())?;

    thread::sleep(CONFIRMATION_DISPLAY);
    let exported = export::write_order_json(&config.export_dir, &order)?;
    println!(
        "Order {} placed, total {} — exported to {}",
        order.id,
        currency(order.total),
        exported.display()
    );

    thread::sleep(SUCCESS_REDIRECT);
    flow.finish()?;

    let orders = order_service::list_orders(&state.store);
    println!("Orders ({}):", orders.len());
    for order in &orders {
        println!(
            "  {} — {} — {} item(s) — {}",
            order.id,
            currency(order.total),
            order.items.len(),
            order.created_at
        );
    }

    let payments = order_service::list_payments(&state.store);
    println!("Payments ({})", payments.len());
    for payment in &payments {
        println!(
            "  {} — {} — {} — {}",
            payment.payment_id,
            currency(payment.amount),
            payment.method,
            payment.status
        );
    }

    Ok(())
}
