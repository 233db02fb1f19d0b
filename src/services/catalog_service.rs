use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::models::Product;

/// Loads the product catalog from a JSON array at `path`. Any failure
/// (missing file, unreadable, malformed JSON) or an empty listing substitutes
/// the built-in samples; the caller always gets something to show.
pub fn load_catalog(path: impl AsRef<Path>) -> Vec<Product> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "catalog unavailable, using built-in samples");
            return fallback_products();
        }
    };
    match serde_json::from_str::<Vec<Product>>(&raw) {
        Ok(products) if !products.is_empty() => products,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "catalog is empty, using built-in samples");
            fallback_products()
        }
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "catalog malformed, using built-in samples");
            fallback_products()
        }
    }
}

pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Aurora Headphones".to_string(),
            price: Decimal::from(2499),
            image: "/headphones.svg".to_string(),
            description: "Comfortable over-ear wireless headphones with noise cancellation."
                .to_string(),
        },
        Product {
            id: "p2".to_string(),
            name: "Nimbus Smartwatch".to_string(),
            price: Decimal::from(3499),
            image: "/smartwatch.svg".to_string(),
            description: "Health tracking, notifications and long battery life.".to_string(),
        },
        Product {
            id: "p3".to_string(),
            name: "Comet Portable Speaker".to_string(),
            price: Decimal::from(1299),
            image: "/speaker.svg".to_string(),
            description: "Rugged, waterproof bluetooth speaker with punchy bass.".to_string(),
        },
    ]
}
