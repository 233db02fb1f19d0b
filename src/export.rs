use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{Order, PaymentRecord};

/// Serializes one order to `order_<id>.json` under `dir`; returns the path.
pub fn write_order_json(dir: impl AsRef<Path>, order: &Order) -> AppResult<PathBuf> {
    let path = dir.as_ref().join(format!("order_{}.json", order.id));
    write_pretty(path, order)
}

/// Serializes the full payment list to `all_payments_<YYYY-MM-DD>.json`.
pub fn write_payments_json(
    dir: impl AsRef<Path>,
    payments: &[PaymentRecord],
) -> AppResult<PathBuf> {
    let date = Utc::now().format("%Y-%m-%d");
    let path = dir.as_ref().join(format!("all_payments_{date}.json"));
    write_pretty(path, payments)
}

fn write_pretty<T: Serialize + ?Sized>(path: PathBuf, value: &T) -> AppResult<PathBuf> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(&path, raw)?;
    Ok(path)
}
