use rust_decimal::Decimal;

/// Display formatting for monetary amounts: rupee prefix, two decimals.
pub fn currency(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}
