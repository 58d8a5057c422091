// src/templates/format.rs

use crate::domain::Money;

/// `$165.00` style price label.
pub fn format_price(price: Money) -> String {
    price.to_string()
}

/// `1 Color`, `3 Colors`, `0 Colors`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
