// src/domain/logic.rs

use crate::domain::{Money, Variant};
use chrono::{DateTime, Duration, Utc};

/// How long after its release date a shoe still counts as new.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Picks the presentation variant of a shoe card.
/// The order of checks determines precedence.
///
/// A shoe can be both discounted and recently released; `OnSale` wins and
/// there is no combined variant.
pub fn classify(sale_price: Option<Money>, release_date: DateTime<Utc>, now: DateTime<Utc>) -> Variant {
    if sale_price.is_some() {
        return Variant::OnSale;
    }
    if is_new_shoe(release_date, now) {
        return Variant::NewRelease;
    }
    Variant::Default
}

/// True when the shoe was released less than `RECENCY_WINDOW_DAYS` before `now`.
/// Release dates in the future count as new.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) < Duration::days(RECENCY_WINDOW_DAYS)
}
