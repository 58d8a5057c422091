// src/domain/shoe.rs

use crate::domain::{classify, Money, Variant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a shoe card needs to render, supplied whole on every render.
///
/// Field names serialize in camelCase so catalog files line up with the
/// storefront's product feed (`imageSrc`, `salePrice`, `numOfColors`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: Money,
    #[serde(default)]
    pub sale_price: Option<Money>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Shoe {
    /// Presentation variant as of `now`. Derived on every call, never stored.
    pub fn variant(&self, now: DateTime<Utc>) -> Variant {
        classify(self.sale_price, self.release_date, now)
    }

    /// Path of the product detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
