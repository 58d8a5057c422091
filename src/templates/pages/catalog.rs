// templates/pages/catalog.rs

use crate::domain::{Shoe, Variant};
use crate::templates::{components::shoe_grid, desktop_layout};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn catalog_page(shoes: &[&Shoe], active: Option<Variant>, now: DateTime<Utc>) -> Markup {
    desktop_layout(
        "Running shoes",
        active,
        html! {
            main class="catalog" {
                h1 { "Running" }
                @if shoes.is_empty() {
                    p class="catalog__empty" { "No shoes match this filter." }
                } @else {
                    (shoe_grid(shoes, now))
                }
            }
        },
    )
}
