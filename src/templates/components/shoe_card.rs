// src/templates/components/shoe_card.rs

use crate::domain::{banner_text, Shoe, Variant};
use crate::templates::components::spacer;
use crate::templates::format::{format_price, pluralize};
use crate::templates::styles::{banner_style, price_style};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

/// Renders one catalog card linking to the shoe's detail page.
///
/// The variant is derived from `shoe` and `now` on every call. The sale label
/// repeats the regular price; the discounted amount is not displayed.
pub fn shoe_card(shoe: &Shoe, now: DateTime<Utc>) -> Markup {
    let variant = shoe.variant(now);
    let price = format_price(shoe.price);

    html! {
        a class="shoe-card" href=(shoe.href()) data-variant=(variant.as_str()) {
            article class="shoe-card__wrapper" {
                div class="shoe-card__image-wrapper" {
                    @if let Some(banner) = banner_style(variant) {
                        div class="shoe-card__banner" style=(banner.css()) {
                            (banner_text(variant))
                        }
                    }
                    img class="shoe-card__image" alt="" src=(shoe.image_src);
                }
                (spacer(12))
                div class="shoe-card__row" {
                    h3 class="shoe-card__name" { (shoe.name) }
                    span class="shoe-card__price" style=(price_style(variant).css()) { (price) }
                }
                div class="shoe-card__row" {
                    p class="shoe-card__color-info" { (pluralize("Color", shoe.num_of_colors)) }
                    @if variant == Variant::OnSale {
                        span class="shoe-card__sale-price" { (price) }
                    }
                }
            }
        }
    }
}

/// Cards laid out in a wrapping grid.
pub fn shoe_grid(shoes: &[&Shoe], now: DateTime<Utc>) -> Markup {
    html! {
        section class="shoe-grid" {
            @for shoe in shoes {
                (shoe_card(shoe, now))
            }
        }
    }
}
