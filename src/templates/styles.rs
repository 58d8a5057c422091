// src/templates/styles.rs

use crate::domain::Variant;
use crate::templates::tokens::{colors, weights};

/// Inline style of the price label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceStyle {
    pub color: &'static str,
    pub text_decoration: &'static str,
}

impl PriceStyle {
    pub fn css(&self) -> String {
        format!(
            "color: {}; text-decoration: {};",
            self.color, self.text_decoration
        )
    }
}

/// Inline style of the image banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerStyle {
    pub background: &'static str,
}

impl BannerStyle {
    pub fn css(&self) -> String {
        format!("background-color: {};", self.background)
    }
}

/// Discounted shoes show their regular price struck through and muted.
pub fn price_style(variant: Variant) -> PriceStyle {
    match variant {
        Variant::OnSale => PriceStyle {
            color: colors::GRAY_700,
            text_decoration: "line-through",
        },
        Variant::NewRelease | Variant::Default => PriceStyle {
            color: colors::GRAY_900,
            text_decoration: "none",
        },
    }
}

/// `None` means no banner is rendered.
pub fn banner_style(variant: Variant) -> Option<BannerStyle> {
    match variant {
        Variant::OnSale => Some(BannerStyle {
            background: colors::PRIMARY,
        }),
        Variant::NewRelease => Some(BannerStyle {
            background: colors::SECONDARY,
        }),
        Variant::Default => None,
    }
}

/// Variant-independent layout rules for the page and its cards.
pub fn stylesheet() -> String {
    format!(
        r#"
body {{
  font-family: system-ui, sans-serif;
  font-weight: {normal};
  color: {gray_900};
  background: {white};
  margin: 0;
}}
.site-header {{
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  padding: 18px 32px;
  border-bottom: 1px solid {gray_300};
}}
.site-header nav a {{
  color: {gray_700};
  margin-left: 24px;
  text-decoration: none;
}}
.site-header nav a.active {{
  color: {primary};
  font-weight: {medium};
}}
.catalog {{
  padding: 32px;
}}
.catalog__empty {{
  color: {gray_500};
}}
.shoe-grid {{
  display: flex;
  flex-wrap: wrap;
  gap: 32px;
}}
.shoe-card {{
  text-decoration: none;
  color: inherit;
  min-width: 300px;
  max-width: 500px;
  flex: 1;
}}
.shoe-card__image-wrapper {{
  position: relative;
  background: {gray_100};
  border-radius: 16px 16px 4px 4px;
}}
.shoe-card__image {{
  display: block;
  width: 100%;
  border-radius: 16px 16px 4px 4px;
}}
.shoe-card__banner {{
  position: absolute;
  top: 10px;
  right: -10px;
  width: fit-content;
  padding: 7px 9px;
  border-radius: 2px;
  font-weight: {bold};
  color: {white};
  text-align: center;
}}
.shoe-card__row {{
  font-size: 1rem;
  display: flex;
  justify-content: space-between;
}}
.shoe-card__name {{
  font-weight: {medium};
  color: {gray_900};
  margin: 0;
}}
.shoe-card__color-info {{
  color: {gray_700};
  margin: 0;
}}
.shoe-card__sale-price {{
  font-weight: {medium};
  color: {primary};
}}
"#,
        white = colors::WHITE,
        gray_100 = colors::GRAY_100,
        gray_300 = colors::GRAY_300,
        gray_500 = colors::GRAY_500,
        gray_700 = colors::GRAY_700,
        gray_900 = colors::GRAY_900,
        primary = colors::PRIMARY,
        normal = weights::NORMAL,
        medium = weights::MEDIUM,
        bold = weights::BOLD,
    )
}
