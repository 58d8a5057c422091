// src/catalog/mod.rs

use crate::domain::{Shoe, Variant};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub mod demo;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate slug `{0}` in catalog")]
    DuplicateSlug(String),
}

/// Ordered, read-only list of shoes shown on the catalog page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate slugs.
    ///
    /// A sale price above the regular price is logged and kept; the card
    /// renders whatever it is given.
    pub fn from_shoes(shoes: Vec<Shoe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for shoe in &shoes {
            if !seen.insert(shoe.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(shoe.slug.clone()));
            }
            if let Some(sale) = shoe.sale_price {
                if sale > shoe.price {
                    warn!(
                        slug = %shoe.slug,
                        price = %shoe.price,
                        sale_price = %sale,
                        "sale price is above regular price"
                    );
                }
            }
        }
        Ok(Self { shoes })
    }

    /// Parses a JSON array of shoes.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let shoes: Vec<Shoe> = serde_json::from_str(json)?;
        Self::from_shoes(shoes)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), shoes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in demo catalog, with release dates relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Result<Self, CatalogError> {
        Self::from_shoes(demo::demo_shoes(now))
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|s| s.slug == slug)
    }

    /// Shoes whose variant as of `now` matches, in catalog order.
    /// `None` keeps every shoe.
    pub fn filter(&self, variant: Option<Variant>, now: DateTime<Utc>) -> Vec<&Shoe> {
        self.shoes
            .iter()
            .filter(|s| variant.map_or(true, |v| s.variant(now) == v))
            .collect()
    }
}
