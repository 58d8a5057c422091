// src/domain/variant.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three mutually exclusive ways a shoe card can present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::OnSale, Variant::NewRelease, Variant::Default];

    /// Kebab-case tag, as used in query strings and `data-variant` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

/// Text of the image banner. Empty for `Default`, which renders no banner.
pub fn banner_text(variant: Variant) -> &'static str {
    match variant {
        Variant::OnSale => "Sale",
        Variant::NewRelease => "Just Released!",
        Variant::Default => "",
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant `{0}` (expected on-sale, new-release or default)")]
pub struct VariantParseError(pub String);

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| VariantParseError(s.to_string()))
    }
}
