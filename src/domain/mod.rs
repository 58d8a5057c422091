pub mod logic;
pub mod money;
pub mod shoe;
pub mod variant;

pub use logic::{classify, is_new_shoe, RECENCY_WINDOW_DAYS};
pub use money::Money;
pub use shoe::Shoe;
pub use variant::{banner_text, Variant, VariantParseError};
