pub mod error;
pub mod shoe_card;
pub mod spacer;

pub use error::error_page;
pub use shoe_card::{shoe_card, shoe_grid};
pub use spacer::spacer;
