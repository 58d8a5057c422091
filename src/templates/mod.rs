pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;
pub mod styles;
pub mod tokens;

pub use components::{error_page, shoe_card};
pub use layouts::desktop::desktop_layout;
