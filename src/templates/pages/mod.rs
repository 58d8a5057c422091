pub mod catalog;

pub use catalog::catalog_page;
