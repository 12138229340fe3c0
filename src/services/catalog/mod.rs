pub mod source;

pub use source::{parse_catalog_rows, CatalogSource, RedashSource};
