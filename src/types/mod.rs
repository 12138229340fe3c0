pub mod errors;
pub mod records;

pub use errors::{AppError, AppResult};
pub use records::{CatalogRow, QueryRecord, ResultRow};
