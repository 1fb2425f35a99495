pub mod transactions_import;
pub mod transactions_model;

pub use transactions_import::{parse_document, Statement};
pub use transactions_model::{PriceSummary, Transaction};
