pub mod constants;
pub mod errors;
pub mod models;

pub mod holdings;
pub mod performance;
pub mod portfolio;
pub mod reporting;
pub mod transactions;
pub mod utils;
pub mod valuation;

pub use portfolio::*;
pub use transactions::*;
