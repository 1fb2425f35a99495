pub mod valuation_model;
pub mod valuation_service;

pub use valuation_model::{HoldingValuation, PortfolioValuation};
pub use valuation_service::ValuationService;
