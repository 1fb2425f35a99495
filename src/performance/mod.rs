pub mod cashflow;
pub mod xirr;

pub use cashflow::{assemble_cashflows, Cashflow};
pub use xirr::annualized_return;
