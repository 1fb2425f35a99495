pub mod holdings_calculator;
pub mod holdings_model;

pub use holdings_calculator::{HoldingsCalculator, HoldingsLedger};
pub use holdings_model::{Holding, HoldingKey, Lot};

#[cfg(test)]
pub(crate) mod tests;
