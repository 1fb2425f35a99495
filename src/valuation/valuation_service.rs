use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{Result, ValuationError};
use crate::holdings::HoldingsLedger;
use crate::models::DataPolicy;
use crate::transactions::PriceSummary;
use crate::valuation::{HoldingValuation, PortfolioValuation};

/// Values the lot ledger against the current NAV snapshot.
#[derive(Debug, Clone, Default)]
pub struct ValuationService {
    policy: DataPolicy,
}

impl ValuationService {
    pub fn new(policy: DataPolicy) -> Self {
        Self { policy }
    }

    /// Computes per-holding current value and unrealized gain plus the
    /// portfolio totals.
    ///
    /// A holding matches the first snapshot entry with its scheme. Without a
    /// match it contributes nothing to the totals: skipped with a warning in
    /// lenient mode, an error in strict mode.
    pub fn value_holdings(
        &self,
        ledger: &HoldingsLedger,
        summary: &[PriceSummary],
    ) -> Result<PortfolioValuation> {
        let mut positions = Vec::with_capacity(ledger.len());
        let mut total_value = Decimal::ZERO;
        let mut total_gain = Decimal::ZERO;

        for (key, holding) in ledger {
            let Some(entry) = summary.iter().find(|s| s.scheme == key.scheme) else {
                match self.policy {
                    DataPolicy::Strict => {
                        return Err(ValuationError::UnmatchedPrice(key.scheme.clone()).into());
                    }
                    DataPolicy::Lenient => {
                        warn!("No snapshot price for {}. Excluding it from totals.", key);
                        continue;
                    }
                }
            };

            let current_value = holding.units * entry.nav;
            let cost_basis = holding.cost_basis();
            let unrealized_gain = current_value - cost_basis;

            debug!(
                "Valued {}: {} units @ {} = {}",
                key, holding.units, entry.nav, current_value
            );

            total_value += current_value;
            total_gain += unrealized_gain;

            positions.push(HoldingValuation {
                scheme: key.scheme.clone(),
                folio: key.folio.clone(),
                scheme_name: entry.scheme_name.clone(),
                units: holding.units,
                nav: entry.nav,
                cost_basis,
                current_value,
                unrealized_gain,
            });
        }

        Ok(PortfolioValuation {
            positions,
            total_value,
            total_gain,
        })
    }
}
