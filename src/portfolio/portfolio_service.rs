use chrono::NaiveDate;
use log::{debug, warn};

use crate::errors::Result;
use crate::holdings::HoldingsCalculator;
use crate::models::DataPolicy;
use crate::performance::{annualized_return, assemble_cashflows};
use crate::portfolio::PortfolioReport;
use crate::transactions::{PriceSummary, Statement, Transaction};
use crate::valuation::ValuationService;

/// Single entry point running the full pipeline: lot ledger, valuation,
/// cashflow assembly, return solving. Holds no state beyond its policy;
/// every invocation is self-contained.
#[derive(Debug, Clone, Default)]
pub struct PortfolioService {
    calculator: HoldingsCalculator,
    valuation: ValuationService,
}

impl PortfolioService {
    pub fn new(policy: DataPolicy) -> Self {
        Self {
            calculator: HoldingsCalculator::new(policy),
            valuation: ValuationService::new(policy),
        }
    }

    /// Convenience wrapper over [`analyze`] for a parsed statement.
    ///
    /// [`analyze`]: PortfolioService::analyze
    pub fn analyze_statement(
        &self,
        statement: &Statement,
        as_of: NaiveDate,
    ) -> Result<PortfolioReport> {
        self.analyze(&statement.transactions, &statement.summary, as_of)
    }

    /// Computes per-holding valuations, portfolio totals and the annualized
    /// money-weighted return as of `as_of`.
    ///
    /// Data errors abort with `Err`. A solver failure does not: the totals
    /// do not depend on convergence, so the report is returned with
    /// `annualized_return: None` and the typed cause in the log.
    pub fn analyze(
        &self,
        transactions: &[Transaction],
        summary: &[PriceSummary],
        as_of: NaiveDate,
    ) -> Result<PortfolioReport> {
        let ledger = self.calculator.calculate_holdings(transactions)?;
        debug!("Built lot ledger for {} holdings", ledger.len());

        let valuation = self.valuation.value_holdings(&ledger, summary)?;

        let cashflows = assemble_cashflows(&ledger, valuation.total_value, as_of);
        let annualized = match annualized_return(&cashflows) {
            Ok(rate) => Some(rate),
            Err(e) => {
                warn!("Annualized return unavailable: {}", e);
                None
            }
        };

        Ok(PortfolioReport {
            valuation,
            annualized_return: annualized,
        })
    }
}
