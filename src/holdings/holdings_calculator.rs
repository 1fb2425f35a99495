use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::errors::{CalculatorError, Result};
use crate::holdings::{Holding, HoldingKey, Lot};
use crate::models::DataPolicy;
use crate::transactions::Transaction;

/// The lot ledger: one holding per scheme/folio key. A BTreeMap keeps
/// iteration order stable so downstream cashflow assembly is reproducible.
pub type HoldingsLedger = BTreeMap<HoldingKey, Holding>;

/// Builds the lot ledger from ordered statement transactions.
///
/// Transactions must arrive chronologically per holding key; the statement
/// guarantees this and the calculator does not re-sort.
#[derive(Debug, Clone, Default)]
pub struct HoldingsCalculator {
    policy: DataPolicy,
}

impl HoldingsCalculator {
    pub fn new(policy: DataPolicy) -> Self {
        Self { policy }
    }

    /// Reduces the transaction list into a fresh ledger.
    pub fn calculate_holdings(&self, transactions: &[Transaction]) -> Result<HoldingsLedger> {
        let mut ledger = HoldingsLedger::new();
        self.apply_transactions(&mut ledger, transactions)?;
        Ok(ledger)
    }

    /// Applies further transactions to an existing ledger. Applying an empty
    /// or all-zero-unit set leaves the ledger unchanged.
    pub fn apply_transactions(
        &self,
        ledger: &mut HoldingsLedger,
        transactions: &[Transaction],
    ) -> Result<()> {
        for transaction in transactions {
            self.apply_transaction(ledger, transaction)?;
        }
        Ok(())
    }

    fn apply_transaction(&self, ledger: &mut HoldingsLedger, transaction: &Transaction) -> Result<()> {
        let key = HoldingKey::new(&transaction.scheme, &transaction.folio);

        // Strict mode validates a disposal before touching the ledger so a
        // rejected transaction leaves it exactly as it was.
        if self.policy == DataPolicy::Strict && transaction.units.is_sign_negative() {
            let disposed = transaction.units.abs();
            let available = ledger.get(&key).map(Holding::lot_units).unwrap_or_default();
            if disposed > available {
                return Err(CalculatorError::Oversold {
                    scheme: key.scheme,
                    folio: key.folio,
                    disposed: disposed.to_string(),
                    shortfall: (disposed - available).to_string(),
                }
                .into());
            }
        }

        let holding = ledger.entry(key.clone()).or_default();

        if transaction.units.is_zero() {
            debug!("Zero-unit transaction on {} dated {}. Skipping.", key, transaction.date);
            return Ok(());
        }

        if transaction.units.is_sign_positive() {
            holding.add_lot(Lot {
                units: transaction.units,
                price: transaction.price,
                amount: transaction.amount,
                date: transaction.date,
            });
            return Ok(());
        }

        let disposed = transaction.units.abs();
        let shortfall = holding.reduce_lots_fifo(disposed);
        if shortfall > Decimal::ZERO {
            // Only reachable in lenient mode; strict rejected above.
            warn!(
                "Disposal of {} units on {} dated {} exceeds lot balance by {}. Dropping remainder.",
                disposed, key, transaction.date, shortfall
            );
        }
        Ok(())
    }
}
