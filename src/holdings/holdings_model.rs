use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

use crate::constants::QUANTITY_THRESHOLD;
use crate::utils::decimal_serde::decimal_serde;

/// Returns true when a unit balance is large enough to matter.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 8));
    quantity.abs() >= threshold
}

/// Identifies one lot queue. Transactions are tracked at folio level, so the
/// key combines the scheme with the folio it was bought under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingKey {
    pub scheme: String,
    pub folio: String,
}

impl HoldingKey {
    pub fn new(scheme: impl Into<String>, folio: impl Into<String>) -> Self {
        HoldingKey {
            scheme: scheme.into(),
            folio: folio.into(),
        }
    }
}

impl fmt::Display for HoldingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scheme, self.folio)
    }
}

/// One acquisition still held, in whole or in part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// Units remaining after FIFO relief. Invariant: > 0 while queued.
    #[serde(with = "decimal_serde")]
    pub units: Decimal,
    /// Acquisition price per unit.
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    /// Original acquisition amount. Not pro-rated on partial relief, so the
    /// cashflow series sees the full invested amount while any of the lot
    /// remains.
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Net unit balance plus the FIFO queue of open lots, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Net balance across all transactions. Diverges from [`lot_units`]
    /// after an oversold disposal.
    ///
    /// [`lot_units`]: Holding::lot_units
    #[serde(with = "decimal_serde")]
    pub units: Decimal,
    pub lots: VecDeque<Lot>,
}

impl Holding {
    pub fn new() -> Self {
        Holding::default()
    }

    /// Appends an acquisition lot and adds its units to the net balance.
    pub fn add_lot(&mut self, lot: Lot) {
        self.units += lot.units;
        self.lots.push_back(lot);
    }

    /// Relieves `quantity` units from the queue front, oldest lots first.
    ///
    /// The net balance is reduced by the full `quantity` whether or not the
    /// queue can cover it. Returns the unmatched remainder, ZERO when the
    /// disposal was fully covered.
    ///
    /// A partially relieved lot left with less than the quantity threshold
    /// is popped with its dust, so the net balance can exceed [`lot_units`]
    /// by up to the threshold even without an oversell.
    ///
    /// [`lot_units`]: Holding::lot_units
    pub fn reduce_lots_fifo(&mut self, quantity: Decimal) -> Decimal {
        let mut outstanding = quantity;
        while outstanding > Decimal::ZERO {
            let Some(oldest) = self.lots.front_mut() else {
                break;
            };
            if oldest.units <= outstanding {
                outstanding -= oldest.units;
                self.lots.pop_front();
            } else {
                oldest.units -= outstanding;
                outstanding = Decimal::ZERO;
                if !is_quantity_significant(&oldest.units) {
                    self.lots.pop_front();
                }
            }
        }
        self.units -= quantity;
        outstanding
    }

    /// Sum of units across remaining lots.
    pub fn lot_units(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.units).sum()
    }

    /// Acquisition cost of the remaining lots: Σ price × remaining units.
    pub fn cost_basis(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.price * lot.units).sum()
    }
}
