use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::holdings::HoldingsLedger;
use crate::utils::decimal_serde::decimal_serde;

/// A dated, signed money flow. Negative = money invested, positive = money
/// returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashflow {
    pub date: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
}

/// Builds the money-weighted cashflow series: one negative flow per
/// remaining lot (its acquisition amount at its acquisition date), followed
/// by exactly one terminal flow of the portfolio's current value at `as_of`.
///
/// Historical disposals contribute nothing; only un-consumed cost basis
/// counts as invested money. The ledger's BTreeMap iteration keeps the
/// series order stable run to run.
pub fn assemble_cashflows(
    ledger: &HoldingsLedger,
    total_value: Decimal,
    as_of: NaiveDate,
) -> Vec<Cashflow> {
    let mut cashflows: Vec<Cashflow> = ledger
        .values()
        .flat_map(|holding| holding.lots.iter())
        .map(|lot| Cashflow {
            date: lot.date,
            amount: -lot.amount,
        })
        .collect();

    cashflows.push(Cashflow {
        date: as_of,
        amount: total_value,
    });
    cashflows
}
