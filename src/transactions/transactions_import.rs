//! Import boundary for the statement document.
//!
//! The document carries a top-level `data` array whose first element holds
//! the transaction list (`dtTransaction`) and the NAV summary (`dtSummary`).
//! Every numeric field arrives as text; this module is the strict
//! parse-and-validate step that turns the raw records into typed models or
//! fails with a diagnostic identifying the offending record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::transactions::{PriceSummary, Transaction};

/// Date format used by the statement, e.g. "14-Mar-2024"
const STATEMENT_DATE_FORMAT: &str = "%d-%b-%Y";

/// Fully parsed statement content.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub summary: Vec<PriceSummary>,
}

// --- Raw wire models ---

#[derive(Debug, Deserialize)]
struct StatementDocument {
    data: Vec<StatementBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct StatementBlock {
    #[serde(default, rename = "dtTransaction")]
    transactions: Vec<RawTransaction>,
    #[serde(default, rename = "dtSummary")]
    summary: Vec<RawPriceSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    #[serde(default)]
    scheme: String,
    #[serde(default)]
    folio: String,
    #[serde(default)]
    trxn_date: String,
    #[serde(default)]
    trxn_units: String,
    #[serde(default)]
    trxn_amount: String,
    #[serde(default)]
    purchase_price: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPriceSummary {
    #[serde(default)]
    scheme: String,
    #[serde(default)]
    scheme_name: String,
    #[serde(default)]
    nav: String,
}

/// Parses the statement document from its JSON text.
///
/// Only the first `data` block is read; an empty `data` array yields an
/// empty statement.
pub fn parse_document(json: &str) -> Result<Statement> {
    let document: StatementDocument = serde_json::from_str(json)?;
    let block = document.data.into_iter().next().unwrap_or_default();

    let transactions = block
        .transactions
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_transaction(index, raw))
        .collect::<std::result::Result<Vec<_>, ValidationError>>()?;

    let summary = block
        .summary
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_price_summary(index, raw))
        .collect::<std::result::Result<Vec<_>, ValidationError>>()?;

    Ok(Statement {
        transactions,
        summary,
    })
}

fn parse_transaction(
    index: usize,
    raw: &RawTransaction,
) -> std::result::Result<Transaction, ValidationError> {
    let record = format!("transaction #{} ({}/{})", index + 1, raw.scheme, raw.folio);

    require_field("scheme", &raw.scheme, &record)?;
    require_field("folio", &raw.folio, &record)?;
    require_field("trxnDate", &raw.trxn_date, &record)?;
    require_field("trxnUnits", &raw.trxn_units, &record)?;
    require_field("trxnAmount", &raw.trxn_amount, &record)?;

    let units = parse_decimal_field("trxnUnits", &raw.trxn_units, &record)?;
    let amount = parse_decimal_field("trxnAmount", &raw.trxn_amount, &record)?;

    // A blank purchase price is normal for disposals.
    let price = match raw.purchase_price.as_deref() {
        None => Decimal::ZERO,
        Some(text) if text.trim().is_empty() => Decimal::ZERO,
        Some(text) => parse_decimal_field("purchasePrice", text, &record)?,
    };

    let date = parse_date_field("trxnDate", &raw.trxn_date, &record)?;

    Ok(Transaction {
        scheme: raw.scheme.clone(),
        folio: raw.folio.clone(),
        units,
        amount,
        price,
        date,
    })
}

fn parse_price_summary(
    index: usize,
    raw: &RawPriceSummary,
) -> std::result::Result<PriceSummary, ValidationError> {
    let record = format!("summary #{} ({})", index + 1, raw.scheme);

    require_field("scheme", &raw.scheme, &record)?;
    require_field("nav", &raw.nav, &record)?;

    let nav = parse_decimal_field("nav", &raw.nav, &record)?;

    Ok(PriceSummary {
        scheme: raw.scheme.clone(),
        scheme_name: raw.scheme_name.clone(),
        nav,
    })
}

fn require_field(
    field: &str,
    value: &str,
    record: &str,
) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
            record: record.to_string(),
        });
    }
    Ok(())
}

fn parse_decimal_field(
    field: &str,
    value: &str,
    record: &str,
) -> std::result::Result<Decimal, ValidationError> {
    Decimal::from_str(value.trim()).map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        record: record.to_string(),
        value: value.to_string(),
    })
}

fn parse_date_field(
    field: &str,
    value: &str,
    record: &str,
) -> std::result::Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), STATEMENT_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field: field.to_string(),
            record: record.to_string(),
            value: value.to_string(),
        }
    })
}
