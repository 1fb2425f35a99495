//! Human-readable rendering of a [`PortfolioReport`]. Pure text assembly;
//! where the text goes is the caller's concern.

use crate::constants::CURRENCY_SYMBOL;
use crate::portfolio::PortfolioReport;

/// Formats the per-holding breakdown, portfolio totals and XIRR line.
///
/// The return line reads `unavailable` when the solver failed; the totals
/// do not depend on it and are always present.
pub fn format_report(report: &PortfolioReport) -> String {
    let mut out = String::new();

    out.push_str("Net Units and Value for Each Fund:\n");
    for position in &report.valuation.positions {
        out.push_str(&format!("Scheme: {}\n", position.scheme_name));
        out.push_str(&format!(" - Remaining Units: {:.3}\n", position.units));
        out.push_str(&format!(
            " - Net Value as of Today: {}{:.2}\n\n",
            CURRENCY_SYMBOL, position.current_value
        ));
    }

    out.push_str(&format!(
        "Total Portfolio Value: {}{:.2}\n",
        CURRENCY_SYMBOL, report.valuation.total_value
    ));
    out.push_str(&format!(
        "Total Portfolio Gain: {}{:.2}\n",
        CURRENCY_SYMBOL, report.valuation.total_gain
    ));

    match report.annualized_return {
        Some(rate) => out.push_str(&format!("XIRR: {:.2}%\n", rate * 100.0)),
        None => out.push_str("XIRR: unavailable\n"),
    }

    out
}
