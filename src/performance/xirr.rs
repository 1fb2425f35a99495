//! Annualized money-weighted return (XIRR) via Newton-Raphson.

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{
    DAYS_PER_YEAR, DERIVATIVE_EPSILON, INITIAL_RATE_GUESS, MAX_SOLVER_ITERATIONS, NPV_TOLERANCE,
};
use crate::errors::SolverError;
use crate::performance::Cashflow;

/// Finds the rate `r` that zeroes `NPV(r) = Σ amount_i / (1+r)^(years_i)`,
/// where `years_i` is the signed day count from the FIRST cashflow's date
/// divided by 365.
///
/// Decimal amounts drop to `f64` here; the discount exponents are irrational
/// so this is the one boundary where exact arithmetic ends. The result is a
/// fraction (0.12 = 12% annualized).
pub fn annualized_return(cashflows: &[Cashflow]) -> Result<f64, SolverError> {
    validate_cashflows(cashflows)?;

    let base_date = cashflows[0].date;
    let mut flows = Vec::with_capacity(cashflows.len());
    for cf in cashflows {
        let years = (cf.date - base_date).num_days() as f64 / DAYS_PER_YEAR;
        let amount = cf.amount.to_f64().ok_or_else(|| {
            SolverError::DegenerateInput(format!(
                "cashflow amount {} is not representable as f64",
                cf.amount
            ))
        })?;
        flows.push((years, amount));
    }

    let mut rate = INITIAL_RATE_GUESS;
    for iteration in 0..MAX_SOLVER_ITERATIONS {
        let (npv, derivative) = npv_and_derivative(&flows, rate);

        if npv.abs() < NPV_TOLERANCE {
            debug!("Solver converged to {} after {} iterations", rate, iteration);
            return Ok(rate);
        }
        if derivative.abs() < DERIVATIVE_EPSILON {
            return Err(SolverError::NoConvergence {
                iterations: iteration,
            });
        }

        rate -= npv / derivative;

        // The discount factor is singular at -100%.
        if rate <= -1.0 {
            return Err(SolverError::NoConvergence {
                iterations: iteration,
            });
        }
    }

    Err(SolverError::NoConvergence {
        iterations: MAX_SOLVER_ITERATIONS,
    })
}

/// NPV and its analytic derivative with respect to the rate.
fn npv_and_derivative(flows: &[(f64, f64)], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut derivative = 0.0;

    for &(years, amount) in flows {
        npv += amount * (1.0 + rate).powf(-years);
        // d/dr [a * (1+r)^(-t)] = -t * a * (1+r)^(-t-1)
        derivative -= years * amount * (1.0 + rate).powf(-years - 1.0);
    }

    (npv, derivative)
}

fn validate_cashflows(cashflows: &[Cashflow]) -> Result<(), SolverError> {
    if cashflows.is_empty() {
        return Err(SolverError::DegenerateInput(
            "empty cashflow series".to_string(),
        ));
    }
    if !cashflows.iter().any(|cf| cf.amount < Decimal::ZERO) {
        return Err(SolverError::DegenerateInput(
            "no invested (negative) cashflow".to_string(),
        ));
    }
    if !cashflows.iter().any(|cf| cf.amount > Decimal::ZERO) {
        return Err(SolverError::DegenerateInput(
            "no returned (positive) cashflow".to_string(),
        ));
    }
    if cashflows.iter().all(|cf| cf.date == cashflows[0].date) {
        return Err(SolverError::DegenerateInput(
            "all cashflows share a single date".to_string(),
        ));
    }
    Ok(())
}
