use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger calculation failed: {0}")]
    Calculator(#[from] CalculatorError),

    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Return solver failed: {0}")]
    Solver(#[from] SolverError),
}

/// Malformed or missing input data. All variants identify the offending
/// record so a statement-level diagnostic can point at it.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Malformed input document: {0}")]
    MalformedDocument(String),

    #[error("Required field '{field}' is missing on {record}")]
    MissingField { field: String, record: String },

    #[error("Invalid number in field '{field}' on {record}: '{value}'")]
    InvalidNumber {
        field: String,
        record: String,
        value: String,
    },

    #[error("Invalid date in field '{field}' on {record}: '{value}'")]
    InvalidDate {
        field: String,
        record: String,
        value: String,
    },
}

/// Errors raised while building the lot ledger
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Disposal of {disposed} units on {scheme}/{folio} exceeds lot balance by {shortfall}")]
    Oversold {
        scheme: String,
        folio: String,
        disposed: String,
        shortfall: String,
    },
}

/// Errors raised while valuing holdings against the price snapshot
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("No price snapshot entry for scheme '{0}'")]
    UnmatchedPrice(String),
}

/// Return solver failures, distinct from data errors so callers can tell
/// "bad input" apart from "no solution found".
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Degenerate cashflow series: {0}")]
    DegenerateInput(String),

    #[error("Rate iteration did not converge within {iterations} iterations")]
    NoConvergence { iterations: u32 },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::MalformedDocument(err.to_string()))
    }
}
