/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Quantity threshold below which a lot is considered fully consumed
pub const QUANTITY_THRESHOLD: &str = "0.00000001";

/// Currency symbol used by the textual report
pub const CURRENCY_SYMBOL: &str = "₹";

/// Day-count denominator for annualizing cashflow intervals
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Initial guess for the return solver (10% annualized)
pub const INITIAL_RATE_GUESS: f64 = 0.10;

/// Iteration bound for the return solver
pub const MAX_SOLVER_ITERATIONS: u32 = 100;

/// The solver has converged once |NPV| falls below this
pub const NPV_TOLERANCE: f64 = 1e-6;

/// Below this, the NPV derivative is treated as vanishing
pub const DERIVATIVE_EPSILON: f64 = 1e-10;
