use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveError {
    NotBracketed { f_lo: f64, f_hi: f64 },
    NoConvergence { iterations: usize, last: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBracketed { f_lo, f_hi } => write!(
                f,
                "root not bracketed: f(lo)={f_lo:e}, f(hi)={f_hi:e} have the same sign"
            ),
            Self::NoConvergence { iterations, last } => {
                write!(f, "no convergence after {iterations} iterations (last x={last:e})")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Arguments outside the domain of the entropy or cost functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreconditionFault {
    EntropyArgument { x: f64 },
    EntropyInverseArgument { y: f64 },
    ExtensionSize { lambda: f64, upper: f64 },
    ErrorSplit { omega: f64, lower: f64, upper: f64 },
    Solver(SolveError),
}

impl fmt::Display for PreconditionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyArgument { x } => write!(f, "entropy argument {x} outside [0, 1]"),
            Self::EntropyInverseArgument { y } => {
                write!(f, "entropy inverse argument {y} outside [0, 1]")
            }
            Self::ExtensionSize { lambda, upper } => {
                write!(f, "extension size lambda={lambda} outside (0, {upper})")
            }
            Self::ErrorSplit {
                omega,
                lower,
                upper,
            } => write!(f, "error split omega={omega} outside ({lower}, {upper})"),
            Self::Solver(err) => write!(f, "entropy inverse solver failed: {err}"),
        }
    }
}

impl std::error::Error for PreconditionFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SolveError> for PreconditionFault {
    fn from(err: SolveError) -> Self {
        Self::Solver(err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    EmptyTable,
    FieldCount {
        line: usize,
        expected: usize,
        actual: usize,
    },
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
    RowCountMismatch {
        table_rows: usize,
        optimizer_params: usize,
    },
    Precondition {
        row: usize,
        fault: PreconditionFault,
    },
    InequalityViolated {
        row: usize,
        bound_expected_size: f64,
        sub_problem_cost: f64,
        s: f64,
    },
}

impl VerifyError {
    /// Data row the failure was detected at, if it is tied to one.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Precondition { row, .. } | Self::InequalityViolated { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "parameter table is empty (missing header row)"),
            Self::FieldCount {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {line}: expected {expected} fields, found {actual}"
            ),
            Self::InvalidNumber {
                line,
                column,
                value,
            } => write!(f, "line {line}: column {column} is not a number: {value:?}"),
            Self::RowCountMismatch {
                table_rows,
                optimizer_params,
            } => write!(
                f,
                "row count mismatch: table has {table_rows} data rows, optimizer table has {optimizer_params} entries"
            ),
            Self::Precondition { row, fault } => {
                write!(f, "precondition violated at row {row}: {fault}")
            }
            Self::InequalityViolated {
                row,
                bound_expected_size,
                sub_problem_cost,
                s,
            } => write!(
                f,
                "claim unverified at row {row}: bound_S + sub_cost = {bound_expected_size} + {sub_problem_cost} = {} > s = {s}",
                bound_expected_size + sub_problem_cost
            ),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Precondition { fault, .. } => Some(fault),
            _ => None,
        }
    }
}
