//! Checks the RLPN + Dumer86 parameter table against the constraint that the
//! extra RLPN steps stay negligible in front of the FFT:
//!
//!   bound_S + (1 - s) · Dumer91((R - s)/(1 - s), u/(1 - s), λ, ω) <= s
//!
//! for every row, with `(λ, ω)` taken from [`constants::DUMER91_PARAMS`].

pub mod constants;
pub mod entropy;
pub mod error;
pub mod isd;
pub mod solver;
pub mod table;
pub mod verify;

pub use entropy::{entropy, entropy_inverse, entropy_shifted};
pub use error::{PreconditionFault, SolveError, VerifyError};
pub use isd::{isd_dumer91, isd_dumer91_breakdown, IsdCost};
pub use table::{parse_table, ParameterRow};
pub use verify::{
    bound_expected_size, verify_default_table, verify_row, verify_rows, verify_table, RowReport,
    SubProblem, VerificationJournal,
};
