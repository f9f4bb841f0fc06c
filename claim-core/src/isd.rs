//! Asymptotic cost of the Dumer91 information-set decoder.
//!
//! All quantities are exponents relative to the code length `n`: a cost `c`
//! stands for `2^(c·n)`.

use serde::{Deserialize, Serialize};

use crate::entropy::entropy;
use crate::error::PreconditionFault;

/// Exponents of one Dumer91 call on a code of rate `R` at relative distance `tau`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsdCost {
    /// Log-probability that `omega` of the `tau` errors fall in an extended
    /// information set of size `R + lambda`.
    pub success_log_prob: f64,
    /// Cost of building and merging the candidate lists.
    pub list_cost: f64,
    /// `list_cost - success_log_prob`.
    pub exponent: f64,
}

pub(crate) fn check_dumer91_params(
    rate: f64,
    tau: f64,
    lambda: f64,
    omega: f64,
) -> Result<(), PreconditionFault> {
    let lambda_upper = 1.0 - rate;
    let lambda_ok = lambda > 0.0 && lambda < lambda_upper;
    if !lambda_ok {
        return Err(PreconditionFault::ExtensionSize {
            lambda,
            upper: lambda_upper,
        });
    }

    let omega_lower = (rate + lambda + tau - 1.0).max(0.0);
    let omega_upper = tau.min(rate + lambda);
    let omega_ok = omega > omega_lower && omega < omega_upper;
    if !omega_ok {
        return Err(PreconditionFault::ErrorSplit {
            omega,
            lower: omega_lower,
            upper: omega_upper,
        });
    }
    Ok(())
}

pub fn isd_dumer91_breakdown(
    rate: f64,
    tau: f64,
    lambda: f64,
    omega: f64,
) -> Result<IsdCost, PreconditionFault> {
    check_dumer91_params(rate, tau, lambda, omega)?;

    let info_set = rate + lambda;
    let redundancy = 1.0 - rate - lambda;
    let split_entropy = info_set * entropy(omega / info_set)?;

    let success_log_prob =
        redundancy * entropy((tau - omega) / redundancy)? + split_entropy - entropy(tau)?;
    let list_cost = (split_entropy / 2.0).max(split_entropy - lambda);

    Ok(IsdCost {
        success_log_prob,
        list_cost,
        exponent: list_cost - success_log_prob,
    })
}

pub fn isd_dumer91(rate: f64, tau: f64, lambda: f64, omega: f64) -> Result<f64, PreconditionFault> {
    isd_dumer91_breakdown(rate, tau, lambda, omega).map(|cost| cost.exponent)
}
