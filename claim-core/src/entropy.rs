//! Binary entropy `h2` and its inverse on `[0, 1/2]`.

use crate::error::PreconditionFault;
use crate::solver::brentq;

/// `h2(x) - a`, with `h2(0) = h2(1) = 0` by continuity.
///
/// This is the root-finding target of [`entropy_inverse`]; it is not itself an
/// entropy value.
pub fn entropy_shifted(x: f64, a: f64) -> Result<f64, PreconditionFault> {
    if !(0.0..=1.0).contains(&x) {
        return Err(PreconditionFault::EntropyArgument { x });
    }
    Ok(shifted_unchecked(x, a))
}

#[inline]
fn shifted_unchecked(x: f64, a: f64) -> f64 {
    if x == 0.0 || x == 1.0 {
        return -a;
    }
    -x * x.log2() - (1.0 - x) * (1.0 - x).log2() - a
}

/// Binary entropy in bits.
pub fn entropy(x: f64) -> Result<f64, PreconditionFault> {
    entropy_shifted(x, 0.0)
}

/// The unique `x` in `[0, 1/2]` with `h2(x) = y`.
pub fn entropy_inverse(y: f64) -> Result<f64, PreconditionFault> {
    if !(0.0..=1.0).contains(&y) {
        return Err(PreconditionFault::EntropyInverseArgument { y });
    }
    if y == 0.0 {
        return Ok(0.0);
    }
    if y == 1.0 {
        return Ok(0.5);
    }
    // h2 is increasing on [0, 1/2], so the bracket always holds exactly one root.
    Ok(brentq(|x| shifted_unchecked(x, y), 0.0, 0.5)?)
}
