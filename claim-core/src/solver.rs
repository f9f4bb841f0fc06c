//! Brent's method for a sign change of a continuous function on `[lo, hi]`.
//!
//! Step selection follows the classic `brentq` formulation: inverse quadratic
//! extrapolation or secant interpolation when the step stays well inside the
//! bracket, bisection otherwise.

use crate::constants::{SOLVER_MAX_ITER, SOLVER_RTOL, SOLVER_XTOL};
use crate::error::SolveError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BrentOptions {
    pub(crate) xtol: f64,
    pub(crate) rtol: f64,
    pub(crate) max_iter: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        Self {
            xtol: SOLVER_XTOL,
            rtol: SOLVER_RTOL,
            max_iter: SOLVER_MAX_ITER,
        }
    }
}

pub fn brentq<F>(f: F, lo: f64, hi: f64) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> f64,
{
    brentq_with(f, lo, hi, BrentOptions::default())
}

pub(crate) fn brentq_with<F>(mut f: F, lo: f64, hi: f64, opts: BrentOptions) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let mut xpre = lo;
    let mut xcur = hi;
    let mut fpre = f(xpre);
    let mut fcur = f(xcur);

    if fpre == 0.0 {
        return Ok(xpre);
    }
    if fcur == 0.0 {
        return Ok(xcur);
    }
    if fpre.is_sign_negative() == fcur.is_sign_negative() || fpre.is_nan() || fcur.is_nan() {
        return Err(SolveError::NotBracketed {
            f_lo: fpre,
            f_hi: fcur,
        });
    }

    // xblk is the contrapoint: f(xblk) and f(xcur) always straddle the root.
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for _ in 0..opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (opts.xtol + opts.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };

            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }

    Err(SolveError::NoConvergence {
        iterations: opts.max_iter,
        last: xcur,
    })
}
