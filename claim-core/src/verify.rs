use serde::{Deserialize, Serialize};

use crate::constants::DUMER91_PARAMS;
use crate::entropy::entropy;
use crate::error::{PreconditionFault, VerifyError};
use crate::isd::isd_dumer91;
use crate::table::{parse_table, ParameterRow};

/// Dumer91 instance solved by SOLVE-SUBPROBLEM: a code of rate `(R - s)/(1 - s)`
/// decoded at relative distance `u/(1 - s)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubProblem {
    pub rate: f64,
    pub distance: f64,
    pub lambda: f64,
    pub omega: f64,
}

impl SubProblem {
    /// Rescales the row and its `(lambda, omega)` pair by `1 - s`.
    pub fn rescaled(row: &ParameterRow, (lambda, omega): (f64, f64)) -> Self {
        let scale = 1.0 - row.s;
        Self {
            rate: (row.rate - row.s) / scale,
            distance: row.u / scale,
            lambda: lambda / scale,
            omega: omega / scale,
        }
    }

    pub fn cost(&self) -> Result<f64, PreconditionFault> {
        isd_dumer91(self.rate, self.distance, self.lambda, self.omega)
    }
}

/// Upper bound on the exponent of the expected size of `S`, floored at zero.
///
/// The first entropy term is normalised by `s` and the second by `1 - s`.
pub fn bound_expected_size(row: &ParameterRow) -> Result<f64, PreconditionFault> {
    let s = row.s;
    let bound = s * entropy((row.t - row.u) / s)? + (1.0 - s) * entropy(row.u / (1.0 - s))?
        - (1.0 - row.rate);
    Ok(bound.max(0.0))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowReport {
    pub row: usize,
    pub params: ParameterRow,
    pub sub_problem: SubProblem,
    pub bound_expected_size: f64,
    pub sub_problem_cost: f64,
    /// `s - (bound_expected_size + sub_problem_cost)`; never negative in a report.
    pub slack: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationJournal {
    pub rows_checked: usize,
    pub tightest_row: Option<usize>,
    pub min_slack: Option<f64>,
    pub rows: Vec<RowReport>,
}

pub fn verify_row(
    index: usize,
    row: &ParameterRow,
    optimizer: (f64, f64),
) -> Result<RowReport, VerifyError> {
    let at_row = |fault: PreconditionFault| VerifyError::Precondition { row: index, fault };

    let bound_expected_size = bound_expected_size(row).map_err(at_row)?;
    let sub_problem = SubProblem::rescaled(row, optimizer);
    let sub_problem_cost = (1.0 - row.s) * sub_problem.cost().map_err(at_row)?;

    let total = bound_expected_size + sub_problem_cost;
    if total > row.s || total.is_nan() {
        return Err(VerifyError::InequalityViolated {
            row: index,
            bound_expected_size,
            sub_problem_cost,
            s: row.s,
        });
    }

    Ok(RowReport {
        row: index,
        params: *row,
        sub_problem,
        bound_expected_size,
        sub_problem_cost,
        slack: row.s - total,
    })
}

/// Checks every row in order and stops at the first failure.
pub fn verify_rows(
    rows: &[ParameterRow],
    optimizer_params: &[(f64, f64)],
) -> Result<VerificationJournal, VerifyError> {
    if rows.len() != optimizer_params.len() {
        return Err(VerifyError::RowCountMismatch {
            table_rows: rows.len(),
            optimizer_params: optimizer_params.len(),
        });
    }

    let mut reports = Vec::with_capacity(rows.len());
    for (index, (row, &pair)) in rows.iter().zip(optimizer_params).enumerate() {
        reports.push(verify_row(index, row, pair)?);
    }

    let tightest = reports.iter().min_by(|a, b| a.slack.total_cmp(&b.slack));

    Ok(VerificationJournal {
        rows_checked: reports.len(),
        tightest_row: tightest.map(|report| report.row),
        min_slack: tightest.map(|report| report.slack),
        rows: reports,
    })
}

pub fn verify_table(
    input: &str,
    optimizer_params: &[(f64, f64)],
) -> Result<VerificationJournal, VerifyError> {
    let rows = parse_table(input)?;
    verify_rows(&rows, optimizer_params)
}

/// Verifies the RLPN + Dumer86 table against the built-in Dumer91 parameters.
pub fn verify_default_table(input: &str) -> Result<VerificationJournal, VerifyError> {
    verify_table(input, &DUMER91_PARAMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSING: ParameterRow = ParameterRow {
        rate: 0.5,
        claimed_complexity: 0.0,
        s: 0.09,
        u: 0.089,
        w: 0.0,
        t: 0.121,
    };
    const PASSING_PAIR: (f64, f64) = (0.009_931_960_7, 0.003_139_916_9);

    #[test]
    fn rescales_by_one_minus_s() {
        let sub = SubProblem::rescaled(&PASSING, (0.091, 0.0091));
        assert!((sub.rate - 0.41 / 0.91).abs() < 1e-15);
        assert!((sub.distance - 0.089 / 0.91).abs() < 1e-15);
        assert!((sub.lambda - 0.1).abs() < 1e-15);
        assert!((sub.omega - 0.01).abs() < 1e-15);
    }

    #[test]
    fn bound_is_floored_at_zero() {
        let row = ParameterRow {
            t: 0.09,
            ..PASSING
        };
        assert_eq!(bound_expected_size(&row).unwrap(), 0.0);
    }

    #[test]
    fn bound_rejects_distance_beyond_shrinkage() {
        let row = ParameterRow {
            t: PASSING.u + 2.0 * PASSING.s,
            ..PASSING
        };
        assert!(matches!(
            bound_expected_size(&row),
            Err(PreconditionFault::EntropyArgument { .. })
        ));
    }

    #[test]
    fn passing_row_reports_positive_slack() {
        let report = verify_row(0, &PASSING, PASSING_PAIR).unwrap();

        assert!((report.bound_expected_size - 0.004_914_558_454_997_664).abs() < 1e-12);
        assert!((report.sub_problem_cost - 0.082_395_912_435_655_74).abs() < 1e-12);
        assert!((report.slack - 0.002_689_529_109_346_597).abs() < 1e-12);
    }

    #[test]
    fn violated_row_stops_with_inequality_error() {
        let row = ParameterRow { s: 0.08, ..PASSING };
        let err = verify_row(3, &row, PASSING_PAIR).unwrap_err();

        assert!(matches!(err, VerifyError::InequalityViolated { row: 3, .. }));
        assert_eq!(err.row(), Some(3));
    }

    #[test]
    fn precondition_fault_carries_row_index() {
        // lambda / (1 - s) >= 1 - R'
        let err = verify_row(7, &PASSING, (0.6, 0.003)).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Precondition {
                row: 7,
                fault: PreconditionFault::ExtensionSize { .. }
            }
        ));
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let rows = [PASSING; 5];
        let params = [PASSING_PAIR; 4];
        assert_eq!(
            verify_rows(&rows, &params),
            Err(VerifyError::RowCountMismatch {
                table_rows: 5,
                optimizer_params: 4,
            })
        );
    }

    #[test]
    fn stops_at_first_failing_row() {
        let failing = ParameterRow { s: 0.08, ..PASSING };
        let rows = [PASSING, failing, failing];
        let err = verify_rows(&rows, &[PASSING_PAIR; 3]).unwrap_err();
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn journal_tracks_tightest_row() {
        let looser = ParameterRow { t: 0.1, ..PASSING };
        let journal = verify_rows(&[looser, PASSING], &[PASSING_PAIR; 2]).unwrap();

        assert_eq!(journal.rows_checked, 2);
        assert_eq!(journal.tightest_row, Some(1));
        assert_eq!(journal.min_slack, Some(journal.rows[1].slack));
    }

    #[test]
    fn empty_table_needs_empty_optimizer_table() {
        let journal = verify_rows(&[], &[]).unwrap();
        assert_eq!(journal.rows_checked, 0);
        assert_eq!(journal.tightest_row, None);
    }

    #[test]
    fn default_table_requires_every_row() {
        let err = verify_default_table("R;C;s;u;w;t\n0.5;0;0.09;0.089;0;0.121").unwrap_err();
        assert_eq!(
            err,
            VerifyError::RowCountMismatch {
                table_rows: 1,
                optimizer_params: DUMER91_PARAMS.len(),
            }
        );
    }
}
