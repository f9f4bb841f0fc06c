use serde::{Deserialize, Serialize};

use crate::constants::{TABLE_COLUMNS, TABLE_DELIMITER};
use crate::error::VerifyError;

/// One data row of the RLPN parameter table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    /// Code rate `R`.
    pub rate: f64,
    pub claimed_complexity: f64,
    /// Shrinkage factor `s`.
    pub s: f64,
    /// Normalized distance `u`.
    pub u: f64,
    /// Subproblem weight `w`.
    pub w: f64,
    /// Total distance `t`.
    pub t: f64,
}

impl ParameterRow {
    pub fn from_fields(fields: [f64; 6]) -> Self {
        let [rate, claimed_complexity, s, u, w, t] = fields;
        Self {
            rate,
            claimed_complexity,
            s,
            u,
            w,
            t,
        }
    }
}

/// Parses a semicolon-delimited table. The first line is a header and is
/// skipped. Blank lines are only allowed after the last data row.
pub fn parse_table(input: &str) -> Result<Vec<ParameterRow>, VerifyError> {
    let mut lines = input.lines().enumerate();
    if lines.next().is_none() {
        return Err(VerifyError::EmptyTable);
    }

    let data: Vec<(usize, &str)> = lines.collect();
    let end = data
        .iter()
        .rposition(|(_, line)| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut rows = Vec::with_capacity(end);
    for &(index, line) in &data[..end] {
        if line.trim().is_empty() {
            return Err(VerifyError::FieldCount {
                line: index + 1,
                expected: TABLE_COLUMNS.len(),
                actual: 0,
            });
        }
        rows.push(parse_row(index + 1, line)?);
    }
    Ok(rows)
}

fn parse_row(line_no: usize, line: &str) -> Result<ParameterRow, VerifyError> {
    let tokens: Vec<&str> = line.split(TABLE_DELIMITER).collect();
    if tokens.len() != TABLE_COLUMNS.len() {
        return Err(VerifyError::FieldCount {
            line: line_no,
            expected: TABLE_COLUMNS.len(),
            actual: tokens.len(),
        });
    }

    let mut fields = [0.0f64; 6];
    for (slot, (token, column)) in fields.iter_mut().zip(tokens.iter().zip(TABLE_COLUMNS)) {
        let token = token.trim();
        *slot = token.parse::<f64>().map_err(|_| VerifyError::InvalidNumber {
            line: line_no,
            column,
            value: token.to_string(),
        })?;
    }
    Ok(ParameterRow::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "R;C;s;u;w;t";

    #[test]
    fn skips_header_and_trailing_blank_lines() {
        let input = format!("{HEADER}\n0.5;0.1;0.09;0.089;0.01;0.121\n0.3; 0.2 ;0.01;0.013;0;0.016\n\n");
        let rows = parse_table(&input).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            ParameterRow {
                rate: 0.5,
                claimed_complexity: 0.1,
                s: 0.09,
                u: 0.089,
                w: 0.01,
                t: 0.121,
            }
        );
        assert_eq!(rows[1].claimed_complexity, 0.2);
        assert_eq!(rows[1].w, 0.0);
    }

    #[test]
    fn rejects_blank_line_between_rows() {
        let input = format!("{HEADER}\n0.5;0.1;0.09;0.089;0.01;0.121\n\n   \n0.5;0.1;0.09;0.089;0.01;0.121\n");
        assert_eq!(
            parse_table(&input),
            Err(VerifyError::FieldCount {
                line: 3,
                expected: 6,
                actual: 0,
            })
        );
    }

    #[test]
    fn rejects_blank_line_right_after_header() {
        let input = format!("{HEADER}\n  \n0.5;0.1;0.09;0.089;0.01;0.121");
        assert!(matches!(
            parse_table(&input),
            Err(VerifyError::FieldCount { line: 2, actual: 0, .. })
        ));
    }

    #[test]
    fn header_only_table_has_no_rows() {
        assert!(parse_table(HEADER).unwrap().is_empty());
        assert!(parse_table(&format!("{HEADER}\n\n \n")).unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_table(""), Err(VerifyError::EmptyTable));
    }

    #[test]
    fn header_is_not_parsed() {
        // a malformed header is accepted as long as the data rows are valid
        let rows = parse_table("not;a;header\n1;2;3;4;5;6").unwrap();
        assert_eq!(rows[0].t, 6.0);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_table(&format!("{HEADER}\n0.5;0.1;0.09;0.089;0.01")).unwrap_err();
        assert_eq!(
            err,
            VerifyError::FieldCount {
                line: 2,
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = parse_table(&format!("{HEADER}\n0.5;0.1;0.09;0.089;0.01;0.12\n0.5;x;0.09;0.089;0.01;0.12"))
            .unwrap_err();
        assert_eq!(
            err,
            VerifyError::InvalidNumber {
                line: 3,
                column: "claimed_complexity",
                value: "x".to_string(),
            }
        );
    }
}
