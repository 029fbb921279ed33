//!
//! Evaluation of the formulas the report emits.
//!

use once_cell::sync::Lazy;
use regex::Regex;

use crate::statistics::Summary;

use super::column_index;

/// `AVERAGE(B2:D2)` or `STDEV(B2:D2)`.
static AGGREGATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(AVERAGE|STDEV)\(([A-Z]+)([0-9]+):([A-Z]+)([0-9]+)\)$").expect("Always valid")
});

/// A single cell reference such as `B2`.
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+)([0-9]+)$").expect("Always valid"));

///
/// Evaluates a report formula.
///
/// Supports `AVERAGE(<range>)`, `STDEV(<range>)` over a single row, and sums of
/// products of powers of cells and numbers such as `B2^2*C2^1+D2*0.5`. `value` resolves
/// a 0-based cell position to its numeric value.
///
/// Returns `None` for anything else or when a referenced cell has no numeric value.
///
pub fn evaluate<F>(formula: &str, value: F) -> Option<f64>
where
    F: Fn(u32, u16) -> Option<f64>,
{
    let formula = formula.trim().trim_start_matches('=');

    if let Some(captures) = AGGREGATE.captures(formula) {
        let first_column = column_index(&captures[2])?;
        let first_row = captures[3].parse::<u32>().ok()?.checked_sub(1)?;
        let last_column = column_index(&captures[4])?;
        let last_row = captures[5].parse::<u32>().ok()?.checked_sub(1)?;
        if first_row != last_row {
            return None;
        }

        let samples = (first_column..=last_column)
            .map(|column| value(first_row, column))
            .collect::<Option<Vec<f64>>>()?;
        let summary = Summary::new(samples.as_slice())?;
        return match &captures[1] {
            "AVERAGE" => Some(summary.mean),
            _ => summary.standard_deviation,
        };
    }

    let operand = |operand: &str| -> Option<f64> {
        match REFERENCE.captures(operand) {
            Some(captures) => {
                let column = column_index(&captures[1])?;
                let row = captures[2].parse::<u32>().ok()?.checked_sub(1)?;
                value(row, column)
            }
            None => operand.parse::<f64>().ok(),
        }
    };

    let mut sum = 0.0;
    for term in formula.split('+') {
        let mut product = 1.0;
        for factor in term.split('*') {
            let factor = match factor.split_once('^') {
                Some((base, exponent)) => operand(base)?.powf(exponent.parse::<f64>().ok()?),
                None => operand(factor)?,
            };
            product *= factor;
        }
        sum += product;
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    fn grid(row: u32, column: u16) -> Option<f64> {
        match (row, column) {
            (1, 1) => Some(4.0),
            (1, 2) => Some(5.0),
            (1, 3) => Some(10.0),
            (1, 4) => Some(1.0),
            (1, 5) => Some(2.0),
            (1, 6) => Some(3.0),
            _ => None,
        }
    }

    #[test]
    fn power_products() {
        assert_eq!(evaluate("B2^2*C2^1", grid), Some(80.0));
        assert_eq!(evaluate("=B2^2*C2^1+D2*0.5", grid), Some(85.0));
        assert_eq!(evaluate("B2^-1*D2*-2", grid), Some(-5.0));
    }

    #[test]
    fn aggregates() {
        assert_eq!(evaluate("AVERAGE(E2:G2)", grid), Some(2.0));
        assert_eq!(evaluate("STDEV(E2:G2)", grid), Some(1.0));
        assert_eq!(evaluate("STDEV(E2:E2)", grid), None);
    }

    #[test]
    fn repeated_evaluation() {
        for _ in 0..10_000 {
            assert_eq!(evaluate("AVERAGE(E2:G2)", grid), Some(2.0));
            assert_eq!(evaluate("B2^2*C2^1", grid), Some(80.0));
        }
    }

    #[test]
    fn unresolved_references() {
        assert_eq!(evaluate("Z9^2", grid), None);
        assert_eq!(evaluate("AVERAGE(E2:G3)", grid), None);
        assert_eq!(evaluate("SUM(E2:G2)", grid), None);
    }
}
