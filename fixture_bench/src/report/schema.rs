//!
//! The report column schema.
//!

use crate::fixture::family::Family;

///
/// The role of a report column.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The fixture identifier.
    Fixture,
    /// A size dimension with its 0-based index.
    Dimension(usize),
    /// A trial duration with its 0-based index.
    Trial(usize),
    /// The mean trial duration.
    Mean,
    /// The standard deviation of the trial durations.
    Uncertainty,
    /// The fixture complexity.
    Complexity,
}

///
/// Spreadsheet number format.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Text or general numbers.
    General,
    /// Fixed-point with the given number of decimals.
    Fixed(u8),
    /// Scientific with the given number of mantissa decimals.
    Scientific(u8),
}

impl NumberFormat {
    ///
    /// Returns the spreadsheet number format code.
    ///
    pub fn code(&self) -> Option<String> {
        match self {
            Self::General => None,
            Self::Fixed(0) => Some("0".to_owned()),
            Self::Fixed(decimals) => Some(format!("0.{}", "0".repeat(*decimals as usize))),
            Self::Scientific(0) => Some("0E+00".to_owned()),
            Self::Scientific(decimals) => {
                Some(format!("0.{}E+00", "0".repeat(*decimals as usize)))
            }
        }
    }
}

///
/// Decimal precision per column family.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Decimals of trial and mean durations.
    pub time: u8,
    /// Decimals of the uncertainty.
    pub uncertainty: u8,
    /// Mantissa decimals of the complexity.
    pub complexity: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            time: 2,
            uncertainty: 1,
            complexity: 2,
        }
    }
}

///
/// A report column.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The header text before wrapping.
    pub header: String,
    /// The role of the column.
    pub kind: ColumnKind,
    /// The number format of the data cells.
    pub number_format: NumberFormat,
}

///
/// The report column schema.
///
/// Fixture, size dimensions, one column per trial, mean, uncertainty and complexity.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The columns, in sheet order.
    pub columns: Vec<Column>,
}

impl Schema {
    ///
    /// Builds the schema of a benchmark with `trials` trials per fixture.
    ///
    pub fn new(family: Family, trials: usize, precision: Precision) -> Self {
        let mut columns = Vec::with_capacity(family.dimension_count() + trials + 4);
        columns.push(Column {
            header: "Test File".to_owned(),
            kind: ColumnKind::Fixture,
            number_format: NumberFormat::General,
        });
        for (index, name) in family.dimension_names().iter().enumerate() {
            columns.push(Column {
                header: (*name).to_owned(),
                kind: ColumnKind::Dimension(index),
                number_format: NumberFormat::Fixed(0),
            });
        }
        for index in 0..trials {
            columns.push(Column {
                header: format!("Time {}", index + 1),
                kind: ColumnKind::Trial(index),
                number_format: NumberFormat::Fixed(precision.time),
            });
        }
        columns.push(Column {
            header: "Average Time".to_owned(),
            kind: ColumnKind::Mean,
            number_format: NumberFormat::Fixed(precision.time),
        });
        columns.push(Column {
            header: "Uncertainty".to_owned(),
            kind: ColumnKind::Uncertainty,
            number_format: NumberFormat::Fixed(precision.uncertainty),
        });
        columns.push(Column {
            header: "Complexity".to_owned(),
            kind: ColumnKind::Complexity,
            number_format: NumberFormat::Scientific(precision.complexity),
        });
        Self { columns }
    }

    ///
    /// Returns the 0-based column index of the given role.
    ///
    pub fn position(&self, kind: ColumnKind) -> Option<u16> {
        self.columns
            .iter()
            .position(|column| column.kind == kind)
            .map(|index| index as u16)
    }

    ///
    /// Returns the 0-based column indexes of the first and the last trial.
    ///
    pub fn trial_bounds(&self) -> Option<(u16, u16)> {
        let mut trials = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| matches!(column.kind, ColumnKind::Trial(_)))
            .map(|(index, _)| index as u16);
        let first = trials.next()?;
        Some((first, trials.last().unwrap_or(first)))
    }
}

#[cfg(test)]
mod tests {
    use crate::fixture::family::Family;

    use super::ColumnKind;
    use super::NumberFormat;
    use super::Precision;
    use super::Schema;

    #[test]
    fn transit_columns() {
        let schema = Schema::new(Family::Transit, 3, Precision::default());

        let headers = schema
            .columns
            .iter()
            .map(|column| column.header.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(
            headers,
            vec![
                "Test File",
                "Stations",
                "Connections",
                "Lines",
                "Time 1",
                "Time 2",
                "Time 3",
                "Average Time",
                "Uncertainty",
                "Complexity",
            ]
        );
        assert_eq!(schema.trial_bounds(), Some((4, 6)));
        assert_eq!(schema.position(ColumnKind::Mean), Some(7));
        assert_eq!(schema.position(ColumnKind::Complexity), Some(9));
    }

    #[test]
    fn single_trial() {
        let schema = Schema::new(Family::Edges, 1, Precision::default());

        assert_eq!(schema.trial_bounds(), Some((3, 3)));
        assert_eq!(schema.position(ColumnKind::Dimension(1)), Some(2));
        assert_eq!(schema.position(ColumnKind::Dimension(2)), None);
    }

    #[test]
    fn number_formats() {
        assert_eq!(NumberFormat::General.code(), None);
        assert_eq!(NumberFormat::Fixed(0).code().as_deref(), Some("0"));
        assert_eq!(NumberFormat::Fixed(2).code().as_deref(), Some("0.00"));
        assert_eq!(NumberFormat::Fixed(1).code().as_deref(), Some("0.0"));
        assert_eq!(NumberFormat::Scientific(2).code().as_deref(), Some("0.00E+00"));
    }
}
