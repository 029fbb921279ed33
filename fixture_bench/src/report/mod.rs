//!
//! The benchmark report.
//!

pub mod backend;
pub mod schema;
pub mod wrap;

use crate::model::benchmark::result::BenchmarkResult;
use crate::model::benchmark::Benchmark;
use crate::output::error::Error;
use crate::statistics;

use self::backend::cell_reference;
use self::backend::Cell;
use self::backend::ChartLayout;
use self::backend::ColumnLayout;
use self::backend::DocumentBackend;
use self::backend::TableLayout;
use self::schema::ColumnKind;
use self::schema::Precision;
use self::schema::Schema;
use self::wrap::WrapOverflow;

///
/// The report settings.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// The header wrap width in characters.
    pub header_width: usize,
    /// The header wrap overflow policy.
    pub overflow: WrapOverflow,
    /// The number format precision.
    pub precision: Precision,
    /// Whether derived columns are written as values even if the backend supports formulas.
    pub precomputed: bool,
    /// Whether the complexity chart is added.
    pub chart: bool,
    /// The width of every column in characters.
    pub column_width: f64,
    /// The header row height in points.
    pub header_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_width: 30,
            overflow: WrapOverflow::default(),
            precision: Precision::default(),
            precomputed: false,
            chart: true,
            column_width: 12.0,
            header_height: 40.0,
        }
    }
}

///
/// The benchmark report.
///
pub struct Report<'a> {
    /// The benchmark to report.
    pub benchmark: &'a Benchmark,
    /// The column schema.
    pub schema: Schema,
    /// The report settings.
    pub settings: Settings,
}

impl<'a> Report<'a> {
    /// The sheet name.
    pub const SHEET_NAME: &'static str = "Results";

    /// The table region name.
    pub const TABLE_NAME: &'static str = "ResultsTable";

    /// The text of undefined uncertainty cells.
    pub const UNDEFINED: &'static str = "n/a";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(benchmark: &'a Benchmark, settings: Settings) -> Self {
        let schema = Schema::new(
            benchmark.metadata.family,
            benchmark.metadata.trials,
            settings.precision,
        );
        Self {
            benchmark,
            schema,
            settings,
        }
    }

    ///
    /// Renders the report into `backend`.
    ///
    pub fn write<B: DocumentBackend>(&self, backend: &mut B) -> Result<(), Error> {
        backend.open_table(&self.table_layout())?;

        let formulas = backend.supports_formulas() && !self.settings.precomputed;
        let mut last_row = 0;
        for result in self.benchmark.rows() {
            let row = backend.append_row(self.measured_cells(result))?;
            for (column, cell) in self.derived_cells(result, row, formulas) {
                backend.set_cell(row, column, cell)?;
            }
            for trial in result.failed_trials() {
                if let Some(column) = self.schema.position(ColumnKind::Trial(trial.index)) {
                    let note = format!("Trial {} failed: {}", trial.index + 1, trial.status);
                    backend.annotate(row, column, note.as_str())?;
                }
            }
            last_row = row;
        }

        if self.settings.chart && last_row > 0 {
            if let Some(chart) = self.chart_layout(last_row) {
                backend.add_chart(&chart)?;
            }
        }
        Ok(())
    }

    ///
    /// Returns the table layout with wrapped headers.
    ///
    pub fn table_layout(&self) -> TableLayout {
        let columns = self
            .schema
            .columns
            .iter()
            .map(|column| ColumnLayout {
                header: wrap::wrap(
                    column.header.as_str(),
                    self.settings.header_width,
                    self.settings.overflow,
                ),
                width: self.settings.column_width,
                number_format: column.number_format.code(),
            })
            .collect();
        TableLayout {
            sheet: Self::SHEET_NAME.to_owned(),
            name: Self::TABLE_NAME.to_owned(),
            columns,
            header_height: self.settings.header_height,
        }
    }

    ///
    /// Returns the fixture, dimension and trial cells of a result.
    ///
    fn measured_cells(&self, result: &BenchmarkResult) -> Vec<Cell> {
        self.schema
            .columns
            .iter()
            .map(|column| match column.kind {
                ColumnKind::Fixture => Cell::Text(result.fixture.clone()),
                ColumnKind::Dimension(index) => result
                    .dimensions
                    .get(index)
                    .map(|value| Cell::Integer(*value))
                    .unwrap_or(Cell::Empty),
                ColumnKind::Trial(index) => result
                    .trials
                    .iter()
                    .find(|trial| trial.index == index)
                    .map(|trial| Cell::Number(trial.seconds))
                    .unwrap_or(Cell::Empty),
                ColumnKind::Mean | ColumnKind::Uncertainty | ColumnKind::Complexity => Cell::Empty,
            })
            .collect()
    }

    ///
    /// Returns the mean, uncertainty and complexity cells of a result at `row`.
    ///
    fn derived_cells(&self, result: &BenchmarkResult, row: u32, formulas: bool) -> Vec<(u16, Cell)> {
        let mut cells = Vec::with_capacity(3);

        let trial_range = self.schema.trial_bounds().map(|(first, last)| {
            format!("{}:{}", cell_reference(row, first), cell_reference(row, last))
        });
        let undefined = || Cell::Text(Self::UNDEFINED.to_owned());

        if let Some(column) = self.schema.position(ColumnKind::Mean) {
            let cell = match (formulas, trial_range.as_deref(), result.summary) {
                (true, Some(range), _) => Cell::Formula(statistics::mean_formula(range)),
                (_, _, Some(summary)) => Cell::Number(summary.mean),
                _ => undefined(),
            };
            cells.push((column, cell));
        }

        if let Some(column) = self.schema.position(ColumnKind::Uncertainty) {
            let deviation = result
                .summary
                .and_then(|summary| summary.standard_deviation);
            let cell = match (formulas, trial_range.as_deref(), deviation) {
                (_, _, None) => undefined(),
                (true, Some(range), Some(_)) => {
                    Cell::Formula(statistics::standard_deviation_formula(range))
                }
                (_, _, Some(deviation)) => Cell::Number(deviation),
            };
            cells.push((column, cell));
        }

        if let Some(column) = self.schema.position(ColumnKind::Complexity) {
            let cell = if formulas {
                let formula = self.benchmark.metadata.complexity.formula(|index| {
                    self.schema
                        .position(ColumnKind::Dimension(index))
                        .map(|column| cell_reference(row, column))
                        .unwrap_or_else(|| "0".to_owned())
                });
                Cell::Formula(formula)
            } else {
                Cell::Number(result.complexity)
            };
            cells.push((column, cell));
        }

        cells
    }

    ///
    /// Returns the complexity chart layout for data rows ending at `last_row`.
    ///
    fn chart_layout(&self, last_row: u32) -> Option<ChartLayout> {
        Some(ChartLayout {
            title: "Average Time vs Complexity".to_owned(),
            x_title: "Complexity".to_owned(),
            y_title: "Average Time (s)".to_owned(),
            x_column: self.schema.position(ColumnKind::Complexity)?,
            y_column: self.schema.position(ColumnKind::Mean)?,
            first_row: 1,
            last_row,
            anchor_row: last_row + 2,
            anchor_column: 0,
            trendline: true,
            legend: false,
        })
    }
}

#[cfg(test)]
mod tests;
