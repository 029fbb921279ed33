//!
//! In-memory document backend.
//!

use std::collections::BTreeMap;
use std::path::Path;

use crate::output::error::Error;

use super::formula;
use super::Cell;
use super::ChartLayout;
use super::DocumentBackend;
use super::TableLayout;

///
/// In-memory document backend.
///
/// Keeps the grid, notes and charts for inspection and evaluates the formulas the report
/// emits. Saving writes a tab-separated dump of the grid.
///
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// Whether formulas are stored as formulas.
    pub formulas: bool,
    /// The opened table.
    pub table: Option<TableLayout>,
    /// The data rows. Index 0 is sheet row 1.
    pub rows: Vec<Vec<Cell>>,
    /// Cell notes by position.
    pub notes: BTreeMap<(u32, u16), String>,
    /// The added charts.
    pub charts: Vec<ChartLayout>,
}

impl MemoryBackend {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(formulas: bool) -> Self {
        Self {
            formulas,
            ..Self::default()
        }
    }

    ///
    /// Returns the cell at a 0-based sheet position.
    ///
    pub fn cell(&self, row: u32, column: u16) -> Option<&Cell> {
        let row = row.checked_sub(1)? as usize;
        self.rows.get(row)?.get(column as usize)
    }

    ///
    /// Returns the numeric value of a cell, evaluating formulas.
    ///
    pub fn value(&self, row: u32, column: u16) -> Option<f64> {
        match self.cell(row, column)? {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Number(value) => Some(*value),
            Cell::Formula(formula) => {
                formula::evaluate(formula.as_str(), |row, column| self.value(row, column))
            }
            Cell::Empty | Cell::Text(_) => None,
        }
    }

    ///
    /// Returns the header texts of the opened table.
    ///
    pub fn headers(&self) -> Vec<&str> {
        self.table
            .iter()
            .flat_map(|table| table.columns.iter().map(|column| column.header.as_str()))
            .collect()
    }

    ///
    /// Renders the grid as tab-separated text.
    ///
    pub fn dump(&self) -> String {
        let mut lines = vec![self.headers().join("\t").replace('\n', " ")];
        for row in self.rows.iter() {
            let cells = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => String::new(),
                    Cell::Text(text) => text.to_owned(),
                    Cell::Integer(value) => value.to_string(),
                    Cell::Number(value) => value.to_string(),
                    Cell::Formula(formula) => format!("={formula}"),
                })
                .collect::<Vec<String>>();
            lines.push(cells.join("\t"));
        }
        lines.join("\n")
    }
}

impl DocumentBackend for MemoryBackend {
    fn supports_formulas(&self) -> bool {
        self.formulas
    }

    fn open_table(&mut self, layout: &TableLayout) -> Result<(), Error> {
        self.table = Some(layout.to_owned());
        self.rows.clear();
        Ok(())
    }

    fn append_row(&mut self, cells: Vec<Cell>) -> Result<u32, Error> {
        if self.table.is_none() {
            return Err(Error::TableNotOpen);
        }
        self.rows.push(cells);
        Ok(self.rows.len() as u32)
    }

    fn set_cell(&mut self, row: u32, column: u16, cell: Cell) -> Result<(), Error> {
        let cells = row
            .checked_sub(1)
            .and_then(|index| self.rows.get_mut(index as usize))
            .ok_or(Error::OutOfTable { row, column })?;
        if cells.len() <= column as usize {
            cells.resize(column as usize + 1, Cell::Empty);
        }
        cells[column as usize] = cell;
        Ok(())
    }

    fn annotate(&mut self, row: u32, column: u16, text: &str) -> Result<(), Error> {
        self.notes.insert((row, column), text.to_owned());
        Ok(())
    }

    fn add_chart(&mut self, chart: &ChartLayout) -> Result<(), Error> {
        if self.table.is_none() {
            return Err(Error::TableNotOpen);
        }
        self.charts.push(chart.to_owned());
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), Error> {
        crate::output::write_atomically(path, self.dump().as_bytes())
    }
}
