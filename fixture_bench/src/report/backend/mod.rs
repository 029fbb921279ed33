//!
//! The document backend.
//!

pub mod formula;
pub mod memory;
pub mod xlsx;

use std::path::Path;

use crate::output::error::Error;

///
/// A cell value.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// An empty cell.
    Empty,
    /// Text.
    Text(String),
    /// A non-negative integer.
    Integer(u64),
    /// A floating-point number.
    Number(f64),
    /// A formula without the leading `=`, recalculated by the document viewer.
    Formula(String),
}

///
/// A column of the table region.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// The header text, possibly with line breaks.
    pub header: String,
    /// The column width in characters.
    pub width: f64,
    /// The number format code of the data cells.
    pub number_format: Option<String>,
}

///
/// The named table region.
///
/// The header occupies row 0, data rows start at row 1.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// The sheet name.
    pub sheet: String,
    /// The table name.
    pub name: String,
    /// The columns, in sheet order.
    pub columns: Vec<ColumnLayout>,
    /// The header row height in points.
    pub header_height: f64,
}

///
/// A scatter chart correlating two columns of the table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// The chart title.
    pub title: String,
    /// The horizontal axis title.
    pub x_title: String,
    /// The vertical axis title.
    pub y_title: String,
    /// The column of the horizontal values.
    pub x_column: u16,
    /// The column of the vertical values.
    pub y_column: u16,
    /// The first data row.
    pub first_row: u32,
    /// The last data row.
    pub last_row: u32,
    /// The row of the top-left chart corner.
    pub anchor_row: u32,
    /// The column of the top-left chart corner.
    pub anchor_column: u16,
    /// Whether a linear trend line is fitted.
    pub trendline: bool,
    /// Whether the legend is shown.
    pub legend: bool,
}

///
/// The document backend.
///
/// Renders a single table region with an optional chart into a spreadsheet-like artifact.
///
pub trait DocumentBackend {
    ///
    /// Whether the backend stores recalculating formulas.
    ///
    fn supports_formulas(&self) -> bool;

    ///
    /// Opens the table region and writes its header row.
    ///
    fn open_table(&mut self, layout: &TableLayout) -> Result<(), Error>;

    ///
    /// Appends a data row and returns its 0-based sheet row index.
    ///
    fn append_row(&mut self, cells: Vec<Cell>) -> Result<u32, Error>;

    ///
    /// Sets a single cell of the table.
    ///
    fn set_cell(&mut self, row: u32, column: u16, cell: Cell) -> Result<(), Error>;

    ///
    /// Attaches a note to a cell.
    ///
    fn annotate(&mut self, row: u32, column: u16, text: &str) -> Result<(), Error>;

    ///
    /// Adds a chart.
    ///
    fn add_chart(&mut self, chart: &ChartLayout) -> Result<(), Error>;

    ///
    /// Writes the document to `path`, replacing any previous file.
    ///
    fn save(&mut self, path: &Path) -> Result<(), Error>;
}

///
/// Returns the alphabetical column identifier of a 0-based column index.
///
pub fn column_identifier(index: u16) -> String {
    let mut identifier = String::new();
    let mut index = index as u32 + 1;

    while index > 0 {
        let remainder = (index - 1) % 26;
        identifier.insert(0, (b'A' + remainder as u8) as char);
        index = (index - 1) / 26;
    }

    identifier
}

///
/// Returns the 0-based column index of an alphabetical column identifier.
///
pub fn column_index(identifier: &str) -> Option<u16> {
    if identifier.is_empty() {
        return None;
    }

    let mut index: u32 = 0;
    for letter in identifier.chars() {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        index = index * 26 + (letter as u32 - 'A' as u32 + 1);
    }
    u16::try_from(index - 1).ok()
}

///
/// Returns the `A1` reference of a 0-based cell position.
///
pub fn cell_reference(row: u32, column: u16) -> String {
    format!("{}{}", column_identifier(column), row + 1)
}
