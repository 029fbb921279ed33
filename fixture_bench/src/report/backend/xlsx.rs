//!
//! XLSX document backend.
//!

use std::path::Path;

use crate::output::error::Error;

use super::Cell;
use super::ChartLayout;
use super::DocumentBackend;
use super::TableLayout;

///
/// XLSX document backend.
///
/// The table region is registered when the document is saved, once its last row is known.
///
#[derive(Default)]
pub struct XlsxBackend {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The opened table.
    pub table: Option<TableLayout>,
    /// The data cell formats, one per column.
    pub formats: Vec<rust_xlsxwriter::Format>,
    /// The next data row index.
    pub next_row: u32,
}

impl XlsxBackend {
    /// The table style.
    const TABLE_STYLE: rust_xlsxwriter::TableStyle = rust_xlsxwriter::TableStyle::Medium9;

    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Returns the opened table layout.
    ///
    fn table(&self) -> Result<&TableLayout, Error> {
        self.table.as_ref().ok_or(Error::TableNotOpen)
    }

    ///
    /// Returns the data cell format of a column.
    ///
    fn format(&self, column: u16) -> rust_xlsxwriter::Format {
        self.formats
            .get(column as usize)
            .cloned()
            .unwrap_or_else(Self::value_format)
    }

    ///
    /// Writes a single cell.
    ///
    fn write(&mut self, row: u32, column: u16, cell: Cell) -> Result<(), Error> {
        let format = self.format(column);
        match cell {
            Cell::Empty => {
                self.worksheet.write_blank(row, column, &format)?;
            }
            Cell::Text(text) => {
                self.worksheet
                    .write_string_with_format(row, column, text, &format)?;
            }
            Cell::Integer(value) => {
                self.worksheet
                    .write_number_with_format(row, column, value as f64, &format)?;
            }
            Cell::Number(value) => {
                self.worksheet
                    .write_number_with_format(row, column, value, &format)?;
            }
            Cell::Formula(formula) => {
                self.worksheet.write_formula_with_format(
                    row,
                    column,
                    format!("={formula}").as_str(),
                    &format,
                )?;
            }
        }
        Ok(())
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_text_wrap();
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_text_wrap();
        format
    }
}

impl DocumentBackend for XlsxBackend {
    fn supports_formulas(&self) -> bool {
        true
    }

    fn open_table(&mut self, layout: &TableLayout) -> Result<(), Error> {
        self.worksheet = rust_xlsxwriter::Worksheet::new();
        self.worksheet.set_name(layout.sheet.as_str())?;
        self.worksheet.set_row_height(0, layout.header_height)?;

        self.formats = Vec::with_capacity(layout.columns.len());
        for (index, column) in layout.columns.iter().enumerate() {
            self.worksheet
                .set_column_width(index as u16, column.width)?;

            let mut format = Self::value_format();
            if let Some(code) = column.number_format.as_deref() {
                format = format.set_num_format(code);
            }
            self.formats.push(format);
        }

        self.table = Some(layout.to_owned());
        self.next_row = 1;
        Ok(())
    }

    fn append_row(&mut self, cells: Vec<Cell>) -> Result<u32, Error> {
        self.table()?;

        let row = self.next_row;
        for (column, cell) in cells.into_iter().enumerate() {
            self.write(row, column as u16, cell)?;
        }
        self.next_row += 1;
        Ok(row)
    }

    fn set_cell(&mut self, row: u32, column: u16, cell: Cell) -> Result<(), Error> {
        let width = self.table()?.columns.len();
        if row == 0 || row >= self.next_row || column as usize >= width {
            return Err(Error::OutOfTable { row, column });
        }
        self.write(row, column, cell)
    }

    fn annotate(&mut self, row: u32, column: u16, text: &str) -> Result<(), Error> {
        let note = rust_xlsxwriter::Note::new(text);
        self.worksheet.insert_note(row, column, &note)?;
        Ok(())
    }

    fn add_chart(&mut self, layout: &ChartLayout) -> Result<(), Error> {
        let sheet = self.table()?.sheet.to_owned();

        let mut chart = rust_xlsxwriter::Chart::new(rust_xlsxwriter::ChartType::Scatter);
        let series = chart.add_series();
        series
            .set_categories((
                sheet.as_str(),
                layout.first_row,
                layout.x_column,
                layout.last_row,
                layout.x_column,
            ))
            .set_values((
                sheet.as_str(),
                layout.first_row,
                layout.y_column,
                layout.last_row,
                layout.y_column,
            ));
        if layout.trendline {
            let mut trendline = rust_xlsxwriter::ChartTrendline::new();
            trendline.set_type(rust_xlsxwriter::ChartTrendlineType::Linear);
            series.set_trendline(&trendline);
        }

        chart.title().set_name(layout.title.as_str());
        chart.x_axis().set_name(layout.x_title.as_str());
        chart.y_axis().set_name(layout.y_title.as_str());
        if !layout.legend {
            chart.legend().set_hidden();
        }

        self.worksheet
            .insert_chart(layout.anchor_row, layout.anchor_column, &chart)?;
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), Error> {
        let layout = self.table()?.to_owned();

        let header_format = Self::header_format();
        let columns = layout
            .columns
            .iter()
            .map(|column| {
                rust_xlsxwriter::TableColumn::new()
                    .set_header(column.header.as_str())
                    .set_header_format(header_format.clone())
            })
            .collect::<Vec<rust_xlsxwriter::TableColumn>>();
        let table = rust_xlsxwriter::Table::new()
            .set_name(layout.name.as_str())
            .set_style(Self::TABLE_STYLE)
            .set_banded_rows(true)
            .set_banded_columns(false)
            .set_columns(columns.as_slice());

        // A table needs at least one data row.
        let last_row = std::cmp::max(self.next_row - 1, 1);
        let last_column = layout.columns.len().saturating_sub(1) as u16;
        self.worksheet
            .add_table(0, 0, last_row, last_column, &table)?;

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(std::mem::take(&mut self.worksheet));
        let buffer = workbook.save_to_buffer()?;
        crate::output::write_atomically(path, buffer.as_slice())
    }
}
