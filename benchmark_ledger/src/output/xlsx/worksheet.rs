//!
//! XLSX worksheet for benchmark history.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for benchmark history.
///
/// Row headers identify records, columns are allocated to benches on first use.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Bench column indexes, relative to the first value column.
    pub columns: HashMap<String, u16>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 16;

    /// Maximum length of a bench column caption.
    const CAPTION_MAX_LENGTH: usize = 48;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        worksheet.set_freeze_panes(1, headers.len() as u16)?;

        Ok(Self {
            worksheet,
            columns: HashMap::new(),
            headers,
        })
    }

    ///
    /// Returns the column of a bench, adding a captioned column if needed.
    ///
    pub fn bench_column(&mut self, bench_name: &str, unit: &str) -> anyhow::Result<u16> {
        if let Some(column) = self.columns.get(bench_name) {
            return Ok(*column);
        }

        let column = (self.headers.len() + self.columns.len()) as u16;
        self.columns.insert(bench_name.to_owned(), column);

        self.worksheet
            .set_column_width(column, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column,
            format!("{}\n{unit}", Self::caption(bench_name)),
            &Self::column_header_format(),
        )?;
        Ok(column)
    }

    ///
    /// Writes the row header of a record.
    ///
    pub fn write_record_header(
        &mut self,
        record_index: usize,
        commit: &str,
        date: &str,
    ) -> anyhow::Result<()> {
        let row = Self::row(record_index);
        self.worksheet
            .write_with_format(row, 0, commit, &Self::row_header_format())?;
        self.worksheet
            .write_with_format(row, 1, date, &Self::row_header_format())?;
        Ok(())
    }

    ///
    /// Writes a measurement of a record.
    ///
    pub fn write_value(&mut self, record_index: usize, column: u16, value: f64) -> anyhow::Result<()> {
        self.worksheet.write_with_format(
            Self::row(record_index),
            column,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the worksheet row of a record, below the caption row.
    ///
    fn row(record_index: usize) -> u32 {
        (record_index as u32) + 1
    }

    ///
    /// Keeps the tail of long bench names, which holds the test case.
    ///
    fn caption(bench_name: &str) -> String {
        let length = bench_name.chars().count();
        if length <= Self::CAPTION_MAX_LENGTH {
            return bench_name.to_owned();
        }
        let tail: String = bench_name
            .chars()
            .skip(length - Self::CAPTION_MAX_LENGTH)
            .collect();
        format!("…{tail}")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(16);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(11);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_text_wrap();
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("#,##0.000");
        format
    }
}
