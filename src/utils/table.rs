//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Column sized to fit the header and every value it will show.
    pub fn fitted<'a, I: IntoIterator<Item = &'a str>>(header: &str, values: I) -> Self {
        let width = values
            .into_iter()
            .map(str::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self, separator_char: &str) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$}  ", col.header, width = col.width));
        }
        out.push('\n');

        // Separator line under the header
        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        let sep = if separator_char.is_empty() {
            "-"
        } else {
            separator_char
        };
        out.push_str(&sep.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
