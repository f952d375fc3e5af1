//! Minimal ASCII table renderer
//!
//! ```text
//! +-----------+--------+
//! | tweet ids | q: foo |
//! +-----------+--------+
//! | 42        | x      |
//! +-----------+--------+
//! ```

/// A table with one heading row and any number of body rows.
///
/// Cells may span several lines; short rows are padded with empty cells.
#[derive(Debug, Clone, Default)]
pub struct AsciiTable {
    headings: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    /// Create a table with the given headings
    pub fn new(headings: Vec<String>) -> Self {
        Self {
            headings,
            rows: Vec::new(),
        }
    }

    /// Append a body row
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the table, lines joined with `\n`, no trailing newline
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headings.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&self.headings).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                for line in cell.lines() {
                    widths[i] = widths[i].max(line.chars().count());
                }
            }
        }

        let border = widths.iter().fold(String::from("+"), |mut acc, width| {
            acc.push_str(&"-".repeat(width + 2));
            acc.push('+');
            acc
        });

        let mut out = vec![border.clone()];
        push_row(&mut out, &self.headings, &widths);
        out.push(border.clone());
        for row in &self.rows {
            push_row(&mut out, row, &widths);
        }
        if !self.rows.is_empty() {
            out.push(border);
        }

        out.join("\n")
    }
}

fn push_row(out: &mut Vec<String>, cells: &[String], widths: &[usize]) {
    let cell_lines: Vec<Vec<&str>> = (0..widths.len())
        .map(|i| cells.get(i).map(|cell| cell.lines().collect()))
        .map(Option::unwrap_or_default)
        .collect();
    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line_no in 0..height {
        let mut line = String::from("|");
        for (lines, &width) in cell_lines.iter().zip(widths) {
            let text = lines.get(line_no).copied().unwrap_or("");
            let pad = width - text.chars().count();
            line.push(' ');
            line.push_str(text);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        out.push(line);
    }
}
