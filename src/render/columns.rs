//! Elastic column alignment.
//!
//! Lines are made of cells. Every cell except the last one on a line is
//! terminated and takes part in alignment; the last cell is written as-is.
//! A *column block* is a run of consecutive lines that all have a terminated
//! cell in the same column. Within a block, each terminated cell is padded with
//! spaces to the widest cell of the block plus the writer's padding. A line
//! without a cell in that column ends the block, so alignment never bleeds
//! across headers or blank lines.
//!
//! Widths are counted in Unicode scalar values, which keeps box-drawing glyphs
//! at one column each.

/// Collects cells line by line and aligns them on [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub struct ColumnWriter {
    padding: usize,
    lines: Vec<Vec<String>>,
}

impl ColumnWriter {
    pub fn new(padding: usize) -> Self {
        Self {
            padding,
            lines: Vec::new(),
        }
    }

    /// Add a line of cells. All but the last cell are aligned.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut line: Vec<String> = cells.into_iter().map(Into::into).collect();
        if line.is_empty() {
            line.push(String::new());
        }
        self.lines.push(line);
    }

    /// Add a line that takes no part in alignment and ends any open block.
    pub fn push_line(&mut self, text: impl Into<String>) {
        self.lines.push(vec![text.into()]);
    }

    /// Align all lines and return them, each terminated by `\n`.
    pub fn finish(self) -> String {
        let mut out = String::new();
        let mut widths = Vec::new();
        self.format(&mut out, &mut widths, 0, self.lines.len());
        out
    }

    fn format(&self, out: &mut String, widths: &mut Vec<usize>, mut line0: usize, line1: usize) {
        let column = widths.len();
        let mut this = line0;
        while this < line1 {
            if !self.has_cell(this, column) {
                this += 1;
                continue;
            }

            // Lines before the block belong to the enclosing column.
            self.write_lines(out, widths, line0, this);
            line0 = this;

            let mut width = 0;
            while this < line1 && self.has_cell(this, column) {
                width = width.max(self.lines[this][column].chars().count() + self.padding);
                this += 1;
            }

            widths.push(width);
            self.format(out, widths, line0, this);
            widths.pop();
            line0 = this;
        }

        self.write_lines(out, widths, line0, line1);
    }

    fn has_cell(&self, line: usize, column: usize) -> bool {
        column + 1 < self.lines[line].len()
    }

    fn write_lines(&self, out: &mut String, widths: &[usize], line0: usize, line1: usize) {
        for line in &self.lines[line0..line1] {
            let last = line.len() - 1;
            for (j, cell) in line.iter().enumerate() {
                out.push_str(cell);
                if j < last
                    && let Some(width) = widths.get(j)
                {
                    let used = cell.chars().count();
                    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
                }
            }
            out.push('\n');
        }
    }
}
