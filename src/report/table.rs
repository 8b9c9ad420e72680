//! Bordered text table.
//!
//! ```text
//! +-----+-----+
//! |  a  |  b  |
//! +=====+=====+
//! |   1 |   2 |
//! +-----+-----+
//! ```

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    align: Vec<Align>,
}

impl Table {
    /// New table with the given header; every column is left-aligned.
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
            align: vec![Align::Left; header.len()],
        }
    }

    pub fn set_align(&mut self, align: &[Align]) -> &mut Self {
        for (slot, a) in self.align.iter_mut().zip(align) {
            *slot = *a;
        }
        self
    }

    /// Add a row; missing cells are blank and extra cells are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) -> &mut Self {
        let mut cells: Vec<String> = row
            .iter()
            .take(self.header.len())
            .map(|c| c.as_ref().to_string())
            .collect();
        cells.resize(self.header.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| display_width(&r[i]))
                    .chain(std::iter::once(display_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table; lines are joined with `\n`, no trailing newline.
    pub fn draw(&self) -> String {
        let widths = self.widths();
        let rule = rule_line(&widths, '-');

        let mut lines = vec![rule.clone()];
        let header_align = vec![Align::Center; widths.len()];
        lines.push(cell_line(&self.header, &widths, &header_align));
        lines.push(rule_line(&widths, '='));
        for row in &self.rows {
            lines.push(cell_line(row, &widths, &self.align));
            lines.push(rule.clone());
        }
        if self.rows.is_empty() {
            lines.push(rule);
        }
        lines.join("\n")
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn rule_line(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn cell_line(cells: &[String], widths: &[usize], align: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(align)
        .map(|((cell, &width), &a)| pad(cell, width, a))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let margin = width.saturating_sub(display_width(cell));
    let left = match align {
        Align::Left => 0,
        Align::Right => margin,
        // odd margins put the extra space left only when the width is odd too
        Align::Center => margin / 2 + (margin & width & 1),
    };
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(margin - left))
}
