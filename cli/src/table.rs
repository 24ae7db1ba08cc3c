//! Bordered table rendering that stays aligned with colored and wide text.
//!
//! Cell widths are measured with [`console::measure_text_width`], which skips
//! ANSI escape sequences and counts East-Asian wide characters as two columns.

use console::{Alignment, measure_text_width, pad_str, style};

/// A record that can be shown as one table row.
pub trait TableRow {
    /// Column labels, in display order.
    const HEADERS: &'static [&'static str];

    /// Display strings, one per header. May contain color codes.
    fn cells(&self) -> Vec<String>;
}

struct Border {
    left: &'static str,
    joint: &'static str,
    right: &'static str,
}

const TOP: Border = Border {
    left: "┌",
    joint: "┬",
    right: "┐",
};
const DIVIDER: Border = Border {
    left: "├",
    joint: "┼",
    right: "┤",
};
const BOTTOM: Border = Border {
    left: "└",
    joint: "┴",
    right: "┘",
};
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Renders `rows` into lines, top border first.
///
/// Callers check for an empty slice first; a table with no body rows is not
/// meaningful output.
pub fn render_table<R: TableRow>(rows: &[R]) -> Vec<String> {
    let body: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let widths = column_widths(R::HEADERS, &body);

    let header: Vec<String> = R::HEADERS
        .iter()
        .map(|label| style(label).bold().to_string())
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(border_line(&TOP, &widths));
    lines.push(row_line(&header, &widths));
    lines.push(border_line(&DIVIDER, &widths));
    lines.extend(body.iter().map(|cells| row_line(cells, &widths)));
    lines.push(border_line(&BOTTOM, &widths));
    lines
}

/// Widest display width per column, headers included.
pub fn column_widths(headers: &[&str], body: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .filter_map(|cells| cells.get(col))
                .map(|cell| measure_text_width(cell))
                .fold(measure_text_width(header), usize::max)
        })
        .collect()
}

fn border_line(border: &Border, widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| HORIZONTAL.repeat(width + 2))
        .collect();
    format!(
        "{}{}{}",
        border.left,
        segments.join(border.joint),
        border.right
    )
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from(VERTICAL);
    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).map(String::as_str).unwrap_or_default();
        line.push(' ');
        line.push_str(&pad_str(cell, *width, Alignment::Left, None));
        line.push(' ');
        line.push_str(VERTICAL);
    }
    line
}
