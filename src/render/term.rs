// src/render/term.rs

use console::style;
use prettytable::{format, Cell, Row, Table};

use super::{RenderOp, HEADERS};

/// Terminal display surface: a table body plus a separate notice line.
///
/// Applying instructions mutates the held state; printing draws the whole
/// table to stdout and the notice, if any, in red to stderr. Keeping the
/// failure line off the table means a failed fetch never leaves a broken
/// grid behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermSurface {
    rows: Vec<BodyRow>,
    notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum BodyRow {
    Cells([String; 6]),
    Span(String),
}

impl TermSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one instruction list, in order.
    pub fn apply(&mut self, ops: &[RenderOp]) {
        for op in ops {
            match op {
                RenderOp::ClearBody => self.rows.clear(),
                RenderOp::ClearNotice => self.notice = None,
                RenderOp::Row(cells) => self.rows.push(BodyRow::Cells(cells.clone())),
                RenderOp::SpanRow(text) => self.rows.push(BodyRow::Span(text.clone())),
                RenderOp::Notice(text) => self.notice = Some(text.clone()),
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(
            HEADERS.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
        ));
        for row in &self.rows {
            match row {
                BodyRow::Cells(cells) => {
                    table.add_row(Row::new(cells.iter().map(|c| Cell::new(c)).collect()));
                }
                BodyRow::Span(text) => {
                    table.add_row(Row::new(vec![Cell::new(text).with_hspan(HEADERS.len())]));
                }
            }
        }
        table
    }

    /// Draw the current state: title and table to stdout, the failure
    /// notice in red to stderr.
    pub fn print(&self) {
        println!("Student Table");
        self.to_table().printstd();
        if let Some(notice) = &self.notice {
            eprintln!("{}", style(notice).red());
        }
    }
}
