// src/extract.rs

// Markup → rows. Scans every <table> block in a document, takes <th>
// texts as column names and <td> texts as one flat cell stream, and
// groups cells into rows with an explicit accumulator.

use crate::core::html::{first_span_text, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::error::{Result, StatsError};

/// One extracted table. Every row holds exactly `columns.len()`
/// values, in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Accumulates cells left to right and seals a row each time the
/// pending values reach the column count.
pub struct TableBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    pending: Vec<String>,
}

impl TableBuilder {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new(), pending: Vec::new() }
    }

    /// True when the next cell starts a fresh row.
    pub fn at_row_start(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn push_cell(&mut self, value: String) -> Result<()> {
        if self.columns.is_empty() {
            return Err(StatsError::MalformedTable(s!(
                "data cells but no header cells"
            )));
        }
        self.pending.push(value);
        if self.pending.len() == self.columns.len() {
            self.rows.push(std::mem::take(&mut self.pending));
        }
        Ok(())
    }

    /// Seal the table. A trailing partial row is dropped.
    pub fn finish(self) -> RawTable {
        if !self.pending.is_empty() {
            logd!(
                "extract: dropped partial row ({} of {} cells)",
                self.pending.len(),
                self.columns.len()
            );
        }
        RawTable { columns: self.columns, rows: self.rows }
    }
}

/// All tables in `doc`, in document order. A table with neither
/// headers nor data is skipped; a headerless table with data is an
/// error.
pub fn extract_tables(doc: &str) -> Result<Vec<RawTable>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[t_s..t_e];
        pos = t_e;
        if let Some(raw) = extract_table(table)? {
            out.push(raw);
        }
    }
    Ok(out)
}

fn extract_table(table: &str) -> Result<Option<RawTable>> {
    let columns = read_columns(table);
    if columns.is_empty() && !has_data_cell(table) {
        return Ok(None);
    }

    let mut builder = TableBuilder::new(columns);
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(table, "<td", "</td>", pos) {
        let block = &table[td_s..td_e];
        pos = td_e;

        // Row-leading cells wrap the display name in a <span>; prefer
        // its text over the cell's full text.
        let text = if builder.at_row_start() {
            match first_span_text(block) {
                Some(t) => t,
                None => cell_text(block),
            }
        } else {
            cell_text(block)
        };
        builder.push_cell(text)?;
    }

    let raw = builder.finish();
    logd!("extract: table {} cols x {} rows", raw.columns.len(), raw.rows.len());
    Ok(Some(raw))
}

fn read_columns(table: &str) -> Vec<String> {
    let mut cols = Vec::new();
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_tag_block_ci(table, "<th", "</th>", pos) {
        cols.push(cell_text(&table[th_s..th_e]));
        pos = th_e;
    }
    cols
}

fn has_data_cell(table: &str) -> bool {
    next_tag_block_ci(table, "<td", "</td>", 0).is_some()
}

fn cell_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}
