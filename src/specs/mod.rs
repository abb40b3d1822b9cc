// src/specs/mod.rs
//! # Page "specs" module
//!
//! Page-specific normalization rules for the wiki. Each spec owns one
//! page and encodes *which table on it is the stats table* and *how its
//! cells become numbers*.
//!
//! ## What lives here
//! - The key column identifying a page's stats table (`Champions`,
//!   `Item`); tables without it are decoration and are skipped.
//! - Per-page cell rules: percent columns, renamed columns, dropped
//!   non-stat columns, blank-cell policy.
//! - Conversion failures as typed errors naming table, row, column and
//!   offending value. A cell is never silently zeroed.
//!
//! ## What does **not** live here
//! - Fetching and envelope decoding (`wiki.rs` / `core::net`).
//! - Generic markup scanning (`extract.rs` owns table geometry).
//! - Level math and item sums (`growth.rs`, `aggregate.rs`).
//!
//! Specs are testable offline: hand them extracted tables, no network.

pub mod champions;
pub mod items;

use crate::error::Result;
use crate::extract;
use crate::stats::StatTable;
use crate::wiki::{ArticlePage, PageSource};

/// Fetch one page through `source` and normalize it into its
/// StatTable.
pub fn load(source: &dyn PageSource, page: ArticlePage) -> Result<StatTable> {
    let doc = source.markup(page)?;
    let tables = extract::extract_tables(&doc)?;
    logd!("specs: {:?} page yielded {} table(s)", page, tables.len());
    match page {
        ArticlePage::Champions => champions::normalize(tables),
        ArticlePage::Items => items::normalize(tables),
    }
}
