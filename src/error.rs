// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

/// Everything the pipeline can fail with. Callers match on variants;
/// nothing below the CLI recovers, retries, or substitutes defaults.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Transport, HTTP status, or article-envelope failure.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Structurally invalid table markup.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// A cell that must be numeric did not parse.
    #[error("{table} {key:?}, column {column:?}: cannot convert {value:?} to a number")]
    Conversion {
        table: &'static str,
        key: String,
        column: String,
        value: String,
    },

    /// Name absent from the table after resolution.
    #[error("no {label} named {name:?}")]
    UnknownEntity { label: &'static str, name: String },

    #[error("invalid level {0}: must be 1-18")]
    InvalidLevel(u8),

    /// A derived calculation needs a stat the entity does not have.
    /// A missing stat never silently becomes zero.
    #[error("missing stat {stat} (needed for {needed_for})")]
    MissingStat { stat: String, needed_for: &'static str },
}
