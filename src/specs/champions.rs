// src/specs/champions.rs

// Base champion statistics page: one wide table keyed by "Champions".
// Every cell is numeric; the lone exception is the attack-speed growth
// column, written as a percentage.

use crate::core::sanitize::strip_percent;
use crate::error::{Result, StatsError};
use crate::extract::RawTable;
use crate::params::CHAMPIONS_KEY;
use crate::stats::{StatTable, StatVector};

pub const LABEL: &str = "champion";

// "AS+" holds "3.4%" per level; stored as 0.034.
const PERCENT_COLUMN: &str = "AS+";

pub fn normalize(tables: Vec<RawTable>) -> Result<StatTable> {
    let mut out = StatTable::new(LABEL);

    for table in tables {
        let Some(key_col) = table.columns.iter().position(|c| c == CHAMPIONS_KEY) else {
            logd!("champions: skipping table without {:?} column", CHAMPIONS_KEY);
            continue;
        };

        for cells in &table.rows {
            let name = cells[key_col].clone();
            let mut row = StatVector::new();

            for (col, value) in table.columns.iter().zip(cells) {
                if col == CHAMPIONS_KEY {
                    continue;
                }
                let parsed = if col == PERCENT_COLUMN {
                    strip_percent(value)
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| conv_err(&name, col, value))?
                        / 100.0
                } else {
                    value
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| conv_err(&name, col, value))?
                };
                row.set(col, parsed);
            }
            out.insert(name, row);
        }
    }

    Ok(out)
}

fn conv_err(key: &str, column: &str, value: &str) -> StatsError {
    StatsError::Conversion {
        table: LABEL,
        key: key.to_string(),
        column: column.to_string(),
        value: value.to_string(),
    }
}
