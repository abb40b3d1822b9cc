// src/specs/items.rs

// "List of items' stats" page, keyed by "Item". Needs more cleanup
// than the champion table: two columns carry different names there,
// one column is not a stat at all, blank cells mean an item does not
// grant the stat, and several columns are percentages.

use crate::core::sanitize::digits_only;
use crate::error::{Result, StatsError};
use crate::extract::RawTable;
use crate::params::{ITEMS_KEY, ITEM_PERCENT_STATS};
use crate::stats::{StatTable, StatVector};

pub const LABEL: &str = "item";

const DROP_COLUMNS: [&str; 1] = ["Availability"];
const RENAMES: [(&str, &str); 2] = [("Health", "HP"), ("Armor", "AR")];

pub fn normalize(tables: Vec<RawTable>) -> Result<StatTable> {
    let mut out = StatTable::new(LABEL);

    for table in tables {
        let Some(key_col) = table.columns.iter().position(|c| c == ITEMS_KEY) else {
            logd!("items: skipping table without {:?} column", ITEMS_KEY);
            continue;
        };

        for cells in &table.rows {
            let name = cells[key_col].clone();
            let mut row = StatVector::new();

            for (col, value) in table.columns.iter().zip(cells) {
                if col == ITEMS_KEY || DROP_COLUMNS.contains(&col.as_str()) {
                    continue;
                }
                // Blank cell: the item does not grant this stat.
                if value.trim().is_empty() {
                    continue;
                }
                let stat = rename(col);
                let parsed = if ITEM_PERCENT_STATS.contains(&stat) {
                    percent_value(&name, col, value)?
                } else {
                    value
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| conv_err(&name, col, value))?
                };
                row.set(stat, parsed);
            }
            out.insert(name, row);
        }
    }

    Ok(out)
}

fn rename(col: &str) -> &str {
    for (from, to) in RENAMES {
        if col == from {
            return to;
        }
    }
    col
}

/// "+45%" → 0.45, bare "45" → 0.45. Only digits survive the filter,
/// so signs and separators drop out rather than reject the cell.
fn percent_value(key: &str, column: &str, value: &str) -> Result<f64> {
    let digits = digits_only(value);
    let n = digits
        .parse::<f64>()
        .map_err(|_| conv_err(key, column, value))?;
    Ok(n / 100.0)
}

fn conv_err(key: &str, column: &str, value: &str) -> StatsError {
    StatsError::Conversion {
        table: LABEL,
        key: key.to_string(),
        column: column.to_string(),
        value: value.to_string(),
    }
}
