// src/report.rs

// Terminal rendering of query results.

use crate::aggregate::EffectiveHealth;
use crate::error::Result;
use crate::params::GROWTH_STATS;
use crate::stats::StatVector;

/// Final stat block for one query.
pub fn render(name: &str, level: u8, totals: &StatVector, eh: &EffectiveHealth) -> Result<String> {
    let ar = totals.require("AR", "report")?;
    let mr = totals.require("MR", "report")?;
    Ok(format!(
        "\nChampion: {name}\n\
         Level: {level}\n\
         Health: {hp:.2}\n\
         Armor: {ar:.2}\n\
         Magic Resistance: {mr:.2}\n\
         Physical Effective Health: {phys:.2}\n\
         Magical Effective Health: {magic:.2}\n",
        hp = eh.hp,
        phys = eh.ar_eh,
        magic = eh.mr_eh,
    ))
}

/// Level progression, one line per level, tracked stats as columns.
/// A stat the champion does not have renders as "-".
pub fn render_curve(name: &str, curve: &[(u8, StatVector)]) -> String {
    let mut out = format!("Champion: {name}\nLevel");
    for stat in GROWTH_STATS {
        out.push_str(&format!("{stat:>10}"));
    }
    out.push('\n');

    for (level, vector) in curve {
        out.push_str(&format!("{level:<5}"));
        for stat in GROWTH_STATS {
            match vector.get(stat) {
                Some(v) => out.push_str(&format!("{v:>10.2}")),
                None => out.push_str(&format!("{:>10}", "-")),
            }
        }
        out.push('\n');
    }
    out
}
