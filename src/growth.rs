// src/growth.rs

// Linear level projection. The champion table stores level-1 bases
// next to "+"-suffixed per-level increments. A level-L vector applies
// the increment L-1 times, accumulated level by level, so repeated
// calls land on bit-identical values.

use crate::error::{Result, StatsError};
use crate::params::{GROWTH_STATS, MAX_LEVEL, MIN_LEVEL};
use crate::stats::{StatTable, StatVector};

/// Tracked stats of `name` at `level`.
pub fn stats_at_level(champions: &StatTable, name: &str, level: u8) -> Result<StatVector> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(StatsError::InvalidLevel(level));
    }
    let row = champions.lookup(name)?;

    let mut out = StatVector::new();
    for stat in GROWTH_STATS {
        if let Some(base) = row.get(stat) {
            out.set(stat, base);
        }
    }
    // At level 1 no increment is ever read.
    for _ in MIN_LEVEL..level {
        for stat in GROWTH_STATS {
            let Some(current) = out.get(stat) else { continue };
            let step = row.require(&format!("{stat}+"), "level projection")?;
            out.set(stat, current + step);
        }
    }
    Ok(out)
}

/// The full level 1..=18 progression, one vector per level.
pub fn curve(champions: &StatTable, name: &str) -> Result<Vec<(u8, StatVector)>> {
    (MIN_LEVEL..=MAX_LEVEL)
        .map(|level| Ok((level, stats_at_level(champions, name, level)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_champion(pairs: &[(&str, f64)]) -> StatTable {
        let mut row = StatVector::new();
        for (stat, value) in pairs {
            row.set(stat, *value);
        }
        let mut table = StatTable::new("champion");
        table.insert(s!("Aatrox"), row);
        table
    }

    #[test]
    fn level_one_is_the_base_row() {
        let table = one_champion(&[("HP", 580.0), ("HP+", 90.0), ("AR", 38.0), ("AR+", 3.25)]);
        let v = stats_at_level(&table, "Aatrox", 1).unwrap();
        assert_eq!(v.get("HP"), Some(580.0));
        assert_eq!(v.get("AR"), Some(38.0));
    }

    #[test]
    fn each_level_adds_one_increment() {
        let table = one_champion(&[("HP", 580.0), ("HP+", 90.0)]);
        let v = stats_at_level(&table, "Aatrox", 10).unwrap();
        assert_eq!(v.get("HP"), Some(580.0 + 9.0 * 90.0));
    }

    #[test]
    fn projection_is_deterministic() {
        let table = one_champion(&[
            ("HP", 526.0),
            ("HP+", 92.0),
            ("AS", 0.668),
            ("AS+", 0.02),
            ("MR", 30.0),
            ("MR+", 0.5),
        ]);
        let a = stats_at_level(&table, "Aatrox", 18).unwrap();
        let b = stats_at_level(&table, "Aatrox", 18).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let table = one_champion(&[("HP", 580.0), ("HP+", 90.0)]);
        assert!(matches!(
            stats_at_level(&table, "Aatrox", 0),
            Err(StatsError::InvalidLevel(0))
        ));
        assert!(matches!(
            stats_at_level(&table, "Aatrox", 19),
            Err(StatsError::InvalidLevel(19))
        ));
    }

    #[test]
    fn unknown_champion_is_an_error() {
        let table = one_champion(&[("HP", 580.0)]);
        assert!(matches!(
            stats_at_level(&table, "Nobody", 1),
            Err(StatsError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn untracked_absence_stays_absent() {
        // No MP on the row: projection leaves it out rather than
        // inventing a zero.
        let table = one_champion(&[("HP", 580.0), ("HP+", 90.0)]);
        let v = stats_at_level(&table, "Aatrox", 5).unwrap();
        assert_eq!(v.get("MP"), None);
    }

    #[test]
    fn missing_increment_fails_above_level_one() {
        let table = one_champion(&[("HP", 580.0)]);
        // Fine at level 1, the increment is never read.
        assert!(stats_at_level(&table, "Aatrox", 1).is_ok());
        let err = stats_at_level(&table, "Aatrox", 2).unwrap_err();
        assert!(matches!(
            err,
            StatsError::MissingStat { ref stat, .. } if stat == "HP+"
        ));
    }

    #[test]
    fn curve_spans_all_levels_in_order() {
        let table = one_champion(&[("HP", 580.0), ("HP+", 90.0)]);
        let curve = curve(&table, "Aatrox").unwrap();
        assert_eq!(curve.len(), 18);
        assert_eq!(curve[0].0, 1);
        assert_eq!(curve[17].0, 18);
        assert_eq!(curve[17].1.get("HP"), Some(580.0 + 17.0 * 90.0));
        // The curve row equals the direct projection, bit for bit.
        assert_eq!(curve[9].1, stats_at_level(&table, "Aatrox", 10).unwrap());
    }
}
