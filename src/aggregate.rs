// src/aggregate.rs

// Item sums and effective health. Pure over its inputs.

use crate::error::Result;
use crate::stats::{StatTable, StatVector};

/// Final derived figures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveHealth {
    pub hp: f64,
    /// Against physical damage.
    pub ar_eh: f64,
    /// Against magic damage.
    pub mr_eh: f64,
}

/// Look up every equipped item. A name may appear more than once and
/// contributes once per occurrence.
pub fn item_vectors<'a>(items: &'a StatTable, names: &[String]) -> Result<Vec<&'a StatVector>> {
    names.iter().map(|name| items.lookup(name)).collect()
}

/// Field-wise sum of the base vector and every item vector. A stat
/// present in any input is present in the result; absence contributes
/// nothing and never overwrites.
pub fn combine(base: &StatVector, items: &[&StatVector]) -> StatVector {
    let mut out = base.clone();
    for item in items {
        out.add(item);
    }
    out
}

/// HP reweighted by armor and magic resistance. All three stats must
/// be present in `totals`; a missing one is an error, not a zero.
pub fn effective_health(totals: &StatVector) -> Result<EffectiveHealth> {
    let hp = totals.require("HP", "effective health")?;
    let ar = totals.require("AR", "effective health")?;
    let mr = totals.require("MR", "effective health")?;
    Ok(EffectiveHealth {
        hp,
        ar_eh: hp * (1.0 + ar / 100.0),
        mr_eh: hp * (1.0 + mr / 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    fn vector(pairs: &[(&str, f64)]) -> StatVector {
        let mut v = StatVector::new();
        for (stat, value) in pairs {
            v.set(stat, *value);
        }
        v
    }

    #[test]
    fn no_items_leaves_the_base_untouched() {
        let base = vector(&[("HP", 580.0), ("AR", 38.0), ("MR", 32.1)]);
        assert_eq!(combine(&base, &[]), base);
    }

    #[test]
    fn item_without_armor_leaves_base_armor_alone() {
        let base = vector(&[("HP", 580.0), ("AR", 38.0)]);
        let ruby = vector(&[("HP", 150.0)]);
        let out = combine(&base, &[&ruby]);
        assert_eq!(out.get("HP"), Some(730.0));
        assert_eq!(out.get("AR"), Some(38.0));
    }

    #[test]
    fn item_only_stats_appear_in_the_total() {
        let base = vector(&[("HP", 580.0)]);
        let zeal = vector(&[("AS", 0.45), ("Crit", 0.1)]);
        let out = combine(&base, &[&zeal]);
        assert_eq!(out.get("Crit"), Some(0.1));
    }

    #[test]
    fn the_same_item_stacks_per_occurrence() {
        let base = vector(&[("HP", 580.0)]);
        let ruby = vector(&[("HP", 180.0)]);
        let out = combine(&base, &[&ruby, &ruby]);
        assert_eq!(out.get("HP"), Some(940.0));
    }

    #[test]
    fn effective_health_formulas() {
        let totals = vector(&[("HP", 600.0), ("AR", 50.0), ("MR", 30.0)]);
        let eh = effective_health(&totals).unwrap();
        assert_eq!(eh.hp, 600.0);
        assert_eq!(eh.ar_eh, 900.0);
        assert_eq!(eh.mr_eh, 780.0);
    }

    #[test]
    fn missing_resistance_is_an_error_not_raw_hp() {
        let totals = vector(&[("HP", 600.0), ("AR", 50.0)]);
        let err = effective_health(&totals).unwrap_err();
        assert!(matches!(
            err,
            StatsError::MissingStat { ref stat, needed_for: "effective health" } if stat == "MR"
        ));
    }

    #[test]
    fn missing_hp_is_an_error_too() {
        let totals = vector(&[("AR", 50.0), ("MR", 30.0)]);
        let err = effective_health(&totals).unwrap_err();
        assert!(matches!(
            err,
            StatsError::MissingStat { ref stat, .. } if stat == "HP"
        ));
    }

    #[test]
    fn unknown_item_fails_lookup() {
        let table = StatTable::new("item");
        let err = item_vectors(&table, &[s!("Muramana")]).unwrap_err();
        assert!(matches!(err, StatsError::UnknownEntity { label: "item", .. }));
    }
}
