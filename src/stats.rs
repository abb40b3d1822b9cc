// src/stats.rs

// Keyed numeric tables and per-entity stat vectors. Absence is a
// first-class state: a stat a row never had stays absent, it does not
// become zero.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{Result, StatsError};

/// Named numeric attributes for one entity. Missing stats are absent
/// keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatVector {
    values: BTreeMap<String, f64>,
}

impl StatVector {
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    pub fn get(&self, stat: &str) -> Option<f64> {
        self.values.get(stat).copied()
    }

    /// Value of `stat`, or `MissingStat` naming the calculation that
    /// needed it.
    pub fn require(&self, stat: &str, needed_for: &'static str) -> Result<f64> {
        self.get(stat).ok_or_else(|| StatsError::MissingStat {
            stat: stat.to_string(),
            needed_for,
        })
    }

    pub fn set(&mut self, stat: &str, value: f64) {
        self.values.insert(stat.to_string(), value);
    }

    /// Field-wise sum. A stat present on either side is present in the
    /// result; a side where it is absent contributes nothing.
    pub fn add(&mut self, other: &StatVector) {
        for (stat, v) in &other.values {
            *self.values.entry(stat.clone()).or_insert(0.0) += v;
        }
    }

    /// Field-wise maximum. A present value beats an absent one; two
    /// absents stay absent.
    pub fn merge_max(&mut self, other: &StatVector) {
        for (stat, v) in &other.values {
            self.values
                .entry(stat.clone())
                .and_modify(|cur| {
                    if *v > *cur {
                        *cur = *v;
                    }
                })
                .or_insert(*v);
        }
    }

    /// Stats in sorted name order.
    pub fn stats(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One wiki page's normalized stats, keyed by entity name.
#[derive(Clone, Debug)]
pub struct StatTable {
    label: &'static str,
    rows: BTreeMap<String, StatVector>,
}

impl StatTable {
    pub fn new(label: &'static str) -> Self {
        Self { label, rows: BTreeMap::new() }
    }

    /// Human label for prompts and errors ("champion", "item").
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Insert a row. A duplicate key collapses into the existing row
    /// by per-stat maximum.
    pub fn insert(&mut self, key: String, row: StatVector) {
        match self.rows.entry(key) {
            Entry::Occupied(mut e) => {
                logd!("{}: duplicate key {:?}, merging by max", self.label, e.key());
                e.get_mut().merge_max(&row);
            }
            Entry::Vacant(e) => {
                e.insert(row);
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&StatVector> {
        self.rows.get(name).ok_or_else(|| StatsError::UnknownEntity {
            label: self.label,
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> StatVector {
        let mut v = StatVector::new();
        for (stat, value) in pairs {
            v.set(stat, *value);
        }
        v
    }

    #[test]
    fn add_is_union_with_sum() {
        let mut a = vector(&[("HP", 100.0), ("AR", 10.0)]);
        let b = vector(&[("HP", 50.0), ("MR", 25.0)]);
        a.add(&b);
        assert_eq!(a.get("HP"), Some(150.0));
        assert_eq!(a.get("AR"), Some(10.0));
        assert_eq!(a.get("MR"), Some(25.0));
    }

    #[test]
    fn absent_stat_is_not_zero() {
        let v = vector(&[("HP", 100.0)]);
        assert_eq!(v.get("AR"), None);
        let err = v.require("AR", "effective health").unwrap_err();
        assert!(matches!(
            err,
            StatsError::MissingStat { ref stat, .. } if stat == "AR"
        ));
    }

    #[test]
    fn vectors_iterate_in_stat_name_order() {
        let v = vector(&[("MR", 1.0), ("AR", 2.0), ("HP", 3.0)]);
        let names: Vec<&str> = v.stats().map(|(stat, _)| stat).collect();
        assert_eq!(names, ["AR", "HP", "MR"]);
    }

    #[test]
    fn duplicate_keys_merge_by_per_stat_max() {
        let mut table = StatTable::new("item");
        table.insert(s!("Ruby Crystal"), vector(&[("HP", 150.0)]));
        table.insert(s!("Ruby Crystal"), vector(&[("HP", 180.0), ("AR", 5.0)]));
        table.insert(s!("Ruby Crystal"), vector(&[("HP", 120.0)]));

        assert_eq!(table.len(), 1);
        let row = table.lookup("Ruby Crystal").unwrap();
        assert_eq!(row.get("HP"), Some(180.0));
        // Present on one duplicate only: survives the merge.
        assert_eq!(row.get("AR"), Some(5.0));
    }

    #[test]
    fn lookup_miss_names_the_label() {
        let table = StatTable::new("champion");
        let err = table.lookup("Atrox").unwrap_err();
        assert_eq!(err.to_string(), "no champion named \"Atrox\"");
    }
}
