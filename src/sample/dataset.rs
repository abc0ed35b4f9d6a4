use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::errors::{Id3Error, Result};
use super::label::{Label, LabelCounts};
use super::schema::{Schema, SampleKey};


/// The aggregated training table.
///
/// Each distinct [`SampleKey`] maps to the [`LabelCounts`] of the raw rows
/// sharing it. Keys keep the order in which they were first recorded,
/// and a key whose counts drop to zero is removed, so every stored entry
/// stands for at least one raw row.
///
/// `Clone` gives an independent copy of the table;
/// the [`Schema`] is immutable and shared between copies.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Rc<Schema>,
    rows: Vec<(SampleKey, LabelCounts)>,
    key_to_index: HashMap<SampleKey, usize>,
}


impl Dataset {
    /// Construct an empty table for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self::with_schema(Rc::new(schema))
    }


    #[inline]
    pub(crate) fn with_schema(schema: Rc<Schema>) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            key_to_index: HashMap::new(),
        }
    }


    /// The attribute names of this table.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if no row is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Number of raw rows aggregated in this table.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.totals().total()
    }


    /// Iterate over `(key, counts)` pairs in first-recorded order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&SampleKey, &LabelCounts)> {
        self.rows.iter().map(|(key, counts)| (key, counts))
    }


    /// Counts recorded for `key`.
    #[inline]
    pub fn counts(&self, key: &SampleKey) -> Option<LabelCounts> {
        self.key_to_index.get(key)
            .map(|&i| self.rows[i].1)
    }


    /// Sum of the counts over the whole table.
    pub fn totals(&self) -> LabelCounts {
        self.rows.iter()
            .fold(LabelCounts::default(), |acc, (_, counts)| acc + *counts)
    }


    /// Record one raw row.
    ///
    /// Returns [`Id3Error::SchemaMismatch`] and leaves the table unchanged
    /// if `key` does not hold exactly one value per attribute.
    pub fn record(&mut self, key: SampleKey, label: Label) -> Result<()> {
        let expected = self.schema.n_columns();
        let found = key.len() + 1;
        if found != expected {
            let row = self.n_rows() + 1;
            return Err(Id3Error::SchemaMismatch { row, expected, found });
        }

        let mut counts = LabelCounts::default();
        counts.increment(label);
        self.merge(key, counts);
        Ok(())
    }


    /// Add `counts` to the entry of `key`, creating it if needed.
    /// Empty counters are not stored.
    pub(crate) fn merge(&mut self, key: SampleKey, counts: LabelCounts) {
        if counts.is_empty() { return; }

        match self.key_to_index.get(&key) {
            Some(&i) => { self.rows[i].1 += counts; },
            None => {
                self.key_to_index.insert(key.clone(), self.rows.len());
                self.rows.push((key, counts));
            },
        }
    }


    /// Remove one raw row with `label` under `key`.
    /// The key is dropped entirely once both counts reach zero.
    /// Returns `false` if there is no such row.
    pub fn remove_one(&mut self, key: &SampleKey, label: Label) -> bool {
        let Some(&i) = self.key_to_index.get(key) else { return false; };

        if !self.rows[i].1.decrement(label) { return false; }

        if self.rows[i].1.is_empty() {
            self.rows.remove(i);
            self.key_to_index.remove(key);
            for (_, index) in self.key_to_index.iter_mut() {
                if *index > i { *index -= 1; }
            }
        }
        true
    }


    /// The distinct values observed at column `index`,
    /// in order of first appearance.
    pub fn domain(&self, index: usize) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::new();
        for (key, _) in self.rows.iter() {
            if let Some(value) = key.get(index) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        values
    }


    /// The rows whose column `index` equals `value`.
    /// The returned table shares this table's schema.
    pub fn filter(&self, index: usize, value: &str) -> Self {
        let mut subset = Self::with_schema(Rc::clone(&self.schema));
        self.rows.iter()
            .filter(|(key, _)| key.get(index) == Some(value))
            .for_each(|(key, counts)| {
                subset.merge(key.clone(), *counts);
            });
        subset
    }
}


impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.schema)?;
        for (key, counts) in self.rows.iter() {
            writeln!(f, "{key} : {counts}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn key(values: &[&str]) -> SampleKey {
        values.iter().copied().collect()
    }


    fn toy() -> Dataset {
        let mut data = Dataset::new(Schema::new(["sky", "wind"], "play"));
        data.record(key(&["sunny", "weak"]), Label::Yes).unwrap();
        data.record(key(&["rainy", "strong"]), Label::No).unwrap();
        data.record(key(&["sunny", "weak"]), Label::Yes).unwrap();
        data.record(key(&["sunny", "strong"]), Label::No).unwrap();
        data
    }


    #[test]
    fn record_aggregates_duplicate_keys() {
        let data = toy();
        assert_eq!(data.len(), 3);
        assert_eq!(data.n_rows(), 4);
        assert_eq!(
            data.counts(&key(&["sunny", "weak"])),
            Some(LabelCounts::new(2, 0))
        );
        assert_eq!(data.totals(), LabelCounts::new(2, 2));
    }


    #[test]
    fn record_rejects_keys_of_the_wrong_length() {
        let mut data = Dataset::new(Schema::new(["a", "b"], "class"));
        data.record(key(&["x", "p"]), Label::Yes).unwrap();
        data.record(key(&["y", "q"]), Label::No).unwrap();

        let err = data.record(key(&["z"]), Label::No).unwrap_err();
        assert!(matches!(
            err,
            Id3Error::SchemaMismatch { row: 3, expected: 3, found: 2 }
        ));
        let err = data.record(key(&["z", "r", "s"]), Label::No).unwrap_err();
        assert!(matches!(err, Id3Error::SchemaMismatch { found: 4, .. }));

        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.len(), 2);
        assert_eq!(data.domain(0), vec!["x", "y"]);
    }


    #[test]
    fn remove_one_drops_empty_keys() {
        let mut data = toy();
        let rainy = key(&["rainy", "strong"]);
        assert!(data.remove_one(&rainy, Label::No));
        assert!(!data.remove_one(&rainy, Label::No));
        assert_eq!(data.counts(&rainy), None);
        assert_eq!(data.len(), 2);

        // Indices behind the removed key are still valid.
        let strong = key(&["sunny", "strong"]);
        assert_eq!(data.counts(&strong), Some(LabelCounts::new(0, 1)));
        assert!(data.remove_one(&strong, Label::No));
        assert_eq!(data.len(), 1);
    }


    #[test]
    fn copies_are_independent() {
        let data = toy();
        let mut copy = data.clone();
        copy.remove_one(&key(&["sunny", "weak"]), Label::Yes);
        assert_eq!(data.n_rows(), 4);
        assert_eq!(copy.n_rows(), 3);
    }


    #[test]
    fn domain_keeps_first_appearance_order() {
        let data = toy();
        assert_eq!(data.domain(0), vec!["sunny", "rainy"]);
        assert_eq!(data.domain(1), vec!["weak", "strong"]);
        assert!(data.domain(5).is_empty());
    }


    #[test]
    fn filter_selects_matching_rows() {
        let data = toy();
        let sunny = data.filter(0, "sunny");
        assert_eq!(sunny.len(), 2);
        assert_eq!(sunny.totals(), LabelCounts::new(2, 1));
        assert_eq!(sunny.schema(), data.schema());
        assert!(data.filter(0, "cloudy").is_empty());
    }


    #[test]
    fn display_prints_schema_then_rows() {
        let text = toy().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("sky wind play"));
        assert_eq!(lines.next(), Some("sunny weak : [2, 0]"));
    }
}
