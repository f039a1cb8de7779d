//! Category grouping and running per-category totals.
//!
//! Buckets hold record ids in insertion order. Totals are updated
//! incrementally and are never recomputed from the log.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::RecordId;

#[derive(Default)]
pub struct CategoriesStore {
    buckets: HashMap<String, Vec<RecordId>>,
    totals: HashMap<String, Decimal>,
}

impl CategoriesStore {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            totals: HashMap::new(),
        }
    }

    /// Files a record under its category and adds its amount to the category total.
    /// Creates the bucket and a zero total on first sight of a category.
    pub fn insert(&mut self, category: &str, id: RecordId, amount: Decimal) {
        match self.buckets.get_mut(category) {
            Some(bucket) => bucket.push(id),
            None => {
                self.buckets.insert(category.to_owned(), vec![id]);
            }
        }
        *self
            .totals
            .entry(category.to_owned())
            .or_insert(Decimal::ZERO) += amount;
    }

    /// Takes an amount back out of a category total.
    /// Bucket membership is left untouched; tombstones are filtered at query time.
    pub fn retract(&mut self, category: &str, amount: Decimal) {
        if let Some(total) = self.totals.get_mut(category) {
            *total -= amount;
        }
    }

    /// Ids filed under a category, or an empty slice for an unknown category.
    pub fn bucket(&self, category: &str) -> &[RecordId] {
        self.buckets
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn totals(&self) -> &HashMap<String, Decimal> {
        &self.totals
    }

    pub fn total(&self, category: &str) -> Option<Decimal> {
        self.totals.get(category).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_category_is_empty() {
        let store = CategoriesStore::new();
        assert!(store.bucket("food").is_empty());
        assert_eq!(store.total("food"), None);
        assert!(store.totals().is_empty());
    }

    #[test]
    fn test_insert_groups_and_sums() {
        let mut store = CategoriesStore::new();
        store.insert("food", 0, dec!(12.50));
        store.insert("food", 1, dec!(40.00));
        store.insert("travel", 2, dec!(100.00));

        assert_eq!(store.bucket("food"), &[0, 1]);
        assert_eq!(store.bucket("travel"), &[2]);
        assert_eq!(store.total("food"), Some(dec!(52.50)));
        assert_eq!(store.total("travel"), Some(dec!(100.00)));
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let mut store = CategoriesStore::new();
        store.insert("Food", 0, dec!(1));
        store.insert("food", 1, dec!(2));

        assert_eq!(store.bucket("Food"), &[0]);
        assert_eq!(store.bucket("food"), &[1]);
        assert_eq!(store.totals().len(), 2);
    }

    #[test]
    fn test_retract_reduces_total_only() {
        let mut store = CategoriesStore::new();
        store.insert("food", 0, dec!(12.50));
        store.insert("food", 1, dec!(40.00));

        store.retract("food", dec!(12.50));
        assert_eq!(store.total("food"), Some(dec!(40.00)));
        assert_eq!(store.bucket("food"), &[0, 1]);

        // Unknown categories are ignored
        store.retract("rent", dec!(5));
        assert_eq!(store.total("rent"), None);
    }

    #[test]
    fn test_zero_amount_creates_entry() {
        let mut store = CategoriesStore::new();
        store.insert("gifts", 0, Decimal::ZERO);
        assert_eq!(store.total("gifts"), Some(Decimal::ZERO));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["gifts"]);
    }
}
