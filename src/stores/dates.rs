//! Date-ordered index over the record log.
//!
//! Dates are kept in a [`BTreeMap`] keyed by the `YYYY-MM-DD` string, so
//! lexicographic key order is chronological order. Lookups never reorder
//! the log, and ids handed out by `add` stay valid.

use std::collections::BTreeMap;

use crate::RecordId;

#[derive(Default)]
pub struct DatesStore {
    days: BTreeMap<String, Vec<RecordId>>,
}

impl DatesStore {
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, date: &str, id: RecordId) {
        match self.days.get_mut(date) {
            Some(day) => day.push(id),
            None => {
                self.days.insert(date.to_owned(), vec![id]);
            }
        }
    }

    /// Ids recorded on exactly `date`, in insertion order.
    pub fn on(&self, date: &str) -> &[RecordId] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids recorded in the inclusive range `[from, to]`, ordered by date and
    /// then insertion order. An inverted range yields nothing.
    pub fn between<'a>(&'a self, from: &str, to: &str) -> impl Iterator<Item = &'a RecordId> + 'a {
        let days = if from <= to {
            Some(self.days.range::<str, _>((
                std::ops::Bound::Included(from),
                std::ops::Bound::Included(to),
            )))
        } else {
            None
        };
        days.into_iter().flatten().flat_map(|(_, ids)| ids.iter())
    }
}
