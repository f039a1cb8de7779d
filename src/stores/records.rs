//! Append-only record log.
//!
//! The log is the single owner of every [`Expense`]. All other views refer
//! back into it by [`RecordId`], so a tombstone set here is seen everywhere.

use rust_decimal::Decimal;

use crate::Error;

/// Position of a record in the log. Assigned on insertion and never reused.
pub type RecordId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: RecordId,
    pub amount: Decimal,
    pub category: String,
    /// `YYYY-MM-DD`, ordered as a plain string.
    pub date: String,
    pub deleted: bool,
}

#[derive(Default)]
pub struct RecordsStore {
    records: Vec<Expense>,
    visible: usize,
}

impl RecordsStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            visible: 0,
        }
    }

    /// Appends a record and returns its id.
    pub fn append(&mut self, amount: Decimal, category: String, date: String) -> RecordId {
        let id = self.records.len();
        self.records.push(Expense {
            id,
            amount,
            category,
            date,
            deleted: false,
        });
        self.visible += 1;
        id
    }

    /// Sets the tombstone on a record.
    /// Returns `true` only when the record was visible before the call.
    pub fn mark_deleted(&mut self, id: RecordId) -> Result<bool, Error> {
        let len = self.records.len();
        let record = self.records.get_mut(id).ok_or(Error::IndexOutOfRange {
            index: i64::try_from(id).unwrap_or(i64::MAX),
            len,
        })?;
        if record.deleted {
            return Ok(false);
        }
        record.deleted = true;
        self.visible -= 1;
        Ok(true)
    }

    pub fn get(&self, id: RecordId) -> Option<&Expense> {
        self.records.get(id)
    }

    /// Resolves an id to a record only if it has not been deleted.
    pub fn get_visible(&self, id: RecordId) -> Option<&Expense> {
        self.records.get(id).filter(|record| !record.deleted)
    }

    /// Resolves a sequence of ids, dropping tombstoned records.
    pub fn resolve<'a, I>(&'a self, ids: I) -> impl Iterator<Item = &'a Expense> + 'a
    where
        I: IntoIterator<Item = &'a RecordId>,
        I::IntoIter: 'a,
    {
        ids.into_iter().filter_map(|&id| self.get_visible(id))
    }

    pub fn iter_visible(&self) -> impl Iterator<Item = &Expense> {
        self.records.iter().filter(|record| !record.deleted)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn visible_len(&self) -> usize {
        self.visible
    }
}
