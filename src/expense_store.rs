use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

use crate::stores::{AmountsStore, CategoriesStore, DatesStore, Expense, RecordsStore};
use crate::{Error, Operation, OperationType, RecordId, TotalsPolicy};

/// Outcome of [`ExpenseStore::apply`].
#[derive(Debug, PartialEq, Eq)]
pub enum Applied {
    Added(RecordId),
    /// `changed` is false when the record was already deleted.
    Deleted { id: RecordId, changed: bool },
}

/// In-memory expense dataset with category, amount and date views.
///
/// The record log is the only owner of expense data; every view holds ids.
/// Deletion is lazy: a tombstone flag is set in the log and every query
/// filters it out.
#[derive(Default)]
pub struct ExpenseStore {
    policy: TotalsPolicy,
    records: RecordsStore,
    categories: CategoriesStore,
    amounts: AmountsStore,
    dates: DatesStore,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::with_policy(TotalsPolicy::default())
    }

    pub fn with_policy(policy: TotalsPolicy) -> Self {
        Self {
            policy,
            records: RecordsStore::new(),
            categories: CategoriesStore::new(),
            amounts: AmountsStore::new(),
            dates: DatesStore::new(),
        }
    }

    pub fn policy(&self) -> TotalsPolicy {
        self.policy
    }

    /// Records an expense and returns its id.
    pub fn add(
        &mut self,
        amount: Decimal,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> RecordId {
        let category = category.into();
        let date = date.into();
        // Views are filed under the id the log is about to assign
        let id = self.records.len();
        self.categories.insert(&category, id, amount);
        self.amounts.insert(id, amount);
        self.dates.insert(&date, id);
        let appended = self.records.append(amount, category, date);
        debug_assert_eq!(appended, id);
        debug!(id, %amount, "expense added");
        id
    }

    /// Marks a record as deleted. Deleting an already deleted record succeeds
    /// without changing anything.
    pub fn delete(&mut self, id: RecordId) -> Result<(), Error> {
        self.delete_inner(id).map(|_| ())
    }

    fn delete_inner(&mut self, id: RecordId) -> Result<bool, Error> {
        let changed = self.records.mark_deleted(id)?;
        if changed && self.policy == TotalsPolicy::RecomputeOnDelete {
            // mark_deleted succeeded, so the record exists
            if let Some(expense) = self.records.get(id) {
                self.categories.retract(&expense.category, expense.amount);
            }
        }
        debug!(id, changed, "expense deleted");
        Ok(changed)
    }

    /// Dispatches a parsed operation row.
    pub fn apply(&mut self, operation: Operation) -> Result<Applied, Error> {
        match operation.op {
            OperationType::Add => {
                let amount = operation
                    .amount
                    .ok_or(Error::InvalidOperation("add requires an amount"))?;
                let category = operation
                    .category
                    .ok_or(Error::InvalidOperation("add requires a category"))?;
                let date = operation
                    .date
                    .ok_or(Error::InvalidOperation("add requires a date"))?;
                Ok(Applied::Added(self.add(amount, category, date)))
            }
            OperationType::Delete => {
                let index = operation
                    .index
                    .ok_or(Error::InvalidOperation("delete requires an index"))?;
                let id = RecordId::try_from(index).map_err(|_| Error::IndexOutOfRange {
                    index,
                    len: self.len(),
                })?;
                let changed = self.delete_inner(id)?;
                Ok(Applied::Deleted { id, changed })
            }
        }
    }

    /// The record at `id`, deleted or not.
    pub fn get(&self, id: RecordId) -> Option<&Expense> {
        self.records.get(id)
    }

    /// Visible expenses in insertion order.
    pub fn list_all(&self) -> Vec<&Expense> {
        self.records.iter_visible().collect()
    }

    /// Visible expenses of one category in insertion order.
    /// An unknown category gives an empty list, same as one whose records are all deleted.
    pub fn list_by_category(&self, category: &str) -> Vec<&Expense> {
        self.records
            .resolve(self.categories.bucket(category))
            .collect()
    }

    /// Running totals per category. Iteration order is unspecified.
    pub fn category_totals(&self) -> &HashMap<String, Decimal> {
        self.categories.totals()
    }

    pub fn category_total(&self, category: &str) -> Option<Decimal> {
        self.categories.total(category)
    }

    /// Visible expenses dated exactly `date`, in insertion order.
    pub fn list_by_date(&self, date: &str) -> Vec<&Expense> {
        self.records.resolve(self.dates.on(date)).collect()
    }

    /// Visible expenses dated within `[from, to]`, in date then insertion order.
    pub fn list_between(&self, from: &str, to: &str) -> Vec<&Expense> {
        self.records.resolve(self.dates.between(from, to)).collect()
    }

    /// Up to `n` visible expenses, largest amount first.
    pub fn top_n(&self, n: usize) -> Vec<&Expense> {
        self.amounts.top(n, &self.records)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.names()
    }

    /// Number of records ever added, deleted ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn visible_len(&self) -> usize {
        self.records.visible_len()
    }
}
