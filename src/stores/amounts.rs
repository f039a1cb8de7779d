//! Max-ordered view of records by amount.

use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::stores::{Expense, RecordsStore};
use crate::RecordId;

/// Heap entry. Equal amounts pop in insertion order.
type Ranked = (Decimal, Reverse<RecordId>);

#[derive(Default)]
pub struct AmountsStore {
    heap: BinaryHeap<Ranked>,
}

impl AmountsStore {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, id: RecordId, amount: Decimal) {
        self.heap.push((amount, Reverse(id)));
    }

    /// Returns up to `n` visible records, largest amount first.
    ///
    /// Extraction runs on a copy of the heap so the view itself never changes.
    /// Tombstoned records are skipped and do not count toward `n`.
    pub fn top<'a>(&self, n: usize, records: &'a RecordsStore) -> Vec<&'a Expense> {
        let mut top = Vec::with_capacity(n.min(self.heap.len()));
        if n == 0 {
            return top;
        }
        let mut scratch = self.heap.clone();
        while let Some((_, Reverse(id))) = scratch.pop() {
            if let Some(expense) = records.get_visible(id) {
                top.push(expense);
                if top.len() == n {
                    break;
                }
            }
        }
        top
    }
}
