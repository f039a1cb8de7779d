//! Storage layer for the expense store. Provides:
//! - The authoritative append-only record log ([`RecordsStore`])
//! - Category buckets and running totals ([`CategoriesStore`])
//! - A max-heap view by amount ([`AmountsStore`])
//! - A date-ordered index ([`DatesStore`])
//!
//! Only the record log owns expense data. The other stores hold [`RecordId`]s
//! and resolve them through the log at query time.

mod amounts;
mod categories;
mod dates;
mod records;

pub use amounts::AmountsStore;
pub use categories::CategoriesStore;
pub use dates::DatesStore;
pub use records::{Expense, RecordId, RecordsStore};
