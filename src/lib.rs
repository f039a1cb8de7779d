mod config;
mod csv_utils;
mod dto;
mod error;
mod expense_store;
mod runner;
mod stores;

pub use config::{Config, Report, TotalsPolicy};
pub use dto::{CategoryTotalRow, ExpenseRow, Operation, OperationType};
pub use error::Error;
pub use expense_store::{Applied, ExpenseStore};
pub use runner::{run, run_async, write_report};
pub use stores::{Expense, RecordId};
