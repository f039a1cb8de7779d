//! The runner is responsible for setting up a file stream for reading operations from CSV,
//! applying them to an [`ExpenseStore`](crate::ExpenseStore), and writing the selected report
//! to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod report;
mod sync_runner;

pub use async_runner::run as run_async;
pub use report::write_report;
pub use sync_runner::run;
