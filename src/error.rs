//! Domain-specific errors for the expense store.
//!
//! These errors represent rejected operations rather than technical
//! errors like I/O or parsing issues, which the runner handles separately.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `index` is signed so a negative index from input is reported as given.
    #[error("index {index} is out of range, the store holds {len} records")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}
