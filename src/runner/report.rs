use std::io::Write;
use tracing::debug;

use crate::{
    csv_utils::write_csv,
    dto::{CategoryTotalRow, ExpenseRow},
    Expense, ExpenseStore, Report,
};

/// Writes the selected report for the store's current state as CSV.
///
/// Totals are sorted by category name for deterministic output. Every other
/// report keeps the order the store's query returns.
pub fn write_report<W: Write>(store: &ExpenseStore, report: &Report, writer: W) -> csv::Result<()> {
    let rows = match report {
        Report::Totals => {
            let mut totals: Vec<_> = store
                .category_totals()
                .iter()
                .map(|(category, total)| CategoryTotalRow {
                    category: category.clone(),
                    total: *total,
                })
                .collect();
            totals.sort_by(|a, b| a.category.cmp(&b.category));
            write_csv(writer, totals.into_iter())?
        }
        Report::Expenses => write_expenses(writer, store.list_all())?,
        Report::Category(category) => write_expenses(writer, store.list_by_category(category))?,
        Report::Date(date) => write_expenses(writer, store.list_by_date(date))?,
        Report::Between(from, to) => write_expenses(writer, store.list_between(from, to))?,
        Report::Top(n) => write_expenses(writer, store.top_n(*n))?,
    };
    debug!(rows, %report, "report written");
    Ok(())
}

fn write_expenses<W: Write>(writer: W, expenses: Vec<&Expense>) -> csv::Result<usize> {
    write_csv(writer, expenses.into_iter().map(ExpenseRow::from))
}
