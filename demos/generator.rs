//! This example generates a CSV file of expense operations (configurable through the constants)
//! spread across a number of days supplied as a command-line argument.
//!
//! The CSV file can then be fed to the `expense-ledger` binary.
//!
//! Example (365 days):
//! ```bash
//! cargo run --example generator 365 > data/365_days.csv
//! cargo run -- data/365_days.csv --report totals
//! ```
//! ### Maths
//! Every day `d` (1-based) receives one expense per category `c` (1-based, `CATEGORIES[c - 1]`)
//! with amount `BASE_AMOUNT·c`. After each day's adds, the first expense of that day is deleted.
//!
//! Let N = number of days, C = number of categories, A = BASE_AMOUNT.
//!
//! - Ids: day `d` occupies ids `(d-1)·C .. d·C`, so the deleted id of day `d` is `(d-1)·C`.
//! - Cumulative totals: category `c` totals `N·A·c`.
//! - Recomputed totals: the first category loses every expense, so it totals 0; every other
//!   category totals `N·A·c`.
//! - Visible expenses: `N·(C-1)`.
//!

use csv::Writer;
use expense_ledger::Operation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{env, error::Error};

const CATEGORIES: [&str; 5] = ["coffee", "food", "transport", "utilities", "rent"];
const BASE_AMOUNT: Decimal = dec!(2.50);

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_days>");
        std::process::exit(1);
    }

    let num_days: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_days> must be a positive integer.");
            std::process::exit(1);
        }
    };

    let mut wtr = Writer::from_writer(std::io::stdout());
    let mut next_id: i64 = 0;

    for day in 0..num_days {
        let date = date_for(day);
        let first_of_day = next_id;
        for (c, category) in CATEGORIES.iter().enumerate() {
            let amount = BASE_AMOUNT * Decimal::from(c + 1);
            wtr.serialize(Operation::add(amount, *category, date.clone()))?;
            next_id += 1;
        }
        wtr.serialize(Operation::delete(first_of_day))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Day offset as `YYYY-MM-DD` on a simplified calendar of 12 months of 28 days,
/// which keeps every date valid and lexicographically ordered.
fn date_for(day: u32) -> String {
    let year = 2000 + day / (12 * 28);
    let month = 1 + (day / 28) % 12;
    let day_of_month = 1 + day % 28;
    format!("{year:04}-{month:02}-{day_of_month:02}")
}
