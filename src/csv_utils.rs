//! CSV serialization and deserialization utilities.
//!
//! Input rows are trimmed of surrounding whitespace. Output rows carry a
//! header taken from the serialized field names.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Creates an iterator that reads CSV records from a file.
/// Each record is deserialized into type T.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Writes an iterator of records to a CSV writer and returns how many rows were written.
/// The header row is derived from the first record, so an empty iterator writes nothing.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<usize>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for record in records {
        wtr.serialize(record)?;
        rows += 1;
    }
    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CategoryTotalRow, Operation};
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let operations: Vec<Operation> =
            read_csv("data/example_input.csv")?.collect::<Result<_, _>>()?;

        let mut invalid_add = Operation::add(dec!(0), "food", "2024-01-08");
        invalid_add.amount = None;
        let expected_operations = vec![
            Operation::add(dec!(12.50), "food", "2024-01-05"),
            Operation::add(dec!(40.00), "food", "2024-01-06"),
            Operation::add(dec!(100.00), "travel", "2024-01-05"),
            Operation::add(dec!(8.25), "coffee", "2024-01-07"),
            Operation::delete(0),
            Operation::delete(9),
            invalid_add,
            Operation::add(dec!(55.10), "travel", "2024-01-07"),
        ];
        assert_eq!(operations, expected_operations);

        Ok(())
    }

    #[test]
    fn test_read_csv_reports_malformed_rows() -> csv::Result<()> {
        let results: Vec<csv::Result<Operation>> = read_csv("data/malformed.csv")?.collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        Ok(())
    }

    #[test]
    fn test_read_csv_missing_file() {
        assert!(read_csv::<Operation, _>("data/does_not_exist.csv").is_err());
    }

    #[test]
    fn test_write_csv() -> Result<(), Box<dyn std::error::Error>> {
        let mut output = Vec::new();
        let rows = vec![
            CategoryTotalRow {
                category: "food".to_owned(),
                total: dec!(52.50),
            },
            CategoryTotalRow {
                category: "travel".to_owned(),
                total: dec!(100.00),
            },
        ];
        assert_eq!(write_csv(&mut output, rows.into_iter())?, 2);
        assert_eq!(
            String::from_utf8(output)?,
            "category,total\nfood,52.50\ntravel,100.00\n"
        );
        Ok(())
    }
}
