use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::stores::Expense;
use crate::RecordId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Add,
    Delete,
}

/// One input row. Which fields are required depends on `op`:
/// `add` needs amount, category and date; `delete` needs index.
///
/// `index` is read as a signed integer so that a negative index reaches the
/// store and is rejected there as out of range, rather than failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub op: OperationType,
    #[serde(default, deserialize_with = "deserialize_decimal_4dp")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub index: Option<i64>,
}

impl Operation {
    pub fn add(amount: Decimal, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            op: OperationType::Add,
            amount: Some(amount),
            category: Some(category.into()),
            date: Some(date.into()),
            index: None,
        }
    }

    pub fn delete(index: i64) -> Self {
        Self {
            op: OperationType::Delete,
            amount: None,
            category: None,
            date: None,
            index: Some(index),
        }
    }
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer)
        .map(|opt_dec| opt_dec.map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero)))
}

/// Output row for expense listings.
#[derive(Debug, Serialize, PartialEq)]
pub struct ExpenseRow {
    pub id: RecordId,
    pub amount: Decimal,
    pub category: String,
    pub date: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date.clone(),
        }
    }
}

/// Output row for the per-category totals report.
#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryTotalRow {
    pub category: String,
    pub total: Decimal,
}
