//! Runner configuration: how category totals react to deletes, and which
//! report is written once all operations are applied.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Whether deleting a record takes its amount back out of the category total.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TotalsPolicy {
    /// Totals reflect every record ever added. Deletes never change them.
    #[default]
    Cumulative,
    /// Totals reflect visible records only.
    RecomputeOnDelete,
}

impl Display for TotalsPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TotalsPolicy::Cumulative => f.write_str("cumulative"),
            TotalsPolicy::RecomputeOnDelete => f.write_str("recompute-on-delete"),
        }
    }
}

impl FromStr for TotalsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cumulative" => Ok(TotalsPolicy::Cumulative),
            "recompute-on-delete" => Ok(TotalsPolicy::RecomputeOnDelete),
            other => Err(format!(
                "unknown totals policy '{other}', expected 'cumulative' or 'recompute-on-delete'"
            )),
        }
    }
}

/// The view written out after processing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Report {
    /// Every visible expense in insertion order.
    #[default]
    Expenses,
    /// One row per category with its running total.
    Totals,
    Category(String),
    Date(String),
    /// Inclusive date range.
    Between(String, String),
    Top(usize),
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Expenses => f.write_str("expenses"),
            Report::Totals => f.write_str("totals"),
            Report::Category(category) => write!(f, "category={category}"),
            Report::Date(date) => write!(f, "date={date}"),
            Report::Between(from, to) => write!(f, "between={from}..{to}"),
            Report::Top(n) => write!(f, "top={n}"),
        }
    }
}

impl FromStr for Report {
    type Err = String;

    /// Parses `expenses`, `totals`, `category=<name>`, `date=<YYYY-MM-DD>`,
    /// `between=<from>..<to>` or `top=<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once('=') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s, None),
        };
        match (kind, arg) {
            ("expenses", None) => Ok(Report::Expenses),
            ("totals", None) => Ok(Report::Totals),
            ("category", Some(category)) => Ok(Report::Category(category.to_owned())),
            ("date", Some(date)) => Ok(Report::Date(date.to_owned())),
            ("between", Some(range)) => range
                .split_once("..")
                .map(|(from, to)| Report::Between(from.to_owned(), to.to_owned()))
                .ok_or_else(|| format!("expected 'between=<from>..<to>', got '{s}'")),
            ("top", Some(n)) => n
                .parse()
                .map(Report::Top)
                .map_err(|e| format!("invalid count in '{s}': {e}")),
            _ => Err(format!("unknown report '{s}'")),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub totals_policy: TotalsPolicy,
    pub report: Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_totals_policy() {
        assert_eq!("cumulative".parse(), Ok(TotalsPolicy::Cumulative));
        assert_eq!(
            "recompute-on-delete".parse(),
            Ok(TotalsPolicy::RecomputeOnDelete)
        );
        assert!("Cumulative".parse::<TotalsPolicy>().is_err());
    }

    #[test]
    fn test_totals_policy_display_matches_parse() {
        for policy in [TotalsPolicy::Cumulative, TotalsPolicy::RecomputeOnDelete] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }

    #[test]
    fn test_parse_reports() {
        assert_eq!("expenses".parse(), Ok(Report::Expenses));
        assert_eq!("totals".parse(), Ok(Report::Totals));
        assert_eq!("top=3".parse(), Ok(Report::Top(3)));
        assert_eq!(
            "category=food".parse(),
            Ok(Report::Category("food".to_owned()))
        );
        assert_eq!(
            "date=2024-01-05".parse(),
            Ok(Report::Date("2024-01-05".to_owned()))
        );
        assert_eq!(
            "between=2024-01-01..2024-01-31".parse(),
            Ok(Report::Between(
                "2024-01-01".to_owned(),
                "2024-01-31".to_owned()
            ))
        );
    }

    #[test]
    fn test_parse_invalid_reports() {
        assert!("top=-1".parse::<Report>().is_err());
        assert!("top".parse::<Report>().is_err());
        assert!("between=2024-01-01".parse::<Report>().is_err());
        assert!("totals=food".parse::<Report>().is_err());
        assert!("monthly".parse::<Report>().is_err());
    }

    #[test]
    fn test_category_with_equals_sign() {
        assert_eq!(
            "category=a=b".parse(),
            Ok(Report::Category("a=b".to_owned()))
        );
    }
}
