//! Operator dispatch table.
//!
//! Maps `(column type, operator)` to a [`PredicateKind`] carrying its arity,
//! then builds a typed [`Predicate`] from the filter values. Pairs missing from
//! the table and arity mismatches produce no predicate at all.

use crate::domain::filter::{
    columns::ColumnType,
    ports::{Comparison, Queryable},
    value_objects::{FilterDescriptor, FilterType, FilterValue},
    values::{normalize_date, parse_number, scale_number},
};

/// How many filter values a predicate consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Uses the first value.
    One,
    /// Needs exactly two values, `[low, high]`.
    Pair,
    /// Uses every value.
    Many,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    Contains,
    NotContains,
    Compare(CompareOp),
    AnyOf,
    NoneOf,
    Between,
    NotBetween,
}

impl PredicateKind {
    pub fn arity(&self) -> Arity {
        match self {
            PredicateKind::Contains | PredicateKind::NotContains | PredicateKind::Compare(_) => {
                Arity::One
            }
            PredicateKind::AnyOf | PredicateKind::NoneOf => Arity::Many,
            PredicateKind::Between | PredicateKind::NotBetween => Arity::Pair,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

const OPERATOR_TABLE: &[(FilterType, &str, PredicateKind)] = &[
    (FilterType::Text, "contains", PredicateKind::Contains),
    (FilterType::Text, "does not contain", PredicateKind::NotContains),
    (FilterType::Option, "is", PredicateKind::Compare(CompareOp::Eq)),
    (FilterType::Option, "is not", PredicateKind::Compare(CompareOp::Ne)),
    (FilterType::Option, "is any of", PredicateKind::AnyOf),
    (FilterType::Option, "is none of", PredicateKind::NoneOf),
    (FilterType::MultiOption, "include any of", PredicateKind::AnyOf),
    // Matches rows carrying any of the values, not all of them.
    (FilterType::MultiOption, "include all of", PredicateKind::AnyOf),
    (FilterType::MultiOption, "exclude if any of", PredicateKind::NoneOf),
    (FilterType::Date, "is", PredicateKind::Compare(CompareOp::Eq)),
    (FilterType::Date, "is not", PredicateKind::Compare(CompareOp::Ne)),
    (FilterType::Date, "is before", PredicateKind::Compare(CompareOp::Lt)),
    (FilterType::Date, "is on or before", PredicateKind::Compare(CompareOp::Lte)),
    (FilterType::Date, "is after", PredicateKind::Compare(CompareOp::Gt)),
    (FilterType::Date, "is on or after", PredicateKind::Compare(CompareOp::Gte)),
    (FilterType::Date, "is between", PredicateKind::Between),
    (FilterType::Date, "is not between", PredicateKind::NotBetween),
    (FilterType::Number, "is", PredicateKind::Compare(CompareOp::Eq)),
    (FilterType::Number, "is not", PredicateKind::Compare(CompareOp::Ne)),
    (FilterType::Number, "is less than", PredicateKind::Compare(CompareOp::Lt)),
    (FilterType::Number, "is greater than", PredicateKind::Compare(CompareOp::Gt)),
    (
        FilterType::Number,
        "is greater than or equal to",
        PredicateKind::Compare(CompareOp::Gte),
    ),
    (
        FilterType::Number,
        "is less than or equal to",
        PredicateKind::Compare(CompareOp::Lte),
    ),
    (FilterType::Number, "is between", PredicateKind::Between),
    (FilterType::Number, "is not between", PredicateKind::NotBetween),
];

pub fn lookup(filter_type: FilterType, operator: &str) -> Option<PredicateKind> {
    OPERATOR_TABLE
        .iter()
        .find(|(kind, name, _)| *kind == filter_type && *name == operator)
        .map(|(_, _, predicate)| *predicate)
}

/// Operand after coercion to the column's type.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    Text(String),
    Number(f64),
    /// Either `YYYY-MM-DD` or an ISO-8601 UTC instant.
    Date(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Contains {
        column: String,
        pattern: String,
    },
    NotContains {
        column: String,
        pattern: String,
    },
    Compare {
        column: String,
        op: CompareOp,
        value: PredicateValue,
    },
    AnyOf {
        column: String,
        values: Vec<PredicateValue>,
    },
    NoneOf {
        column: String,
        values: Vec<PredicateValue>,
    },
    Between {
        column: String,
        low: PredicateValue,
        high: PredicateValue,
    },
    NotBetween {
        column: String,
        low: PredicateValue,
        high: PredicateValue,
    },
}

impl Predicate {
    pub fn apply<Q: Queryable>(self, query: Q) -> Q {
        match self {
            Predicate::Contains { column, pattern } => query.like(&column, &pattern),
            Predicate::NotContains { column, pattern } => query.not_like(&column, &pattern),
            Predicate::Compare { column, op, value } => match op {
                CompareOp::Eq => query.equals(&column, value),
                CompareOp::Ne => query.not_equals(&column, value),
                CompareOp::Lt => query.less_than(&column, value),
                CompareOp::Lte => query.less_or_equal(&column, value),
                CompareOp::Gt => query.greater_than(&column, value),
                CompareOp::Gte => query.greater_or_equal(&column, value),
            },
            Predicate::AnyOf { column, values } => query.is_in(&column, values),
            Predicate::NoneOf { column, values } => query.not_in(&column, values),
            Predicate::Between { column, low, high } => query
                .greater_or_equal(&column, low)
                .less_or_equal(&column, high),
            Predicate::NotBetween { column, low, high } => query.or(vec![
                Comparison::new(&column, CompareOp::Lt, low),
                Comparison::new(&column, CompareOp::Gt, high),
            ]),
        }
    }
}

/// Builds the predicate for one filter against a resolved storage column.
///
/// Value coercion problems never fail the filter: they fall back to a default
/// and push a human readable warning onto `warnings`.
pub fn build_predicate(
    column: &str,
    column_type: ColumnType,
    filter: &FilterDescriptor,
    warnings: &mut Vec<String>,
) -> Option<Predicate> {
    let kind = lookup(column_type.kind(), &filter.operator)?;
    let values = match kind.arity() {
        Arity::One => filter.values.get(..1)?,
        Arity::Pair if filter.values.len() == 2 => &filter.values[..],
        Arity::Pair => return None,
        Arity::Many if filter.values.is_empty() => return None,
        Arity::Many => &filter.values[..],
    };

    let column = column.to_string();
    let predicate = match kind {
        PredicateKind::Contains => Predicate::Contains {
            column,
            pattern: format!("%{}%", values[0].to_text()),
        },
        PredicateKind::NotContains => Predicate::NotContains {
            column,
            pattern: format!("%{}%", values[0].to_text()),
        },
        PredicateKind::Compare(op) => Predicate::Compare {
            column,
            op,
            value: coerce(column_type, &values[0], warnings),
        },
        PredicateKind::AnyOf => Predicate::AnyOf {
            column,
            values: values
                .iter()
                .map(|value| coerce(column_type, value, warnings))
                .collect(),
        },
        PredicateKind::NoneOf => Predicate::NoneOf {
            column,
            values: values
                .iter()
                .map(|value| coerce(column_type, value, warnings))
                .collect(),
        },
        PredicateKind::Between => Predicate::Between {
            column,
            low: coerce(column_type, &values[0], warnings),
            high: coerce(column_type, &values[1], warnings),
        },
        PredicateKind::NotBetween => Predicate::NotBetween {
            column,
            low: coerce(column_type, &values[0], warnings),
            high: coerce(column_type, &values[1], warnings),
        },
    };

    Some(predicate)
}

fn coerce(
    column_type: ColumnType,
    value: &FilterValue,
    warnings: &mut Vec<String>,
) -> PredicateValue {
    match column_type {
        ColumnType::Text | ColumnType::Option | ColumnType::MultiOption => {
            PredicateValue::Text(value.to_text())
        }
        ColumnType::Date => match normalize_date(value) {
            Some(date) => PredicateValue::Date(date),
            None => {
                let raw = value.to_text();
                warnings.push(format!("invalid date value '{raw}', compared as given"));
                PredicateValue::Date(raw)
            }
        },
        ColumnType::Number { scale } => {
            let number = parse_number(value).unwrap_or_else(|| {
                warnings.push(format!("invalid number value '{}', using 0", value.to_text()));
                0.0
            });
            PredicateValue::Number(scale_number(number, scale))
        }
    }
}
