use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    Value,
    sea_query::{Alias, Condition, Expr, Func, SimpleExpr, extension::postgres::PgExpr},
};

use crate::domain::filter::{
    operators::{CompareOp, PredicateValue},
    ports::{Comparison, Queryable},
    value_objects::format_number,
    values::is_date_only,
};

/// [`Queryable`] backed by a sea-orm [`Condition`], every call AND-ed in.
///
/// Identifiers are quoted by sea-query and values are always bound, so
/// neither column ids nor filter values reach the SQL text verbatim.
#[derive(Debug, Clone)]
pub struct ConditionQuery {
    condition: Condition,
    /// Storage columns of type `timestamptz`.
    instant_columns: Arc<[String]>,
}

impl Default for ConditionQuery {
    fn default() -> Self {
        Self::with_instant_columns(Vec::new())
    }
}

impl ConditionQuery {
    pub fn with_instant_columns(instant_columns: Vec<String>) -> Self {
        Self {
            condition: Condition::all(),
            instant_columns: instant_columns.into(),
        }
    }

    pub fn into_condition(self) -> Condition {
        self.condition
    }

    fn and(self, expr: SimpleExpr) -> Self {
        Self {
            condition: self.condition.add(expr),
            ..self
        }
    }

    fn is_instant(&self, name: &str) -> bool {
        self.instant_columns.iter().any(|column| column == name)
    }

    /// Left-hand side and bound value of a single comparison.
    ///
    /// Text goes through `CAST(col AS text)` so uuid and enum columns compare
    /// against their string form. Calendar days compare against the day part
    /// of the stored value, taken in UTC for `timestamptz` columns so the
    /// session time zone never shifts it.
    fn operands(&self, name: &str, value: PredicateValue) -> (Expr, Value) {
        match value {
            PredicateValue::Number(number) => (column(name), number.into()),
            PredicateValue::Text(text) => (as_text(name), text.into()),
            PredicateValue::Date(date) => {
                if is_date_only(&date)
                    && let Ok(day) = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                {
                    return (self.calendar_day(name), day.into());
                }
                match DateTime::parse_from_rfc3339(&date) {
                    Ok(instant) => (column(name), instant.with_timezone(&Utc).into()),
                    Err(_) => (as_text(name), date.into()),
                }
            }
        }
    }

    fn calendar_day(&self, name: &str) -> Expr {
        let day = if self.is_instant(name) {
            Expr::expr(
                Func::cust(Alias::new("timezone"))
                    .arg("UTC")
                    .arg(column(name)),
            )
        } else {
            column(name)
        };
        Expr::expr(day.cast_as(Alias::new("date")))
    }

    fn compare(&self, name: &str, op: CompareOp, value: PredicateValue) -> SimpleExpr {
        let (lhs, value) = self.operands(name, value);
        match op {
            CompareOp::Eq => lhs.eq(value),
            CompareOp::Ne => lhs.ne(value),
            CompareOp::Lt => lhs.lt(value),
            CompareOp::Lte => lhs.lte(value),
            CompareOp::Gt => lhs.gt(value),
            CompareOp::Gte => lhs.gte(value),
        }
    }
}

fn column(name: &str) -> Expr {
    Expr::col(Alias::new(name))
}

fn as_text(name: &str) -> Expr {
    Expr::expr(column(name).cast_as(Alias::new("text")))
}

/// Set membership binds numbers natively when the whole set is numeric and
/// compares text forms otherwise.
fn membership(name: &str, values: Vec<PredicateValue>) -> (Expr, Vec<Value>) {
    let numeric = values
        .iter()
        .all(|value| matches!(value, PredicateValue::Number(_)));

    if numeric {
        let values = values
            .into_iter()
            .filter_map(|value| match value {
                PredicateValue::Number(number) => Some(Value::from(number)),
                _ => None,
            })
            .collect();
        return (column(name), values);
    }

    let values = values
        .into_iter()
        .map(|value| match value {
            PredicateValue::Text(text) | PredicateValue::Date(text) => Value::from(text),
            PredicateValue::Number(number) => Value::from(format_number(number)),
        })
        .collect();
    (as_text(name), values)
}

impl Queryable for ConditionQuery {
    fn equals(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Eq, value);
        self.and(expr)
    }

    fn not_equals(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Ne, value);
        self.and(expr)
    }

    fn less_than(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Lt, value);
        self.and(expr)
    }

    fn less_or_equal(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Lte, value);
        self.and(expr)
    }

    fn greater_than(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Gt, value);
        self.and(expr)
    }

    fn greater_or_equal(self, column: &str, value: PredicateValue) -> Self {
        let expr = self.compare(column, CompareOp::Gte, value);
        self.and(expr)
    }

    fn is_in(self, column: &str, values: Vec<PredicateValue>) -> Self {
        let (lhs, values) = membership(column, values);
        self.and(lhs.is_in(values))
    }

    fn not_in(self, column: &str, values: Vec<PredicateValue>) -> Self {
        let (lhs, values) = membership(column, values);
        self.and(lhs.is_not_in(values))
    }

    fn like(self, column: &str, pattern: &str) -> Self {
        self.and(as_text(column).ilike(pattern))
    }

    fn not_like(self, column: &str, pattern: &str) -> Self {
        self.and(as_text(column).not_ilike(pattern))
    }

    fn or(self, alternatives: Vec<Comparison>) -> Self {
        let any = alternatives
            .into_iter()
            .fold(Condition::any(), |any, alternative| {
                any.add(self.compare(&alternative.column, alternative.op, alternative.value))
            });
        Self {
            condition: self.condition.add(any),
            ..self
        }
    }
}
