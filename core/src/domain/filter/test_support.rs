//! In-memory collection used to check translator semantics without a database.
//!
//! Rows are JSON objects keyed by storage column. Comparisons follow SQL: a
//! null or missing cell never matches, not even negated predicates.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering as AtomicOrdering},
    },
    time::Duration,
};

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::{
        entities::QueryResult,
        operators::{CompareOp, PredicateValue},
        ports::{CollectionRepository, Comparison, Queryable, SortClause},
        value_objects::{PageRequest, format_number},
        values::is_date_only,
    },
};

type RowPredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub struct MemoryQuery {
    predicates: Vec<RowPredicate>,
    calls: Vec<String>,
}

impl MemoryQuery {
    /// Every builder call received, in order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.predicates.iter().all(|predicate| predicate(row))
    }

    fn push(
        mut self,
        call: String,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.calls.push(call);
        self.predicates.push(Arc::new(predicate));
        self
    }

    fn compare(self, name: &str, column: &str, op: CompareOp, value: PredicateValue) -> Self {
        let call = format!("{name}({column}, {value:?})");
        let column = column.to_string();
        self.push(call, move |row| compare_cell(cell(row, &column), op, &value))
    }
}

fn cell<'a>(row: &'a Value, column: &str) -> Option<&'a Value> {
    row.get(column).filter(|value| !value.is_null())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| number.to_string()),
        other => other.to_string(),
    }
}

fn compare_cell(cell: Option<&Value>, op: CompareOp, value: &PredicateValue) -> bool {
    let Some(cell) = cell else {
        return false;
    };

    let ordering = match value {
        PredicateValue::Number(expected) => cell.as_f64().and_then(|n| n.partial_cmp(expected)),
        PredicateValue::Text(expected) => Some(cell_text(cell).as_str().cmp(expected.as_str())),
        PredicateValue::Date(expected) => {
            let stored = cell_text(cell);
            // Calendar-day values compare against the stored day only.
            let stored = if is_date_only(expected) {
                stored.get(..10).unwrap_or(&stored).to_string()
            } else {
                stored
            };
            Some(stored.as_str().cmp(expected.as_str()))
        }
    };

    ordering.is_some_and(|ordering| match op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Ne => ordering != Ordering::Equal,
        CompareOp::Lt => ordering == Ordering::Less,
        CompareOp::Lte => ordering != Ordering::Greater,
        CompareOp::Gt => ordering == Ordering::Greater,
        CompareOp::Gte => ordering != Ordering::Less,
    })
}

fn contains(cell: Option<&Value>, pattern: &str) -> Option<bool> {
    let needle = pattern.trim_matches('%').to_lowercase();
    cell.map(|value| cell_text(value).to_lowercase().contains(&needle))
}

impl Queryable for MemoryQuery {
    fn equals(self, column: &str, value: PredicateValue) -> Self {
        self.compare("equals", column, CompareOp::Eq, value)
    }

    fn not_equals(self, column: &str, value: PredicateValue) -> Self {
        self.compare("not_equals", column, CompareOp::Ne, value)
    }

    fn less_than(self, column: &str, value: PredicateValue) -> Self {
        self.compare("less_than", column, CompareOp::Lt, value)
    }

    fn less_or_equal(self, column: &str, value: PredicateValue) -> Self {
        self.compare("less_or_equal", column, CompareOp::Lte, value)
    }

    fn greater_than(self, column: &str, value: PredicateValue) -> Self {
        self.compare("greater_than", column, CompareOp::Gt, value)
    }

    fn greater_or_equal(self, column: &str, value: PredicateValue) -> Self {
        self.compare("greater_or_equal", column, CompareOp::Gte, value)
    }

    fn is_in(self, column: &str, values: Vec<PredicateValue>) -> Self {
        let call = format!("is_in({column}, {values:?})");
        let column = column.to_string();
        self.push(call, move |row| {
            values
                .iter()
                .any(|value| compare_cell(cell(row, &column), CompareOp::Eq, value))
        })
    }

    fn not_in(self, column: &str, values: Vec<PredicateValue>) -> Self {
        let call = format!("not_in({column}, {values:?})");
        let column = column.to_string();
        self.push(call, move |row| {
            cell(row, &column).is_some()
                && values
                    .iter()
                    .all(|value| compare_cell(cell(row, &column), CompareOp::Ne, value))
        })
    }

    fn like(self, column: &str, pattern: &str) -> Self {
        let call = format!("like({column}, {pattern})");
        let (column, pattern) = (column.to_string(), pattern.to_string());
        self.push(call, move |row| {
            contains(cell(row, &column), &pattern).unwrap_or(false)
        })
    }

    fn not_like(self, column: &str, pattern: &str) -> Self {
        let call = format!("not_like({column}, {pattern})");
        let (column, pattern) = (column.to_string(), pattern.to_string());
        self.push(call, move |row| {
            contains(cell(row, &column), &pattern).is_some_and(|found| !found)
        })
    }

    fn or(self, alternatives: Vec<Comparison>) -> Self {
        let call = format!("or({alternatives:?})");
        self.push(call, move |row| {
            alternatives.iter().any(|alternative| {
                compare_cell(cell(row, &alternative.column), alternative.op, &alternative.value)
            })
        })
    }
}

fn compare_sort_cells(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => match (left.as_f64(), right.as_f64()) {
            (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
            _ => cell_text(left).cmp(&cell_text(right)),
        },
    }
}

#[derive(Default)]
pub struct MemoryCollection {
    rows: Vec<Value>,
    failing_columns: Vec<String>,
    delayed_columns: Vec<(String, Duration)>,
    fail_pages: bool,
    facet_requests: AtomicUsize,
    last_sort: Mutex<Vec<SortClause>>,
}

impl MemoryCollection {
    pub fn new(rows: Vec<Value>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing_column(mut self, column: &str) -> Self {
        self.failing_columns.push(column.to_string());
        self
    }

    pub fn delayed_column(mut self, column: &str, delay: Duration) -> Self {
        self.delayed_columns.push((column.to_string(), delay));
        self
    }

    pub fn failing_pages(mut self) -> Self {
        self.fail_pages = true;
        self
    }

    pub fn facet_requests(&self) -> usize {
        self.facet_requests.load(AtomicOrdering::SeqCst)
    }

    pub fn last_sort(&self) -> Vec<SortClause> {
        self.last_sort.lock().map(|sort| sort.clone()).unwrap_or_default()
    }

    async fn column_cells(
        &self,
        query: &MemoryQuery,
        column: &str,
    ) -> Result<Vec<Option<String>>, CoreError> {
        self.facet_requests.fetch_add(1, AtomicOrdering::SeqCst);

        if let Some((_, delay)) = self.delayed_columns.iter().find(|(name, _)| name == column) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_columns.iter().any(|name| name == column) {
            return Err(CoreError::InternalServerError);
        }

        Ok(self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .map(|row| cell(row, column).map(cell_text))
            .collect())
    }
}

impl CollectionRepository for MemoryCollection {
    type Row = Value;
    type Query = MemoryQuery;

    fn base_query(&self) -> MemoryQuery {
        MemoryQuery::default()
    }

    async fn fetch_page(
        &self,
        query: MemoryQuery,
        sort: Vec<SortClause>,
        page: PageRequest,
    ) -> Result<QueryResult<Value>, CoreError> {
        if self.fail_pages {
            return Err(CoreError::InternalServerError);
        }
        if let Ok(mut last_sort) = self.last_sort.lock() {
            *last_sort = sort.clone();
        }

        let mut rows: Vec<Value> = self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect();
        rows.sort_by(|left, right| {
            for clause in &sort {
                let ordering =
                    compare_sort_cells(cell(left, &clause.column), cell(right, &clause.column));
                let ordering = if clause.descending {
                    ordering.reverse()
                } else {
                    ordering
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });

        let total_count = rows.len() as u64;
        let rows = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .collect();

        Ok(QueryResult { rows, total_count })
    }

    async fn fetch_column_values(
        &self,
        query: MemoryQuery,
        column: &str,
    ) -> Result<Vec<Option<String>>, CoreError> {
        self.column_cells(&query, column).await
    }

    async fn fetch_grouped_counts(
        &self,
        query: MemoryQuery,
        column: &str,
    ) -> Result<Vec<(Option<String>, i64)>, CoreError> {
        let mut groups: BTreeMap<Option<String>, i64> = BTreeMap::new();
        for value in self.column_cells(&query, column).await? {
            *groups.entry(value).or_insert(0) += 1;
        }
        Ok(groups.into_iter().collect())
    }
}
