use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::{
        entities::QueryResult,
        operators::{CompareOp, PredicateValue},
        value_objects::PageRequest,
    },
};

/// A single `column <op> value` test, used inside an OR group.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub column: String,
    pub op: CompareOp,
    pub value: PredicateValue,
}

impl Comparison {
    pub fn new(column: &str, op: CompareOp, value: PredicateValue) -> Self {
        Self {
            column: column.to_string(),
            op,
            value,
        }
    }
}

/// Fluent query object the filter translator folds predicates into.
///
/// Every call narrows the query (AND). `like` and `not_like` are
/// case-insensitive and receive a SQL-style `%pattern%`.
pub trait Queryable: Sized {
    fn equals(self, column: &str, value: PredicateValue) -> Self;
    fn not_equals(self, column: &str, value: PredicateValue) -> Self;
    fn less_than(self, column: &str, value: PredicateValue) -> Self;
    fn less_or_equal(self, column: &str, value: PredicateValue) -> Self;
    fn greater_than(self, column: &str, value: PredicateValue) -> Self;
    fn greater_or_equal(self, column: &str, value: PredicateValue) -> Self;
    fn is_in(self, column: &str, values: Vec<PredicateValue>) -> Self;
    fn not_in(self, column: &str, values: Vec<PredicateValue>) -> Self;
    fn like(self, column: &str, pattern: &str) -> Self;
    fn not_like(self, column: &str, pattern: &str) -> Self;
    /// Matches when at least one of the alternatives holds.
    fn or(self, alternatives: Vec<Comparison>) -> Self;
}

/// Order-by clause on a storage column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub column: String,
    pub descending: bool,
}

/// Read access to one collection of the hosted database.
pub trait CollectionRepository: Send + Sync {
    type Row: Send;
    type Query: Queryable + Send;

    /// Unrestricted query over the whole collection.
    fn base_query(&self) -> Self::Query;

    /// Executes `query` with the given order, returning the requested page and
    /// the exact size of the filtered set.
    fn fetch_page(
        &self,
        query: Self::Query,
        sort: Vec<SortClause>,
        page: PageRequest,
    ) -> impl Future<Output = Result<QueryResult<Self::Row>, CoreError>> + Send;

    /// Projects `column`, stringified, for every row matching `query`.
    fn fetch_column_values(
        &self,
        query: Self::Query,
        column: &str,
    ) -> impl Future<Output = Result<Vec<Option<String>>, CoreError>> + Send;

    /// Database-side `GROUP BY column` counts for rows matching `query`.
    fn fetch_grouped_counts(
        &self,
        query: Self::Query,
        column: &str,
    ) -> impl Future<Output = Result<Vec<(Option<String>, i64)>, CoreError>> + Send;
}
