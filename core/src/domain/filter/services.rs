use std::{future::Future, time::Duration};

use futures::future::join_all;

use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::{
        columns::{ColumnTable, FacetStrategy},
        entities::{FacetCount, FacetedQueryResult, QueryResult},
        logging::{LogEvent, QueryLogger, TracingQueryLogger},
        operators::build_predicate,
        ports::{CollectionRepository, Queryable, SortClause},
        value_objects::{FacetedQuery, FilterDescriptor, PageRequest, SortDescriptor},
    },
};

/// Filtered, paginated and faceted reads over one collection.
///
/// Generic over the repository so every entity shares one implementation and
/// only contributes its [`ColumnTable`].
#[derive(Debug, Clone)]
pub struct FacetedQueryService<R, L = TracingQueryLogger> {
    repository: R,
    columns: ColumnTable,
    logger: L,
    timeout: Option<Duration>,
}

impl<R, L> FacetedQueryService<R, L>
where
    R: CollectionRepository,
    L: QueryLogger,
{
    pub fn new(repository: R, columns: ColumnTable, logger: L) -> Self {
        Self {
            repository,
            columns,
            logger,
            timeout: None,
        }
    }

    /// Deadline for each page and facet sub-query.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn columns(&self) -> &ColumnTable {
        &self.columns
    }

    /// Folds `filters` into `query` in input order.
    ///
    /// Filters on `exclude_column` and filters without values are skipped, as
    /// are operators the column type does not support.
    pub fn apply_filters<Q: Queryable>(
        &self,
        query: Q,
        filters: &[FilterDescriptor],
        exclude_column: Option<&str>,
    ) -> Q {
        filters
            .iter()
            .filter(|filter| Some(filter.column_id.as_str()) != exclude_column)
            .filter(|filter| !filter.values.is_empty())
            .fold(query, |query, filter| {
                let column = self.columns.resolve(&filter.column_id);
                let column_type = self
                    .columns
                    .spec(&filter.column_id)
                    .map(|spec| spec.column_type)
                    .unwrap_or_else(|| filter.filter_type.into());

                let mut warnings = Vec::new();
                let predicate = build_predicate(column, column_type, filter, &mut warnings);
                for warning in warnings {
                    self.logger.warn(
                        LogEvent::new("apply_filters", self.columns.entity(), warning)
                            .with_column(&filter.column_id),
                    );
                }

                match predicate {
                    Some(predicate) => predicate.apply(query),
                    None => query,
                }
            })
    }

    fn sort_clauses(&self, sorting: &[SortDescriptor]) -> Vec<SortClause> {
        if sorting.is_empty() {
            return vec![SortClause {
                column: self.columns.default_sort().to_string(),
                descending: true,
            }];
        }

        sorting
            .iter()
            .map(|sort| SortClause {
                column: self.columns.resolve(&sort.column_id).to_string(),
                descending: sort.descending,
            })
            .collect()
    }

    async fn within_deadline<T>(
        &self,
        future: impl Future<Output = Result<T, CoreError>>,
    ) -> Result<T, CoreError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, future)
                .await
                .map_err(|_| CoreError::Timeout)?,
            None => future.await,
        }
    }

    /// One page of matching rows plus the total size of the filtered set.
    pub async fn fetch_page(
        &self,
        filters: &[FilterDescriptor],
        sorting: &[SortDescriptor],
        page: PageRequest,
    ) -> Result<QueryResult<R::Row>, CoreError> {
        if page.page_size == 0 {
            return Err(CoreError::InvalidPageRequest(
                "page size must be positive".to_string(),
            ));
        }

        let query = self.apply_filters(self.repository.base_query(), filters, None);
        let sort = self.sort_clauses(sorting);

        self.within_deadline(self.repository.fetch_page(query, sort, page))
            .await
    }

    /// Like [`fetch_page`](Self::fetch_page) but never fails: errors are
    /// logged and an empty result is returned.
    pub async fn fetch_paginated(
        &self,
        filters: &[FilterDescriptor],
        sorting: &[SortDescriptor],
        page: PageRequest,
    ) -> QueryResult<R::Row> {
        match self.fetch_page(filters, sorting, page).await {
            Ok(result) => result,
            Err(e) => {
                self.logger.error(LogEvent::new(
                    "fetch_paginated",
                    self.columns.entity(),
                    format!("Failed to fetch page: {e}"),
                ));
                QueryResult::empty()
            }
        }
    }

    async fn try_count_facet(
        &self,
        filters: &[FilterDescriptor],
        column_id: &str,
    ) -> Result<FacetCount, CoreError> {
        let query = self.apply_filters(self.repository.base_query(), filters, Some(column_id));
        let column = self.columns.resolve(column_id);
        let mut counts = FacetCount::new();

        match self.columns.facet_strategy(column_id) {
            FacetStrategy::InMemory => {
                let values = self
                    .within_deadline(self.repository.fetch_column_values(query, column))
                    .await?;
                for value in values.into_iter().flatten() {
                    *counts.entry(value).or_insert(0) += 1;
                }
            }
            FacetStrategy::Grouped => {
                let groups = self
                    .within_deadline(self.repository.fetch_grouped_counts(query, column))
                    .await?;
                for (value, count) in groups {
                    if let Some(value) = value {
                        *counts.entry(value).or_insert(0) += u64::try_from(count).unwrap_or(0);
                    }
                }
            }
        }

        Ok(counts)
    }

    /// Occurrences of each value of `column_id` among rows matching every
    /// filter except the one on `column_id` itself. Empty on failure.
    pub async fn count_facet(&self, filters: &[FilterDescriptor], column_id: &str) -> FacetCount {
        match self.try_count_facet(filters, column_id).await {
            Ok(counts) => counts,
            Err(e) => {
                self.logger.error(
                    LogEvent::new(
                        "count_facet",
                        self.columns.entity(),
                        format!("Failed to count facet values: {e}"),
                    )
                    .with_column(column_id),
                );
                FacetCount::new()
            }
        }
    }

    /// Page and facets in one call. Sub-queries run concurrently; a failed
    /// facet comes back empty, a failed page fails the call.
    pub async fn fetch_with_facets(
        &self,
        query: &FacetedQuery,
    ) -> Result<FacetedQueryResult<R::Row>, CoreError> {
        let mut facet_columns: Vec<&str> = Vec::with_capacity(query.facet_columns.len());
        for column in &query.facet_columns {
            if !facet_columns.contains(&column.as_str()) {
                facet_columns.push(column);
            }
        }

        let page = self.fetch_page(&query.filters, &query.sorting, query.page);
        let facets = join_all(facet_columns.into_iter().map(|column| async move {
            (column.to_string(), self.count_facet(&query.filters, column).await)
        }));

        let (page, facets) = futures::join!(page, facets);
        let page = page.map_err(|e| {
            self.logger.error(LogEvent::new(
                "fetch_with_facets",
                self.columns.entity(),
                format!("Failed to fetch page: {e}"),
            ));
            e
        })?;

        Ok(FacetedQueryResult {
            rows: page.rows,
            total_count: page.total_count,
            facets: facets.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{Value, json};

    use super::*;
    use crate::domain::filter::{
        columns::{ColumnSpec, ColumnType},
        logging::MockQueryLogger,
        test_support::{MemoryCollection, MemoryQuery},
        value_objects::{FilterType, FilterValue},
    };

    fn task_columns() -> ColumnTable {
        ColumnTable::new(
            "tasks",
            "created_at",
            vec![
                ColumnSpec::new("status", ColumnType::Option).grouped(),
                ColumnSpec::new("assignee", ColumnType::Option).stored_as("assignee_id"),
                ColumnSpec::new("amount", ColumnType::MONEY),
                ColumnSpec::new("due", ColumnType::Date).stored_as("due_date"),
                ColumnSpec::new("title", ColumnType::Text),
            ],
        )
        .unwrap()
    }

    fn service(
        rows: Vec<Value>,
        logger: MockQueryLogger,
    ) -> FacetedQueryService<MemoryCollection, MockQueryLogger> {
        FacetedQueryService::new(MemoryCollection::new(rows), task_columns(), logger)
    }

    fn quiet(rows: Vec<Value>) -> FacetedQueryService<MemoryCollection, MockQueryLogger> {
        service(rows, MockQueryLogger::new())
    }

    fn option(column: &str, operator: &str, values: &[&str]) -> FilterDescriptor {
        FilterDescriptor::new(
            column,
            FilterType::Option,
            operator,
            values.iter().map(|v| FilterValue::from(*v)).collect(),
        )
    }

    fn number(column: &str, operator: &str, values: Vec<FilterValue>) -> FilterDescriptor {
        FilterDescriptor::new(column, FilterType::Number, operator, values)
    }

    fn all_rows() -> PageRequest {
        PageRequest::new(0, 100)
    }

    fn board() -> Vec<Value> {
        vec![
            json!({"id": 1, "status": "todo", "assignee_id": "A", "created_at": "2024-01-01"}),
            json!({"id": 2, "status": "done", "assignee_id": "A", "created_at": "2024-01-02"}),
            json!({"id": 3, "status": "todo", "assignee_id": "B", "created_at": "2024-01-03"}),
        ]
    }

    fn ids(rows: &[Value]) -> Vec<i64> {
        let mut ids: Vec<i64> = rows.iter().filter_map(|row| row["id"].as_i64()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_empty_values_leave_query_untouched() {
        let service = quiet(vec![]);
        let status = option("status", "is any of", &["todo"]);
        for operator in ["is", "is not", "is any of", "is none of"] {
            let empty = option("assignee", operator, &[]);
            let with_empty = service.apply_filters(
                MemoryQuery::default(),
                &[status.clone(), empty.clone()],
                None,
            );
            let without = service.apply_filters(MemoryQuery::default(), &[status.clone()], None);
            assert_eq!(with_empty.calls(), without.calls());
        }
    }

    #[test]
    fn test_unknown_operator_is_noop() {
        let service = quiet(vec![]);
        let status = option("status", "is", &["todo"]);
        let unknown = option("assignee", "sounds like", &["A"]);
        let mismatched = FilterDescriptor::new(
            "title",
            FilterType::Text,
            "is any of",
            vec![FilterValue::from("x")],
        );

        let query = service.apply_filters(
            MemoryQuery::default(),
            &[status.clone(), unknown, mismatched],
            None,
        );
        let expected = service.apply_filters(MemoryQuery::default(), &[status], None);
        assert_eq!(query.calls(), expected.calls());
    }

    #[test]
    fn test_filters_applied_in_input_order_with_resolved_columns() {
        let service = quiet(vec![]);
        let query = service.apply_filters(
            MemoryQuery::default(),
            &[
                option("assignee", "is", &["A"]),
                option("status", "is none of", &["done", "archived"]),
            ],
            None,
        );
        assert_eq!(
            query.calls(),
            &[
                "equals(assignee_id, Text(\"A\"))".to_string(),
                "not_in(status, [Text(\"done\"), Text(\"archived\")])".to_string(),
            ]
        );
    }

    #[test]
    fn test_excluded_column_is_skipped() {
        let service = quiet(vec![]);
        let query = service.apply_filters(
            MemoryQuery::default(),
            &[option("status", "is", &["todo"]), option("assignee", "is", &["A"])],
            Some("status"),
        );
        assert_eq!(query.calls(), &["equals(assignee_id, Text(\"A\"))".to_string()]);
    }

    #[test]
    fn test_unknown_column_uses_descriptor_type_and_identity_name() {
        let service = quiet(vec![]);
        let query = service.apply_filters(
            MemoryQuery::default(),
            &[number("score", "is greater than", vec![FilterValue::from("7")])],
            None,
        );
        assert_eq!(query.calls(), &["greater_than(score, Number(7.0))".to_string()]);
    }

    #[test]
    fn test_invalid_number_logs_warning_with_context() {
        let mut logger = MockQueryLogger::new();
        logger
            .expect_warn()
            .withf(|event| {
                event.operation == "apply_filters"
                    && event.entity == "tasks"
                    && event.column.as_deref() == Some("amount")
            })
            .times(1)
            .return_const(());
        let service = service(vec![], logger);

        let query = service.apply_filters(
            MemoryQuery::default(),
            &[number("amount", "is", vec![FilterValue::from("n/a")])],
            None,
        );
        assert_eq!(query.calls(), &["equals(amount, Number(0.0))".to_string()]);
    }

    #[tokio::test]
    async fn test_between_and_not_between_are_complementary() {
        let rows = vec![
            json!({"id": 1, "amount": 500}),
            json!({"id": 2, "amount": 1000}),
            json!({"id": 3, "amount": 1500}),
            json!({"id": 4, "amount": 2000}),
            json!({"id": 5, "amount": 2500}),
            json!({"id": 6, "amount": null}),
            json!({"id": 7}),
        ];
        let service = quiet(rows);
        let bounds = vec![FilterValue::from(10.0), FilterValue::from(20.0)];

        let inside = service
            .fetch_page(&[number("amount", "is between", bounds.clone())], &[], all_rows())
            .await
            .unwrap();
        let outside = service
            .fetch_page(&[number("amount", "is not between", bounds)], &[], all_rows())
            .await
            .unwrap();

        assert_eq!(ids(&inside.rows), vec![2, 3, 4]);
        assert_eq!(ids(&outside.rows), vec![1, 5]);
    }

    #[tokio::test]
    async fn test_facet_ignores_own_filter_values() {
        let service = quiet(board());
        let assignee_a = option("assignee", "is", &["A"]);

        let mut facets = Vec::new();
        for status in [&["todo"][..], &["done"], &["todo", "done"]] {
            let filters = vec![option("status", "is any of", status), assignee_a.clone()];
            facets.push(service.count_facet(&filters, "status").await);
        }

        let expected: FacetCount =
            BTreeMap::from([("done".to_string(), 1), ("todo".to_string(), 1)]);
        assert!(facets.iter().all(|facet| *facet == expected));
    }

    #[tokio::test]
    async fn test_pagination_counts() {
        let rows: Vec<Value> = (0..7)
            .map(|i| json!({"id": i, "created_at": format!("2024-01-0{}", i + 1)}))
            .collect();
        let service = quiet(rows);
        let (total, size) = (7u64, 3u64);

        for index in 0..5u64 {
            let result = service
                .fetch_page(&[], &[], PageRequest::new(index, size))
                .await
                .unwrap();
            let expected = size.min(total.saturating_sub(index * size));
            assert_eq!(result.rows.len() as u64, expected, "page {index}");
            assert_eq!(result.total_count, total);
        }
    }

    #[tokio::test]
    async fn test_default_sort_is_newest_first() {
        let service = quiet(board());
        let result = service.fetch_page(&[], &[], all_rows()).await.unwrap();
        let order: Vec<i64> = result.rows.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(
            service.repository.last_sort(),
            vec![SortClause {
                column: "created_at".to_string(),
                descending: true
            }]
        );
    }

    #[tokio::test]
    async fn test_sort_descriptors_resolve_columns() {
        let service = quiet(board());
        let result = service
            .fetch_page(
                &[],
                &[SortDescriptor::desc("assignee"), SortDescriptor::asc("status")],
                all_rows(),
            )
            .await
            .unwrap();
        let order: Vec<i64> = result.rows.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let service = quiet(board());
        let result = service.fetch_page(&[], &[], PageRequest::new(0, 0)).await;
        assert!(matches!(result, Err(CoreError::InvalidPageRequest(_))));
    }

    #[tokio::test]
    async fn test_money_filter_matches_cents() {
        let rows = vec![
            json!({"id": 1, "amount": 4999}),
            json!({"id": 2, "amount": 5000}),
            json!({"id": 3, "amount": 49}),
        ];
        let service = quiet(rows);
        let result = service
            .fetch_page(&[number("amount", "is", vec![FilterValue::from(49.99)])], &[], all_rows())
            .await
            .unwrap();
        assert_eq!(ids(&result.rows), vec![1]);
    }

    #[tokio::test]
    async fn test_date_only_filter_matches_calendar_day() {
        let rows = vec![
            json!({"id": 1, "due_date": "2024-01-15"}),
            json!({"id": 2, "due_date": "2024-01-16"}),
            json!({"id": 3, "due_date": "2024-01-14"}),
        ];
        let service = quiet(rows);
        let filter = FilterDescriptor::new(
            "due",
            FilterType::Date,
            "is",
            vec![FilterValue::from("2024-01-15")],
        );
        let result = service.fetch_page(&[filter], &[], all_rows()).await.unwrap();
        assert_eq!(ids(&result.rows), vec![1]);
    }

    #[tokio::test]
    async fn test_status_board_scenario() {
        let service = quiet(board());
        let query = FacetedQuery {
            filters: vec![option("status", "is any of", &["todo"])],
            sorting: vec![],
            page: all_rows(),
            facet_columns: vec!["assignee".to_string()],
        };

        let result = service.fetch_with_facets(&query).await.unwrap();
        assert_eq!(ids(&result.rows), vec![1, 3]);
        assert_eq!(result.total_count, 2);
        assert_eq!(
            result.facets["assignee"],
            BTreeMap::from([("A".to_string(), 1), ("B".to_string(), 1)])
        );
    }

    #[tokio::test]
    async fn test_amount_between_scenario() {
        let rows = vec![
            json!({"id": 1, "amount": 999}),
            json!({"id": 2, "amount": 1500}),
            json!({"id": 3, "amount": 2500}),
        ];
        let service = quiet(rows);
        let filters = vec![number(
            "amount",
            "is between",
            vec![FilterValue::from(10i64), FilterValue::from(20i64)],
        )];
        let result = service.fetch_page(&filters, &[], all_rows()).await.unwrap();
        assert_eq!(ids(&result.rows), vec![2]);
    }

    #[tokio::test]
    async fn test_serialized_filters_give_same_rows() {
        let service = quiet(board());
        let filters = vec![
            option("status", "is any of", &["todo", "done"]),
            option("assignee", "is not", &["B"]),
        ];
        let json = serde_json::to_string(&filters).unwrap();
        let decoded: Vec<FilterDescriptor> = serde_json::from_str(&json).unwrap();

        let original = service.fetch_page(&filters, &[], all_rows()).await.unwrap();
        let replayed = service.fetch_page(&decoded, &[], all_rows()).await.unwrap();
        assert_eq!(original, replayed);
    }

    #[tokio::test]
    async fn test_occurrences_are_counted_per_row() {
        let service = quiet(board());
        let facet = service.count_facet(&[], "assignee").await;
        assert_eq!(
            facet,
            BTreeMap::from([("A".to_string(), 2), ("B".to_string(), 1)])
        );
    }

    #[tokio::test]
    async fn test_grouped_facet_matches_in_memory_semantics() {
        let service = quiet(board());
        let facet = service.count_facet(&[], "status").await;
        assert_eq!(
            facet,
            BTreeMap::from([("done".to_string(), 1), ("todo".to_string(), 2)])
        );
    }

    #[tokio::test]
    async fn test_null_values_are_not_counted() {
        let mut rows = board();
        rows.push(json!({"id": 4, "status": "todo", "assignee_id": null}));
        let service = quiet(rows);
        let facet = service.count_facet(&[], "assignee").await;
        assert_eq!(facet.values().sum::<u64>(), 3);
    }

    #[tokio::test]
    async fn test_failed_facet_is_empty_and_call_succeeds() {
        let mut logger = MockQueryLogger::new();
        logger
            .expect_error()
            .withf(|event| {
                event.operation == "count_facet" && event.column.as_deref() == Some("assignee")
            })
            .times(1)
            .return_const(());
        let service = FacetedQueryService::new(
            MemoryCollection::new(board()).failing_column("assignee_id"),
            task_columns(),
            logger,
        );
        let query = FacetedQuery {
            filters: vec![],
            sorting: vec![],
            page: all_rows(),
            facet_columns: vec!["assignee".to_string(), "status".to_string()],
        };

        let result = service.fetch_with_facets(&query).await.unwrap();
        assert_eq!(result.total_count, 3);
        assert!(result.facets["assignee"].is_empty());
        assert_eq!(result.facets["status"].len(), 2);
    }

    #[tokio::test]
    async fn test_failed_page_fails_the_call() {
        let mut logger = MockQueryLogger::new();
        logger
            .expect_error()
            .withf(|event| event.operation == "fetch_with_facets")
            .times(1)
            .return_const(());
        let service = FacetedQueryService::new(
            MemoryCollection::new(board()).failing_pages(),
            task_columns(),
            logger,
        );
        let query = FacetedQuery {
            filters: vec![],
            sorting: vec![],
            page: all_rows(),
            facet_columns: vec!["status".to_string()],
        };

        let result = service.fetch_with_facets(&query).await;
        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_fetch_paginated_returns_empty_sentinel() {
        let mut logger = MockQueryLogger::new();
        logger
            .expect_error()
            .withf(|event| event.operation == "fetch_paginated" && event.entity == "tasks")
            .times(1)
            .return_const(());
        let service = FacetedQueryService::new(
            MemoryCollection::new(board()).failing_pages(),
            task_columns(),
            logger,
        );

        let result = service.fetch_paginated(&[], &[], all_rows()).await;
        assert_eq!(result, QueryResult::empty());
    }

    #[tokio::test]
    async fn test_page_beyond_data_keeps_total() {
        let service = quiet(board());
        let result = service
            .fetch_paginated(&[], &[], PageRequest::new(10, 2))
            .await;
        assert!(result.rows.is_empty());
        assert_eq!(result.total_count, 3);
    }

    #[tokio::test]
    async fn test_duplicate_facet_columns_computed_once() {
        let service = quiet(board());
        let query = FacetedQuery {
            filters: vec![],
            sorting: vec![],
            page: all_rows(),
            facet_columns: vec!["status".to_string(), "status".to_string()],
        };
        let result = service.fetch_with_facets(&query).await.unwrap();
        assert_eq!(result.facets.len(), 1);
        assert_eq!(service.repository.facet_requests(), 1);
    }

    #[tokio::test]
    async fn test_slow_facet_hits_deadline() {
        let mut logger = MockQueryLogger::new();
        logger
            .expect_error()
            .withf(|event| event.message.contains("deadline"))
            .times(1)
            .return_const(());
        let service = FacetedQueryService::new(
            MemoryCollection::new(board()).delayed_column("assignee_id", Duration::from_secs(5)),
            task_columns(),
            logger,
        )
        .with_timeout(Some(Duration::from_millis(50)));
        let query = FacetedQuery {
            filters: vec![],
            sorting: vec![],
            page: all_rows(),
            facet_columns: vec!["assignee".to_string()],
        };

        let result = service.fetch_with_facets(&query).await.unwrap();
        assert_eq!(result.total_count, 3);
        assert!(result.facets["assignee"].is_empty());
    }
}
