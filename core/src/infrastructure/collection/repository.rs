use std::{marker::PhantomData, sync::Arc};

use sea_orm::{
    ColumnTrait, ColumnType, DatabaseConnection, EntityName, EntityTrait, FromQueryResult,
    IdenStatic, Iterable, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Alias, Asterisk, Expr, SimpleExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        filter::{
            entities::QueryResult,
            ports::{CollectionRepository, SortClause},
            value_objects::PageRequest,
        },
    },
    infrastructure::collection::condition_query::ConditionQuery,
};

/// Read-only [`CollectionRepository`] over the table of entity `E`, mapping
/// models into domain rows `R`.
pub struct PostgresCollectionRepository<E, R> {
    pub db: Arc<DatabaseConnection>,
    _marker: PhantomData<fn() -> (E, R)>,
}

impl<E, R> PostgresCollectionRepository<E, R> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }
}

impl<E, R> Clone for PostgresCollectionRepository<E, R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

impl<E, R> std::fmt::Debug for PostgresCollectionRepository<E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCollectionRepository")
            .field("db", &self.db)
            .finish()
    }
}

fn column(name: &str) -> SimpleExpr {
    Expr::col(Alias::new(name)).into()
}

fn column_text(name: &str) -> SimpleExpr {
    Expr::col(Alias::new(name)).cast_as(Alias::new("text"))
}

impl<E, R> CollectionRepository for PostgresCollectionRepository<E, R>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    R: From<E::Model> + Send,
{
    type Row = R;
    type Query = ConditionQuery;

    fn base_query(&self) -> ConditionQuery {
        let instant_columns = E::Column::iter()
            .filter(|column| {
                matches!(
                    column.def().get_column_type(),
                    ColumnType::TimestampWithTimeZone
                )
            })
            .map(|column| column.as_str().to_string())
            .collect();

        ConditionQuery::with_instant_columns(instant_columns)
    }

    async fn fetch_page(
        &self,
        query: ConditionQuery,
        sort: Vec<SortClause>,
        page: PageRequest,
    ) -> Result<QueryResult<R>, CoreError> {
        let mut select = E::find().filter(query.into_condition());
        for clause in sort {
            let order = if clause.descending {
                Order::Desc
            } else {
                Order::Asc
            };
            select = select.order_by(column(&clause.column), order);
        }

        let total_count = select.clone().count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count {} rows: {}", E::default().table_name(), e);
            CoreError::InternalServerError
        })?;

        // Past the last row, including offsets that overflow.
        let offset = page.offset();
        if offset >= total_count {
            return Ok(QueryResult {
                rows: Vec::new(),
                total_count,
            });
        }

        let rows = select
            .offset(offset)
            .limit(page.page_size)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch {} page: {}", E::default().table_name(), e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(R::from)
            .collect();

        Ok(QueryResult { rows, total_count })
    }

    async fn fetch_column_values(
        &self,
        query: ConditionQuery,
        column: &str,
    ) -> Result<Vec<Option<String>>, CoreError> {
        E::find()
            .filter(query.into_condition())
            .select_only()
            .column_as(column_text(column), "value")
            .into_tuple::<Option<String>>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch values of column {}: {}", column, e);
                CoreError::InternalServerError
            })
    }

    async fn fetch_grouped_counts(
        &self,
        query: ConditionQuery,
        column: &str,
    ) -> Result<Vec<(Option<String>, i64)>, CoreError> {
        E::find()
            .filter(query.into_condition())
            .select_only()
            .column_as(column_text(column), "value")
            .column_as(Expr::col(Asterisk).count(), "value_count")
            .group_by(self::column(column))
            .into_tuple::<(Option<String>, i64)>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to count values of column {}: {}", column, e);
                CoreError::InternalServerError
            })
    }
}
