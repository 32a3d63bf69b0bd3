use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::{
        activity_period, client, coach,
        common::{CoachDeskConfig, QueryConfig, entities::app_errors::CoreError},
        filter::{
            columns::ColumnTable, logging::TracingQueryLogger, ports::CollectionRepository,
            services::FacetedQueryService,
        },
        health::services::HealthService,
        payment, specialization, testimonial,
    },
    infrastructure::{
        activity_period::PostgresActivityPeriodRepository,
        client::PostgresClientRepository,
        coach::PostgresCoachRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        payment::PostgresPaymentRepository,
        specialization::PostgresSpecializationRepository,
        testimonial::PostgresTestimonialRepository,
    },
};

pub type ClientQueryService = FacetedQueryService<PostgresClientRepository>;
pub type CoachQueryService = FacetedQueryService<PostgresCoachRepository>;
pub type PaymentQueryService = FacetedQueryService<PostgresPaymentRepository>;
pub type TestimonialQueryService = FacetedQueryService<PostgresTestimonialRepository>;
pub type ActivityPeriodQueryService = FacetedQueryService<PostgresActivityPeriodRepository>;
pub type SpecializationQueryService = FacetedQueryService<PostgresSpecializationRepository>;

/// Every read service of the back office, sharing one connection pool.
#[derive(Clone)]
pub struct CoachDeskService {
    pub clients: Arc<ClientQueryService>,
    pub coaches: Arc<CoachQueryService>,
    pub payments: Arc<PaymentQueryService>,
    pub testimonials: Arc<TestimonialQueryService>,
    pub activity_periods: Arc<ActivityPeriodQueryService>,
    pub specializations: Arc<SpecializationQueryService>,
    pub health: Arc<HealthService<PostgresHealthCheckRepository>>,
}

pub async fn create_service(config: CoachDeskConfig) -> Result<CoachDeskService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    Ok(build_service(postgres.get_db(), &config.query)?)
}

/// Wires the services over an existing connection. Fails when a column
/// table is malformed.
pub fn build_service(
    db: Arc<DatabaseConnection>,
    config: &QueryConfig,
) -> Result<CoachDeskService, CoreError> {
    fn query_service<R: CollectionRepository>(
        repository: R,
        columns: ColumnTable,
        config: &QueryConfig,
    ) -> Arc<FacetedQueryService<R>> {
        Arc::new(
            FacetedQueryService::new(repository, columns, TracingQueryLogger)
                .with_timeout(config.timeout),
        )
    }

    Ok(CoachDeskService {
        clients: query_service(
            PostgresClientRepository::new(Arc::clone(&db)),
            client::columns::column_table()?,
            config,
        ),
        coaches: query_service(
            PostgresCoachRepository::new(Arc::clone(&db)),
            coach::columns::column_table()?,
            config,
        ),
        payments: query_service(
            PostgresPaymentRepository::new(Arc::clone(&db)),
            payment::columns::column_table()?,
            config,
        ),
        testimonials: query_service(
            PostgresTestimonialRepository::new(Arc::clone(&db)),
            testimonial::columns::column_table()?,
            config,
        ),
        activity_periods: query_service(
            PostgresActivityPeriodRepository::new(Arc::clone(&db)),
            activity_period::columns::column_table()?,
            config,
        ),
        specializations: query_service(
            PostgresSpecializationRepository::new(Arc::clone(&db)),
            specialization::columns::column_table()?,
            config,
        ),
        health: Arc::new(HealthService::new(PostgresHealthCheckRepository::new(db))),
    })
}
