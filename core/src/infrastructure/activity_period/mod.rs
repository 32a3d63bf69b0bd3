use crate::{
    domain::activity_period::entities::ActivityPeriod,
    entity::activity_periods,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresActivityPeriodRepository =
    PostgresCollectionRepository<activity_periods::Entity, ActivityPeriod>;
