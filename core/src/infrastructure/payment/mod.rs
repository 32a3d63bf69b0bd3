use crate::{
    domain::payment::entities::Payment,
    entity::payments,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresPaymentRepository = PostgresCollectionRepository<payments::Entity, Payment>;
