use crate::{
    domain::specialization::entities::Specialization,
    entity::specializations,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresSpecializationRepository =
    PostgresCollectionRepository<specializations::Entity, Specialization>;
