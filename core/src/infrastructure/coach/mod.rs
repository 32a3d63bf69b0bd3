use crate::{
    domain::coach::entities::Coach,
    entity::coaches,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresCoachRepository = PostgresCollectionRepository<coaches::Entity, Coach>;
