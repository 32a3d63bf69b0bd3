use crate::{
    domain::client::entities::Client,
    entity::clients,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresClientRepository = PostgresCollectionRepository<clients::Entity, Client>;
