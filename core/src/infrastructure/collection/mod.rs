pub mod condition_query;
pub mod repository;
