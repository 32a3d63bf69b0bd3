use std::time::Duration;

pub mod entities;

#[derive(Clone, Debug)]
pub struct CoachDeskConfig {
    pub database: DatabaseConfig,
    pub query: QueryConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryConfig {
    /// Deadline applied to every page and facet sub-query. `None` waits forever.
    pub timeout: Option<Duration>,
}
