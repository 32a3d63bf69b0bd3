use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use coachdesk_core::domain::common::{CoachDeskConfig, DatabaseConfig, QueryConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "coachdesk-api", version, about = "CoachDesk query API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        id = "database_user",
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        id = "database_password",
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(
        id = "database_name",
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "coachdesk"
    )]
    pub name: String,

    #[arg(
        id = "database_max_connections",
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(
        id = "server_root_path",
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        id = "allowed_origins",
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(id = "log_filter", long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(id = "log_json", long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct QueryArgs {
    /// Deadline of each page and facet sub-query in milliseconds. 0 disables it.
    #[arg(
        id = "query_timeout_ms",
        long = "query-timeout-ms",
        env = "QUERY_TIMEOUT_MS",
        default_value_t = 10_000
    )]
    pub timeout_ms: u64,
}

impl From<Args> for CoachDeskConfig {
    fn from(args: Args) -> Self {
        CoachDeskConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
            query: QueryConfig {
                timeout: (args.query.timeout_ms > 0)
                    .then(|| Duration::from_millis(args.query.timeout_ms)),
            },
        }
    }
}
