pub mod model;

use secrecy::ExposeSecret;
use shared::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool};

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(cfg.password.expose_secret())
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    ConnectionPool::new(PgPool::connect_lazy_with(make_pg_connect_options(cfg)))
}
