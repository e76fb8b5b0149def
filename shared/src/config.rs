use std::env;

use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: SecretString::new(env::var("DATABASE_PASSWORD")?),
            database: env::var("DATABASE_NAME")?,
        };
        Ok(Self { database })
    }
}

#[derive(Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database: String,
}
