use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionManager, Hashing, JwtConfig},
    di::DependenciesInject,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Connecting to Postgres");

        let pool = ConnectionManager::new_pool(&config.database_url, config.database_max_connections)
            .await
            .context("Failed to create database connection pool")?;

        let hash = Arc::new(Hashing::new()) as DynHashing;
        let jwt_config = Arc::new(JwtConfig::new(config.jwt.clone())) as DynJwtService;

        let di_container = DependenciesInject::new(pool, hash, jwt_config);

        Ok(Self { di_container })
    }
}
