use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{jwt::JwtKeys, password::PasswordHasher, repo::PgUserStore, repo::UserStore};
use crate::config::AppConfig;
use crate::db;
use crate::products::repo::{PgProductStore, ProductStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
    pub keys: JwtKeys,
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Connects the pool; failing to reach the database is fatal.
    pub async fn init(config: AppConfig) -> anyhow::Result<(Self, PgPool)> {
        let pool = db::connect(&config).await?;
        let state = Self::from_parts(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgProductStore::new(pool.clone())),
            &config,
        )?;
        Ok((state, pool))
    }

    /// Fails when the configured hash parameters are out of range.
    pub fn from_parts(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductStore>,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            users,
            products,
            keys: JwtKeys::from_config(&config.jwt),
            hasher: PasswordHasher::from_config(&config.hash)?,
        })
    }
}
