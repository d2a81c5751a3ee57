use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id       SERIAL PRIMARY KEY,
        name     VARCHAR(255) NOT NULL,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL
    )
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        pid         SERIAL PRIMARY KEY,
        pname       VARCHAR(255) NOT NULL,
        description VARCHAR(255),
        price       DOUBLE PRECISION NOT NULL,
        stock       INTEGER NOT NULL
    )
"#;

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Creates missing tables. Existing tables are left as they are.
pub async fn sync_schema(db: &PgPool) -> anyhow::Result<()> {
    for ddl in [CREATE_USERS, CREATE_PRODUCTS] {
        sqlx::query(ddl).execute(db).await.context("sync schema")?;
    }
    Ok(())
}
