use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{NewProduct, Product, ProductChanges};
use crate::store::StoreResult;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: NewProduct) -> StoreResult<Product>;
    async fn list(&self) -> StoreResult<Vec<Product>>;
    async fn get(&self, pid: i32) -> StoreResult<Option<Product>>;
    /// `Ok(false)` when no product has this id.
    async fn update(&self, pid: i32, changes: ProductChanges) -> StoreResult<bool>;
    /// `Ok(false)` when no product has this id.
    async fn delete(&self, pid: i32) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct PgProductStore {
    db: PgPool,
}

impl PgProductStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, product: NewProduct) -> StoreResult<Product> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (pname, description, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING pid, pname, description, price, stock
            "#,
        )
        .bind(&product.pname)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT pid, pname, description, price, stock
            FROM products
            ORDER BY pid
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, pid: i32) -> StoreResult<Option<Product>> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            SELECT pid, pname, description, price, stock
            FROM products
            WHERE pid = $1
            "#,
        )
        .bind(pid)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, pid: i32, changes: ProductChanges) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
               SET pname = COALESCE($2, pname),
                   description = COALESCE($3, description),
                   price = COALESCE($4, price),
                   stock = COALESCE($5, stock)
             WHERE pid = $1
            "#,
        )
        .bind(pid)
        .bind(changes.pname)
        .bind(changes.description)
        .bind(changes.price)
        .bind(changes.stock)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, pid: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE pid = $1")
            .bind(pid)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
