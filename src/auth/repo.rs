use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::repo_types::{NewUser, User, UserChanges};
use crate::store::StoreResult;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `StoreError::Conflict` when the username is taken.
    async fn create(&self, user: NewUser) -> StoreResult<User>;
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;
    /// `Ok(None)` when no user has this id.
    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, username, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, username, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, username, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET name = COALESCE($2, name),
                   username = COALESCE($3, username)
             WHERE id = $1
            RETURNING id, name, username, password
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
