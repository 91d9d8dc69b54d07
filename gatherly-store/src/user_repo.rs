use async_trait::async_trait;
use sqlx::PgPool;

use gatherly_core::repository::{RepoError, UserRepository};
use gatherly_shared::models::User;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    photo: String,
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_user(&self, id: &str) -> Result<Option<User>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, username, first_name, last_name, photo FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            id: row.id,
            email: row.email,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            photo: row.photo,
        }))
    }
}
