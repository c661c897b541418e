use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::User;
use crate::infra::db::{Db, DbError};

#[derive(Clone)]
pub struct UserService {
    db: Db,
}

impl UserService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// `None` means the email is already registered.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<Option<User>, DbError> {
        let row = sqlx::query(
            "INSERT INTO users (name, email) \
             VALUES ($1, $2) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|err| DbError::log("create user", err))?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        }))
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, DbError> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|err| DbError::log("fetch user", err))?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        }))
    }
}
