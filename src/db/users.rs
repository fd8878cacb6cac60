use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::is_unique_violation;
use crate::error::{Error, Result};
use crate::models::{NewUser, User};

pub async fn list(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, nome, email, telefone FROM usuarios ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

/// Insert a user and return its id. A taken email leaves the table untouched.
pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query("INSERT INTO usuarios (nome, email, telefone) VALUES (?, ?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                warn!(email = %user.email, "duplicate user email");
                Error::DuplicateEmail(user.email.clone())
            } else {
                err.into()
            }
        })?;

    let id = result.last_insert_rowid();
    info!(user_id = id, "user registered");
    Ok(id)
}
