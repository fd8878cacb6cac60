use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::error::Result;
use crate::models::NewUser;

pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let users = db::users::list(&pool).await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn register_user(
    user: web::Json<NewUser>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let user = user.into_inner();
    user.validate()?;
    let id = db::users::insert(&pool, &user).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Usuário cadastrado com sucesso!",
        "id": id,
    })))
}
