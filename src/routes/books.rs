use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::error::Result;
use crate::models::NewBook;

pub async fn list_books(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let books = db::books::list(&pool).await?;
    Ok(HttpResponse::Ok().json(books))
}

pub async fn get_book(id: web::Path<i64>, pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let book = db::books::get(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(book))
}

pub async fn register_book(
    book: web::Json<NewBook>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let book = book.into_inner();
    book.validate()?;
    let id = db::books::insert(&pool, &book).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Livro cadastrado com sucesso!",
        "id": id,
    })))
}

pub async fn delete_book(id: web::Path<i64>, pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    db::books::delete(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Livro removido com sucesso!" })))
}
