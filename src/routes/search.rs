use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db;
use crate::error::Result;
use crate::search::BookQuery;

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "descricao", default)]
    pub text: String,
}

pub async fn search_books(
    request: web::Json<SearchRequest>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let books = db::books::search(&pool, &BookQuery::new(&request.text)).await?;
    Ok(HttpResponse::Ok().json(books))
}
