use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::clock::Clock;
use crate::db;
use crate::error::Result;
use crate::fine::{Settlement, FINE_NOTICE};
use crate::models::NewLoan;

pub async fn list_loans(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let loans = db::loans::list(&pool).await?;
    Ok(HttpResponse::Ok().json(loans))
}

pub async fn register_loan(
    loan: web::Json<NewLoan>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let id = db::loans::insert(&pool, &loan).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Empréstimo cadastrado com sucesso!",
        "alerta": FINE_NOTICE,
        "id": id,
    })))
}

pub async fn return_loan(
    id: web::Path<i64>,
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse> {
    let outcome = db::loans::return_loan(&pool, id.into_inner(), clock.today()).await?;
    let message = match outcome {
        Settlement::Settled { .. } => "Livro devolvido com sucesso!",
        Settlement::AlreadyReturned { .. } => "Este empréstimo já foi devolvido.",
    };
    Ok(HttpResponse::Ok().json(json!({
        "message": message,
        "multa": outcome.fine(),
    })))
}

pub async fn delete_loan(id: web::Path<i64>, pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    db::loans::delete(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Empréstimo excluído com sucesso!" })))
}
