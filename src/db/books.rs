use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::is_foreign_key_violation;
use crate::error::{Error, Result};
use crate::models::{Book, NewBook};
use crate::search::BookQuery;

const SELECT_BOOKS: &str = "SELECT id, titulo, autor, categoria, cidade, biblioteca, secao, \
                            localizacao, descricao FROM livros";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Book>> {
    let sql = format!("{SELECT_BOOKS} ORDER BY id");
    let books = sqlx::query_as::<_, Book>(&sql).fetch_all(pool).await?;
    Ok(books)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Book> {
    let sql = format!("{SELECT_BOOKS} WHERE id = ?");
    let book = sqlx::query_as::<_, Book>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    book.ok_or(Error::not_found("Livro", id))
}

pub async fn insert(pool: &SqlitePool, book: &NewBook) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO livros \
         (titulo, autor, categoria, cidade, biblioteca, secao, localizacao, descricao) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.category)
    .bind(&book.city)
    .bind(&book.library)
    .bind(&book.section)
    .bind(&book.location)
    .bind(&book.description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    info!(book_id = id, "book registered");
    Ok(id)
}

/// Delete a book. Fails with `NotFound` when no row has `id` and with
/// `Conflict` while loans still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM livros WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                warn!(book_id = id, "book still referenced by loans");
                Error::Conflict("Livro possui empréstimos registrados".to_owned())
            } else {
                err.into()
            }
        })?;

    if result.rows_affected() == 0 {
        return Err(Error::not_found("Livro", id));
    }
    info!(book_id = id, "book deleted");
    Ok(())
}

/// Books matching `query`, in id order.
pub async fn search(pool: &SqlitePool, query: &BookQuery) -> Result<Vec<Book>> {
    Ok(query.filter(list(pool).await?))
}
