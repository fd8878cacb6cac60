use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{info, warn};

use crate::db::is_foreign_key_violation;
use crate::error::{Error, Result};
use crate::fine::{self, Settlement};
use crate::models::{Loan, LoanReport, LoanStatus, NewLoan};

pub async fn list(pool: &SqlitePool) -> Result<Vec<LoanReport>> {
    let loans = sqlx::query_as::<_, LoanReport>(
        "SELECT e.id, u.nome AS usuario, l.titulo AS livro, \
                e.data_emprestimo, e.data_devolucao, e.status, e.multa \
         FROM emprestimos e \
         JOIN usuarios u ON e.usuario_id = u.id \
         JOIN livros l ON e.livro_id = l.id \
         ORDER BY e.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(loans)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Loan> {
    sqlx::query_as::<_, Loan>(
        "SELECT id, usuario_id, livro_id, data_emprestimo, data_devolucao, status, multa \
         FROM emprestimos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(Error::not_found("Empréstimo", id))
}

/// Record a new pending loan with no fine.
pub async fn insert(pool: &SqlitePool, loan: &NewLoan) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO emprestimos \
         (usuario_id, livro_id, data_emprestimo, data_devolucao, status, multa) \
         VALUES (?, ?, ?, ?, ?, 0)",
    )
    .bind(loan.user_id)
    .bind(loan.book_id)
    .bind(loan.loan_date)
    .bind(loan.due_date)
    .bind(LoanStatus::Pending)
    .execute(pool)
    .await
    .map_err(|err| {
        if is_foreign_key_violation(&err) {
            warn!(user_id = loan.user_id, book_id = loan.book_id, "loan references a missing row");
            Error::validation("Usuário ou livro inexistente")
        } else {
            err.into()
        }
    })?;

    let id = result.last_insert_rowid();
    info!(loan_id = id, user_id = loan.user_id, book_id = loan.book_id, "loan registered");
    Ok(id)
}

/// Mark a loan as returned on `today`, writing status and fine together.
///
/// Returning an already returned loan writes nothing and reports the fine
/// recorded the first time. When the guarded update writes no row the loan is
/// read again: a returned loan yields its recorded fine, anything else is a
/// `Conflict`.
pub async fn return_loan(pool: &SqlitePool, id: i64, today: NaiveDate) -> Result<Settlement> {
    let mut tx = pool.begin().await?;

    let loan = fetch_loan(&mut tx, id).await?;

    let mut outcome = fine::settle(loan.status, loan.fine, loan.due_date, today);
    if let Settlement::Settled { fine } = outcome {
        let written = sqlx::query(
            "UPDATE emprestimos SET status = ?, multa = ? WHERE id = ? AND status = ?",
        )
        .bind(LoanStatus::Returned)
        .bind(fine)
        .bind(id)
        .bind(LoanStatus::Pending)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if written != 1 {
            let current = fetch_loan(&mut tx, id).await?;
            outcome = match fine::settle(current.status, current.fine, current.due_date, today) {
                settled @ Settlement::AlreadyReturned { .. } => settled,
                Settlement::Settled { .. } => {
                    warn!(loan_id = id, "return update wrote no row");
                    return Err(Error::Conflict(
                        "Empréstimo não pôde ser devolvido".to_owned(),
                    ));
                }
            };
        }
    }
    tx.commit().await?;

    match outcome {
        Settlement::Settled { fine } => {
            info!(loan_id = id, fine, status = LoanStatus::Returned.as_str(), "loan returned");
        }
        Settlement::AlreadyReturned { fine } => {
            info!(loan_id = id, fine, "loan was already returned");
        }
    }
    Ok(outcome)
}

async fn fetch_loan(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<Loan> {
    let loan = sqlx::query_as::<_, Loan>(
        "SELECT id, usuario_id, livro_id, data_emprestimo, data_devolucao, status, multa \
         FROM emprestimos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    loan.ok_or(Error::not_found("Empréstimo", id))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM emprestimos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::not_found("Empréstimo", id));
    }
    info!(loan_id = id, "loan deleted");
    Ok(())
}
