//! HTTP surface. Handlers receive the pool and clock through `web::Data`.

use actix_web::web;

use crate::error::Error;

pub mod books;
pub mod chat;
pub mod loans;
pub mod search;
pub mod users;

/// Register every `/api` route along with JSON and path extractor settings
/// that report failures through [`Error`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| Error::validation(format!("JSON inválido: {err}")).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| Error::validation(format!("Parâmetro inválido: {err}")).into()),
    )
    .route("/api/usuarios", web::get().to(users::list_users))
    .route("/api/usuarios", web::post().to(users::register_user))
    .route("/api/livros", web::get().to(books::list_books))
    .route("/api/livros", web::post().to(books::register_book))
    .route("/api/livros/{id}", web::get().to(books::get_book))
    .route("/api/livros/{id}", web::delete().to(books::delete_book))
    .route("/api/emprestimos", web::get().to(loans::list_loans))
    .route("/api/emprestimos", web::post().to(loans::register_loan))
    .route("/api/emprestimos/{id}/devolver", web::put().to(loans::return_loan))
    .route("/api/emprestimos/{id}", web::delete().to(loans::delete_loan))
    .route("/api/busca", web::post().to(search::search_books))
    .route("/api/chat", web::post().to(chat::chat_reply));
}
