//! Error kinds surfaced by the library backend and their HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Email já cadastrado!")]
    DuplicateEmail(String),

    #[error("{entity} {id} não encontrado")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Conflict(String),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Text placed in the `error` field of the response body.
    ///
    /// Storage failures are redacted; the underlying error is only logged.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => "Erro interno ao acessar o banco de dados".to_owned(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Storage(err) = self {
            error!(error = %err, "storage operation failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::validation("titulo é obrigatório"), StatusCode::BAD_REQUEST)]
    #[case(Error::DuplicateEmail("ana@example.com".into()), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("Empréstimo", 7), StatusCode::NOT_FOUND)]
    #[case(Error::Conflict("livro possui empréstimos".into()), StatusCode::CONFLICT)]
    #[case(Error::Storage(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_each_kind_to_a_status(#[case] err: Error, #[case] status: StatusCode) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_response().status(), status);
    }

    #[test]
    fn storage_text_is_redacted() {
        let err = Error::Storage(sqlx::Error::Protocol("disk I/O error at page 42".into()));
        assert!(!err.public_message().contains("page 42"));
        assert!(err.to_string().contains("page 42"));
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(
            Error::not_found("Empréstimo", 3).public_message(),
            "Empréstimo 3 não encontrado"
        );
    }
}
