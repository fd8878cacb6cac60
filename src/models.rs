use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    #[sqlx(rename = "autor")]
    pub author: String,
    #[serde(rename = "categoria")]
    #[sqlx(rename = "categoria")]
    pub category: String,
    #[serde(rename = "cidade")]
    #[sqlx(rename = "cidade")]
    pub city: String,
    #[serde(rename = "biblioteca")]
    #[sqlx(rename = "biblioteca")]
    pub library: String,
    #[serde(rename = "secao")]
    #[sqlx(rename = "secao")]
    pub section: String,
    #[serde(rename = "localizacao")]
    #[sqlx(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "descricao")]
    #[sqlx(rename = "descricao")]
    pub description: String,
}

/// Lifecycle of a loan. The only transition is `Pending -> Returned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum LoanStatus {
    #[serde(rename = "Pendente")]
    #[sqlx(rename = "Pendente")]
    Pending,
    #[serde(rename = "Devolvido")]
    #[sqlx(rename = "Devolvido")]
    Returned,
}

impl LoanStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Returned => "Devolvido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Loan {
    pub id: i64,
    #[serde(rename = "usuario_id")]
    #[sqlx(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "livro_id")]
    #[sqlx(rename = "livro_id")]
    pub book_id: i64,
    #[serde(rename = "data_emprestimo")]
    #[sqlx(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "data_devolucao")]
    #[sqlx(rename = "data_devolucao")]
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    #[serde(rename = "multa")]
    #[sqlx(rename = "multa")]
    pub fine: i64,
}

/// A loan joined with the borrower's name and the book's title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LoanReport {
    pub id: i64,
    #[serde(rename = "usuario")]
    #[sqlx(rename = "usuario")]
    pub user_name: String,
    #[serde(rename = "livro")]
    #[sqlx(rename = "livro")]
    pub book_title: String,
    #[serde(rename = "data_emprestimo")]
    #[sqlx(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "data_devolucao")]
    #[sqlx(rename = "data_devolucao")]
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    #[serde(rename = "multa")]
    #[sqlx(rename = "multa")]
    pub fine: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        require("nome", &self.name)?;
        require("email", &self.email)?;
        require("telefone", &self.phone)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "autor", default)]
    pub author: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "cidade", default)]
    pub city: String,
    #[serde(rename = "biblioteca", default)]
    pub library: String,
    #[serde(rename = "secao", default)]
    pub section: String,
    /// Optional; stored as an empty string when absent.
    #[serde(rename = "localizacao", default)]
    pub location: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

impl NewBook {
    pub fn validate(&self) -> Result<()> {
        require("titulo", &self.title)?;
        require("autor", &self.author)?;
        require("categoria", &self.category)?;
        require("cidade", &self.city)?;
        require("biblioteca", &self.library)?;
        require("secao", &self.section)?;
        require("descricao", &self.description)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewLoan {
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "livro_id")]
    pub book_id: i64,
    #[serde(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "data_devolucao")]
    pub due_date: NaiveDate,
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("Campo obrigatório ausente: {field}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_requires_every_field() {
        let user: NewUser =
            serde_json::from_value(json!({ "nome": "Ana", "email": "ana@example.com" })).unwrap();
        let err = user.validate().unwrap_err();
        assert_eq!(err.to_string(), "Campo obrigatório ausente: telefone");
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let user = NewUser {
            name: "   ".into(),
            email: "ana@example.com".into(),
            phone: "1199".into(),
        };
        assert!(matches!(user.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn book_location_is_optional() {
        let book: NewBook = serde_json::from_value(json!({
            "titulo": "Dom Casmurro",
            "autor": "Machado de Assis",
            "categoria": "Romance",
            "cidade": "Rio de Janeiro",
            "biblioteca": "Central",
            "secao": "B",
            "descricao": "Clássico da literatura brasileira"
        }))
        .unwrap();
        assert!(book.validate().is_ok());
        assert_eq!(book.location, "");
    }

    #[test]
    fn book_without_description_is_rejected() {
        let book = NewBook {
            title: "Dom Casmurro".into(),
            author: "Machado de Assis".into(),
            category: "Romance".into(),
            city: "Rio de Janeiro".into(),
            library: "Central".into(),
            section: "B".into(),
            location: String::new(),
            description: String::new(),
        };
        let err = book.validate().unwrap_err();
        assert_eq!(err.to_string(), "Campo obrigatório ausente: descricao");
    }

    #[test]
    fn loan_dates_are_calendar_dates() {
        let loan: NewLoan = serde_json::from_value(json!({
            "usuario_id": 1,
            "livro_id": 2,
            "data_emprestimo": "2024-01-01",
            "data_devolucao": "2024-01-16"
        }))
        .unwrap();
        assert_eq!(loan.due_date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());

        let bad = serde_json::from_value::<NewLoan>(json!({
            "usuario_id": 1,
            "livro_id": 2,
            "data_emprestimo": "01/01/2024",
            "data_devolucao": "2024-01-16"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn status_uses_stored_labels() {
        assert_eq!(serde_json::to_value(LoanStatus::Pending).unwrap(), json!("Pendente"));
        assert_eq!(serde_json::to_value(LoanStatus::Returned).unwrap(), json!("Devolvido"));
        assert_eq!(LoanStatus::Returned.as_str(), "Devolvido");
    }
}
