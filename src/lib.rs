//! Library management backend: users, books, loans with overdue fines,
//! book search and a canned-reply help chat, served over HTTP from SQLite.

pub mod chat;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod fine;
pub mod models;
pub mod routes;
pub mod search;

pub use error::{Error, Result};
