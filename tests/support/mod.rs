#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{json, Value};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn user_body(name: &str, email: &str) -> Value {
    json!({ "nome": name, "email": email, "telefone": "(11) 99999-0000" })
}

pub fn book_body(title: &str, author: &str) -> Value {
    json!({
        "titulo": title,
        "autor": author,
        "categoria": "Romance",
        "cidade": "Recife",
        "biblioteca": "Biblioteca Pública do Estado",
        "secao": "Literatura Brasileira",
        "descricao": format!("{title}, de {author}")
    })
}

/// Build the production router against `$pool` with a clock stuck on `$today`.
macro_rules! app {
    ($pool:expr, $today:expr) => {{
        let clock: std::sync::Arc<dyn biblioteca::clock::Clock> =
            std::sync::Arc::new(biblioteca::clock::FixedClock($today));
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::from(clock))
                .configure(biblioteca::routes::configure),
        )
        .await
    }};
}
