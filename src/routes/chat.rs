use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::chat;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

pub async fn chat_reply(request: web::Json<ChatRequest>) -> HttpResponse {
    let reply = chat::respond(&request.message, &mut rand::thread_rng());
    HttpResponse::Ok().json(json!({ "response": reply }))
}
