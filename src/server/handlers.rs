//! Handlers HTTP
//!
//! Leitura/escrita de planilha e a comparação TF-IDF são bloqueantes e
//! rodam em `spawn_blocking`.

use super::error::AppError;
use super::state::AppState;
use crate::leads::{self, Lead, LeadForm, Submission};
use crate::quote::{self, QuoteRequest};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use plumb_quote_common::{Category, MatchResult};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub category: String,
    pub row: usize,
    pub score: f64,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.snapshot().categories().to_vec())
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let catalog = state.catalog.snapshot();
    let category = catalog.require(&id)?;
    Ok(Json(category.clone()))
}

/// POST /api/categories/{id}/quote
pub async fn create_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let catalog = state.catalog.snapshot();
    let price_table = state.config.price_table.clone();

    let matched = tokio::task::spawn_blocking(move || {
        quote::quote(&price_table, &catalog, &id, &request).map(|m| (id, m))
    })
    .await??;

    let (category, matched) = matched;
    Ok(Json(QuoteResponse {
        category,
        row: matched.row,
        score: matched.score,
        result: matched.result,
    }))
}

/// POST /api/leads (multipart)
pub async fn create_lead(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let mut form = LeadForm::default();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "foto" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            // campo de arquivo vazio = nenhuma foto escolhida
            if !bytes.is_empty() {
                upload = Some((file_name, bytes.to_vec()));
            }
        } else {
            let value = field.text().await?;
            if !form.set_field(&name, value) {
                tracing::debug!(field = %name, "campo desconhecido ignorado");
            }
        }
    }

    form.validate(&state.catalog.snapshot())?;

    let upload_dir = state.config.upload_dir.clone();
    let book = state.leads.clone();

    let created = tokio::task::spawn_blocking(move || {
        let upload = upload.as_ref().map(|(name, bytes)| (name.as_str(), bytes.as_slice()));
        leads::submit(&book, &upload_dir, form, upload)
    })
    .await??;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/leads
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, AppError> {
    let book = state.leads.clone();
    let list = tokio::task::spawn_blocking(move || book.list()).await??;
    Ok(Json(list))
}

/// POST /api/catalog/reload
pub async fn reload_catalog(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let catalog = state.catalog.clone();
    let count = tokio::task::spawn_blocking(move || catalog.reload()).await??;
    Ok(Json(json!({ "categories": count })))
}
