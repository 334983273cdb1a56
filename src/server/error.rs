//! Conversão de erros em respostas HTTP
//!
//! Corpo: `{"error": {"code": "...", "message": "..."}}`

use crate::error::PlumbQuoteError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plumb_quote_common::Error as CommonError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Domain(PlumbQuoteError),
    /// Falha ao ler o corpo multipart, com o status indicado pelo axum
    Multipart(StatusCode, String),
    Internal(String),
}

impl From<PlumbQuoteError> for AppError {
    fn from(e: PlumbQuoteError) -> Self {
        AppError::Domain(e)
    }
}

impl From<CommonError> for AppError {
    fn from(e: CommonError) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart(e.status(), e.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("tarefa interrompida: {}", e))
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Multipart(status, msg) => {
                let code = if *status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "BAD_REQUEST"
                };
                (*status, code, msg.clone())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
            AppError::Domain(e) => {
                let (status, code) = match e {
                    PlumbQuoteError::Common(CommonError::UnknownCategory(_)) => {
                        (StatusCode::NOT_FOUND, "UNKNOWN_CATEGORY")
                    }
                    PlumbQuoteError::Common(CommonError::NoCandidates) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "NO_CANDIDATES")
                    }
                    PlumbQuoteError::Common(CommonError::SchemaMismatch { .. }) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "SCHEMA_MISMATCH")
                    }
                    PlumbQuoteError::SheetNotFound { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "SHEET_NOT_FOUND")
                    }
                    PlumbQuoteError::FileNotFound(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "FILE_NOT_FOUND")
                    }
                    PlumbQuoteError::Validation(_) => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                    }
                    PlumbQuoteError::InvalidUpload(_) => {
                        (StatusCode::BAD_REQUEST, "INVALID_UPLOAD")
                    }
                    PlumbQuoteError::Config(_)
                    | PlumbQuoteError::Common(CommonError::Config(_)) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
                };
                (status, code, e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, %message, "falha ao atender requisição");
        } else {
            tracing::debug!(code, %message, "requisição rejeitada");
        }

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (AppError::from(CommonError::UnknownCategory("x".into())), StatusCode::NOT_FOUND),
            (AppError::from(CommonError::NoCandidates), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::from(PlumbQuoteError::Validation("nome".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(PlumbQuoteError::SheetNotFound {
                    path: "tabela.xlsx".into(),
                    sheet: "Sifao".into(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Multipart(StatusCode::BAD_REQUEST, "multipart".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Multipart(StatusCode::PAYLOAD_TOO_LARGE, "limite".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.parts().0, expected, "{:?}", err);
        }
    }

    #[test]
    fn test_schema_mismatch_code() {
        let err = AppError::from(CommonError::SchemaMismatch {
            sheet: "Sifao".into(),
            missing: vec!["Total".into()],
        });
        let (_, code, message) = err.parts();
        assert_eq!(code, "SCHEMA_MISMATCH");
        assert!(message.contains("Total"));
    }
}
