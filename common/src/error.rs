//! Tipos de erro

use thiserror::Error;

/// Erro comum
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// Tabela de referência vazia: não há o que comparar
    #[error("Nenhum serviço candidato disponível para comparação")]
    NoCandidates,

    #[error("Categoria desconhecida: {0}")]
    UnknownCategory(String),

    /// Colunas esperadas ausentes no cabeçalho da aba
    #[error("Aba '{sheet}' sem as colunas esperadas: {}", missing.join(", "))]
    SchemaMismatch { sheet: String, missing: Vec<String> },
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
