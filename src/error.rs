use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlumbQuoteError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Aba '{sheet}' não encontrada em {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("Erro ao ler planilha: {0}")]
    Spreadsheet(String),

    #[error("Erro ao gravar Excel: {0}")]
    ExcelWrite(String),

    #[error("Upload inválido: {0}")]
    InvalidUpload(String),

    #[error("Dados inválidos: {0}")]
    Validation(String),

    #[error("Erro na entrada interativa: {0}")]
    Prompt(String),

    #[error("Erro no servidor: {0}")]
    Server(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] plumb_quote_common::Error),
}

pub type Result<T> = std::result::Result<T, PlumbQuoteError>;

impl From<calamine::Error> for PlumbQuoteError {
    fn from(e: calamine::Error) -> Self {
        PlumbQuoteError::Spreadsheet(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for PlumbQuoteError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        PlumbQuoteError::ExcelWrite(e.to_string())
    }
}
