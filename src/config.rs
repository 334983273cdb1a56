use crate::error::{PlumbQuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PRICE_TABLE: &str = "PLUMB_QUOTE_PRICE_TABLE";
const ENV_LEADS_FILE: &str = "PLUMB_QUOTE_LEADS_FILE";
const ENV_UPLOAD_DIR: &str = "PLUMB_QUOTE_UPLOAD_DIR";
const ENV_CATALOG: &str = "PLUMB_QUOTE_CATALOG";
const ENV_BIND: &str = "PLUMB_QUOTE_BIND";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planilha de preços (uma aba por categoria)
    pub price_table: PathBuf,
    /// Planilha de contatos recebidos
    pub leads_file: PathBuf,
    /// Pasta das fotos enviadas
    pub upload_dir: PathBuf,
    /// Catálogo JSON; sem ele vale o catálogo embutido
    pub catalog_file: Option<PathBuf>,
    pub bind_address: String,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_table: PathBuf::from("tabela_precos.xlsx"),
            leads_file: PathBuf::from("leads.xlsx"),
            upload_dir: PathBuf::from("fotos_recebidas"),
            catalog_file: None,
            bind_address: "127.0.0.1:5000".into(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Arquivo de configuração + variáveis de ambiente
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlumbQuoteError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("plumb-quote").join("config.json"))
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(ENV_PRICE_TABLE) {
            self.price_table = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var(ENV_LEADS_FILE) {
            self.leads_file = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var(ENV_UPLOAD_DIR) {
            self.upload_dir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var(ENV_CATALOG) {
            self.catalog_file = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var(ENV_BIND) {
            self.bind_address = v;
        }
    }

    /// Catálogo configurado (arquivo ou embutido)
    pub fn load_catalog(&self) -> Result<plumb_quote_common::Catalog> {
        match &self.catalog_file {
            Some(path) => {
                if !path.exists() {
                    return Err(PlumbQuoteError::FileNotFound(path.display().to_string()));
                }
                Ok(plumb_quote_common::Catalog::load(path)?)
            }
            None => Ok(plumb_quote_common::Catalog::builtin()),
        }
    }
}
