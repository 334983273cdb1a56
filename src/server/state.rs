//! Estado compartilhado pelos handlers
//!
//! O catálogo é um handle explícito e recarregável; a tabela de preços não
//! fica em memória, é lida a cada orçamento.

use crate::config::Config;
use crate::error::Result;
use crate::leads::LeadBook;
use plumb_quote_common::Catalog;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Catálogo substituível em tempo de execução
#[derive(Clone, Debug)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<Catalog>>>,
    source: Option<PathBuf>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog, source: Option<PathBuf>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
            source,
        }
    }

    /// Cópia do catálogo vigente; não segura o lock
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(catalog);
    }

    /// Relê o arquivo de origem (ou volta ao embutido); devolve o nº de categorias
    pub fn reload(&self) -> Result<usize> {
        let catalog = match &self.source {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        let count = catalog.len();
        self.replace(catalog);
        tracing::info!(categories = count, "catálogo recarregado");
        Ok(count)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogHandle,
    pub leads: Arc<LeadBook>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = config.load_catalog()?;
        let catalog = CatalogHandle::new(catalog, config.catalog_file.clone());
        let leads = Arc::new(LeadBook::open(config.leads_file.clone()));

        Ok(Self {
            config: Arc::new(config),
            catalog,
            leads,
        })
    }
}
