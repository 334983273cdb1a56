//! Fluxo de orçamento: categoria → respostas → tabela → comparação

use crate::error::Result;
use crate::pricing;
use plumb_quote_common::{match_detailed, Catalog, ServiceMatch};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pedido de orçamento
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    /// Descrição livre do serviço
    #[serde(default, alias = "service")]
    pub servico: String,
    /// Respostas por id de pergunta
    #[serde(default, alias = "answers")]
    pub respostas: HashMap<String, String>,
}

/// Calcula o orçamento de uma categoria
///
/// A tabela é lida da planilha a cada chamada.
pub fn quote(
    price_table: &Path,
    catalog: &Catalog,
    category_id: &str,
    request: &QuoteRequest,
) -> Result<ServiceMatch> {
    let category = catalog.require(category_id)?;
    let answers = category.collect_answers(&request.respostas);
    let candidates = pricing::load_candidates(price_table, category)?;

    let matched = match_detailed(&request.servico, &answers, &candidates)?;
    tracing::debug!(
        category = category_id,
        candidates = candidates.len(),
        row = matched.row,
        score = matched.score,
        "serviço mais semelhante encontrado"
    );

    Ok(matched)
}
