//! Tipos compartilhados entre o carregador de planilhas, o matcher e a API
//!
//! - CandidateRow: uma linha da tabela de preços de uma categoria
//! - MatchResult: preço/diagnóstico/solução devolvidos ao usuário

use serde::{Deserialize, Serialize};

/// Texto exibido quando a célula de preço está vazia
pub const PRICE_UNAVAILABLE: &str = "Indisponível";
/// Texto exibido quando a célula de diagnóstico está vazia
pub const DIAGNOSIS_NOT_FOUND: &str = "Diagnóstico não encontrado";
/// Texto exibido quando a célula de solução está vazia
pub const SOLUTION_UNAVAILABLE: &str = "Solução não disponível";

/// Linha candidata da tabela de referência
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    /// Os quatro campos descritivos unidos por espaço
    pub description: String,

    #[serde(default)]
    pub labor_price: Option<String>,

    #[serde(default)]
    pub material_price: Option<String>,

    #[serde(default)]
    pub total_price: Option<String>,

    #[serde(default)]
    pub diagnosis: Option<String>,

    #[serde(default)]
    pub solution: Option<String>,
}

impl CandidateRow {
    /// Monta a descrição completa a partir dos campos descritivos, na ordem dada
    pub fn compose_description<S: AsRef<str>>(parts: &[S]) -> String {
        parts
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resultado do orçamento
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub total_price: String,
    pub labor_price: String,
    pub material_price: String,
    pub diagnosis: String,
    pub solution: String,
}

impl MatchResult {
    /// Lê os campos de saída de uma única linha, substituindo vazios pelos textos padrão
    pub fn from_row(row: &CandidateRow) -> Self {
        Self {
            total_price: or_placeholder(&row.total_price, PRICE_UNAVAILABLE),
            labor_price: or_placeholder(&row.labor_price, PRICE_UNAVAILABLE),
            material_price: or_placeholder(&row.material_price, PRICE_UNAVAILABLE),
            diagnosis: or_placeholder(&row.diagnosis, DIAGNOSIS_NOT_FOUND),
            solution: or_placeholder(&row.solution, SOLUTION_UNAVAILABLE),
        }
    }
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_description() {
        let desc = CandidateRow::compose_description(&["sifão", "simples", "plástico", "banheiro"]);
        assert_eq!(desc, "sifão simples plástico banheiro");
    }

    #[test]
    fn test_match_result_placeholders() {
        let row = CandidateRow {
            description: "ralo banheiro".to_string(),
            labor_price: Some("50".to_string()),
            material_price: Some("   ".to_string()),
            ..Default::default()
        };

        let result = MatchResult::from_row(&row);
        assert_eq!(result.labor_price, "50");
        assert_eq!(result.material_price, PRICE_UNAVAILABLE);
        assert_eq!(result.total_price, PRICE_UNAVAILABLE);
        assert_eq!(result.diagnosis, DIAGNOSIS_NOT_FOUND);
        assert_eq!(result.solution, SOLUTION_UNAVAILABLE);
    }

    #[test]
    fn test_match_result_serialize() {
        let row = CandidateRow {
            description: "torneira".to_string(),
            total_price: Some("150".to_string()),
            diagnosis: Some("desgaste interno".to_string()),
            ..Default::default()
        };

        let json =
            serde_json::to_string(&MatchResult::from_row(&row)).expect("falha ao serializar");
        assert!(json.contains("\"totalPrice\":\"150\""));
        assert!(json.contains("\"diagnosis\":\"desgaste interno\""));
        assert!(json.contains("\"solution\":\"Solução não disponível\""));
    }
}
