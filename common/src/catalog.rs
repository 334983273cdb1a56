//! Catálogo de categorias de problema
//!
//! Cada categoria aponta para uma aba da planilha de preços e define as
//! perguntas exibidas no formulário de orçamento. O catálogo é dado, não
//! código: pode vir do conjunto embutido ou de um arquivo JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Pergunta de uma categoria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
}

impl Question {
    pub fn new(id: &str, label: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// Nomes das colunas da aba de preços
///
/// A primeira coluna descritiva é o campo principal: linhas com ela vazia
/// são descartadas antes da comparação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMap {
    pub description: Vec<String>,
    pub labor_price: String,
    pub material_price: String,
    pub total_price: String,
    pub diagnosis: String,
    pub solution: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            description: vec![
                "Serviço".into(),
                "Detalhe".into(),
                "Característica".into(),
                "Ambiente".into(),
            ],
            labor_price: "Mão de Obra".into(),
            material_price: "Material".into(),
            total_price: "Total".into(),
            diagnosis: "Diagnóstico".into(),
            solution: "Solução".into(),
        }
    }
}

impl ColumnMap {
    /// Todas as colunas exigidas no cabeçalho, descritivas primeiro
    pub fn required(&self) -> Vec<&str> {
        self.description
            .iter()
            .map(String::as_str)
            .chain([
                self.labor_price.as_str(),
                self.material_price.as_str(),
                self.total_price.as_str(),
                self.diagnosis.as_str(),
                self.solution.as_str(),
            ])
            .collect()
    }
}

/// Categoria de problema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Aba correspondente na planilha de preços
    pub sheet: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub columns: ColumnMap,
}

impl Category {
    /// Respostas na ordem das perguntas; ausentes ou em branco são ignoradas
    pub fn collect_answers(&self, answers: &HashMap<String, String>) -> Vec<String> {
        self.questions
            .iter()
            .filter_map(|q| answers.get(&q.id))
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Rótulo para exibição (o id quando não há rótulo)
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Conjunto ordenado de categorias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Cria o catálogo validando ids e mapeamento de colunas
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.id.trim().is_empty() {
                return Err(Error::Config("categoria sem id".into()));
            }
            if category.sheet.trim().is_empty() {
                return Err(Error::Config(format!("categoria '{}' sem aba", category.id)));
            }
            if category.columns.description.is_empty() {
                return Err(Error::Config(format!(
                    "categoria '{}' sem colunas descritivas",
                    category.id
                )));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(Error::Config(format!("categoria duplicada: {}", category.id)));
            }
        }
        Ok(Self { categories })
    }

    /// Lê um array JSON de categorias
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Catálogo embutido
    pub fn builtin() -> Self {
        let categories = vec![
            Category {
                id: "Vazamento_de_água_na_saída_da_pia".into(),
                label: "Vazamento de água na saída da pia".into(),
                sheet: "Sifao".into(),
                questions: vec![
                    Question::new(
                        "localizacao",
                        "Qual o tipo de sifão existente?",
                        "Ex: Simples, duplo, copo, rígido, cano PVC",
                    ),
                    Question::new(
                        "caracteristica",
                        "Qual o material do seu sifão",
                        "Ex: plástico, metal, cromado, Cano PVC",
                    ),
                    Question::new(
                        "tipo",
                        "Qual ambiente o problema ocorre",
                        "Ex: Banheiro, cozinha, sacada, lavanderia",
                    ),
                ],
                columns: ColumnMap::default(),
            },
            Category {
                id: "Vazamento_de_água_na_torneira".into(),
                label: "Vazamento de água na torneira".into(),
                sheet: "Torneiras".into(),
                questions: vec![
                    Question::new(
                        "localizacao",
                        "Onde está a torneira?",
                        "Ex: Cozinha, banheiro",
                    ),
                    Question::new(
                        "tipo",
                        "Qual o tipo de torneira?",
                        "Ex: Monocomando, misturador",
                    ),
                ],
                columns: ColumnMap::default(),
            },
            Category {
                id: "entupimento_esgoto".into(),
                label: "Entupimento de esgoto".into(),
                sheet: "Entupimentos".into(),
                questions: vec![
                    Question::new(
                        "localizacao",
                        "Onde está o entupimento?",
                        "Ex: Ralo do banheiro",
                    ),
                    Question::new(
                        "grau_entupimento",
                        "Qual o grau de entupimento?",
                        "Ex: Total, parcial",
                    ),
                ],
                columns: ColumnMap::default(),
            },
        ];

        Self { categories }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Como `get`, mas falha com `UnknownCategory`
    pub fn require(&self, id: &str) -> Result<&Category> {
        self.get(id).ok_or_else(|| Error::UnknownCategory(id.to_string()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
