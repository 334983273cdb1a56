//! Espaço vetorial TF-IDF
//!
//! - vocabulário ordenado com todos os tokens dos documentos
//! - idf suavizado: ln((1 + n) / (1 + df)) + 1
//! - vetores = contagem × idf, normalizados (L2)
//!
//! Vetores esparsos guardam (índice do termo, peso) em ordem crescente de
//! índice, o que torna o produto interno determinístico.

use super::tokenizer::tokenize;
use std::collections::{BTreeMap, BTreeSet};

/// Vetor esparso normalizado
pub type SparseVector = Vec<(usize, f64)>;

/// Espaço ajustado a um conjunto fixo de documentos
#[derive(Debug, Clone)]
pub struct TfidfSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

impl TfidfSpace {
    /// Ajusta vocabulário e pesos idf exatamente a `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            for idx in unique {
                df[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut space = Self {
            vocabulary,
            idf,
            documents: Vec::with_capacity(tokenized.len()),
        };
        let documents = tokenized.iter().map(|tokens| space.vectorize(tokens)).collect();
        space.documents = documents;
        space
    }

    /// Projeta um texto no espaço; termos fora do vocabulário são ignorados
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    /// Similaridade do cosseno entre `query` e cada documento, na ordem original
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.documents.iter().map(|doc| dot(query, doc)).collect()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }
}

/// Produto interno de dois vetores esparsos ordenados
fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
