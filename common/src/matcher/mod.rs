//! Comparação do pedido do usuário com a tabela de serviços
//!
//! A cada chamada o espaço TF-IDF é ajustado de novo às descrições dos
//! candidatos recebidos; não há vocabulário persistido.
//!
//! ## Fluxo
//! 1. texto do serviço + respostas (separados por espaço)
//! 2. ajuste do espaço às descrições candidatas
//! 3. projeção da consulta e similaridade do cosseno
//! 4. maior pontuação vence; empate fica com a primeira linha

pub mod tfidf;
pub mod tokenizer;

use crate::error::{Error, Result};
use crate::types::{CandidateRow, MatchResult};
use serde::Serialize;
use tfidf::TfidfSpace;

/// Resultado com a linha vencedora e sua pontuação
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMatch {
    /// Índice da linha vencedora em `candidates`
    pub row: usize,
    pub score: f64,
    pub result: MatchResult,
}

/// Monta a consulta efetiva
pub fn build_query<S: AsRef<str>>(query_text: &str, answers: &[S]) -> String {
    if answers.is_empty() {
        return query_text.to_string();
    }

    let mut query = query_text.to_string();
    for answer in answers {
        query.push(' ');
        query.push_str(answer.as_ref());
    }
    query
}

/// Encontra o serviço mais semelhante
///
/// # Errors
/// `Error::NoCandidates` quando `candidates` está vazio.
pub fn match_service<S: AsRef<str>>(
    query_text: &str,
    answers: &[S],
    candidates: &[CandidateRow],
) -> Result<MatchResult> {
    match_detailed(query_text, answers, candidates).map(|m| m.result)
}

/// Como `match_service`, incluindo o índice e a pontuação da linha vencedora
pub fn match_detailed<S: AsRef<str>>(
    query_text: &str,
    answers: &[S],
    candidates: &[CandidateRow],
) -> Result<ServiceMatch> {
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let query = build_query(query_text, answers);
    let descriptions: Vec<&str> = candidates.iter().map(|c| c.description.as_str()).collect();

    let space = TfidfSpace::fit(&descriptions);
    let scores = space.similarities(&space.transform(&query));
    let (row, score) = argmax_first(&scores);

    Ok(ServiceMatch {
        row,
        score,
        result: MatchResult::from_row(&candidates[row]),
    })
}

/// Maior valor estrito; em empate, o menor índice
fn argmax_first(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, scores.first().copied().unwrap_or(0.0));
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}
