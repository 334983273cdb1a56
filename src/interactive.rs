//! Perguntas interativas do orçamento (dialoguer)

use crate::error::{PlumbQuoteError, Result};
use dialoguer::{Input, Select};
use plumb_quote_common::{Catalog, Category, Question};
use std::collections::HashMap;

/// Perguntas ainda sem resposta, na ordem da categoria
pub fn unanswered_questions<'a>(
    category: &'a Category,
    answers: &HashMap<String, String>,
) -> Vec<&'a Question> {
    category
        .questions
        .iter()
        .filter(|q| answers.get(&q.id).map_or(true, |a| a.trim().is_empty()))
        .collect()
}

/// Escolha da categoria numa lista
pub fn select_category(catalog: &Catalog) -> Result<String> {
    if catalog.is_empty() {
        return Err(PlumbQuoteError::Config("catálogo sem categorias".into()));
    }

    let labels: Vec<&str> = catalog.categories().iter().map(|c| c.display_label()).collect();
    let choice = Select::new()
        .with_prompt("Qual é o problema?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| PlumbQuoteError::Prompt(e.to_string()))?;

    Ok(catalog.categories()[choice].id.clone())
}

/// Descrição do serviço, se ainda não informada
pub fn prompt_service(current: &str) -> Result<String> {
    if !current.trim().is_empty() {
        return Ok(current.to_string());
    }

    Input::new()
        .with_prompt("Descreva o serviço")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PlumbQuoteError::Prompt(e.to_string()))
}

/// Pergunta o que faltar; resposta vazia pula a pergunta
pub fn prompt_answers(category: &Category, answers: &mut HashMap<String, String>) -> Result<()> {
    let pending: Vec<Question> = unanswered_questions(category, answers)
        .into_iter()
        .cloned()
        .collect();

    if pending.is_empty() {
        return Ok(());
    }

    println!("📋 {} ({} perguntas)", category.display_label(), pending.len());

    for question in pending {
        if !question.placeholder.is_empty() {
            println!("  {}", question.placeholder);
        }

        let input: String = Input::new()
            .with_prompt(&question.label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PlumbQuoteError::Prompt(e.to_string()))?;

        let trimmed = input.trim();
        if !trimmed.is_empty() {
            answers.insert(question.id.clone(), trimmed.to_string());
        }
    }

    Ok(())
}
