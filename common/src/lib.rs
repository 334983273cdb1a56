//! Biblioteca comum do plumb-quote
//!
//! Tipos, catálogo de categorias e matcher TF-IDF, sem E/S de planilha.

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod types;

pub use catalog::{Catalog, Category, ColumnMap, Question};
pub use error::{Error, Result};
pub use matcher::{build_query, match_detailed, match_service, ServiceMatch};
pub use types::{
    CandidateRow, MatchResult, DIAGNOSIS_NOT_FOUND, PRICE_UNAVAILABLE, SOLUTION_UNAVAILABLE,
};
