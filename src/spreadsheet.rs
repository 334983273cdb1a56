//! Funções auxiliares de leitura (calamine)
//!
//! Conversão de células para texto e localização de colunas pelo nome do
//! cabeçalho, compartilhadas pela tabela de preços e pela planilha de contatos.

use crate::error::{PlumbQuoteError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;

/// Texto de uma célula; vazia ou com erro vira `None`
///
/// Números inteiros saem sem casas decimais (`80`), os demais com duas (`80.50`).
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Comparação de cabeçalho: sem espaços nas pontas, sem diferença de caixa
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Índice de cada cabeçalho normalizado (primeira ocorrência)
pub fn header_index(header: &[Data]) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, cell) in header.iter().enumerate() {
        if let Some(name) = cell_text(cell) {
            index.entry(normalize_header(&name)).or_insert(i);
        }
    }
    index
}

/// Abre a pasta de trabalho e lê uma aba inteira
pub fn read_sheet(path: &Path, sheet: &str) -> Result<Range<Data>> {
    if !path.exists() {
        return Err(PlumbQuoteError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(PlumbQuoteError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet.to_string(),
        });
    }

    Ok(workbook.worksheet_range(sheet)?)
}
