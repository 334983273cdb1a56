//! Tabela de preços por categoria
//!
//! Lê a aba da categoria e monta as linhas candidatas. As colunas são
//! localizadas pelo nome no cabeçalho; se alguma faltar, a leitura falha
//! com `SchemaMismatch` antes de qualquer comparação.

use crate::error::Result;
use crate::spreadsheet::{cell_text, header_index, normalize_header, read_sheet};
use calamine::{Data, Range};
use plumb_quote_common::{CandidateRow, Category, ColumnMap, Error as CommonError};
use std::path::Path;

/// Posições das colunas já resolvidas
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedColumns {
    description: Vec<usize>,
    labor_price: usize,
    material_price: usize,
    total_price: usize,
    diagnosis: usize,
    solution: usize,
}

/// Carrega as linhas candidatas da categoria
pub fn load_candidates(path: &Path, category: &Category) -> Result<Vec<CandidateRow>> {
    let range = read_sheet(path, &category.sheet)?;
    candidates_from_range(&category.sheet, &range, &category.columns)
}

/// Monta as linhas a partir de uma aba já lida (primeira linha = cabeçalho)
pub fn candidates_from_range(
    sheet: &str,
    range: &Range<Data>,
    columns: &ColumnMap,
) -> Result<Vec<CandidateRow>> {
    let mut rows = range.rows();
    let header = rows.next().unwrap_or(&[]);
    let resolved = resolve_columns(sheet, header, columns)?;

    Ok(rows.filter_map(|row| parse_row(row, &resolved)).collect())
}

fn resolve_columns(sheet: &str, header: &[Data], columns: &ColumnMap) -> Result<ResolvedColumns> {
    let index = header_index(header);
    let mut missing = Vec::new();

    let mut find = |name: &str| -> usize {
        match index.get(&normalize_header(name)) {
            Some(&i) => i,
            None => {
                missing.push(name.to_string());
                usize::MAX
            }
        }
    };

    let description: Vec<usize> = columns.description.iter().map(|c| find(c)).collect();
    let labor_price = find(&columns.labor_price);
    let material_price = find(&columns.material_price);
    let total_price = find(&columns.total_price);
    let diagnosis = find(&columns.diagnosis);
    let solution = find(&columns.solution);

    if !missing.is_empty() {
        return Err(CommonError::SchemaMismatch {
            sheet: sheet.to_string(),
            missing,
        }
        .into());
    }

    Ok(ResolvedColumns {
        description,
        labor_price,
        material_price,
        total_price,
        diagnosis,
        solution,
    })
}

/// Linha sem o campo descritivo principal é descartada
fn parse_row(row: &[Data], columns: &ResolvedColumns) -> Option<CandidateRow> {
    let cell = |i: usize| row.get(i).and_then(cell_text);

    let core = columns.description.first().and_then(|&i| cell(i))?;
    let mut parts = vec![core];
    parts.extend(
        columns
            .description
            .iter()
            .skip(1)
            .map(|&i| cell(i).unwrap_or_default()),
    );

    Some(CandidateRow {
        description: CandidateRow::compose_description(&parts),
        labor_price: cell(columns.labor_price),
        material_price: cell(columns.material_price),
        total_price: cell(columns.total_price),
        diagnosis: cell(columns.diagnosis),
        solution: cell(columns.solution),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlumbQuoteError;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn header() -> Vec<Data> {
        [
            "Código",
            "Serviço",
            "Detalhe",
            "Característica",
            "Ambiente",
            "Mão de Obra",
            "Material",
            "Total",
            "Diagnóstico",
            "Solução",
        ]
        .iter()
        .map(|h| s(h))
        .collect()
    }

    fn range_of(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), value);
            }
        }
        range
    }

    #[test]
    fn test_candidates_from_range() {
        let range = range_of(vec![
            header(),
            vec![
                s("S1"), s("sifão"), s("simples"), s("plástico"), s("banheiro"),
                Data::Float(50.0), Data::Float(30.0), Data::Float(80.0),
                s("vazamento na junta"), s("trocar anel de vedação"),
            ],
        ]);

        let rows = candidates_from_range("Sifao", &range, &ColumnMap::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "sifão simples plástico banheiro");
        assert_eq!(rows[0].total_price.as_deref(), Some("80"));
        assert_eq!(rows[0].labor_price.as_deref(), Some("50"));
        assert_eq!(rows[0].solution.as_deref(), Some("trocar anel de vedação"));
    }

    #[test]
    fn test_rows_without_core_field_are_skipped() {
        let range = range_of(vec![
            header(),
            vec![s("S1"), Data::Empty, s("duplo"), s("metal"), s("cozinha")],
            vec![s("S2"), s("sifão"), Data::Empty, Data::Empty, s("cozinha")],
        ]);

        let rows = candidates_from_range("Sifao", &range, &ColumnMap::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "sifão   cozinha");
        assert_eq!(rows[0].total_price, None);
    }

    #[test]
    fn test_schema_mismatch_lists_missing_columns() {
        let range = range_of(vec![vec![s("Serviço"), s("Detalhe"), s("Total")]]);

        let err = candidates_from_range("Torneiras", &range, &ColumnMap::default()).unwrap_err();
        match err {
            PlumbQuoteError::Common(CommonError::SchemaMismatch { sheet, missing }) => {
                assert_eq!(sheet, "Torneiras");
                assert!(missing.contains(&"Característica".to_string()));
                assert!(missing.contains(&"Solução".to_string()));
                assert!(!missing.contains(&"Total".to_string()));
            }
            other => panic!("erro inesperado: {:?}", other),
        }
    }
}
