//! Cadastro de contatos (leads)
//!
//! Os contatos ficam numa planilha de uma aba só (`Leads`). Como o xlsx não
//! permite acrescentar linhas no lugar, cada inclusão lê as linhas atuais e
//! regrava o arquivo inteiro (arquivo temporário + rename). Inclusões
//! concorrentes são serializadas pelo mutex do `LeadBook`.

mod exif;
pub mod photo;

pub use photo::{sanitize_file_name, store_photo, StoredPhoto};

use crate::error::{PlumbQuoteError, Result};
use crate::spreadsheet::{cell_text, header_index, normalize_header, read_sheet};
use plumb_quote_common::Catalog;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const LEADS_SHEET: &str = "Leads";

/// Cabeçalho da planilha, na ordem das colunas
const HEADERS: [&str; 9] = [
    "Recebido em",
    "Nome",
    "Telefone",
    "E-mail",
    "Endereço",
    "Categoria",
    "Descrição",
    "Foto",
    "Data da foto",
];

/// Dados enviados pelo formulário de contato
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub descricao: String,
}

impl LeadForm {
    /// Preenche um campo pelo nome do formulário; nomes desconhecidos são ignorados
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "nome" => &mut self.nome,
            "telefone" => &mut self.telefone,
            "email" => &mut self.email,
            "endereco" => &mut self.endereco,
            "categoria" => &mut self.categoria,
            "descricao" => &mut self.descricao,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Nome e telefone obrigatórios; categoria, se informada, deve existir
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(PlumbQuoteError::Validation("nome é obrigatório".into()));
        }
        if self.telefone.trim().is_empty() {
            return Err(PlumbQuoteError::Validation("telefone é obrigatório".into()));
        }
        let categoria = self.categoria.trim();
        if !categoria.is_empty() {
            catalog.require(categoria)?;
        }
        Ok(())
    }

    /// Converte em registro, com data/hora atual
    pub fn into_lead(self, photo: Option<&StoredPhoto>) -> Lead {
        Lead {
            received_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            name: self.nome.trim().to_string(),
            phone: self.telefone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.endereco.trim().to_string(),
            category: self.categoria.trim().to_string(),
            description: self.descricao.trim().to_string(),
            photo_file: photo.map(|p| p.file_name.clone()).unwrap_or_default(),
            photo_date: photo.and_then(|p| p.taken_at.clone()).unwrap_or_default(),
        }
    }
}

/// Registro de contato
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub received_at: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo_file: String,
    #[serde(default)]
    pub photo_date: String,
}

impl Lead {
    fn to_row(&self) -> [&str; 9] {
        [
            &self.received_at,
            &self.name,
            &self.phone,
            &self.email,
            &self.address,
            &self.category,
            &self.description,
            &self.photo_file,
            &self.photo_date,
        ]
    }

    fn from_row(values: [String; 9]) -> Self {
        let [
            received_at,
            name,
            phone,
            email,
            address,
            category,
            description,
            photo_file,
            photo_date,
        ] = values;
        Self {
            received_at,
            name,
            phone,
            email,
            address,
            category,
            description,
            photo_file,
            photo_date,
        }
    }
}

/// Contato registrado, com o total da planilha e a foto gravada
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub lead: Lead,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<StoredPhoto>,
}

/// Grava a foto (se houver) e registra o contato
///
/// Se o registro falhar, a foto recém-gravada é apagada.
pub fn submit(
    book: &LeadBook,
    upload_dir: &Path,
    form: LeadForm,
    upload: Option<(&str, &[u8])>,
) -> Result<Submission> {
    let photo = match upload {
        Some((file_name, bytes)) => Some(store_photo(upload_dir, file_name, bytes)?),
        None => None,
    };

    let lead = form.into_lead(photo.as_ref());
    match book.append(lead.clone()) {
        Ok(total) => Ok(Submission { lead, total, photo }),
        Err(e) => {
            if let Some(photo) = &photo {
                discard_photo(photo);
            }
            Err(e)
        }
    }
}

fn discard_photo(photo: &StoredPhoto) {
    if let Err(e) = std::fs::remove_file(&photo.path) {
        tracing::warn!(path = %photo.path.display(), "falha ao apagar foto órfã: {}", e);
    }
}

/// Planilha de contatos
#[derive(Debug)]
pub struct LeadBook {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LeadBook {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Todos os contatos (vazio se a planilha ainda não existe)
    pub fn list(&self) -> Result<Vec<Lead>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let range = read_sheet(&self.path, LEADS_SHEET)?;
        let mut rows = range.rows();
        let index = header_index(rows.next().unwrap_or(&[]));
        let positions: Vec<Option<usize>> = HEADERS
            .iter()
            .map(|h| index.get(&normalize_header(h)).copied())
            .collect();

        let leads = rows
            .filter_map(|row| {
                let values: [String; 9] = std::array::from_fn(|i| {
                    positions[i]
                        .and_then(|p| row.get(p))
                        .and_then(cell_text)
                        .unwrap_or_default()
                });
                if values.iter().all(String::is_empty) {
                    None
                } else {
                    Some(Lead::from_row(values))
                }
            })
            .collect();

        Ok(leads)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Acrescenta um contato preservando os anteriores; devolve o total
    pub fn append(&self, lead: Lead) -> Result<usize> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut leads = self.list()?;
        leads.push(lead);
        self.write_all(&leads)?;

        tracing::info!(path = %self.path.display(), total = leads.len(), "contato registrado");
        Ok(leads.len())
    }

    fn write_all(&self, leads: &[Lead]) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(LEADS_SHEET)?;

        for (col, title) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
            worksheet.set_column_width(col as u16, 20)?;
        }

        for (i, lead) in leads.iter().enumerate() {
            let row = i as u32 + 1;
            for (col, value) in lead.to_row().iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(row, col as u16, *value)?;
                }
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("xlsx.tmp");
        workbook.save(&tmp_path)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nome: &str, telefone: &str, categoria: &str) -> LeadForm {
        LeadForm {
            nome: nome.to_string(),
            telefone: telefone.to_string(),
            categoria: categoria.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_requires_name_and_phone() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            form("", "1199999", "").validate(&catalog),
            Err(PlumbQuoteError::Validation(_))
        ));
        assert!(matches!(
            form("Ana", "  ", "").validate(&catalog),
            Err(PlumbQuoteError::Validation(_))
        ));
        assert!(form("Ana", "1199999", "entupimento_esgoto").validate(&catalog).is_ok());
    }

    #[test]
    fn test_set_field() {
        let mut form = LeadForm::default();
        assert!(form.set_field("nome", "Ana".to_string()));
        assert!(form.set_field("descricao", "pia vazando".to_string()));
        assert!(!form.set_field("senha", "x".to_string()));
        assert_eq!(form.nome, "Ana");
        assert_eq!(form.descricao, "pia vazando");
    }

    #[test]
    fn test_validate_unknown_category() {
        let catalog = Catalog::builtin();
        let err = form("Ana", "1199999", "telhado").validate(&catalog).unwrap_err();
        assert!(matches!(
            err,
            PlumbQuoteError::Common(plumb_quote_common::Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_into_lead_trims_and_keeps_photo() {
        let photo = StoredPhoto {
            file_name: "20260101-120000_abc_pia.png".to_string(),
            path: PathBuf::from("fotos/20260101-120000_abc_pia.png"),
            sha256: "abc".to_string(),
            width: 1,
            height: 1,
            taken_at: Some("2025-12-31 10:00:00".to_string()),
        };

        let lead = form(" Ana ", "1199999", "entupimento_esgoto").into_lead(Some(&photo));
        assert_eq!(lead.name, "Ana");
        assert_eq!(lead.photo_file, "20260101-120000_abc_pia.png");
        assert_eq!(lead.photo_date, "2025-12-31 10:00:00");
        assert!(!lead.received_at.is_empty());
    }

    #[test]
    fn test_list_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let book = LeadBook::open(dir.path().join("leads.xlsx"));
        assert!(book.list().unwrap().is_empty());
        assert!(book.is_empty().unwrap());
    }
}
