//! Armazenamento das fotos enviadas
//!
//! O conteúdo é validado como imagem (JPEG, PNG, GIF ou WebP) e gravado com
//! um nome único: `<data-hora>_<sha256>_<nome original saneado>.<ext>`.

use super::exif;
use crate::error::{PlumbQuoteError, Result};
use image::{ImageFormat, ImageReader};
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

const MAX_STEM_CHARS: usize = 40;
const HASH_PREFIX_CHARS: usize = 12;

lazy_static::lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
}

/// Foto gravada no diretório de uploads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPhoto {
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub sha256: String,
    pub width: u32,
    pub height: u32,
    /// Data de captura (EXIF)
    pub taken_at: Option<String>,
}

/// Saneia um nome de arquivo enviado pelo cliente
///
/// Mantém só o último componente do caminho; caracteres fora de
/// `A-Z a-z 0-9 . _ -` viram `_`. Nunca devolve vazio.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(&['/', '\\'][..]).next().unwrap_or("");
    let replaced = UNSAFE_CHARS.replace_all(base, "_");
    let trimmed = replaced.trim_matches(|c: char| c == '.' || c == '_');

    if trimmed.is_empty() {
        "foto".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Valida e grava a foto em `upload_dir`
pub fn store_photo(upload_dir: &Path, original_name: &str, bytes: &[u8]) -> Result<StoredPhoto> {
    if bytes.is_empty() {
        return Err(PlumbQuoteError::InvalidUpload("arquivo vazio".into()));
    }

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = match reader.format() {
        Some(f) if ACCEPTED_FORMATS.contains(&f) => f,
        Some(f) => {
            return Err(PlumbQuoteError::InvalidUpload(format!(
                "formato não aceito: {:?}",
                f
            )))
        }
        None => {
            return Err(PlumbQuoteError::InvalidUpload(
                "o arquivo não é uma imagem".into(),
            ))
        }
    };
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| PlumbQuoteError::InvalidUpload(format!("imagem corrompida: {}", e)))?;

    let sha256 = hex::encode(Sha256::digest(bytes));
    let file_name = stored_file_name(original_name, &sha256, format);

    std::fs::create_dir_all(upload_dir)?;
    let path = upload_dir.join(&file_name);
    std::fs::write(&path, bytes)?;

    tracing::info!(file = %file_name, width, height, "foto armazenada");

    Ok(StoredPhoto {
        file_name,
        path,
        sha256,
        width,
        height,
        taken_at: exif::extract_date(bytes),
    })
}

fn stored_file_name(original_name: &str, sha256: &str, format: ImageFormat) -> String {
    let sanitized = sanitize_file_name(original_name);
    let stem = Path::new(&sanitized)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "foto".to_string());
    let stem: String = stem.chars().take(MAX_STEM_CHARS).collect();

    let extension = format.extensions_str().first().copied().unwrap_or("img");
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");

    format!(
        "{}_{}_{}.{}",
        stamp,
        &sha256[..HASH_PREFIX_CHARS],
        stem,
        extension
    )
}
