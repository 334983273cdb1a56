//! Mensagens de erro

use plumb_quote::error::PlumbQuoteError;
use plumb_quote::spreadsheet::read_sheet;
use plumb_quote_common::Error as CommonError;
use std::path::Path;

#[test]
fn test_read_sheet_missing_file() {
    let err = read_sheet(Path::new("/nonexistent/path/precos.xlsx"), "Sifao").unwrap_err();
    assert!(matches!(err, PlumbQuoteError::FileNotFound(_)));
}

#[test]
fn test_error_display() {
    let errors = vec![
        PlumbQuoteError::Config("teste".to_string()),
        PlumbQuoteError::FileNotFound("precos.xlsx".to_string()),
        PlumbQuoteError::SheetNotFound {
            path: "precos.xlsx".to_string(),
            sheet: "Sifao".to_string(),
        },
        PlumbQuoteError::InvalidUpload("vazio".to_string()),
        PlumbQuoteError::Validation("nome é obrigatório".to_string()),
    ];

    for err in errors {
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn test_sheet_not_found_message() {
    let err = PlumbQuoteError::SheetNotFound {
        path: "precos.xlsx".to_string(),
        sheet: "Sifao".to_string(),
    };
    assert_eq!(err.to_string(), "Aba 'Sifao' não encontrada em precos.xlsx");
}

#[test]
fn test_common_error_is_transparent() {
    let err: PlumbQuoteError = CommonError::UnknownCategory("telhado".to_string()).into();
    assert_eq!(
        err.to_string(),
        CommonError::UnknownCategory("telhado".to_string()).to_string()
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "negado");
    let err: PlumbQuoteError = io.into();
    assert!(matches!(err, PlumbQuoteError::Io(_)));
}
