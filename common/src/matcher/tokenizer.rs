//! Tokenização para o espaço TF-IDF
//!
//! Minúsculas + sequências de 2 ou mais caracteres de palavra (Unicode).
//! Tokens de um único caractere são descartados.

use regex::Regex;

lazy_static::lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Divide o texto em tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_keeps_accents() {
        assert_eq!(tokenize("Sifão PLÁSTICO"), vec!["sifão", "plástico"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars_and_punctuation() {
        assert_eq!(tokenize("a torneira, e o cano-PVC!"), vec!["torneira", "cano", "pvc"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("cano 40mm x 1"), vec!["cano", "40mm"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
