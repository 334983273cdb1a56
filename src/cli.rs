use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plumb-quote")]
#[command(about = "Orçamento de serviços hidráulicos e cadastro de contatos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detalhado
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lista as categorias e suas perguntas
    Categories,

    /// Calcula um orçamento
    Quote {
        /// Id da categoria (com -i, pode ser escolhida na hora)
        #[arg(short, long)]
        category: Option<String>,

        /// Descrição do serviço
        #[arg(short, long, default_value = "")]
        service: String,

        /// Resposta no formato id=valor (pode repetir)
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,

        /// Planilha de preços (padrão: configuração)
        #[arg(long)]
        table: Option<PathBuf>,

        /// Pergunta interativamente o que faltar
        #[arg(short, long)]
        interactive: bool,
    },

    /// Contatos recebidos
    Lead {
        #[command(subcommand)]
        action: LeadAction,
    },

    /// Sobe o servidor HTTP
    Serve {
        /// Endereço de escuta (padrão: configuração)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Mostra/edita a configuração
    Config {
        #[arg(long)]
        show: bool,

        #[arg(long)]
        set_price_table: Option<PathBuf>,

        #[arg(long)]
        set_leads_file: Option<PathBuf>,

        #[arg(long)]
        set_upload_dir: Option<PathBuf>,

        /// Catálogo JSON de categorias
        #[arg(long)]
        set_catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LeadAction {
    /// Registra um contato
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        address: String,

        /// Id da categoria
        #[arg(short, long, default_value = "")]
        category: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Foto do problema
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Lista os contatos
    List,
}

/// `id=valor` → (id, valor)
pub fn parse_answer(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("Resposta inválida: {}. Use id=valor", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer("tipo=banheiro").unwrap(),
            ("tipo".to_string(), "banheiro".to_string())
        );
        assert_eq!(
            parse_answer("localizacao = cano PVC = 40mm").unwrap(),
            ("localizacao".to_string(), "cano PVC = 40mm".to_string())
        );
        assert!(parse_answer("sem_igual").is_err());
        assert!(parse_answer("=valor").is_err());
    }

    #[test]
    fn test_parse_quote_command() {
        let cli = Cli::try_parse_from([
            "plumb-quote",
            "quote",
            "-c",
            "entupimento_esgoto",
            "-s",
            "ralo",
            "-a",
            "localizacao=banheiro",
            "-a",
            "grau_entupimento=total",
        ])
        .unwrap();

        match cli.command {
            Commands::Quote { category, answers, interactive, .. } => {
                assert_eq!(category.as_deref(), Some("entupimento_esgoto"));
                assert_eq!(answers.len(), 2);
                assert_eq!(answers[1].1, "total");
                assert!(!interactive);
            }
            _ => panic!("subcomando inesperado"),
        }
    }
}
