use anyhow::Context;
use clap::Parser;
use plumb_quote::{cli, config, error, interactive, leads, logging, quote, server};
use cli::{Cli, Commands, LeadAction};
use config::Config;
use leads::{LeadBook, LeadForm};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Categories => {
            let catalog = config.load_catalog()?;
            println!("🔧 plumb-quote - categorias\n");

            for category in catalog.categories() {
                println!("{} ({})", category.display_label(), category.id);
                println!("  aba: {}", category.sheet);
                for question in &category.questions {
                    println!("  - {}: {}", question.id, question.label);
                }
                println!();
            }
        }

        Commands::Quote { category, service, answers, table, interactive: ask } => {
            let catalog = config.load_catalog()?;
            let price_table = table.unwrap_or_else(|| config.price_table.clone());

            let category_id = match category {
                Some(id) => id,
                None if ask => interactive::select_category(&catalog)?,
                None => {
                    return Err(error::PlumbQuoteError::Validation(
                        "informe a categoria (-c) ou use -i".into(),
                    )
                    .into())
                }
            };

            let mut request = quote::QuoteRequest {
                servico: service,
                respostas: answers.into_iter().collect::<HashMap<_, _>>(),
            };

            if ask {
                let selected = catalog.require(&category_id)?;
                request.servico = interactive::prompt_service(&request.servico)?;
                interactive::prompt_answers(selected, &mut request.respostas)?;
            }

            let matched = quote::quote(&price_table, &catalog, &category_id, &request)?;
            let result = &matched.result;

            println!("\n💰 Orçamento\n");
            println!("  Preço total:     {}", result.total_price);
            println!("  Mão de obra:     {}", result.labor_price);
            println!("  Material:        {}", result.material_price);
            println!("  Diagnóstico:     {}", result.diagnosis);
            println!("  Solução:         {}", result.solution);

            if cli.verbose {
                println!("\n  linha {} (similaridade {:.3})", matched.row, matched.score);
            }
        }

        Commands::Lead { action } => {
            let book = LeadBook::open(&config.leads_file);

            match action {
                LeadAction::Add { name, phone, email, address, category, description, photo } => {
                    let catalog = config.load_catalog()?;
                    let form = LeadForm {
                        nome: name,
                        telefone: phone,
                        email,
                        endereco: address,
                        categoria: category,
                        descricao: description,
                    };
                    form.validate(&catalog)?;

                    let upload = match photo {
                        Some(path) => {
                            let bytes = std::fs::read(&path)
                                .with_context(|| format!("falha ao ler {}", path.display()))?;
                            let original = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_default();
                            Some((original, bytes))
                        }
                        None => None,
                    };

                    let submission = leads::submit(
                        &book,
                        &config.upload_dir,
                        form,
                        upload.as_ref().map(|(name, bytes)| (name.as_str(), bytes.as_slice())),
                    )?;
                    if let Some(stored) = &submission.photo {
                        println!("✔ Foto gravada: {}", stored.path.display());
                    }
                    println!(
                        "✔ Contato registrado ({} no total): {}",
                        submission.total,
                        book.path().display()
                    );
                }

                LeadAction::List => {
                    let list = book.list()?;
                    if list.is_empty() {
                        println!("Nenhum contato em {}", book.path().display());
                    }
                    for lead in list {
                        println!(
                            "{}  {}  {}  {}  {}",
                            lead.received_at, lead.name, lead.phone, lead.category, lead.photo_file
                        );
                    }
                }
            }
        }

        Commands::Serve { bind } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            server::serve(config).await?;
        }

        Commands::Config { show, set_price_table, set_leads_file, set_upload_dir, set_catalog } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_price_table {
                config.price_table = path;
                changed = true;
            }
            if let Some(path) = set_leads_file {
                config.leads_file = path;
                changed = true;
            }
            if let Some(path) = set_upload_dir {
                config.upload_dir = path;
                changed = true;
            }
            if let Some(path) = set_catalog {
                config.catalog_file = Some(path);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Configuração salva: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuração:");
                println!("  Planilha de preços: {}", config.price_table.display());
                println!("  Planilha de contatos: {}", config.leads_file.display());
                println!("  Pasta de fotos: {}", config.upload_dir.display());
                match &config.catalog_file {
                    Some(path) => println!("  Catálogo: {}", path.display()),
                    None => println!("  Catálogo: embutido"),
                }
                println!("  Endereço: {}", config.bind_address);
                println!("  Upload máximo: {} bytes", config.max_upload_bytes);
            }
        }
    }

    Ok(())
}
