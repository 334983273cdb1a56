//! plumb-quote: orçamento de serviços hidráulicos por semelhança de texto
//! e cadastro de contatos com foto.

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod leads;
pub mod logging;
pub mod pricing;
pub mod quote;
pub mod server;
pub mod spreadsheet;
