//! Inicialização do tracing
//!
//! Respeita `RUST_LOG`; sem ele, `-v` liga o nível debug deste crate.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default = if verbose {
        "info,plumb_quote=debug,plumb_quote_common=debug,tower_http=debug"
    } else {
        "warn,plumb_quote=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: testes podem inicializar mais de uma vez
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
