mod cli;
mod config;
mod page_file;
mod shell;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use atelier_bridge::{global, links, CommandFacade, ConsoleBridge};
use atelier_console::ControllerResolver;

fn main() {
    let args = cli::parse();

    // Initialize logging before anything that might want to report
    let config = config::load(args.config.as_deref().map(Path::new));
    let directive = args
        .log_level
        .as_deref()
        .map(|level| format!("atelier={level}"))
        .or_else(|| config.as_ref().ok().map(|c| c.log.directive.clone()))
        .unwrap_or_else(|| "atelier=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "atelier=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("atelier v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        config::AtelierConfig::default()
    });

    // No parent context on a plain command line: standalone mode.
    let resolver = ControllerResolver::standalone();
    let facade = Arc::new(CommandFacade::new(&resolver, config.exposure));
    let bridge = Arc::new(ConsoleBridge::new(facade));
    global::install(Arc::clone(&bridge));

    let page_path = args.page.or_else(|| config.page.path.clone());
    let mut page = match &page_path {
        Some(path) => match page_file::load_page(Path::new(path)) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("page load failed, using sample page: {e}");
                page_file::sample_page()
            }
        },
        None => page_file::sample_page(),
    };

    if let Some(hostname) = &config.page.hostname {
        let tagged = links::tag_external_links(&mut page, hostname);
        tracing::info!(tagged, "external links tagged");
    }

    let registered = bridge.register_page(&page);
    tracing::info!(registered, actions = bridge.action_count(), "page registered");

    if let Err(e) = shell::run(&bridge, &mut page) {
        tracing::error!("shell error: {e}");
    }
    tracing::info!("shutdown complete");
}
