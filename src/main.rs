use anyhow::Context;
use clap::Parser;
use portico::controllers::register_all;
use portico::{AppService, Dispatcher, HttpServer, MemoryAccountStore, StaticFiles};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portico", about = "A small path-routed HTTP server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: String,
    /// Directory served for unrouted GET requests
    #[arg(long, default_value = "static_site")]
    static_dir: PathBuf,
    /// Directory view templates are rendered from
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let store = Arc::new(MemoryAccountStore::new());
    let mut dispatcher = Dispatcher::new();
    register_all(&mut dispatcher, store);

    let service = AppService::new(Arc::new(dispatcher))
        .with_static_files(StaticFiles::new(&args.static_dir))
        .with_templates(StaticFiles::new(&args.templates_dir));

    info!(addr = %args.addr, "server listening");
    let handle = HttpServer(service)
        .start(&args.addr)
        .with_context(|| format!("failed to bind {}", args.addr))?;
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))?;
    Ok(())
}
