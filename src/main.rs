use anyhow::{Context, Result};
use masthead::{
    Catalog,
    application::dto::CatalogSeed,
    config::AppConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let raw = std::fs::read_to_string(config.seed_path())
        .with_context(|| format!("reading seed file {}", config.seed_path().display()))?;
    let seed: CatalogSeed = serde_json::from_str(&raw).context("parsing seed file")?;
    let catalog = Catalog::from_seed(seed)?;
    tracing::debug!(?catalog, "catalog loaded");

    let report = catalog.report()?;
    let rendered = if config.pretty() {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
