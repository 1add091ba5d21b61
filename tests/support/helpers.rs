// tests/support/helpers.rs
use once_cell::sync::Lazy;

use masthead::domain::author::Author;
use masthead::domain::magazine::Magazine;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("masthead=debug"))
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn author_names(authors: &[&Author]) -> Vec<String> {
    authors.iter().map(|a| a.name().to_string()).collect()
}

pub fn magazine_names(magazines: &[&Magazine]) -> Vec<String> {
    magazines.iter().map(|m| m.name().to_string()).collect()
}
