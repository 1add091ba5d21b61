// src/application/dto/seed.rs
use serde::Deserialize;

/// Catalog contents as loaded from JSON. Articles point at authors and
/// magazines by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub magazines: Vec<MagazineSeed>,
    #[serde(default)]
    pub articles: Vec<ArticleSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MagazineSeed {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSeed {
    pub author: String,
    pub magazine: String,
    pub title: String,
}
