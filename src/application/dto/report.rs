// src/application/dto/report.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub top_publisher: Option<String>,
    pub magazines: Vec<MagazineReport>,
    pub authors: Vec<AuthorReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineReport {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    pub contributors: Vec<String>,
    pub contributing_authors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorReport {
    pub id: i64,
    pub name: String,
    pub magazines: Vec<String>,
    pub topic_areas: Option<Vec<String>>,
}
