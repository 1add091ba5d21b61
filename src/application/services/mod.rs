// src/application/services/mod.rs
use crate::{
    domain::{
        article::{Article, ArticleId, ArticleRepository},
        author::{Author, AuthorId, AuthorRepository},
        errors::{DomainError, DomainResult},
        magazine::{Magazine, MagazineId, MagazineRepository},
    },
    infrastructure::repositories::{
        InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryMagazineRepository,
    },
};

/// Caller-owned registry of authors, magazines and the articles joining them.
///
/// Commands live in `application::commands`, derived views in
/// `application::queries`; both are `impl Catalog` blocks.
pub struct Catalog {
    pub(crate) authors: Box<dyn AuthorRepository>,
    pub(crate) magazines: Box<dyn MagazineRepository>,
    pub(crate) articles: Box<dyn ArticleRepository>,
}

impl Catalog {
    pub fn new(
        authors: Box<dyn AuthorRepository>,
        magazines: Box<dyn MagazineRepository>,
        articles: Box<dyn ArticleRepository>,
    ) -> Self {
        Self {
            authors,
            magazines,
            articles,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryAuthorRepository::new()),
            Box::new(InMemoryMagazineRepository::new()),
            Box::new(InMemoryArticleRepository::new()),
        )
    }

    /// Drops every author, magazine and article. Ids handed out before the
    /// reset are never reissued, so stale ids resolve to `NotFound`.
    pub fn reset(&mut self) {
        self.articles.clear();
        self.magazines.clear();
        self.authors.clear();
        tracing::debug!("catalog reset");
    }

    pub fn author(&self, id: AuthorId) -> DomainResult<&Author> {
        self.authors
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))
    }

    pub fn magazine(&self, id: MagazineId) -> DomainResult<&Magazine> {
        self.magazines
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))
    }

    pub fn article(&self, id: ArticleId) -> DomainResult<&Article> {
        self.articles
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))
    }

    pub fn authors(&self) -> &[Author] {
        self.authors.list()
    }

    /// Every registered magazine, in registration order.
    pub fn all_magazines(&self) -> &[Magazine] {
        self.magazines.list()
    }

    /// Every registered article, in registration order.
    pub fn all_articles(&self) -> &[Article] {
        self.articles.list()
    }

    pub(crate) fn ensure_author(&self, id: AuthorId) -> DomainResult<()> {
        if self.authors.contains(id) {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "{id} is not a registered author"
            )))
        }
    }

    pub(crate) fn ensure_magazine(&self, id: MagazineId) -> DomainResult<()> {
        if self.magazines.contains(id) {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "{id} is not a registered magazine"
            )))
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("authors", &self.authors.list().len())
            .field("magazines", &self.magazines.list().len())
            .field("articles", &self.articles.list().len())
            .finish()
    }
}
