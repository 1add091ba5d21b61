// src/application/queries/authors.rs
use super::unique_first_seen;
use crate::{
    application::services::Catalog,
    domain::{
        article::Article,
        author::AuthorId,
        errors::DomainResult,
        magazine::{Magazine, MagazineCategory},
    },
};

impl Catalog {
    /// Articles written by the author, in registry order.
    pub fn author_articles(&self, id: AuthorId) -> DomainResult<Vec<&Article>> {
        self.author(id)?;
        Ok(self
            .articles
            .list()
            .iter()
            .filter(|article| article.author_id() == id)
            .collect())
    }

    /// Distinct magazines the author has written for, first-seen first.
    pub fn author_magazines(&self, id: AuthorId) -> DomainResult<Vec<&Magazine>> {
        let articles = self.author_articles(id)?;
        let ids = unique_first_seen(articles.iter().map(|article| article.magazine_id()));
        Ok(ids
            .into_iter()
            .filter_map(|magazine_id| self.magazines.find_by_id(magazine_id))
            .collect())
    }

    /// Distinct categories of the author's magazines, or `None` when the
    /// author has no articles.
    pub fn topic_areas(&self, id: AuthorId) -> DomainResult<Option<Vec<&MagazineCategory>>> {
        let articles = self.author_articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        let categories = articles
            .iter()
            .filter_map(|article| self.magazines.find_by_id(article.magazine_id()))
            .map(Magazine::category);
        Ok(Some(unique_first_seen(categories)))
    }
}
