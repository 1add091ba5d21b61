// src/application/queries/magazines.rs
use super::{count_first_seen, unique_first_seen};
use crate::{
    application::services::Catalog,
    domain::{
        article::{Article, ArticleTitle},
        author::Author,
        errors::DomainResult,
        magazine::{Magazine, MagazineId},
    },
};

/// An author must have strictly more articles than this in one magazine to
/// count as a contributing author of it.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

impl Catalog {
    /// Articles published by the magazine, in registry order.
    pub fn magazine_articles(&self, id: MagazineId) -> DomainResult<Vec<&Article>> {
        self.magazine(id)?;
        Ok(self
            .articles
            .list()
            .iter()
            .filter(|article| article.magazine_id() == id)
            .collect())
    }

    pub fn contributors(&self, id: MagazineId) -> DomainResult<Vec<&Author>> {
        let articles = self.magazine_articles(id)?;
        let ids = unique_first_seen(articles.iter().map(|article| article.author_id()));
        Ok(ids
            .into_iter()
            .filter_map(|author_id| self.authors.find_by_id(author_id))
            .collect())
    }

    pub fn article_titles(&self, id: MagazineId) -> DomainResult<Option<Vec<&ArticleTitle>>> {
        let articles = self.magazine_articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(articles.into_iter().map(Article::title).collect()))
    }

    /// Authors with more than [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in
    /// this magazine, in first-seen order, or `None` when there are none.
    pub fn contributing_authors(&self, id: MagazineId) -> DomainResult<Option<Vec<&Author>>> {
        let articles = self.magazine_articles(id)?;
        let authors: Vec<&Author> =
            count_first_seen(articles.iter().map(|article| article.author_id()))
                .into_iter()
                .filter(|&(_, count)| count > CONTRIBUTING_AUTHOR_THRESHOLD)
                .filter_map(|(author_id, _)| self.authors.find_by_id(author_id))
                .collect();
        Ok(if authors.is_empty() { None } else { Some(authors) })
    }

    /// Magazine carrying the most articles across the whole registry, or
    /// `None` when no article exists. Ties go to the magazine whose first
    /// article was registered earliest.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let counts = count_first_seen(
            self.articles
                .list()
                .iter()
                .map(|article| article.magazine_id()),
        );

        let mut best: Option<(MagazineId, usize)> = None;
        for (magazine_id, count) in counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((magazine_id, count));
            }
        }
        best.and_then(|(magazine_id, _)| self.magazines.find_by_id(magazine_id))
    }
}
