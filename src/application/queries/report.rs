// src/application/queries/report.rs
use crate::{
    application::{
        dto::{AuthorReport, CatalogReport, MagazineReport},
        services::Catalog,
    },
    domain::errors::DomainResult,
};

fn to_strings<T: ToString, I: IntoIterator<Item = T>>(items: I) -> Vec<String> {
    items.into_iter().map(|item| item.to_string()).collect()
}

impl Catalog {
    /// Snapshot of every derived view, one entry per magazine and author in
    /// registration order.
    pub fn report(&self) -> DomainResult<CatalogReport> {
        let magazines = self
            .all_magazines()
            .iter()
            .map(|magazine| -> DomainResult<MagazineReport> {
                let id = magazine.id();
                Ok(MagazineReport {
                    id: id.into(),
                    name: magazine.name().to_string(),
                    category: magazine.category().to_string(),
                    article_titles: self.article_titles(id)?.map(to_strings),
                    contributors: to_strings(
                        self.contributors(id)?.into_iter().map(|author| author.name()),
                    ),
                    contributing_authors: self
                        .contributing_authors(id)?
                        .map(|authors| to_strings(authors.into_iter().map(|a| a.name()))),
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let authors = self
            .authors()
            .iter()
            .map(|author| -> DomainResult<AuthorReport> {
                let id = author.id();
                Ok(AuthorReport {
                    id: id.into(),
                    name: author.name().to_string(),
                    magazines: to_strings(
                        self.author_magazines(id)?.into_iter().map(|m| m.name()),
                    ),
                    topic_areas: self.topic_areas(id)?.map(to_strings),
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(CatalogReport {
            top_publisher: self.top_publisher().map(|magazine| magazine.name().to_string()),
            magazines,
            authors,
        })
    }
}
