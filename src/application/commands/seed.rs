// src/application/commands/seed.rs
use crate::{
    application::{dto::CatalogSeed, services::Catalog},
    domain::{
        article::{ArticleTitle, NewArticle},
        author::{AuthorId, AuthorName, NewAuthor},
        errors::{DomainError, DomainResult},
        magazine::{MagazineCategory, MagazineId, MagazineName, NewMagazine},
    },
};

/// Where a seed article's reference points before anything is inserted.
#[derive(Debug, Clone, Copy)]
enum SeedRef<Id> {
    Registered(Id),
    Seeded(usize),
}

impl<Id: Copy> SeedRef<Id> {
    fn resolve(self, inserted: &[Id]) -> Id {
        match self {
            Self::Registered(id) => id,
            Self::Seeded(index) => inserted[index],
        }
    }
}

impl Catalog {
    /// Builds a fresh in-memory catalog from seed data.
    pub fn from_seed(seed: CatalogSeed) -> DomainResult<Self> {
        let mut catalog = Self::in_memory();
        catalog.load_seed(seed)?;
        Ok(catalog)
    }

    /// Names in article entries resolve to the first author or magazine
    /// registered under that name, already-registered entries first.
    ///
    /// Every entry is validated before the first insert, so on error the
    /// catalog is left exactly as it was.
    pub fn load_seed(&mut self, seed: CatalogSeed) -> DomainResult<()> {
        let authors = seed
            .authors
            .into_iter()
            .map(AuthorName::new)
            .collect::<DomainResult<Vec<_>>>()?;
        let magazines = seed
            .magazines
            .into_iter()
            .map(|magazine| -> DomainResult<(MagazineName, MagazineCategory)> {
                Ok((
                    MagazineName::new(magazine.name)?,
                    MagazineCategory::new(magazine.category)?,
                ))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let mut articles = Vec::with_capacity(seed.articles.len());
        for article in seed.articles {
            let author = self.resolve_seed_author(&article.author, &authors)?;
            let magazine = self.resolve_seed_magazine(&article.magazine, &magazines)?;
            articles.push((author, magazine, ArticleTitle::new(article.title)?));
        }

        let author_ids: Vec<AuthorId> = authors
            .into_iter()
            .map(|name| self.authors.insert(NewAuthor::new(name)).id())
            .collect();
        let magazine_ids: Vec<MagazineId> = magazines
            .into_iter()
            .map(|(name, category)| {
                self.magazines
                    .insert(NewMagazine::new(name, category))
                    .id()
            })
            .collect();
        for (author, magazine, title) in articles {
            self.articles.insert(NewArticle::new(
                author.resolve(&author_ids),
                magazine.resolve(&magazine_ids),
                title,
            ));
        }

        tracing::info!(
            authors = self.authors().len(),
            magazines = self.all_magazines().len(),
            articles = self.all_articles().len(),
            "catalog seeded"
        );
        Ok(())
    }

    fn resolve_seed_author(
        &self,
        name: &str,
        seeded: &[AuthorName],
    ) -> DomainResult<SeedRef<AuthorId>> {
        if let Some(author) = self.authors().iter().find(|a| a.name().as_str() == name) {
            return Ok(SeedRef::Registered(author.id()));
        }
        seeded
            .iter()
            .position(|seeded| seeded.as_str() == name)
            .map(SeedRef::Seeded)
            .ok_or_else(|| DomainError::validation(format!("unknown author '{name}'")))
    }

    fn resolve_seed_magazine(
        &self,
        name: &str,
        seeded: &[(MagazineName, MagazineCategory)],
    ) -> DomainResult<SeedRef<MagazineId>> {
        if let Some(magazine) = self
            .all_magazines()
            .iter()
            .find(|m| m.name().as_str() == name)
        {
            return Ok(SeedRef::Registered(magazine.id()));
        }
        seeded
            .iter()
            .position(|(seeded, _)| seeded.as_str() == name)
            .map(SeedRef::Seeded)
            .ok_or_else(|| DomainError::validation(format!("unknown magazine '{name}'")))
    }
}
