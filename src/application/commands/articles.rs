// src/application/commands/articles.rs
use crate::{
    application::services::Catalog,
    domain::{
        article::{Article, ArticleId, ArticleTitle, NewArticle},
        author::AuthorId,
        errors::{DomainError, DomainResult},
        magazine::MagazineId,
    },
};

impl Catalog {
    /// Registers a new article. Nothing is appended when any argument fails
    /// validation.
    pub fn create_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<Article> {
        self.ensure_author(author_id)?;
        self.ensure_magazine(magazine_id)?;
        let title = ArticleTitle::new(title)?;

        let article = self
            .articles
            .insert(NewArticle::new(author_id, magazine_id, title));
        tracing::debug!(
            article = %article.id(),
            author = %author_id,
            magazine = %magazine_id,
            "article created"
        );
        Ok(article)
    }

    /// Article by `author_id` for `magazine_id`; same checks as
    /// [`Catalog::create_article`].
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<Article> {
        self.create_article(author_id, magazine_id, title)
    }

    /// Always `Ok(false)` for a registered article: titles never change.
    pub fn retitle_article(
        &mut self,
        id: ArticleId,
        title: impl Into<String>,
    ) -> DomainResult<bool> {
        Ok(self.article_mut(id)?.retitle(title))
    }

    pub fn reassign_author(&mut self, id: ArticleId, author_id: AuthorId) -> DomainResult<()> {
        self.ensure_author(author_id)?;
        self.article_mut(id)?.set_author(author_id);
        tracing::debug!(article = %id, author = %author_id, "article author reassigned");
        Ok(())
    }

    pub fn reassign_magazine(
        &mut self,
        id: ArticleId,
        magazine_id: MagazineId,
    ) -> DomainResult<()> {
        self.ensure_magazine(magazine_id)?;
        self.article_mut(id)?.set_magazine(magazine_id);
        tracing::debug!(article = %id, magazine = %magazine_id, "article magazine reassigned");
        Ok(())
    }

    fn article_mut(&mut self, id: ArticleId) -> DomainResult<&mut Article> {
        self.articles
            .find_by_id_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))
    }
}
