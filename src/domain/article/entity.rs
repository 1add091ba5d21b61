// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::AuthorId;
use crate::domain::magazine::MagazineId;

/// One contribution of an author to a magazine.
///
/// The author and magazine references can be moved through the catalog,
/// which checks that the target is registered; the title never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub(crate) id: ArticleId,
    pub(crate) author_id: AuthorId,
    pub(crate) magazine_id: MagazineId,
    pub(crate) title: ArticleTitle,
}

impl Article {
    pub const fn id(&self) -> ArticleId {
        self.id
    }

    pub const fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub const fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub const fn title(&self) -> &ArticleTitle {
        &self.title
    }

    /// Titles are fixed at construction; the value is always discarded.
    pub fn retitle(&mut self, _title: impl Into<String>) -> bool {
        tracing::debug!(article = %self.id, "article retitle ignored");
        false
    }

    pub(crate) const fn set_author(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    pub(crate) const fn set_magazine(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: AuthorId,
    pub magazine_id: MagazineId,
    pub title: ArticleTitle,
}

impl NewArticle {
    pub const fn new(author_id: AuthorId, magazine_id: MagazineId, title: ArticleTitle) -> Self {
        Self {
            author_id,
            magazine_id,
            title,
        }
    }

    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            author_id: self.author_id,
            magazine_id: self.magazine_id,
            title: self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        NewArticle::new(
            AuthorId::new(1).unwrap(),
            MagazineId::new(1).unwrap(),
            ArticleTitle::new("Hello").unwrap(),
        )
        .into_article(ArticleId::new(1).unwrap())
    }

    #[test]
    fn retitle_is_ignored_for_any_input() {
        let mut article = sample_article();
        assert!(!article.retitle("A perfectly valid title"));
        assert!(!article.retitle(""));
        assert_eq!(article.title().as_str(), "Hello");
    }

    #[test]
    fn set_author_and_magazine_replace_references() {
        let mut article = sample_article();
        article.set_author(AuthorId::new(2).unwrap());
        article.set_magazine(MagazineId::new(3).unwrap());
        assert_eq!(article.author_id(), AuthorId(2));
        assert_eq!(article.magazine_id(), MagazineId(3));
    }
}
