// src/infrastructure/repositories/memory_article.rs
use crate::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};

use super::util::IdSequence;

#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    rows: Vec<Article>,
    ids: IdSequence,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn insert(&mut self, article: NewArticle) -> Article {
        let article = article.into_article(ArticleId(self.ids.allocate()));
        self.rows.push(article.clone());
        article
    }

    fn find_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.rows.iter().find(|article| article.id == id)
    }

    fn find_by_id_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.rows.iter_mut().find(|article| article.id == id)
    }

    fn list(&self) -> &[Article] {
        &self.rows
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleTitle;
    use crate::domain::author::AuthorId;
    use crate::domain::magazine::MagazineId;

    fn new_article(title: &str) -> NewArticle {
        NewArticle::new(
            AuthorId(1),
            MagazineId(1),
            ArticleTitle::new(title).unwrap(),
        )
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut repo = InMemoryArticleRepository::new();
        let first = repo.insert(new_article("First post"));
        let second = repo.insert(new_article("Second post"));
        assert_eq!(first.id(), ArticleId(1));
        assert_eq!(second.id(), ArticleId(2));
        let titles: Vec<_> = repo.list().iter().map(|a| a.title().as_str()).collect();
        assert_eq!(titles, ["First post", "Second post"]);
    }

    #[test]
    fn clear_does_not_reuse_ids() {
        let mut repo = InMemoryArticleRepository::new();
        repo.insert(new_article("First post"));
        repo.clear();
        assert!(repo.list().is_empty());
        assert!(repo.find_by_id(ArticleId(1)).is_none());
        assert_eq!(repo.insert(new_article("Again post")).id(), ArticleId(2));
    }
}
