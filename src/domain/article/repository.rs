use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;

pub trait ArticleRepository {
    fn insert(&mut self, article: NewArticle) -> Article;
    fn find_by_id(&self, id: ArticleId) -> Option<&Article>;
    fn find_by_id_mut(&mut self, id: ArticleId) -> Option<&mut Article>;
    /// Every registered article, in registration order.
    fn list(&self) -> &[Article];
    /// Removes every row. Ids already handed out are not reissued.
    fn clear(&mut self);
}
