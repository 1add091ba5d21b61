use crate::domain::author::entity::{Author, NewAuthor};
use crate::domain::author::value_objects::AuthorId;

pub trait AuthorRepository {
    fn insert(&mut self, author: NewAuthor) -> Author;
    fn find_by_id(&self, id: AuthorId) -> Option<&Author>;
    fn find_by_id_mut(&mut self, id: AuthorId) -> Option<&mut Author>;
    fn list(&self) -> &[Author];
    /// Removes every row. Ids already handed out are not reissued.
    fn clear(&mut self);

    fn contains(&self, id: AuthorId) -> bool {
        self.find_by_id(id).is_some()
    }
}
