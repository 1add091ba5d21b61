// src/infrastructure/repositories/memory_author.rs
use crate::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor};

use super::util::IdSequence;

#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    rows: Vec<Author>,
    ids: IdSequence,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    fn insert(&mut self, author: NewAuthor) -> Author {
        let author = author.into_author(AuthorId(self.ids.allocate()));
        self.rows.push(author.clone());
        author
    }

    fn find_by_id(&self, id: AuthorId) -> Option<&Author> {
        self.rows.iter().find(|author| author.id == id)
    }

    fn find_by_id_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.rows.iter_mut().find(|author| author.id == id)
    }

    fn list(&self) -> &[Author] {
        &self.rows
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
