// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, AuthorName};

#[derive(Debug, Clone)]
pub struct Author {
    pub(crate) id: AuthorId,
    pub(crate) name: AuthorName,
}

impl Author {
    pub const fn id(&self) -> AuthorId {
        self.id
    }

    pub const fn name(&self) -> &AuthorName {
        &self.name
    }

    /// Names are fixed once the author exists; the value is always discarded.
    pub fn rename(&mut self, _name: impl Into<String>) -> bool {
        tracing::debug!(author = %self.id, "author rename ignored");
        false
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl std::hash::Hash for Author {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: AuthorName,
}

impl NewAuthor {
    pub const fn new(name: AuthorName) -> Self {
        Self { name }
    }

    pub fn into_author(self, id: AuthorId) -> Author {
        Author {
            id,
            name: self.name,
        }
    }
}
