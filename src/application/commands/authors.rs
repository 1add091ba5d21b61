// src/application/commands/authors.rs
use crate::{
    application::services::Catalog,
    domain::{
        author::{Author, AuthorId, AuthorName, NewAuthor},
        errors::{DomainError, DomainResult},
    },
};

impl Catalog {
    pub fn create_author(&mut self, name: impl Into<String>) -> DomainResult<Author> {
        let name = AuthorName::new(name)?;
        let author = self.authors.insert(NewAuthor::new(name));
        tracing::debug!(author = %author.id(), name = %author.name(), "author created");
        Ok(author)
    }

    /// Always `Ok(false)` for a registered author: author names never change.
    pub fn rename_author(&mut self, id: AuthorId, name: impl Into<String>) -> DomainResult<bool> {
        let author = self
            .authors
            .find_by_id_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))?;
        Ok(author.rename(name))
    }
}
