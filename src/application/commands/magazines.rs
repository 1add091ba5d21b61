// src/application/commands/magazines.rs
use crate::{
    application::services::Catalog,
    domain::{
        errors::{DomainError, DomainResult},
        magazine::{Magazine, MagazineCategory, MagazineId, MagazineName, NewMagazine},
    },
};

impl Catalog {
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> DomainResult<Magazine> {
        let name = MagazineName::new(name)?;
        let category = MagazineCategory::new(category)?;
        let magazine = self.magazines.insert(NewMagazine::new(name, category));
        tracing::debug!(
            magazine = %magazine.id(),
            name = %magazine.name(),
            category = %magazine.category(),
            "magazine created"
        );
        Ok(magazine)
    }

    /// `Ok(true)` when the new name validated and was applied, `Ok(false)`
    /// when it was ignored.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> DomainResult<bool> {
        Ok(self.magazine_mut(id)?.rename(name))
    }

    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> DomainResult<bool> {
        Ok(self.magazine_mut(id)?.recategorize(category))
    }

    fn magazine_mut(&mut self, id: MagazineId) -> DomainResult<&mut Magazine> {
        self.magazines
            .find_by_id_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("{id} not found")))
    }
}
