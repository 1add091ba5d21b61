// src/domain/magazine/entity.rs
use crate::domain::magazine::value_objects::{MagazineCategory, MagazineId, MagazineName};

#[derive(Debug, Clone)]
pub struct Magazine {
    pub(crate) id: MagazineId,
    pub(crate) name: MagazineName,
    pub(crate) category: MagazineCategory,
}

impl Magazine {
    pub const fn id(&self) -> MagazineId {
        self.id
    }

    pub const fn name(&self) -> &MagazineName {
        &self.name
    }

    pub const fn category(&self) -> &MagazineCategory {
        &self.category
    }

    /// Replaces the name when it validates; an invalid value is dropped and
    /// the previous name kept. Returns whether the name changed.
    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        match MagazineName::new(name) {
            Ok(name) => {
                self.name = name;
                true
            }
            Err(err) => {
                tracing::debug!(magazine = %self.id, error = %err, "magazine rename ignored");
                false
            }
        }
    }

    /// Same policy as [`Magazine::rename`], for the category.
    pub fn recategorize(&mut self, category: impl Into<String>) -> bool {
        match MagazineCategory::new(category) {
            Ok(category) => {
                self.category = category;
                true
            }
            Err(err) => {
                tracing::debug!(magazine = %self.id, error = %err, "magazine recategorize ignored");
                false
            }
        }
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl std::hash::Hash for Magazine {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct NewMagazine {
    pub name: MagazineName,
    pub category: MagazineCategory,
}

impl NewMagazine {
    pub const fn new(name: MagazineName, category: MagazineCategory) -> Self {
        Self { name, category }
    }

    pub fn into_magazine(self, id: MagazineId) -> Magazine {
        Magazine {
            id,
            name: self.name,
            category: self.category,
        }
    }
}
