// src/infrastructure/repositories/memory_magazine.rs
use crate::domain::magazine::{Magazine, MagazineId, MagazineRepository, NewMagazine};

use super::util::IdSequence;

#[derive(Debug, Default)]
pub struct InMemoryMagazineRepository {
    rows: Vec<Magazine>,
    ids: IdSequence,
}

impl InMemoryMagazineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MagazineRepository for InMemoryMagazineRepository {
    fn insert(&mut self, magazine: NewMagazine) -> Magazine {
        let magazine = magazine.into_magazine(MagazineId(self.ids.allocate()));
        self.rows.push(magazine.clone());
        magazine
    }

    fn find_by_id(&self, id: MagazineId) -> Option<&Magazine> {
        self.rows.iter().find(|magazine| magazine.id == id)
    }

    fn find_by_id_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.rows.iter_mut().find(|magazine| magazine.id == id)
    }

    fn list(&self) -> &[Magazine] {
        &self.rows
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
