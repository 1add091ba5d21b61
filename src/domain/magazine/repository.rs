use crate::domain::magazine::entity::{Magazine, NewMagazine};
use crate::domain::magazine::value_objects::MagazineId;

pub trait MagazineRepository {
    fn insert(&mut self, magazine: NewMagazine) -> Magazine;
    fn find_by_id(&self, id: MagazineId) -> Option<&Magazine>;
    fn find_by_id_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    /// Every registered magazine, in registration order.
    fn list(&self) -> &[Magazine];
    /// Removes every row. Ids already handed out are not reissued.
    fn clear(&mut self);

    fn contains(&self, id: MagazineId) -> bool {
        self.find_by_id(id).is_some()
    }
}
