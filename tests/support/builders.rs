// tests/support/builders.rs
use masthead::Catalog;
use masthead::domain::author::AuthorId;
use masthead::domain::magazine::MagazineId;

/// Catalog preloaded with a fixed cast: two authors, three magazines.
pub struct Fixture {
    pub catalog: Catalog,
    pub ada: AuthorId,
    pub grace: AuthorId,
    pub wired: MagazineId,
    pub vogue: MagazineId,
    pub byte: MagazineId,
}

impl Fixture {
    pub fn new() -> Self {
        super::init_tracing();
        let mut catalog = Catalog::in_memory();
        let ada = catalog.create_author("Ada Lovelace").unwrap().id();
        let grace = catalog.create_author("Grace Hopper").unwrap().id();
        let wired = catalog.create_magazine("Wired", "Technology").unwrap().id();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap().id();
        let byte = catalog.create_magazine("Byte", "Technology").unwrap().id();
        Self {
            catalog,
            ada,
            grace,
            wired,
            vogue,
            byte,
        }
    }

    pub fn publish(&mut self, author: AuthorId, magazine: MagazineId, title: &str) {
        self.catalog.create_article(author, magazine, title).unwrap();
    }

    /// Publishes `count` numbered articles.
    pub fn publish_many(&mut self, author: AuthorId, magazine: MagazineId, count: usize) {
        for n in 0..count {
            self.publish(author, magazine, &format!("Article number {n}"));
        }
    }
}
