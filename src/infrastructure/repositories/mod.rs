// src/infrastructure/repositories/mod.rs
mod memory_article;
mod memory_author;
mod memory_magazine;
mod util;

pub use memory_article::InMemoryArticleRepository;
pub use memory_author::InMemoryAuthorRepository;
pub use memory_magazine::InMemoryMagazineRepository;
