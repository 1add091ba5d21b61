// src/domain/magazine/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Magazine, NewMagazine};
pub use repository::MagazineRepository;
pub use value_objects::{MagazineCategory, MagazineId, MagazineName};
