// src/application/commands/mod.rs
pub mod articles;
pub mod authors;
pub mod magazines;
pub mod seed;
