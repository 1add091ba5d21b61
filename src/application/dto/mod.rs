pub mod report;
pub mod seed;

pub use report::{AuthorReport, CatalogReport, MagazineReport};
pub use seed::{ArticleSeed, CatalogSeed, MagazineSeed};
