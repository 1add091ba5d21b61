mod support;

use masthead::Catalog;
use masthead::domain::errors::DomainError;
use masthead::domain::magazine::MagazineId;
use support::{Fixture, author_names};

#[test]
fn magazine_construction_validates_name_and_category() {
    let mut catalog = Catalog::in_memory();
    assert!(catalog.create_magazine("M", "Tech").unwrap_err().is_validation());
    assert!(catalog.create_magazine("ThisIsWayTooLongAName", "Tech").is_err());
    assert!(catalog.create_magazine("Mag", "").is_err());
    assert!(catalog.all_magazines().is_empty());

    catalog.create_magazine("Mag", "Tech").unwrap();
    catalog.create_magazine("Zine", "Art").unwrap();
    let names: Vec<_> = catalog
        .all_magazines()
        .iter()
        .map(|m| m.name().as_str())
        .collect();
    assert_eq!(names, ["Mag", "Zine"]);
}

#[test]
fn rename_ignores_invalid_and_applies_valid() {
    let mut catalog = Catalog::in_memory();
    let id = catalog.create_magazine("Mo", "Tech").unwrap().id();

    assert!(!catalog.rename_magazine(id, "ThisIsWayTooLongAName").unwrap());
    assert_eq!(catalog.magazine(id).unwrap().name().as_str(), "Mo");

    assert!(catalog.rename_magazine(id, "OK").unwrap());
    assert_eq!(catalog.magazine(id).unwrap().name().as_str(), "OK");
}

#[test]
fn recategorize_ignores_empty_category() {
    let mut catalog = Catalog::in_memory();
    let id = catalog.create_magazine("Mo", "Tech").unwrap().id();

    assert!(!catalog.recategorize_magazine(id, "").unwrap());
    assert_eq!(catalog.magazine(id).unwrap().category().as_str(), "Tech");
    assert!(catalog.recategorize_magazine(id, "Science").unwrap());
    assert_eq!(catalog.magazine(id).unwrap().category().as_str(), "Science");
}

#[test]
fn contributors_are_unique() {
    let mut fx = Fixture::new();
    fx.publish(fx.grace, fx.wired, "Bugs in relays");
    fx.publish(fx.ada, fx.wired, "Analytical notes");
    fx.publish(fx.grace, fx.wired, "COBOL musings");

    let contributors = fx.catalog.contributors(fx.wired).unwrap();
    assert_eq!(author_names(&contributors), ["Grace Hopper", "Ada Lovelace"]);
    assert!(fx.catalog.contributors(fx.vogue).unwrap().is_empty());
}

#[test]
fn article_titles_none_when_empty() {
    let mut fx = Fixture::new();
    assert_eq!(fx.catalog.article_titles(fx.wired).unwrap(), None);

    fx.publish(fx.ada, fx.wired, "First title");
    fx.publish(fx.grace, fx.vogue, "Elsewhere");
    fx.publish(fx.grace, fx.wired, "Second title");

    let titles: Vec<_> = fx
        .catalog
        .article_titles(fx.wired)
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|t| t.as_str())
        .collect();
    assert_eq!(titles, ["First title", "Second title"]);
}

#[test]
fn contributing_authors_requires_more_than_two_articles() {
    let mut fx = Fixture::new();
    fx.publish_many(fx.ada, fx.wired, 2);
    assert_eq!(fx.catalog.contributing_authors(fx.wired).unwrap(), None);

    fx.publish_many(fx.ada, fx.wired, 1);
    let authors = fx.catalog.contributing_authors(fx.wired).unwrap().unwrap();
    assert_eq!(author_names(&authors), ["Ada Lovelace"]);
}

#[test]
fn contributing_authors_count_per_magazine_only() {
    let mut fx = Fixture::new();
    fx.publish_many(fx.grace, fx.wired, 2);
    fx.publish_many(fx.grace, fx.vogue, 2);
    fx.publish_many(fx.ada, fx.vogue, 3);

    assert_eq!(fx.catalog.contributing_authors(fx.wired).unwrap(), None);
    let authors = fx.catalog.contributing_authors(fx.vogue).unwrap().unwrap();
    assert_eq!(author_names(&authors), ["Ada Lovelace"]);
}

#[test]
fn top_publisher_none_without_articles() {
    let fx = Fixture::new();
    assert!(fx.catalog.top_publisher().is_none());
}

#[test]
fn top_publisher_picks_most_articles() {
    let mut fx = Fixture::new();
    fx.publish(fx.ada, fx.vogue, "Lonely piece");
    fx.publish_many(fx.grace, fx.wired, 3);

    let top = fx.catalog.top_publisher().unwrap();
    assert_eq!(top.id(), fx.wired);
}

#[test]
fn top_publisher_tie_goes_to_earliest_seen() {
    let mut fx = Fixture::new();
    fx.publish(fx.ada, fx.byte, "Byte first");
    fx.publish(fx.ada, fx.vogue, "Vogue second");
    fx.publish(fx.grace, fx.vogue, "Vogue third");
    fx.publish(fx.grace, fx.byte, "Byte fourth");

    assert_eq!(fx.catalog.top_publisher().unwrap().id(), fx.byte);
}

#[test]
fn unknown_magazine_queries_fail() {
    let fx = Fixture::new();
    assert!(fx.catalog.magazine_articles(MagazineId(99)).is_err());
    assert!(fx.catalog.contributing_authors(MagazineId(99)).is_err());
}

#[test]
fn commands_on_unknown_magazine_report_not_found() {
    let mut catalog = Catalog::in_memory();
    catalog.create_magazine("Mo", "Tech").unwrap();

    assert!(matches!(
        catalog.rename_magazine(MagazineId(5), "OK"),
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        catalog.recategorize_magazine(MagazineId(5), "Science"),
        Err(DomainError::NotFound(_))
    ));
}
