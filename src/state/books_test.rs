use super::*;

fn book(title: &str, author: &str, isbn: &str, genre: Option<&str>, available: u32) -> Book {
    Book {
        id: 1,
        isbn: isbn.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        genre: genre.map(str::to_owned),
        total_copies: 5,
        available_copies: available,
        description: None,
        cover_url: None,
    }
}

fn catalog() -> Vec<Book> {
    vec![
        book("Pride and Prejudice", "Jane Austen", "9780141439518", Some("Romance"), 3),
        book("Dune", "Frank Herbert", "9780441172719", Some("Science Fiction"), 0),
        book("Emma", "Jane Austen", "9780141439587", Some("Romance"), 1),
        book("Untagged", "Anon", "0000000000", None, 2),
    ]
}

// =============================================================
// Search matching
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let filter = CatalogFilter::default();
    assert_eq!(apply(&filter, &catalog()).len(), 4);
}

#[test]
fn search_matches_title_case_insensitive() {
    let filter = CatalogFilter {
        search: "dune".to_owned(),
        ..CatalogFilter::default()
    };
    let hits = apply(&filter, &catalog());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");
}

#[test]
fn search_matches_author() {
    let filter = CatalogFilter {
        search: "austen".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(apply(&filter, &catalog()).len(), 2);
}

#[test]
fn search_matches_isbn_substring() {
    let filter = CatalogFilter {
        search: "0441172719".to_owned(),
        ..CatalogFilter::default()
    };
    let hits = apply(&filter, &catalog());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");
}

#[test]
fn search_trims_surrounding_whitespace() {
    let filter = CatalogFilter {
        search: "  emma  ".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(apply(&filter, &catalog()).len(), 1);
}

// =============================================================
// Genre and availability
// =============================================================

#[test]
fn genre_filter_matches_exactly() {
    let filter = CatalogFilter {
        genre: "Romance".to_owned(),
        ..CatalogFilter::default()
    };
    assert_eq!(apply(&filter, &catalog()).len(), 2);
}

#[test]
fn genre_filter_excludes_untagged_books() {
    let filter = CatalogFilter {
        genre: "Science Fiction".to_owned(),
        ..CatalogFilter::default()
    };
    let hits = apply(&filter, &catalog());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");
}

#[test]
fn availability_filter_splits_catalog() {
    let available = CatalogFilter {
        availability: Availability::Available,
        ..CatalogFilter::default()
    };
    let unavailable = CatalogFilter {
        availability: Availability::Unavailable,
        ..CatalogFilter::default()
    };
    assert_eq!(apply(&available, &catalog()).len(), 3);
    assert_eq!(apply(&unavailable, &catalog()).len(), 1);
}

#[test]
fn filters_compose() {
    let filter = CatalogFilter {
        search: "austen".to_owned(),
        genre: "Romance".to_owned(),
        availability: Availability::Available,
    };
    assert_eq!(apply(&filter, &catalog()).len(), 2);
}

// =============================================================
// Availability keys
// =============================================================

#[test]
fn availability_round_trips_select_keys() {
    for availability in [Availability::All, Availability::Available, Availability::Unavailable] {
        assert_eq!(Availability::from_key(availability.as_key()), availability);
    }
}

#[test]
fn unknown_availability_key_means_all() {
    assert_eq!(Availability::from_key("bogus"), Availability::All);
}

// =============================================================
// Genres
// =============================================================

#[test]
fn genres_are_distinct_and_sorted() {
    assert_eq!(genres(&catalog()), vec!["Romance", "Science Fiction"]);
}

#[test]
fn genres_of_empty_catalog_is_empty() {
    assert!(genres(&[]).is_empty());
}
