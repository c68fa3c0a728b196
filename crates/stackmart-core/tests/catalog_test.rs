use chrono::{TimeZone, Utc};
use stackmart_core::catalog::{Catalog, Category, Store};
use stackmart_core::listing::{Listing, ListingStatus};
use stackmart_core::types::{CategoryId, ListingId, Slug, StoreId};

fn listing(id: &str, store: &str, status: ListingStatus) -> Listing {
    Listing {
        id: ListingId::new(id),
        slug: Slug::new(id).unwrap(),
        store_id: StoreId::new(store),
        title: format!("Listing {id}"),
        description: String::new(),
        price_cents: 10_000,
        currency: "USD".to_owned(),
        rating: 4.0,
        review_count: 10,
        total_sales: 5,
        featured: false,
        stack: Vec::new(),
        category_ids: Vec::new(),
        theme_ids: Vec::new(),
        tag_ids: Vec::new(),
        status,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
    }
}

fn store(id: &str) -> Store {
    Store {
        id: StoreId::new(id),
        slug: Slug::new(id).unwrap(),
        name: format!("Store {id}"),
        tagline: String::new(),
        rating: 4.5,
        review_count: 20,
        total_sales: 100,
    }
}

#[test]
fn category_lookup_by_slug() {
    let catalog = Catalog {
        categories: vec![Category {
            id: CategoryId::new("cat-1"),
            name: "Design".to_owned(),
            slug: Slug::new("design").unwrap(),
        }],
        ..Catalog::default()
    };
    assert_eq!(
        catalog.category_by_slug("design").map(|c| c.id.as_str()),
        Some("cat-1")
    );
    assert!(catalog.category_by_slug("unknown").is_none());
}

#[test]
fn listings_for_store_keeps_catalog_order() {
    let catalog = Catalog {
        listings: vec![
            listing("a", "store-1", ListingStatus::Published),
            listing("b", "store-2", ListingStatus::Published),
            listing("c", "store-1", ListingStatus::Draft),
        ],
        ..Catalog::default()
    };
    let mine = catalog.listings_for_store(&StoreId::new("store-1"));
    let ids: Vec<&str> = mine.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn featured_requires_published() {
    let mut draft = listing("a", "store-1", ListingStatus::Draft);
    draft.featured = true;
    let mut live = listing("b", "store-1", ListingStatus::Published);
    live.featured = true;
    let plain = listing("c", "store-1", ListingStatus::Published);

    let catalog = Catalog {
        listings: vec![draft, live, plain],
        ..Catalog::default()
    };
    let featured: Vec<&str> = catalog.featured().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(featured, vec!["b"]);
}

#[test]
fn tech_stacks_deduplicates_and_sorts_case_insensitively() {
    let mut a = listing("a", "store-1", ListingStatus::Published);
    a.stack = vec!["React".to_owned(), "rust".to_owned()];
    let mut b = listing("b", "store-1", ListingStatus::Published);
    b.stack = vec!["Astro".to_owned(), "React".to_owned()];

    let catalog = Catalog {
        listings: vec![a, b],
        ..Catalog::default()
    };
    assert_eq!(catalog.tech_stacks(), vec!["Astro", "React", "rust"]);
}

#[test]
fn stats_cover_published_listings_only() {
    let mut a = listing("a", "store-1", ListingStatus::Published);
    a.rating = 5.0;
    a.total_sales = 10;
    let mut b = listing("b", "store-2", ListingStatus::Published);
    b.rating = 3.0;
    b.total_sales = 20;
    let mut c = listing("c", "store-1", ListingStatus::Archived);
    c.total_sales = 7;

    let catalog = Catalog {
        stores: vec![store("store-1"), store("store-2")],
        listings: vec![a, b, c],
        ..Catalog::default()
    };
    let stats = catalog.stats();
    assert_eq!(stats.total_listings, 2);
    assert_eq!(stats.total_stores, 2);
    // total sales still count archived listings: order history survives.
    assert_eq!(stats.total_sales, 37);
    assert!((stats.average_rating - 4.0).abs() < f64::EPSILON);
}

#[test]
fn stats_on_empty_catalog() {
    let stats = Catalog::default().stats();
    assert_eq!(stats.total_listings, 0);
    assert!((stats.average_rating - 0.0).abs() < f64::EPSILON);
}
