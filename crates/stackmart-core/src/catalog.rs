//! Catalog reference data and the materialized snapshot handed to the query
//! engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::listing::{Listing, ListingStatus};
use crate::types::{CategoryId, Slug, StoreId, TagId, ThemeId};

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug used for lookups from query parameters.
    pub slug: Slug,
}

/// A visual theme listings can be associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme identifier.
    pub id: ThemeId,
    /// Display name.
    pub name: String,
    /// URL slug used for lookups from query parameters.
    pub slug: Slug,
}

/// A free-form tag attached to listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: Slug,
}

/// A seller storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Store identifier.
    pub id: StoreId,
    /// URL slug for the storefront page.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Short storefront tagline.
    pub tagline: String,
    /// Average review rating across the store's listings, 0–5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Lifetime number of sales across all listings.
    pub total_sales: u64,
}

/// Aggregate marketplace figures derived from a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of published listings.
    pub total_listings: usize,
    /// Number of stores.
    pub total_stores: usize,
    /// Lifetime sales summed across all listings.
    pub total_sales: u64,
    /// Mean rating over published listings, `0.0` when there are none.
    pub average_rating: f64,
}

/// A consistent, already-materialized snapshot of the marketplace catalog.
///
/// The storage layer produces one of these per request; everything in this
/// crate and in `stackmart-query` only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All known categories.
    pub categories: Vec<Category>,
    /// All known themes.
    pub themes: Vec<Theme>,
    /// All known tags.
    pub tags: Vec<Tag>,
    /// All seller storefronts.
    pub stores: Vec<Store>,
    /// All listings, regardless of status.
    pub listings: Vec<Listing>,
}

impl Catalog {
    /// Look up a category by its URL slug.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Look up a theme by its URL slug.
    #[must_use]
    pub fn theme_by_slug(&self, slug: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.slug.as_str() == slug)
    }

    /// Look up a store by its URL slug.
    #[must_use]
    pub fn store_by_slug(&self, slug: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.slug.as_str() == slug)
    }

    /// All listings belonging to the given store, in catalog order.
    #[must_use]
    pub fn listings_for_store(&self, store: &StoreId) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| &l.store_id == store)
            .collect()
    }

    /// Iterate over published listings only.
    pub fn published(&self) -> impl Iterator<Item = &Listing> {
        self.listings
            .iter()
            .filter(|l| l.status == ListingStatus::Published)
    }

    /// Published listings flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Listing> {
        self.published().filter(|l| l.featured).collect()
    }

    /// Distinct technology-stack labels across all listings, sorted
    /// case-insensitively. Labels keep the casing of their first occurrence.
    #[must_use]
    pub fn tech_stacks(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut labels = Vec::new();
        for listing in &self.listings {
            for label in &listing.stack {
                if seen.insert(label.clone()) {
                    labels.push(label.clone());
                }
            }
        }
        labels.sort_by_key(|label| label.to_lowercase());
        labels
    }

    /// Aggregate marketplace figures for this snapshot.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let published: Vec<&Listing> = self.published().collect();
        let rating_count = u32::try_from(published.len()).unwrap_or(u32::MAX);
        let average_rating = if published.is_empty() {
            0.0
        } else {
            published.iter().map(|l| l.rating).sum::<f64>() / f64::from(rating_count)
        };
        CatalogStats {
            total_listings: published.len(),
            total_stores: self.stores.len(),
            total_sales: self.listings.iter().map(|l| l.total_sales).sum(),
            average_rating,
        }
    }
}
