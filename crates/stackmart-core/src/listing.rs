//! A sellable catalog item and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, ListingId, Slug, StoreId, TagId, ThemeId};

/// Publication status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Being edited by the seller, not visible in the marketplace.
    #[default]
    Draft,
    /// Live and purchasable.
    Published,
    /// Withdrawn from the marketplace but kept for order history.
    Archived,
}

/// A sellable catalog item.
///
/// Prices are stored in minor currency units (cents) so that filter
/// comparisons never touch floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing identifier.
    pub id: ListingId,
    /// URL slug for the listing detail page.
    pub slug: Slug,
    /// Identifier of the store selling this listing.
    pub store_id: StoreId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// ISO currency code, e.g. `USD`.
    pub currency: String,
    /// Average review rating, 0–5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Lifetime number of sales.
    pub total_sales: u64,
    /// Whether the listing is editorially featured.
    pub featured: bool,
    /// Technology-stack labels, free text, matched case-insensitively.
    pub stack: Vec<String>,
    /// Categories this listing belongs to.
    pub category_ids: Vec<CategoryId>,
    /// Themes this listing belongs to.
    pub theme_ids: Vec<ThemeId>,
    /// Tags attached to this listing.
    pub tag_ids: Vec<TagId>,
    /// Publication status.
    pub status: ListingStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}
