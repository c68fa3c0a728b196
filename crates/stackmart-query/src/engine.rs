//! Applies a [`ListingFilter`] to an in-memory listing collection.

use stackmart_core::catalog::{Catalog, Category, Theme};
use stackmart_core::listing::Listing;
use stackmart_core::types::{CategoryId, ThemeId};

use crate::filter::{ListingFilter, ListingSort};

/// Reference data needed to resolve filter slugs to identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterContext<'a> {
    /// Known categories, for `category` slug resolution.
    pub categories: &'a [Category],
    /// Known themes, for `theme` slug resolution.
    pub themes: &'a [Theme],
}

impl<'a> From<&'a Catalog> for FilterContext<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            categories: &catalog.categories,
            themes: &catalog.themes,
        }
    }
}

/// Filter and sort a listing collection according to `filter`.
///
/// The input slice is never mutated; the result is a fresh ordered `Vec` of
/// references into it. There are no error conditions: a slug that resolves to
/// no known category or theme is treated as "no constraint", and sorting is
/// stable so ties keep their input order.
#[must_use]
pub fn filter_and_sort<'a>(
    listings: &'a [Listing],
    filter: &ListingFilter,
    context: FilterContext<'_>,
) -> Vec<&'a Listing> {
    let category_id = resolve_category(filter.category_slug.as_deref(), context.categories);
    let theme_id = resolve_theme(filter.theme_slug.as_deref(), context.themes);
    let tech: Vec<String> = filter
        .tech_stacks
        .iter()
        .map(|label| label.to_lowercase())
        .collect();
    let tokens: Vec<String> = filter.query.as_deref().map_or_else(Vec::new, |q| {
        q.to_lowercase()
            .split_whitespace()
            .map(ToOwned::to_owned)
            .collect()
    });
    let min_cents = filter.min_price.map(|major| major.saturating_mul(100));
    let max_cents = filter.max_price.map(|major| major.saturating_mul(100));

    let mut matched: Vec<&Listing> = listings
        .iter()
        .filter(|listing| {
            retains(
                listing,
                category_id,
                theme_id,
                &tech,
                min_cents,
                max_cents,
                &tokens,
            )
        })
        .collect();

    match filter.sort {
        ListingSort::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ListingSort::PriceAsc => matched.sort_by_key(|l| l.price_cents),
        ListingSort::PriceDesc => matched.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        ListingSort::Rating => matched.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.review_count.cmp(&a.review_count))
        }),
    }

    matched
}

fn resolve_category<'a>(slug: Option<&str>, categories: &'a [Category]) -> Option<&'a CategoryId> {
    let slug = slug?;
    categories
        .iter()
        .find(|c| c.slug.as_str() == slug)
        .map(|c| &c.id)
}

fn resolve_theme<'a>(slug: Option<&str>, themes: &'a [Theme]) -> Option<&'a ThemeId> {
    let slug = slug?;
    themes.iter().find(|t| t.slug.as_str() == slug).map(|t| &t.id)
}

#[allow(clippy::similar_names)]
fn retains(
    listing: &Listing,
    category_id: Option<&CategoryId>,
    theme_id: Option<&ThemeId>,
    tech: &[String],
    min_cents: Option<i64>,
    max_cents: Option<i64>,
    tokens: &[String],
) -> bool {
    if let Some(id) = category_id {
        if !listing.category_ids.contains(id) {
            return false;
        }
    }
    if let Some(id) = theme_id {
        if !listing.theme_ids.contains(id) {
            return false;
        }
    }
    if !tech.is_empty() {
        let stack: Vec<String> = listing
            .stack
            .iter()
            .map(|label| label.to_lowercase())
            .collect();
        if !tech.iter().all(|label| stack.contains(label)) {
            return false;
        }
    }
    if let Some(min) = min_cents {
        if listing.price_cents < min {
            return false;
        }
    }
    if let Some(max) = max_cents {
        if listing.price_cents > max {
            return false;
        }
    }
    if !tokens.is_empty() {
        let haystack = format!("{} {}", listing.title, listing.description).to_lowercase();
        if !tokens.iter().all(|token| haystack.contains(token.as_str())) {
            return false;
        }
    }
    true
}
