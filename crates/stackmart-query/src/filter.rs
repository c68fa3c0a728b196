//! Normalized filter options and the query-parameter normalizer.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a sort token is not one of the recognized keys.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSort(String);

/// Result ordering for a listing query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSort {
    /// Most recently created first. The default.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest rating first, ties broken by review count.
    Rating,
}

impl ListingSort {
    /// The URL token for this sort key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for ListingSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingSort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            other => Err(UnknownSort(other.to_owned())),
        }
    }
}

/// Normalized, fully-optional query constraints for the listing engine.
///
/// Built fresh per request from raw query parameters and immutable once built.
/// An absent field means "no constraint", never "matches nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    /// Free-text search string; tokens must all match title + description.
    pub query: Option<String>,
    /// Category slug to restrict to; unresolved slugs are ignored.
    pub category_slug: Option<String>,
    /// Theme slug to restrict to; unresolved slugs are ignored.
    pub theme_slug: Option<String>,
    /// Required technology labels; a listing must carry ALL of them.
    pub tech_stacks: BTreeSet<String>,
    /// Minimum price in major currency units.
    pub min_price: Option<i64>,
    /// Maximum price in major currency units.
    pub max_price: Option<i64>,
    /// Result ordering.
    pub sort: ListingSort,
    /// Requested 1-based page number.
    pub page: Option<u32>,
}

impl ListingFilter {
    /// Build a filter from raw query-string pairs.
    ///
    /// Recognized keys: `q`, `category`, `theme`, `tech` (repeatable), `min`,
    /// `max`, `sort`, `page`. For single-valued keys the first occurrence
    /// wins. Blank values normalize to absent, duplicate `tech` values
    /// collapse to one entry, and unparseable numbers or unknown sort keys
    /// are silently dropped.
    #[must_use]
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = None;
        let mut category = None;
        let mut theme = None;
        let mut tech = Vec::new();
        let mut min = None;
        let mut max = None;
        let mut sort = None;
        let mut page = None;

        for (key, value) in params {
            match key {
                "q" if query.is_none() => query = Some(value),
                "category" if category.is_none() => category = Some(value),
                "theme" if theme.is_none() => theme = Some(value),
                "tech" => tech.push(value),
                "min" if min.is_none() => min = Some(value),
                "max" if max.is_none() => max = Some(value),
                "sort" if sort.is_none() => sort = Some(value),
                "page" if page.is_none() => page = Some(value),
                _ => {}
            }
        }

        Self {
            query: query.and_then(non_blank),
            category_slug: category.and_then(non_blank),
            theme_slug: theme.and_then(non_blank),
            tech_stacks: tech.into_iter().filter_map(non_blank).collect(),
            min_price: min.and_then(|v| parse_int("min", v)),
            max_price: max.and_then(|v| parse_int("max", v)),
            sort: sort.map_or_else(ListingSort::default, parse_sort),
            page: page.and_then(|v| parse_int("page", v)),
        }
    }
}

/// Trim a raw value; empty or whitespace-only becomes absent.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Strict base-10 parse; failures are dropped, not rejected.
fn parse_int<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("dropping unparseable {key} filter value {value:?}");
            None
        }
    }
}

fn parse_sort(value: &str) -> ListingSort {
    match value.trim().parse() {
        Ok(sort) => sort,
        Err(err) => {
            if !value.trim().is_empty() {
                debug!("{err}, falling back to {}", ListingSort::default());
            }
            ListingSort::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ListingSort, non_blank};

    #[test]
    fn sort_tokens_round_trip() {
        for sort in [
            ListingSort::Newest,
            ListingSort::PriceAsc,
            ListingSort::PriceDesc,
            ListingSort::Rating,
        ] {
            assert_eq!(sort.as_str().parse::<ListingSort>(), Ok(sort));
        }
    }

    #[test]
    fn sort_serialises_as_kebab_case() {
        let json = serde_json::to_string(&ListingSort::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
    }

    #[test]
    fn non_blank_trims_and_drops_whitespace() {
        assert_eq!(non_blank("  react "), Some("react".to_owned()));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }
}
