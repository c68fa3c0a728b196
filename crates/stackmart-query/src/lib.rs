//! Listing query engine for the stackmart marketplace.
//!
//! Turns raw query-string parameters into a normalized [`filter::ListingFilter`],
//! applies it to an in-memory listing collection, and paginates the result.
//! Malformed input never errors: every unparseable or unresolvable constraint
//! degrades to "no constraint", so a bad filter shows too many results rather
//! than an error page.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod engine;
pub mod filter;
pub mod paginate;
