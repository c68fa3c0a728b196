//! Core domain types for the stackmart marketplace.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod catalog;
pub mod currency;
pub mod listing;
pub mod types;
