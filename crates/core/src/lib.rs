//! Core library for the ravelry client
//!
//! This crate implements the **Functional Core** of the ravelry client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`ravelry_core`** (this crate): Pure transformation functions with zero I/O
//! - **`ravelry`**: HTTP operations and orchestration (the Imperative Shell)
//!
//! Everything an API call does besides the network round-trip lives here:
//! building the request path and query string for each endpoint, interpreting
//! the HTTP status, extracting the expected top-level JSON field, and
//! flattening the payload into a [`Table`]. Because these steps are pure,
//! every testable property of the client can be exercised with fixture data
//! and no mocking.
//!
//! # Module Organization
//!
//! - [`record`]: The [`Table`] record set and one-level JSON flattening
//! - [`response`]: Status interpretation and payload extraction
//! - [`query`]: Percent-encoded query-string construction
//! - [`patterns`], [`yarns`], [`people`], [`reference`]: Per-endpoint
//!   parameter structs, defaults, and path templates
//! - [`greeting`]: Demonstration greeting formatter

pub mod error;
pub mod greeting;
pub mod patterns;
pub mod people;
pub mod query;
pub mod record;
pub mod reference;
pub mod response;
pub mod yarns;

pub use error::Error;
pub use greeting::greet;
pub use patterns::PatternSearchParams;
pub use people::{FavoritesParams, QueueParams};
pub use record::Table;
pub use yarns::{YarnSearchParams, YarnSort};
