//! Thin client library for the Ravelry API
//!
//! One function per resource; each issues exactly one authenticated HTTP GET,
//! parses the JSON body, and flattens it into a [`Table`]. There is no
//! pagination loop, no retry, and no caching: a call either returns a
//! (possibly empty) table or an [`Error`] naming the failing stage.
//!
//! Credentials are borrowed per call and never retained. Calls are blocking;
//! independent threads may call concurrently since no state is shared.
//!
//! # Example
//!
//! ```rust,ignore
//! use ravelry::{search_patterns, Credentials, PatternSearchParams};
//!
//! let creds = Credentials::new("user", "token");
//! let params = PatternSearchParams {
//!     query: "lace shawl".to_string(),
//!     page: 1,
//!     page_size: 10,
//! };
//!
//! let table = search_patterns(&creds, &params)?;
//! println!("{}", ravelry::display::render(&table));
//! # Ok::<(), ravelry::Error>(())
//! ```

pub mod display;
pub mod http;
pub mod patterns;
pub mod people;
pub mod reference;
pub mod yarns;

pub use http::{Credentials, API_BASE};
pub use patterns::{get_pattern, search_patterns};
pub use people::{list_favorites, list_queue};
pub use reference::{get_color_families, get_yarn_weights};
pub use yarns::{get_yarn, search_yarns};

// Re-export the core types callers need to build requests and read results.
pub use ravelry_core::{
    greet, Error, FavoritesParams, PatternSearchParams, QueueParams, Table, YarnSearchParams,
    YarnSort,
};
