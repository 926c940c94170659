//! The track store: ordered collection of ingested tracks.
//!
//! The store filters incoming files against the configured allow-lists,
//! owns one media handle per track and releases each exactly once, on
//! removal or teardown.

mod ingest;
mod model;
mod store;

pub use ingest::title_from_file_name;
pub use model::*;
pub use store::*;
