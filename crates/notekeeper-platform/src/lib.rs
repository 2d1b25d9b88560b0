//! Browser adapters for the notekeeper-core ports.

pub mod http;
pub mod download;
pub mod location;

pub use download::BrowserDownloads;
pub use http::HttpNotesApi;
