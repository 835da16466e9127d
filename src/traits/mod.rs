//! Trait abstractions for the external collaborators.
//!
//! - [`HttpClient`] - HTTP transport used by the adapters
//! - [`ContentStore`] - ordered document collections
//! - [`EmbedProvider`] - remote embed load attempts

pub mod content;
pub mod embed;
pub mod http;

pub use content::{ContentStore, Record};
pub use embed::EmbedProvider;
pub use http::{Headers, HttpClient, HttpError, Response};
