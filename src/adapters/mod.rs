//! Concrete implementations of the trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`FirestoreContentStore`] - content store over the Firestore REST API
//! - [`InMemoryContentStore`] - content store for offline runs and tests
//! - [`HttpEmbedProvider`] - embed provider probing the embed URL
//!
//! The [`mock`] submodule provides test doubles.

pub mod firestore;
pub mod http_embed;
pub mod memory;
pub mod mock;
pub mod reqwest_http;

pub use firestore::{FirestoreContentStore, DEFAULT_FIRESTORE_URL};
pub use http_embed::HttpEmbedProvider;
pub use memory::InMemoryContentStore;
pub use reqwest_http::ReqwestHttpClient;
