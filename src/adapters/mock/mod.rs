//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedEmbedProvider`] - embed provider replaying scripted outcomes

pub mod embed;
pub mod http;

pub use embed::ScriptedEmbedProvider;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
