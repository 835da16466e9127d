//! Resort site: offers, amenities and villa listings, a booking form, and a
//! contact page whose map embed is supervised by a bounded retry controller.
//!
//! The library holds the core logic so integration tests can drive it; the
//! `resort` binary wraps it in a terminal front-end.

pub mod adapters;
pub mod app;
pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod embed;
pub mod error;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod terminal;
pub mod traits;
pub mod ui;
