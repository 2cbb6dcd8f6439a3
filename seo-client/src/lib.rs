//! Client side of the SEO generation relay: form model, API client and
//! status poller. Plays the role the browser form holds in production.
pub mod api;
pub mod error;
pub mod models;
pub mod poller;
