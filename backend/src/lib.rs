//! Blog backend library modules.
//!
//! The domain layer owns content entities, localisation helpers, content
//! metrics, and the page lifecycle controller. Outbound adapters implement
//! the content store port against the hosted PostgREST endpoint.

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::BlogSettings;
