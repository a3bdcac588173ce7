//! PostgREST outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `ContentStore`
//! port against a PostgREST (`/rest/v1`) endpoint.

mod dto;
mod http_store;

pub use http_store::{PostgrestContentStore, PostgrestSetupError};
