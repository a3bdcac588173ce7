//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain records and the wire
//! representation of the store. They contain no business logic.
//!
//! - **postgrest**: reqwest-backed `ContentStore` over a PostgREST endpoint.

pub mod postgrest;
