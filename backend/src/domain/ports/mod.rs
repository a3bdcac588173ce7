//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod content_repository;
mod content_store;

#[cfg(test)]
pub use content_repository::MockContentRepository;
pub use content_repository::{
    CategoryListing, ContentKind, ContentRepository, ContentRepositoryError,
};
#[cfg(test)]
pub use content_store::MockContentStore;
pub use content_store::{
    CategoryLinkRecord, CategoryRecord, ContentStore, ContentStoreError, FixtureContentStore,
    PostRecord,
};
