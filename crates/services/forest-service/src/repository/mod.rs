//! Repository layer for data access.

mod catalog_repository;
pub mod entities;
pub mod memory;
mod user_repository;

pub use catalog_repository::{CatalogRepository, CatalogStore, CatalogTable};
pub use memory::{MemoryCatalog, MemoryUsers};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use catalog_repository::MockCatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Store for each catalog table.
pub type ZoneStore = CatalogStore<entities::zone::Entity>;
pub type TreeSpeciesStore = CatalogStore<entities::tree_species::Entity>;
pub type ConservationStateStore = CatalogStore<entities::conservation_state::Entity>;
pub type ActivityTypeStore = CatalogStore<entities::activity_type::Entity>;
pub type ConservationActivityStore = CatalogStore<entities::conservation_activity::Entity>;
