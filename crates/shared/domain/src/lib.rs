//! Domain layer - Forest catalog records and business rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Records defined here are shared by the persistence layer, the web surface
//! and the RPC facade.

pub mod activity;
pub mod activity_type;
pub mod catalog;
pub mod conservation_state;
pub mod constants;
pub mod error;
pub mod forest_type;
pub mod password;
pub mod report;
pub mod species;
pub mod user;
pub mod zone;

pub use activity::ConservationActivity;
pub use activity_type::ActivityType;
pub use catalog::{first_violation, CatalogRecord, DuplicateName};
pub use conservation_state::ConservationState;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use forest_type::ForestType;
pub use password::PasswordDigest;
pub use report::{ConservationSpeciesInfo, ConservationStatistics, Dashboard};
pub use species::TreeSpecies;
pub use user::{User, UserRole};
pub use zone::Zone;
