//! SeaORM entities, one per table.

pub mod activity_type;
pub mod conservation_activity;
pub mod conservation_state;
pub mod tree_species;
pub mod usuario;
pub mod zone;
