//! Conservation state reference record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::CatalogRecord;

/// Conservation category a species can be assigned to.
///
/// States are reference data: seeded by migration and only ever read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ConservationState {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl CatalogRecord for ConservationState {
    const LABEL: &'static str = "Conservation state";
    const FIELD_ORDER: &'static [&'static str] = &[];

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
