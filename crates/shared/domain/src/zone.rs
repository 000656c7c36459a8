//! Zone catalog record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{not_blank, CatalogRecord};
use crate::forest_type::ForestType;

/// A managed forest zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Zone {
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The zone name is required."))]
    pub name: String,
    #[validate(required(message = "The forest type is required."))]
    pub forest_type: Option<ForestType>,
    /// Area in hectares
    #[validate(
        required(message = "The area must be greater than zero."),
        range(exclusive_min = 0.0, message = "The area must be greater than zero.")
    )]
    pub area_ha: Option<f64>,
    pub active: bool,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            forest_type: None,
            area_ha: None,
            active: true,
        }
    }
}

impl Zone {
    pub fn new(name: impl Into<String>, forest_type: ForestType, area_ha: f64) -> Self {
        Self {
            name: name.into(),
            forest_type: Some(forest_type),
            area_ha: Some(area_ha),
            ..Self::default()
        }
    }

    /// Display name of the forest type, empty when unset.
    pub fn forest_type_name(&self) -> &'static str {
        self.forest_type.map(|kind| kind.display_name()).unwrap_or("")
    }
}

impl CatalogRecord for Zone {
    const LABEL: &'static str = "Zone";
    const FIELD_ORDER: &'static [&'static str] = &["name", "forest_type", "area_ha"];

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

    /// New zones always start active.
    fn for_insert(self) -> Self {
        Zone {
            name: self.name.trim().to_string(),
            active: true,
            ..self
        }
    }

    /// Only name, forest type and area change; the active flag belongs to
    /// delete.
    fn replacing(self, stored: &Self) -> Self {
        Zone {
            name: self.name.trim().to_string(),
            active: stored.active,
            ..self
        }
    }
}
