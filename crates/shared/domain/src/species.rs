//! Tree species catalog record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{not_blank, CatalogRecord, DuplicateName};
use crate::constants::{MSG_SPECIES_DUPLICATE, MSG_SPECIES_DUPLICATE_OTHER};

/// A tree species recorded in the inventory.
///
/// The conservation state and zone references are optional and are not
/// checked for existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TreeSpecies {
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The common name is required."))]
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub conservation_state_id: Option<i32>,
    pub zone_id: Option<i32>,
    pub active: bool,
}

impl Default for TreeSpecies {
    fn default() -> Self {
        Self {
            id: 0,
            common_name: String::new(),
            scientific_name: None,
            conservation_state_id: None,
            zone_id: None,
            active: true,
        }
    }
}

impl TreeSpecies {
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            ..Self::default()
        }
    }

    /// Whether a conservation state has been assigned.
    pub fn in_conservation(&self) -> bool {
        self.conservation_state_id.is_some()
    }
}

impl CatalogRecord for TreeSpecies {
    const LABEL: &'static str = "Tree species";
    const FIELD_ORDER: &'static [&'static str] = &["common_name"];
    const UNIQUE_NAME: Option<DuplicateName> = Some(DuplicateName {
        on_create: MSG_SPECIES_DUPLICATE,
        on_update: MSG_SPECIES_DUPLICATE_OTHER,
    });

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.common_name
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

    fn for_insert(self) -> Self {
        TreeSpecies {
            common_name: self.common_name.trim().to_string(),
            ..self
        }
    }

    fn replacing(self, _stored: &Self) -> Self {
        self.for_insert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MSG_COMMON_NAME_REQUIRED;
    use crate::DomainError;

    #[test]
    fn common_name_is_required() {
        let species = TreeSpecies::new("");
        assert_eq!(
            species.check(),
            Err(DomainError::validation(MSG_COMMON_NAME_REQUIRED))
        );
    }

    #[test]
    fn optional_references_do_not_fail_validation() {
        let species = TreeSpecies::new("Ceibo");
        assert!(species.check().is_ok());
        assert!(!species.in_conservation());
    }

    #[test]
    fn name_comparison_ignores_case() {
        let species = TreeSpecies::new("Guayacán");
        assert!(species.same_name("guayacán"));
        assert!(species.same_name(" GUAYACÁN "));
        assert!(!species.same_name("Guayacan"));
    }
}
