//! Activity type catalog record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{not_blank, CatalogRecord};

/// Category of conservation activity (reforestation, patrol, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ActivityType {
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The activity type name is required."))]
    pub name: String,
    #[validate(custom(
        function = "not_blank",
        message = "The activity type description is required."
    ))]
    pub description: String,
    pub active: bool,
}

impl Default for ActivityType {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            active: true,
        }
    }
}

impl CatalogRecord for ActivityType {
    const LABEL: &'static str = "Activity type";
    const FIELD_ORDER: &'static [&'static str] = &["name", "description"];

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        MSG_ACTIVITY_TYPE_DESCRIPTION_REQUIRED, MSG_ACTIVITY_TYPE_NAME_REQUIRED,
    };
    use crate::DomainError;

    #[test]
    fn name_and_description_are_required() {
        let empty = ActivityType::default();
        assert_eq!(
            empty.check(),
            Err(DomainError::validation(MSG_ACTIVITY_TYPE_NAME_REQUIRED))
        );

        let no_description = ActivityType {
            name: "Patrullaje".into(),
            ..ActivityType::default()
        };
        assert_eq!(
            no_description.check(),
            Err(DomainError::validation(MSG_ACTIVITY_TYPE_DESCRIPTION_REQUIRED))
        );
    }
}
