//! Conservation activity catalog record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{not_blank, CatalogRecord};

/// A conservation activity carried out in a zone.
///
/// The date is kept as free text exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ConservationActivity {
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The activity name is required."))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "The activity date is required."))]
    pub date: String,
    #[validate(custom(
        function = "not_blank",
        message = "The responsable of the activity is required."
    ))]
    pub responsible: String,
    #[validate(
        required(message = "A valid activity type must be selected."),
        range(min = 1, message = "A valid activity type must be selected.")
    )]
    pub activity_type_id: Option<i32>,
    #[validate(
        required(message = "A valid zone must be selected."),
        range(min = 1, message = "A valid zone must be selected.")
    )]
    pub zone_id: Option<i32>,
    pub active: bool,
}

impl Default for ConservationActivity {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            date: String::new(),
            responsible: String::new(),
            activity_type_id: None,
            zone_id: None,
            active: true,
        }
    }
}

impl CatalogRecord for ConservationActivity {
    const LABEL: &'static str = "Conservation activity";
    const FIELD_ORDER: &'static [&'static str] =
        &["name", "date", "responsible", "activity_type_id", "zone_id"];

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
