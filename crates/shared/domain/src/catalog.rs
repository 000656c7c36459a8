//! Shared behavior of the soft-deletable catalog records.

use std::fmt::Debug;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// Messages reported when a record's name collides with another active record.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateName {
    /// Reported when a new record would collide
    pub on_create: &'static str,
    /// Reported when an existing record would collide with another one
    pub on_update: &'static str,
}

/// A record kept in one of the catalog tables (zones, species, states,
/// activity types, activities).
///
/// Every catalog record has an integer id (`0` before the first insert), a
/// display name and a logical-delete flag.
pub trait CatalogRecord: Validate + Clone + Debug + Send + Sync + 'static {
    /// Entity label used in log lines and not-found messages
    const LABEL: &'static str;

    /// Fields in the order their rules are reported
    const FIELD_ORDER: &'static [&'static str];

    /// Case-insensitive name uniqueness among active records, when enforced
    const UNIQUE_NAME: Option<DuplicateName> = None;

    fn id(&self) -> i32;

    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Assign the id generated by the store.
    fn set_id(&mut self, id: i32);

    fn set_active(&mut self, active: bool);

    /// Row written by the first insert. Stored as given by default.
    fn for_insert(self) -> Self {
        self
    }

    /// Row written when this record replaces `stored`. The submitted record
    /// wins by default.
    fn replacing(self, _stored: &Self) -> Self {
        self
    }

    /// Run the field rules and report the first violation.
    fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|errors| DomainError::validation(first_violation(&errors, Self::FIELD_ORDER)))
    }

    /// True when `other` is the same name, ignoring case.
    fn same_name(&self, other: &str) -> bool {
        self.name().to_lowercase() == other.trim().to_lowercase()
    }
}

/// Pick the message of the first failing rule following `order`.
pub fn first_violation(errors: &ValidationErrors, order: &[&'static str]) -> String {
    let by_field = errors.field_errors();

    order
        .iter()
        .filter_map(|field| by_field.get(field))
        .chain(by_field.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string())
}

/// Field rule: text must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
