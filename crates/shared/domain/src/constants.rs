//! Domain-level constants.
//!
//! These constants define roles and the user-facing rule messages.

// =============================================================================
// User Roles
// =============================================================================

/// Standard role: may browse every catalog but not change it
pub const ROLE_USUARIO: &str = "usuario";

/// Administrator role with write access to the catalogs
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USUARIO];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_ZONE_NAME_REQUIRED: &str = "The zone name is required.";
pub const MSG_FOREST_TYPE_REQUIRED: &str = "The forest type is required.";
pub const MSG_AREA_POSITIVE: &str = "The area must be greater than zero.";

pub const MSG_COMMON_NAME_REQUIRED: &str = "The common name is required.";
pub const MSG_SPECIES_DUPLICATE: &str = "An active species with that common name already exists.";
pub const MSG_SPECIES_DUPLICATE_OTHER: &str =
    "Another active species already uses that common name.";

pub const MSG_ACTIVITY_TYPE_NAME_REQUIRED: &str = "The activity type name is required.";
pub const MSG_ACTIVITY_TYPE_DESCRIPTION_REQUIRED: &str =
    "The activity type description is required.";

pub const MSG_ACTIVITY_NAME_REQUIRED: &str = "The activity name is required.";
pub const MSG_ACTIVITY_DATE_REQUIRED: &str = "The activity date is required.";
pub const MSG_ACTIVITY_RESPONSABLE_REQUIRED: &str = "The responsable of the activity is required.";
pub const MSG_ACTIVITY_TYPE_ID_INVALID: &str = "A valid activity type must be selected.";
pub const MSG_ACTIVITY_ZONE_ID_INVALID: &str = "A valid zone must be selected.";

pub const MSG_USERNAME_REQUIRED: &str = "The username is required.";
pub const MSG_PASSWORD_REQUIRED: &str = "The password is required.";
pub const MSG_ROLE_INVALID: &str = "The role must be admin or usuario.";
pub const MSG_USERNAME_DUPLICATE: &str = "A user with that username already exists.";

pub const MSG_ZONE_DUPLICATE: &str = "An active zone with that name already exists.";
