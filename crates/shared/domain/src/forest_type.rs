//! Forest type of a zone.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Kind of forest covering a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForestType {
    Dry,
    HumidTropical,
    Montane,
    Mangrove,
    Other,
}

impl ForestType {
    pub const ALL: [ForestType; 5] = [
        ForestType::Dry,
        ForestType::HumidTropical,
        ForestType::Montane,
        ForestType::Mangrove,
        ForestType::Other,
    ];

    /// Name shown in forms and stored in the `tipo_bosque` column.
    pub fn display_name(&self) -> &'static str {
        match self {
            ForestType::Dry => "Seco",
            ForestType::HumidTropical => "Húmedo Tropical",
            ForestType::Montane => "Montano",
            ForestType::Mangrove => "Manglar",
            ForestType::Other => "Otro",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            ForestType::Dry => "Dry",
            ForestType::HumidTropical => "HumidTropical",
            ForestType::Montane => "Montane",
            ForestType::Mangrove => "Mangrove",
            ForestType::Other => "Other",
        }
    }

    /// Parse free text coming from a form or an RPC call.
    ///
    /// Matching is case-insensitive against the display names and the variant
    /// names. Anything else, blank input included, becomes [`ForestType::Other`].
    pub fn parse(text: &str) -> ForestType {
        let wanted = text.trim().to_lowercase();
        let found = Self::ALL.into_iter().find(|kind| {
            kind.display_name().to_lowercase() == wanted
                || kind.variant_name().to_lowercase() == wanted
        });

        match found {
            Some(kind) => kind,
            None => {
                warn!(input = %text, "Unrecognized forest type, falling back to Other");
                ForestType::Other
            }
        }
    }
}

impl From<&str> for ForestType {
    fn from(s: &str) -> Self {
        ForestType::parse(s)
    }
}

impl fmt::Display for ForestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
