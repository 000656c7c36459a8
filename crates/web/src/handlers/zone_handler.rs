//! Zone page.

use std::sync::Arc;

use common::AppError;
use domain::{ForestType, Zone};
use forest_service_lib::service::{CatalogService, Services};

use super::catalog_handler::{CatalogPage, Reference};
use crate::extractors::{FieldErrors, FormFields};

pub const MSG_AREA_INVALID: &str = "Invalid area value.";

pub struct ZonesPage;

impl CatalogPage for ZonesPage {
    type Record = Zone;

    const PATH: &'static str = "/zones";
    const LIST_VIEW: &'static str = "zones";
    const FORM_VIEW: &'static str = "zones_form";
    const REFERENCES: &'static [Reference] = &[Reference::ForestTypes];

    fn service(services: &Services) -> Arc<dyn CatalogService<Zone>> {
        services.zones()
    }

    /// The forest type always parses: missing, blank and unknown values
    /// become `Otro`.
    fn from_form(form: &FormFields) -> (Zone, Option<AppError>) {
        let mut errors = FieldErrors::default();
        let zone = Zone {
            id: errors.keep(form.record_id()),
            name: form.text("nombre"),
            forest_type: Some(ForestType::parse(form.get("tipoBosque").unwrap_or_default())),
            area_ha: errors.keep(form.decimal("areaHa", MSG_AREA_INVALID)),
            active: true,
        };
        (zone, errors.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn zone_form_parses_display_names_and_comma_areas() {
        let (zone, error) = ZonesPage::from_form(&form(&[
            ("id", "3"),
            ("nombre", "Bosque Norte"),
            ("tipoBosque", "húmedo tropical"),
            ("areaHa", "1,75"),
        ]));

        assert!(error.is_none());
        assert_eq!(zone.id, 3);
        assert_eq!(zone.forest_type, Some(ForestType::HumidTropical));
        assert_eq!(zone.area_ha, Some(1.75));
    }

    #[test]
    fn missing_blank_or_unknown_forest_type_is_other() {
        for pairs in [
            &[("nombre", "Sur"), ("areaHa", "2")][..],
            &[("nombre", "Sur"), ("tipoBosque", ""), ("areaHa", "2")][..],
            &[("nombre", "Sur"), ("tipoBosque", "bogus"), ("areaHa", "2")][..],
        ] {
            let (zone, error) = ZonesPage::from_form(&form(pairs));
            assert!(error.is_none());
            assert_eq!(zone.forest_type, Some(ForestType::Other));
        }
    }

    #[test]
    fn unparsable_area_keeps_the_other_fields() {
        let (zone, error) = ZonesPage::from_form(&form(&[
            ("nombre", "Sur"),
            ("tipoBosque", "Seco"),
            ("areaHa", "mucho"),
        ]));

        assert_eq!(error.unwrap().user_message(), MSG_AREA_INVALID);
        assert_eq!(zone.name, "Sur");
        assert_eq!(zone.forest_type, Some(ForestType::Dry));
        assert_eq!(zone.area_ha, None);
    }
}
