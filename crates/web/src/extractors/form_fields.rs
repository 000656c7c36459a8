//! Form field extractor.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};

use tracing::warn;

use common::{AppError, AppResult};

pub const MSG_FORM_UNREADABLE: &str = "The submitted form could not be read.";

/// Raw fields of a form submission.
///
/// Fields are looked up by their HTML name. A field that is absent and a
/// field that was submitted empty are told apart only where it matters:
/// checkboxes, where presence alone means "checked".
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Checkbox semantics: checked iff the field was sent at all.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Text value; absent fields read as empty.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Text value; absent and blank fields read as `None`.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
    }

    /// Integer value; absent and empty fields read as `None`.
    pub fn optional_int(&self, key: &str) -> AppResult<Option<i32>> {
        match self.get(key).map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| AppError::bad_request(format!("Invalid {}: {}", key, value))),
            None => Ok(None),
        }
    }

    /// Decimal value accepting `,` as the decimal separator.
    pub fn decimal(&self, key: &str, invalid: &str) -> AppResult<Option<f64>> {
        match self.get(key).map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(Some)
                .ok_or_else(|| AppError::validation(invalid)),
            None => Ok(None),
        }
    }

    /// Id of the submitted record; absent, empty and `"0"` mean a new record.
    pub fn record_id(&self) -> AppResult<i32> {
        match self.get("id").map(str::trim) {
            None | Some("") | Some("0") => Ok(0),
            Some(raw) => super::parse_id(Some(raw)),
        }
    }
}

/// First parse failure met while reading a record out of a form.
///
/// Failing fields read as their default so the rest of the record keeps what
/// the user typed.
#[derive(Debug, Default)]
pub struct FieldErrors(Option<AppError>);

impl FieldErrors {
    pub fn keep<T: Default>(&mut self, value: AppResult<T>) -> T {
        value.unwrap_or_else(|err| {
            self.0.get_or_insert(err);
            T::default()
        })
    }

    pub fn first(self) -> Option<AppError> {
        self.0
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| {
                warn!(reason = %e.body_text(), "Rejected form body");
                AppError::bad_request(MSG_FORM_UNREADABLE)
            })?;

        Ok(FormFields(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn optional_ints_are_only_set_when_present_and_non_empty() {
        let fields = form(&[("zonaId", ""), ("tipoActividadId", "4")]);
        assert_eq!(fields.optional_int("zonaId").unwrap(), None);
        assert_eq!(fields.optional_int("estadoConservacionId").unwrap(), None);
        assert_eq!(fields.optional_int("tipoActividadId").unwrap(), Some(4));

        let err = form(&[("zonaId", "abc")]).optional_int("zonaId").unwrap_err();
        assert_eq!(err.user_message(), "Invalid zonaId: abc");
    }

    #[test]
    fn checkbox_presence_means_checked() {
        assert!(form(&[("activo", "")]).has("activo"));
        assert!(form(&[("activo", "on")]).has("activo"));
        assert!(!form(&[]).has("activo"));
    }

    #[test]
    fn decimal_accepts_comma_separator() {
        let fields = form(&[("areaHa", "12,5")]);
        assert_eq!(fields.decimal("areaHa", "bad").unwrap(), Some(12.5));

        let err = form(&[("areaHa", "doce")]).decimal("areaHa", "bad").unwrap_err();
        assert_eq!(err.user_message(), "bad");
        assert_eq!(form(&[("areaHa", " ")]).decimal("areaHa", "bad").unwrap(), None);
    }

    #[test]
    fn field_errors_keep_only_the_first_failure() {
        let fields = form(&[("id", "x"), ("zonaId", "abc"), ("tipoActividadId", "2")]);
        let mut errors = FieldErrors::default();

        assert_eq!(errors.keep(fields.record_id()), 0);
        assert_eq!(errors.keep(fields.optional_int("zonaId")), None);
        assert_eq!(errors.keep(fields.optional_int("tipoActividadId")), Some(2));
        assert_eq!(errors.first().unwrap().user_message(), "Invalid id: x");

        assert!(FieldErrors::default().first().is_none());
    }

    #[test]
    fn blank_or_zero_id_means_create() {
        assert_eq!(form(&[]).record_id().unwrap(), 0);
        assert_eq!(form(&[("id", "")]).record_id().unwrap(), 0);
        assert_eq!(form(&[("id", "0")]).record_id().unwrap(), 0);
        assert_eq!(form(&[("id", "12")]).record_id().unwrap(), 12);
        assert!(form(&[("id", "x")]).record_id().is_err());
    }
}
