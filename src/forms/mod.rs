//! Form definitions backing the intake routes.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::client_details::ClientField;

pub mod intake;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(FieldErrors),

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Per-field error messages, populated only for fields that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ClientField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the fixed "is required" message for `field`.
    pub fn require(&mut self, field: ClientField) {
        self.0.insert(field, field.required_message().to_string());
    }

    pub fn remove(&mut self, field: ClientField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: ClientField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ClientField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in message order.
    pub fn fields(&self) -> impl Iterator<Item = ClientField> + '_ {
        self.0.keys().copied()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.fields().map(ClientField::name).collect::<Vec<_>>();
        write!(f, "missing {}", names.join(", "))
    }
}

/// Every rule on the intake form is "required", so each failing field gets
/// its [`ClientField::required_message`].
impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut result = FieldErrors::new();

        for name in errors.field_errors().keys() {
            if let Ok(field) = name.parse::<ClientField>() {
                result.require(field);
            }
        }

        result
    }
}
