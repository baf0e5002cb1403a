//! DTOs shaped for the intake templates and the JSON API.

use serde::Serialize;

use crate::domain::client_details::ClientField;
use crate::domain::deep_link::WhatsAppLink;
use crate::forms::FieldErrors;
use crate::forms::intake::{ClientDetailsForm, IntakeForm};

/// One input as the template renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
    /// Spans both grid columns.
    pub wide: bool,
}

impl FieldView {
    fn new(field: ClientField, values: &ClientDetailsForm, errors: &FieldErrors) -> Self {
        Self {
            name: field.name(),
            label: field.form_label(),
            placeholder: field.placeholder(),
            input_type: match field {
                ClientField::PhoneNumber => "tel",
                _ => "text",
            },
            value: values.value(field).to_string(),
            error: errors.get(field).map(str::to_string),
            wide: matches!(field, ClientField::Address | ClientField::PhoneNumber),
        }
    }
}

/// Data required to render `intake/index.html`.
#[derive(Debug, Serialize)]
pub struct IntakePageData {
    pub fields: Vec<FieldView>,
    pub has_errors: bool,
}

impl IntakePageData {
    pub fn new(values: &ClientDetailsForm, errors: &FieldErrors) -> Self {
        Self {
            fields: ClientField::ALL
                .iter()
                .map(|&field| FieldView::new(field, values, errors))
                .collect(),
            has_errors: !errors.is_empty(),
        }
    }
}

impl From<&IntakeForm> for IntakePageData {
    fn from(form: &IntakeForm) -> Self {
        Self::new(form.values(), form.errors())
    }
}

/// Successful JSON API response.
#[derive(Debug, Serialize)]
pub struct IntakeAccepted {
    pub url: String,
    pub message: String,
}

impl From<WhatsAppLink> for IntakeAccepted {
    fn from(link: WhatsAppLink) -> Self {
        Self {
            message: link.message().to_string(),
            url: link.into_inner(),
        }
    }
}

/// Validation failure returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct IntakeRejected {
    pub errors: FieldErrors,
}
