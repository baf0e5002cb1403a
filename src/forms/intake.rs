use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::client_details::{ClientDetails, ClientField};
use crate::domain::deep_link::{LinkOpener, WhatsAppLink};
use crate::domain::types::WhatsAppNumber;
use crate::forms::{FieldErrors, FormError};

/// Rejects values that are empty after trimming.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
/// Raw values posted by the intake page or the JSON API.
pub struct ClientDetailsForm {
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "not_blank"))]
    pub id_passport: String,
    #[validate(custom(function = "not_blank"))]
    pub dl_number: String,
    #[validate(custom(function = "not_blank"))]
    pub citizenship: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub phone_number: String,
}

impl ClientDetailsForm {
    pub fn value(&self, field: ClientField) -> &str {
        match field {
            ClientField::FullName => &self.full_name,
            ClientField::IdPassport => &self.id_passport,
            ClientField::DlNumber => &self.dl_number,
            ClientField::Citizenship => &self.citizenship,
            ClientField::Address => &self.address,
            ClientField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: ClientField, value: String) {
        let slot = match field {
            ClientField::FullName => &mut self.full_name,
            ClientField::IdPassport => &mut self.id_passport,
            ClientField::DlNumber => &mut self.dl_number,
            ClientField::Citizenship => &mut self.citizenship,
            ClientField::Address => &mut self.address,
            ClientField::PhoneNumber => &mut self.phone_number,
        };
        *slot = value;
    }
}

impl TryFrom<&ClientDetailsForm> for ClientDetails {
    type Error = FieldErrors;

    /// Runs the required-field rules over every field at once. Trimming only
    /// decides blankness; the record keeps the values as typed.
    fn try_from(form: &ClientDetailsForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(ClientDetails {
            full_name: form.full_name.clone(),
            id_passport: form.id_passport.clone(),
            dl_number: form.dl_number.clone(),
            citizenship: form.citizenship.clone(),
            address: form.address.clone(),
            phone_number: form.phone_number.clone(),
        })
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IntakeState {
    Editing,
    /// The link was handed off; the next edit returns to `Editing`.
    Submitted,
}

/// In-memory intake record plus the errors from the last validation pass.
#[derive(Clone, Debug)]
pub struct IntakeForm {
    destination: WhatsAppNumber,
    values: ClientDetailsForm,
    errors: FieldErrors,
    state: IntakeState,
}

impl IntakeForm {
    /// An empty form addressed to `destination`.
    pub fn new(destination: WhatsAppNumber) -> Self {
        Self::with_values(destination, ClientDetailsForm::default())
    }

    /// A form pre-filled with posted values and no recorded errors.
    pub fn with_values(destination: WhatsAppNumber, values: ClientDetailsForm) -> Self {
        Self {
            destination,
            values,
            errors: FieldErrors::new(),
            state: IntakeState::Editing,
        }
    }

    pub fn destination(&self) -> &WhatsAppNumber {
        &self.destination
    }

    pub fn values(&self) -> &ClientDetailsForm {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// Overwrites one value and clears that field's error, if any.
    pub fn update_field(&mut self, field: ClientField, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.errors.remove(field);
        self.state = IntakeState::Editing;
    }

    /// Same as [`IntakeForm::update_field`], addressing the field by its form name.
    pub fn update_named_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name
            .parse::<ClientField>()
            .map_err(|_| FormError::UnknownField(name.to_string()))?;
        self.update_field(field, value);
        Ok(())
    }

    /// Checks every field in one pass and replaces the error map with the
    /// result. Returns `true` when nothing failed.
    pub fn validate(&mut self) -> bool {
        self.checked_details().is_some()
    }

    fn checked_details(&mut self) -> Option<ClientDetails> {
        match ClientDetails::try_from(&self.values) {
            Ok(details) => {
                self.errors = FieldErrors::new();
                Some(details)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Validates, then formats the message and hands the deep link to
    /// `opener`. On failure nothing is opened and the errors stay recorded.
    pub fn submit<O>(&mut self, opener: &O) -> Result<WhatsAppLink, FormError>
    where
        O: LinkOpener + ?Sized,
    {
        let Some(details) = self.checked_details() else {
            return Err(FormError::Validation(self.errors.clone()));
        };

        let link = WhatsAppLink::new(&self.destination, &details);
        opener.open(link.as_str());
        self.state = IntakeState::Submitted;

        Ok(link)
    }
}
