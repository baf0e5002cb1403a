//! Client identity details collected by the intake form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// First line of every outgoing message.
pub const MESSAGE_HEADING: &str = "Shilaabo Car Hire - Client Details";

/// The six required attributes, in message order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientField {
    FullName,
    IdPassport,
    DlNumber,
    Citizenship,
    Address,
    PhoneNumber,
}

impl ClientField {
    pub const ALL: [ClientField; 6] = [
        ClientField::FullName,
        ClientField::IdPassport,
        ClientField::DlNumber,
        ClientField::Citizenship,
        ClientField::Address,
        ClientField::PhoneNumber,
    ];

    /// Name used for the HTML input and the JSON payload key.
    pub const fn name(self) -> &'static str {
        match self {
            ClientField::FullName => "full_name",
            ClientField::IdPassport => "id_passport",
            ClientField::DlNumber => "dl_number",
            ClientField::Citizenship => "citizenship",
            ClientField::Address => "address",
            ClientField::PhoneNumber => "phone_number",
        }
    }

    /// Label preceding the value in the outgoing message.
    pub const fn message_label(self) -> &'static str {
        match self {
            ClientField::FullName => "Full Name",
            ClientField::IdPassport => "ID/Passport",
            ClientField::DlNumber => "Driving License",
            ClientField::Citizenship => "Citizenship",
            ClientField::Address => "Address",
            ClientField::PhoneNumber => "Phone Number",
        }
    }

    /// Label shown next to the input on the page.
    pub const fn form_label(self) -> &'static str {
        match self {
            ClientField::FullName => "Full Name",
            ClientField::IdPassport => "ID / Passport Number",
            ClientField::DlNumber => "Driving License Number",
            ClientField::Citizenship => "Citizenship",
            ClientField::Address => "Residential Address",
            ClientField::PhoneNumber => "Phone Number",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            ClientField::FullName => "John Doe",
            ClientField::IdPassport => "123456789",
            ClientField::DlNumber => "DL123456",
            ClientField::Citizenship => "Kenya",
            ClientField::Address => "123 Main Street, Nairobi",
            ClientField::PhoneNumber => "+254 792 837 410",
        }
    }

    /// Message recorded when the field is blank on submit.
    pub const fn required_message(self) -> &'static str {
        match self {
            ClientField::FullName => "Full name is required",
            ClientField::IdPassport => "ID/Passport number is required",
            ClientField::DlNumber => "Driving license number is required",
            ClientField::Citizenship => "Citizenship is required",
            ClientField::Address => "Residential address is required",
            ClientField::PhoneNumber => "Phone number is required",
        }
    }
}

impl Display for ClientField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClientField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TypeConstraintError::UnknownField(s.to_string()))
    }
}

/// A submittable record. Built from a form that passed validation, so no
/// attribute is blank; values are kept exactly as typed.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ClientDetails {
    pub full_name: String,
    pub id_passport: String,
    pub dl_number: String,
    pub citizenship: String,
    pub address: String,
    pub phone_number: String,
}

impl ClientDetails {
    /// Borrow the value stored for `field`.
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

    /// Renders the plain-text message: heading, blank line, then one
    /// `Label: value` line per field.
    pub fn message(&self) -> String {
        let lines = ClientField::ALL
            .iter()
            .map(|&field| format!("{}: {}", field.message_label(), self.value(field)))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{MESSAGE_HEADING}\n\n{lines}")
    }
}
