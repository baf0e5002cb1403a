//! WhatsApp deep link construction and the boundary used to open it.

use std::cell::RefCell;
use std::fmt::{Display, Formatter};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::domain::client_details::ClientDetails;
use crate::domain::types::WhatsAppNumber;

/// Base of every outgoing link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `text` for use as a URL query value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `https://wa.me/<number>?text=<encoded message>` for one set of details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WhatsAppLink {
    url: String,
    message: String,
}

impl WhatsAppLink {
    pub fn new(number: &WhatsAppNumber, details: &ClientDetails) -> Self {
        let message = details.message();
        let url = format!(
            "{WHATSAPP_BASE_URL}/{number}?text={}",
            encode_component(&message)
        );
        Self { url, message }
    }

    /// The full link.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The unencoded message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_inner(self) -> String {
        self.url
    }
}

impl Display for WhatsAppLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

/// Effectful boundary that hands a link to the outside world.
///
/// Opening is fire-and-forget: nothing reports whether the message was
/// delivered.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Records the link so the HTTP layer can pass it to the browser, which opens
/// it in a new browsing context.
#[derive(Debug, Default)]
pub struct BrowserHandoff {
    url: RefCell<Option<String>>,
}

impl BrowserHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the recorded link, leaving the hand-off empty.
    pub fn take_url(&self) -> Option<String> {
        self.url.borrow_mut().take()
    }
}

impl LinkOpener for BrowserHandoff {
    fn open(&self, url: &str) {
        self.url.replace(Some(url.to_string()));
    }
}
