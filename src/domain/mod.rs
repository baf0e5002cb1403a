//! Domain types for the client intake form.

pub mod client_details;
pub mod deep_link;
pub mod types;
