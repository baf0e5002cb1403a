//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::WhatsAppNumber;

fn default_assets_dir() -> String {
    "./assets".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Tera glob, e.g. `templates/**/*`.
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Destination of the deep link: country code and digits, no `+`.
    pub whatsapp_number: WhatsAppNumber,
}
