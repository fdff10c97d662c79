//! Payment reminder composition.
//!
//! The reminder itself is just a string the operator reviews and edits
//! before sending; delivery happens through a WhatsApp deep link opened by
//! the embedding application.

use anyhow::Result;
use log::info;

use crate::domain::models::client::Client;

/// Reminder service that composes payment reminder messages and links
#[derive(Clone, Default)]
pub struct ReminderService;

impl ReminderService {
    pub fn new() -> Self {
        Self
    }

    /// Starting text for the reminder dialog. The operator fills in their
    /// own payment details before sending.
    pub fn default_message(&self) -> String {
        "🔔 Payment reminder\n\
         Hello! Your IPTV plan is close to its due date.\n\n\
         After paying, send the receipt to confirm and renew your subscription. ✅"
            .to_string()
    }

    /// Build the WhatsApp deep link for `client` with `message` pre-filled.
    /// Fails when the client has no contact number.
    pub fn whatsapp_url(&self, client: &Client, message: &str) -> Result<String> {
        if client.contact.is_empty() {
            return Err(anyhow::anyhow!(
                "Client '{}' has no contact number",
                client.name
            ));
        }

        let url = format!(
            "https://wa.me/{}?text={}",
            client.contact,
            urlencoding::encode(message)
        );

        info!("Composed reminder link for client {}", client.id);

        Ok(url)
    }
}
