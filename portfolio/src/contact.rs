//! Contact form. Nothing is sent anywhere; submitting only acknowledges.

use tracing::{info, warn};

use crate::host::Notifier;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Shows `acknowledgement` exactly once, whatever the fields hold.
    pub fn submit(&self, notifier: &impl Notifier, acknowledgement: &str) {
        info!(
            name_len = self.name.len(),
            email_len = self.email.len(),
            message_len = self.message.len(),
            "contact form submitted"
        );
        if let Err(err) = notifier.acknowledge(acknowledgement) {
            warn!("acknowledgement dialog failed: {err}");
        }
    }
}
