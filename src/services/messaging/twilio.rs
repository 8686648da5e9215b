use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;

const WHATSAPP_PREFIX: &str = "whatsapp:";

pub struct TwilioWhatsAppProvider {
    account_sid: String,
    auth_token: String,
    from_number: String,
    client: reqwest::Client,
}

impl TwilioWhatsAppProvider {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number: whatsapp_address(&from_number),
            client: reqwest::Client::new(),
        }
    }
}

/// Twilio routes a message over WhatsApp only when both ends carry the
/// `whatsapp:` scheme.
pub fn whatsapp_address(number: &str) -> String {
    let number = number.trim();
    if number.starts_with(WHATSAPP_PREFIX) {
        number.to_string()
    } else {
        format!("{WHATSAPP_PREFIX}{number}")
    }
}

#[async_trait]
impl MessagingProvider for TwilioWhatsAppProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<String> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );
        let to = whatsapp_address(to);

        let data: serde_json::Value = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to.as_str()), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await
            .context("failed to send Twilio WhatsApp message")?
            .error_for_status()
            .context("Twilio API returned error")?
            .json()
            .await
            .context("failed to parse Twilio response")?;

        data["sid"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing sid in Twilio response"))
    }
}
