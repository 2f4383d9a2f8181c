//! Telegram delivery: send messages via the Bot API sendMessage method

use crate::notify::{DeliveryError, Notifier};
use async_trait::async_trait;
use reqwest::Client;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";

/// Telegram notification sink (sendMessage). Recipient chat fixed at
/// construction. Never log the token.
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramNotifier {
    /// Create a sink delivering to `chat_id`, authorized by `token`.
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            token,
            chat_id,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}{}/sendMessage", TELEGRAM_API_BASE, self.token);
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });
        let res = self.client.post(&url).json(&body).send().await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let err_body = res.text().await.unwrap_or_default();
            return Err(DeliveryError::Api {
                status,
                body: err_body,
            });
        }
        Ok(())
    }
}
