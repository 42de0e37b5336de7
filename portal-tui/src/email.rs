// File: portal-tui/src/email.rs
//
// Client-side transactional email via the EmailJS REST API, mirroring the
// web portal's redemption receipt. Send failures are the caller's to log;
// they never block or fail the redemption.

use portal_common::Error;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Template parameters for the redemption receipt. `name`/`email` are the
/// recipient fields the template expects; the rest fill the message body.
#[derive(Debug, Clone, Serialize)]
pub struct RedemptionReceipt {
    pub aluno_nome: String,
    pub moedas: i64,
    pub beneficio: String,
    pub codigo: String,
    pub name: String,
    pub email: String,
}

pub struct EmailDispatcher {
    http: Client,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailDispatcher {
    pub fn new(service_id: &str, template_id: &str, public_key: &str) -> Result<Self, Error> {
        let http = reqwest::ClientBuilder::new()
            .user_agent("moeda-portal/0.1")
            .build()?;
        Ok(Self {
            http,
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        })
    }

    pub async fn send_redemption_receipt(&self, receipt: &RedemptionReceipt) -> Result<(), Error> {
        let resp = self
            .http
            .post(EMAILJS_SEND_URL)
            .json(&json!({
                "service_id": self.service_id,
                "template_id": self.template_id,
                "user_id": self.public_key,
                "template_params": receipt,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_serializes_the_template_field_names() {
        let receipt = RedemptionReceipt {
            aluno_nome: "Ana".to_string(),
            moedas: 50,
            beneficio: "Vale-lanche".to_string(),
            codigo: "RSG-1".to_string(),
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
        };
        let v = serde_json::to_value(&receipt).unwrap();
        assert_eq!(v["aluno_nome"], "Ana");
        assert_eq!(v["moedas"], 50);
        assert_eq!(v["beneficio"], "Vale-lanche");
        assert_eq!(v["codigo"], "RSG-1");
        assert_eq!(v["email"], "a@b.com");
    }
}
