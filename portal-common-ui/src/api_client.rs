// File: portal-common-ui/src/api_client.rs

use portal_common::models::{Benefit, LedgerEntry, Role, Session, StudentProfile, WalletBalance};
use portal_common::Error;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::warn;

/// Typed REST client for the portal API. One of these is built at startup
/// from the configured base URL and shared by every page controller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::ClientBuilder::new()
            .user_agent("moeda-portal/0.1")
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads a non-success response's body text best-effort and returns it
    /// as an [`Error::Api`].
    async fn api_error(resp: reqwest::Response) -> Error {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Error::Api { status, body }
    }

    /// `POST /auth/login` with the submitted role. The response carries the
    /// authoritative role used for routing.
    pub async fn login(&self, role: Role, email: &str, senha: &str) -> Result<Session, Error> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "role": role, "email": email, "senha": senha }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json::<Session>().await?)
    }

    /// `POST /auth/reset-password`. The confirmation field never goes on the
    /// wire; callers validate it beforehand.
    pub async fn reset_password(
        &self,
        role: Role,
        email: &str,
        nova_senha: &str,
    ) -> Result<(), Error> {
        let resp = self
            .http
            .post(self.url("/auth/reset-password"))
            .json(&json!({ "role": role, "email": email, "novaSenha": nova_senha }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }

    pub async fn get_student(&self, id: i64) -> Result<StudentProfile, Error> {
        let resp = self.http.get(self.url(&format!("/alunos/{id}"))).send().await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json::<StudentProfile>().await?)
    }

    pub async fn update_student(&self, id: i64, profile: &StudentProfile) -> Result<(), Error> {
        let resp = self
            .http
            .put(self.url(&format!("/alunos/{id}")))
            .json(profile)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), Error> {
        let resp = self
            .http
            .delete(self.url(&format!("/alunos/{id}")))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }

    pub async fn get_wallet(&self, id: i64) -> Result<WalletBalance, Error> {
        let resp = self
            .http
            .get(self.url(&format!("/alunos/{id}/wallet")))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json::<WalletBalance>().await?)
    }

    /// `GET /alunos/{id}/ledger`. A non-array body is treated as an empty
    /// history rather than an error.
    pub async fn get_ledger(&self, id: i64) -> Result<Vec<LedgerEntry>, Error> {
        let resp = self
            .http
            .get(self.url(&format!("/alunos/{id}/ledger")))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let value = resp.json::<Value>().await?;
        Ok(ledger_from_value(value))
    }

    /// `GET /beneficios`, with the same non-array tolerance as the ledger.
    pub async fn list_benefits(&self) -> Result<Vec<Benefit>, Error> {
        let resp = self.http.get(self.url("/beneficios")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let value = resp.json::<Value>().await?;
        Ok(benefits_from_value(value))
    }

    pub fn benefit_image_url(&self, benefit_id: i64) -> String {
        self.url(&format!("/beneficios/{benefit_id}/image"))
    }

    /// `POST /alunos/{id}/redeem/{benefitId}`. The body is read exactly once
    /// and handed back raw together with the status; the caller decides how
    /// to parse it.
    pub async fn redeem(
        &self,
        student_id: i64,
        benefit_id: i64,
    ) -> Result<(StatusCode, String), Error> {
        let resp = self
            .http
            .post(self.url(&format!("/alunos/{student_id}/redeem/{benefit_id}")))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok((status, body))
    }
}

/// Converts a ledger response body into entries, treating anything that is
/// not an array as empty and skipping elements that do not parse.
pub fn ledger_from_value(value: Value) -> Vec<LedgerEntry> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<LedgerEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("skipping malformed ledger entry: {e}");
                    None
                }
            })
            .collect(),
        other => {
            warn!("ledger response was not an array: {other}");
            Vec::new()
        }
    }
}

/// Same tolerance for the benefit catalog.
pub fn benefits_from_value(value: Value) -> Vec<Benefit> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Benefit>(item) {
                Ok(benefit) => Some(benefit),
                Err(e) => {
                    warn!("skipping malformed benefit: {e}");
                    None
                }
            })
            .collect(),
        other => {
            warn!("benefit catalog response was not an array: {other}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.url("/beneficios"), "http://localhost:8080/api/beneficios");
        assert_eq!(
            client.benefit_image_url(3),
            "http://localhost:8080/api/beneficios/3/image"
        );
    }

    #[test]
    fn ledger_tolerates_non_array_payloads() {
        assert!(ledger_from_value(json!({"error": "boom"})).is_empty());
        assert!(ledger_from_value(json!(null)).is_empty());
        assert!(ledger_from_value(json!("texto")).is_empty());
    }

    #[test]
    fn ledger_skips_malformed_entries() {
        let entries = ledger_from_value(json!([
            {"ts": "2026-03-01T10:00:00Z", "kind": "CREDITO", "amount": 25.0, "reason": "tarefa"},
            42,
            {"ts": "2026-03-02T10:00:00Z", "kind": "DEBITO", "amount": 10.0}
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, "CREDITO");
        assert_eq!(entries[1].reason, None);
    }

    #[test]
    fn benefits_tolerate_non_array_payloads() {
        assert!(benefits_from_value(json!({"items": []})).is_empty());
        let benefits = benefits_from_value(json!([
            {"id": 1, "titulo": "Vale-lanche", "custo": 50}
        ]));
        assert_eq!(benefits.len(), 1);
        assert_eq!(benefits[0].titulo, "Vale-lanche");
    }
}
