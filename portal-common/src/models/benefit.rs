// File: portal-common/src/models/benefit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One redeemable catalog entry from `GET /beneficios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub custo: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// `POST /alunos/{id}/redeem/{benefitId}` response. Every field is optional:
/// the redemption flow continues with placeholders when the body is empty or
/// unparseable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedemptionResult {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "benefitTitle")]
    pub benefit_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benefit_tolerates_missing_description_and_image() {
        let b: Benefit =
            serde_json::from_str(r#"{"id":3,"titulo":"Vale-lanche","custo":50}"#).unwrap();
        assert_eq!(b.id, 3);
        assert_eq!(b.descricao, None);
        assert_eq!(b.image, None);
    }

    #[test]
    fn redemption_result_parses_full_payload() {
        let r: RedemptionResult = serde_json::from_str(
            r#"{"code":"ABC123","expiresAt":"2026-09-01T12:00:00Z","benefitTitle":"Vale-lanche"}"#,
        )
        .unwrap();
        assert_eq!(r.code.as_deref(), Some("ABC123"));
        assert!(r.expires_at.is_some());
        assert_eq!(r.benefit_title.as_deref(), Some("Vale-lanche"));
    }

    #[test]
    fn redemption_result_defaults_to_empty() {
        let r = RedemptionResult::default();
        assert!(r.code.is_none() && r.expires_at.is_none() && r.benefit_title.is_none());
    }
}
