use crate::{ApiClient, CommandError, CommandResult};
use portal_common::models::{Benefit, RedemptionResult};
use portal_common::Error;
use tracing::{debug, error};

/// Outcome of a successful redeem call: the parsed result (all placeholders
/// when the body was empty or unparseable) plus the raw body for logging.
pub struct RedemptionOutcome {
    pub result: RedemptionResult,
    pub raw_body: String,
}

pub struct BenefitCommands;

impl BenefitCommands {
    pub async fn catalog(
        client: &ApiClient,
    ) -> Result<CommandResult<Vec<Benefit>>, CommandError> {
        match client.list_benefits().await {
            Ok(benefits) => Ok(CommandResult::new(benefits)),
            Err(Error::Api { status, body }) => {
                error!("benefit catalog load failed: HTTP {status} => {body}");
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("benefit catalog load failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }

    /// Performs the redeem call. A non-success status is an error carrying
    /// the raw body (the card stays, nothing else runs). On success the body
    /// is parsed best-effort and the flow continues with placeholders if the
    /// JSON is missing or malformed.
    pub async fn redeem(
        client: &ApiClient,
        student_id: i64,
        benefit_id: i64,
    ) -> Result<CommandResult<RedemptionOutcome>, CommandError> {
        let (status, body) = match client.redeem(student_id, benefit_id).await {
            Ok(pair) => pair,
            Err(e) => {
                error!("redeem request failed: {e}");
                return Err(CommandError::HttpError(e.to_string()));
            }
        };

        debug!("redeem raw response: {body}");

        if !status.is_success() {
            return Err(CommandError::ApiError(format!(
                "({}): {}",
                status.as_u16(),
                body
            )));
        }

        Ok(CommandResult::new(RedemptionOutcome {
            result: parse_redemption(&body),
            raw_body: body,
        }))
    }
}

/// Best-effort parse of the redeem response body. Empty or malformed JSON
/// yields the all-placeholder result instead of aborting the flow.
pub fn parse_redemption(body: &str) -> RedemptionResult {
    if body.trim().is_empty() {
        return RedemptionResult::default();
    }
    match serde_json::from_str::<RedemptionResult>(body) {
        Ok(result) => result,
        Err(e) => {
            error!("failed to parse redeem response JSON: {e}");
            RedemptionResult::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_redemption_handles_full_payload() {
        let r = parse_redemption(
            r#"{"code":"XY-99","expiresAt":"2026-09-01T12:00:00Z","benefitTitle":"Vale-lanche"}"#,
        );
        assert_eq!(r.code.as_deref(), Some("XY-99"));
        assert!(r.expires_at.is_some());
    }

    #[test]
    fn parse_redemption_treats_empty_body_as_placeholders() {
        let r = parse_redemption("");
        assert!(r.code.is_none());
        assert!(r.expires_at.is_none());
        assert!(r.benefit_title.is_none());
    }

    #[test]
    fn parse_redemption_treats_malformed_json_as_placeholders() {
        let r = parse_redemption("<html>erro interno</html>");
        assert!(r.code.is_none());
        let r = parse_redemption(r#"{"code": 12"#);
        assert!(r.code.is_none());
    }
}
