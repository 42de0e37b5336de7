use crate::{ApiClient, CommandError, CommandResult};
use portal_common::models::{LedgerEntry, WalletBalance};
use portal_common::Error;
use tracing::error;

pub struct WalletCommands;

impl WalletCommands {
    pub async fn balance(
        client: &ApiClient,
        student_id: i64,
    ) -> Result<CommandResult<WalletBalance>, CommandError> {
        match client.get_wallet(student_id).await {
            Ok(wallet) => Ok(CommandResult::new(wallet)),
            Err(Error::Api { status, body }) => {
                error!("balance load failed: HTTP {status} => {body}");
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("balance load failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }

    /// Loads the append-only ledger. A non-array payload already comes back
    /// from the client as an empty list.
    pub async fn history(
        client: &ApiClient,
        student_id: i64,
    ) -> Result<CommandResult<Vec<LedgerEntry>>, CommandError> {
        match client.get_ledger(student_id).await {
            Ok(entries) => Ok(CommandResult::new(entries)),
            Err(Error::Api { status, body }) => {
                error!("history load failed: HTTP {status} => {body}");
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("history load failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }
}
