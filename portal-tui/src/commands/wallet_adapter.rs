// Wallet command adapter: balance and ledger history.

use crate::render;
use portal_common::models::Session;
use portal_common_ui::commands::wallet::WalletCommands;
use portal_common_ui::ApiClient;

/// Two-decimal balance; any failure renders the placeholder glyph.
pub async fn handle_balance(client: &ApiClient, session: &Session) -> String {
    match WalletCommands::balance(client, session.id).await {
        Ok(result) => render::balance_line(Some(result.data.saldo)),
        Err(_) => render::balance_line(None),
    }
}

/// Ledger history; any failure renders a single error line in place of the
/// list.
pub async fn handle_history(client: &ApiClient, session: &Session) -> String {
    match WalletCommands::history(client, session.id).await {
        Ok(result) => render::history_section(&result.data),
        Err(_) => render::HISTORY_ERROR_LINE.to_string(),
    }
}
