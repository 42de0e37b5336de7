// File: portal-tui/src/commands/mod.rs

use crate::email::EmailDispatcher;
use crate::help;
use crate::tui_module::PortalTuiModule;
use crate::InputLines;
use portal_common::models::Session;
use portal_common_ui::{ApiClient, SessionStore};
use std::io::{stdout, Write};
use std::sync::Arc;
use tracing::error;

pub mod auth_adapter;
pub mod benefit_adapter;
pub mod profile_adapter;
pub mod wallet_adapter;

/// What the dashboard loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSignal {
    Continue,
    /// Session ended (logout or account deletion); back to the login screen.
    Logout,
    Quit,
}

/// Reads one line of interactive input under a label. `None` means EOF.
pub(crate) async fn prompt(reader: &mut InputLines, label: &str) -> Option<String> {
    print!("{label} ");
    let _ = stdout().flush();
    match reader.next_line().await {
        Ok(Some(line)) => Some(line),
        Ok(None) => None,
        Err(e) => {
            error!("failed reading input: {e}");
            None
        }
    }
}

pub async fn dispatch(
    line: &str,
    client: &ApiClient,
    store: &SessionStore,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
    email: Option<&EmailDispatcher>,
    reader: &mut InputLines,
) -> (DashboardSignal, Option<String>) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return (DashboardSignal::Continue, None);
    }
    let cmd = parts[0].to_lowercase();
    let args = &parts[1..];

    match cmd.as_str() {
        "help" | "ajuda" => {
            let subcmd = args.first().copied().unwrap_or("");
            (DashboardSignal::Continue, Some(help::show_command_help(subcmd)))
        }

        "perfil" => {
            let msg = profile_adapter::handle_show_profile(client, session, tui).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "salvar" => {
            let msg = profile_adapter::handle_save(client, session, tui, reader).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "excluir" => profile_adapter::handle_delete(client, store, session, reader).await,

        "saldo" => {
            let msg = wallet_adapter::handle_balance(client, session).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "historico" => {
            let msg = wallet_adapter::handle_history(client, session).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "beneficios" => {
            let msg = benefit_adapter::handle_catalog(client, tui).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "resgatar" => {
            let msg = benefit_adapter::handle_redeem(args, client, session, tui, email).await;
            (DashboardSignal::Continue, Some(msg))
        }

        "sair" => {
            if let Err(e) = store.clear() {
                error!("failed to clear session: {e}");
            }
            (DashboardSignal::Logout, Some("Sessão encerrada.".to_string()))
        }

        "quit" => (DashboardSignal::Quit, Some("Fechando o cliente...".to_string())),

        _ => {
            let msg = format!("Comando desconhecido '{}'. Digite 'help' para ver os comandos.", cmd);
            (DashboardSignal::Continue, Some(msg))
        }
    }
}
