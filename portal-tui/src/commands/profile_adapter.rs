// Profile command adapter: show, edit/save, delete account.

use crate::commands::{prompt, DashboardSignal};
use crate::render;
use crate::tui_module::PortalTuiModule;
use crate::InputLines;
use portal_common::models::{Session, StudentProfile};
use portal_common_ui::commands::profile::ProfileCommands;
use portal_common_ui::{ApiClient, CommandError, SessionStore};
use std::sync::Arc;
use tracing::error;

pub async fn handle_show_profile(
    client: &ApiClient,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
) -> String {
    match ProfileCommands::load(client, session.id).await {
        Ok(result) => {
            tui.remember_profile(&result.data);
            render::profile_section(&result.data)
        }
        // Background-load policy: the detail is already logged; the fields
        // just stay as they were (blank on first load).
        Err(_) => render::profile_section(&tui.profile().unwrap_or_default()),
    }
}

async fn prompt_field(reader: &mut InputLines, label: &str, current: &str) -> Option<String> {
    let line = prompt(reader, &format!("{label} [{current}]:")).await?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Some(current.to_string())
    } else {
        Some(trimmed.to_string())
    }
}

/// Edits the three profile fields (Enter keeps the current value) and PUTs
/// them. Server detail is surfaced on failure.
pub async fn handle_save(
    client: &ApiClient,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
    reader: &mut InputLines,
) -> String {
    let current = tui.profile().unwrap_or_default();

    let Some(nome) = prompt_field(reader, "Nome", &current.nome).await else {
        return "Edição cancelada.".to_string();
    };
    let Some(curso) = prompt_field(reader, "Curso", &current.curso).await else {
        return "Edição cancelada.".to_string();
    };
    let Some(email) = prompt_field(reader, "E-mail", &current.email).await else {
        return "Edição cancelada.".to_string();
    };

    let updated = StudentProfile { nome, curso, email };
    match ProfileCommands::save(client, session.id, &updated).await {
        Ok(_) => {
            tui.remember_profile(&updated);
            "Dados atualizados!".to_string()
        }
        Err(CommandError::ApiError(detail)) => format!("Erro ao salvar {detail}"),
        Err(e) => {
            error!("profile save failed: {e}");
            "Falha ao salvar.".to_string()
        }
    }
}

/// Deletes the account after interactive confirmation. On success the
/// session is gone and the dashboard signals a return to the login screen.
pub async fn handle_delete(
    client: &ApiClient,
    store: &SessionStore,
    session: &Session,
    reader: &mut InputLines,
) -> (DashboardSignal, Option<String>) {
    let Some(answer) = prompt(reader, "Tem certeza? Esta ação é irreversível. (s/N):").await else {
        return (DashboardSignal::Continue, Some("Exclusão cancelada.".to_string()));
    };
    let answer = answer.trim().to_lowercase();
    if answer != "s" && answer != "sim" {
        return (DashboardSignal::Continue, Some("Exclusão cancelada.".to_string()));
    }

    match ProfileCommands::delete(client, store, session.id).await {
        Ok(_) => (DashboardSignal::Logout, Some("Conta excluída.".to_string())),
        Err(CommandError::ApiError(detail)) => (
            DashboardSignal::Continue,
            Some(format!("Erro ao excluir {detail}")),
        ),
        Err(e) => {
            error!("account deletion failed: {e}");
            (DashboardSignal::Continue, Some("Falha ao excluir.".to_string()))
        }
    }
}
