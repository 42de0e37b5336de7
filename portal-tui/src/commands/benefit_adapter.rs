// Benefit command adapter: catalog rendering and the redemption flow.

use crate::commands::wallet_adapter;
use crate::email::{EmailDispatcher, RedemptionReceipt};
use crate::qr;
use crate::render;
use crate::tui_module::PortalTuiModule;
use portal_common::models::Session;
use portal_common_ui::commands::benefit::BenefitCommands;
use portal_common_ui::{ApiClient, CommandError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Reloads the catalog, caches the per-card annotations and renders one card
/// per benefit (or the empty/error states).
pub async fn handle_catalog(client: &ApiClient, tui: &Arc<PortalTuiModule>) -> String {
    match BenefitCommands::catalog(client).await {
        Ok(result) => {
            tui.remember_benefits(&result.data);
            render::catalog_section(&result.data, |id| client.benefit_image_url(id))
        }
        Err(_) => render::CATALOG_ERROR_LINE.to_string(),
    }
}

/// The redemption flow: redeem call, confirmation, QR, email, card removal,
/// then one balance refresh and one history refresh. QR and email are each
/// optional and never fatal; a failed redeem call stops before any of them.
pub async fn handle_redeem(
    args: &[&str],
    client: &ApiClient,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
    email: Option<&EmailDispatcher>,
) -> String {
    let Some(arg) = args.first() else {
        return "Uso: resgatar <id>".to_string();
    };
    let Ok(benefit_id) = arg.parse::<i64>() else {
        return "Uso: resgatar <id> (id numérico)".to_string();
    };
    let Some(tag) = tui.benefit_tag(benefit_id) else {
        return format!(
            "Nenhum benefício com id {benefit_id} está listado. Use 'beneficios' para atualizar o catálogo."
        );
    };

    let outcome = match BenefitCommands::redeem(client, session.id, benefit_id).await {
        Ok(result) => result.data,
        Err(CommandError::ApiError(detail)) => {
            return format!("Falha ao resgatar {detail}");
        }
        Err(e) => {
            error!("redeem failed before a response arrived: {e}");
            return "Erro ao resgatar benefício.".to_string();
        }
    };

    let code = outcome
        .result
        .code
        .clone()
        .unwrap_or_else(|| render::PLACEHOLDER.to_string());
    let expires = render::format_expiry(outcome.result.expires_at);
    let titulo_api = outcome
        .result
        .benefit_title
        .clone()
        .unwrap_or_else(|| "Benefício".to_string());
    // The card annotation wins over the API title, like the web UI.
    let titulo = if tag.titulo.is_empty() { titulo_api } else { tag.titulo.clone() };

    let mut out = format!("{titulo} resgatado com sucesso!\n\nCódigo: {code}\nVálido até: {expires}\n");

    match qr::render(&code) {
        Ok(qr_block) => {
            tui.set_qr(qr_block.clone());
            out.push_str(&format!(
                "\n{titulo} • Código: {code} • Válido até: {expires}\n{qr_block}\n"
            ));
        }
        Err(e) => warn!("QR Code não pôde ser gerado: {e}"),
    }

    send_receipt(email, session, tui, tag.custo, &titulo, &code).await;

    tui.remove_benefit_card(benefit_id);

    out.push('\n');
    out.push_str(&wallet_adapter::handle_balance(client, session).await);
    out.push('\n');
    out.push_str(&wallet_adapter::handle_history(client, session).await);
    out
}

/// Best-effort confirmation email. Missing dispatcher or missing student
/// email just logs; a send error is logged and swallowed.
async fn send_receipt(
    email: Option<&EmailDispatcher>,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
    custo: i64,
    titulo: &str,
    code: &str,
) {
    let Some(dispatcher) = email else {
        warn!("envio de e-mail não configurado; confirmação não enviada");
        return;
    };

    let profile = tui.profile().unwrap_or_default();
    let aluno_nome = [profile.nome, session.nome.clone().unwrap_or_default()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| "Aluno".to_string());
    let Some(aluno_email) = [profile.email, session.email.clone().unwrap_or_default()]
        .into_iter()
        .find(|s| !s.is_empty())
    else {
        warn!("aluno sem e-mail cadastrado; confirmação não enviada");
        return;
    };

    let receipt = RedemptionReceipt {
        aluno_nome: aluno_nome.clone(),
        moedas: custo,
        beneficio: titulo.to_string(),
        codigo: code.to_string(),
        name: aluno_nome,
        email: aluno_email,
    };

    match dispatcher.send_redemption_receipt(&receipt).await {
        Ok(()) => info!("e-mail de confirmação enviado"),
        Err(e) => error!("erro ao enviar e-mail de confirmação: {e}"),
    }
}
