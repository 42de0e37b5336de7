// Login-screen adapter: the login flow, the reset-password flow and their
// prompt loop. Routing after login follows the role the server returned,
// never the submitted one.

use crate::commands::prompt;
use crate::help;
use crate::notice::{toast, NoticeKind};
use crate::InputLines;
use portal_common::models::{Role, Session};
use portal_common_ui::commands::auth::AuthCommands;
use portal_common_ui::{ApiClient, CommandError, SessionStore};
use std::io::{stdout, Write};

/// Runs the login screen until a student session exists (`Some`) or the user
/// quits (`None`). Professor/empresa logins are stored but this client has
/// no portal for them, so the loop continues.
pub async fn run_login_screen(
    client: &ApiClient,
    store: &SessionStore,
    reader: &mut InputLines,
) -> anyhow::Result<Option<Session>> {
    println!("\nDigite 'login' para entrar, 'reset' para redefinir a senha, 'help' para ajuda.\n");

    loop {
        print!("login> ");
        stdout().flush()?;

        let Some(line) = reader.next_line().await? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_whitespace().next().unwrap_or("").to_lowercase().as_str() {
            "login" => {
                if let Some(session) = login_flow(client, store, reader).await {
                    return Ok(Some(session));
                }
            }
            "reset" => reset_flow(client, reader).await,
            "help" | "ajuda" => println!("{}", help::show_login_screen_help()),
            "quit" => return Ok(None),
            other => println!("Comando desconhecido '{other}'. Digite 'help'."),
        }
    }
}

async fn read_role(reader: &mut InputLines) -> Option<Role> {
    let input = prompt(reader, "Tipo de usuário (ALUNO/PROFESSOR/EMPRESA):").await?;
    let role = Role::parse(&input.trim().to_uppercase());
    if role == Role::Unknown {
        toast(NoticeKind::Warning, "Tipo de usuário inválido.");
        return None;
    }
    Some(role)
}

async fn login_flow(
    client: &ApiClient,
    store: &SessionStore,
    reader: &mut InputLines,
) -> Option<Session> {
    let role = read_role(reader).await?;
    let email = prompt(reader, "E-mail:").await?;
    let senha = prompt(reader, "Senha:").await?;

    match AuthCommands::login(client, store, role, &email, &senha).await {
        Ok(result) => {
            let session = result.data;
            match session.role() {
                Role::Aluno => {
                    toast(NoticeKind::Success, "Login realizado.");
                    Some(session)
                }
                Role::Professor => {
                    toast(
                        NoticeKind::Info,
                        "Portal do professor não está disponível neste cliente.",
                    );
                    None
                }
                Role::Empresa => {
                    toast(
                        NoticeKind::Info,
                        "Portal da empresa não está disponível neste cliente.",
                    );
                    None
                }
                Role::Unknown => {
                    toast(NoticeKind::Error, "Papel de usuário desconhecido.");
                    None
                }
            }
        }
        Err(CommandError::InvalidInput(msg)) => {
            toast(NoticeKind::Warning, &msg);
            None
        }
        Err(e) => {
            toast(NoticeKind::Error, &e.to_string());
            None
        }
    }
}

async fn reset_flow(client: &ApiClient, reader: &mut InputLines) {
    let Some(role) = read_role(reader).await else { return };
    let Some(email) = prompt(reader, "E-mail:").await else { return };
    let Some(nova_senha) = prompt(reader, "Nova senha:").await else { return };
    let Some(confirma_senha) = prompt(reader, "Confirme a nova senha:").await else {
        return;
    };

    match AuthCommands::reset_password(client, role, &email, &nova_senha, &confirma_senha).await {
        Ok(_) => toast(
            NoticeKind::Success,
            "Senha redefinida com sucesso! Já pode fazer login com a nova senha.",
        ),
        Err(CommandError::InvalidInput(msg)) => toast(NoticeKind::Warning, &msg),
        Err(e) => toast(NoticeKind::Error, &e.to_string()),
    }
}
