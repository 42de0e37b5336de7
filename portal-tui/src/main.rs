// Standalone TUI client for the moeda-estudantil portal REST API
use clap::Parser;
use dotenv::dotenv;
use portal_common::models::{Role, Session};
use portal_common_ui::commands::benefit::BenefitCommands;
use portal_common_ui::commands::profile::ProfileCommands;
use portal_common_ui::commands::wallet::WalletCommands;
use portal_common_ui::{ApiClient, SessionStore};
use portal_tui::commands::{auth_adapter, dispatch, DashboardSignal};
use portal_tui::email::EmailDispatcher;
use portal_tui::{render, InputLines, PortalTuiModule};
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "portal-tui", about = "Cliente de terminal do portal moeda-estudantil")]
struct Args {
    /// Base URL of the portal REST API (falls back to PORTAL_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Session file override (defaults to the user config dir)
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// EmailJS service id (falls back to EMAILJS_SERVICE_ID)
    #[arg(long)]
    email_service: Option<String>,

    /// EmailJS template id (falls back to EMAILJS_TEMPLATE_ID)
    #[arg(long)]
    email_template: Option<String>,

    /// EmailJS public key (falls back to EMAILJS_PUBLIC_KEY)
    #[arg(long)]
    email_public_key: Option<String>,
}

fn arg_or_env(arg: Option<String>, env_var: &str) -> Option<String> {
    arg.or_else(|| std::env::var(env_var).ok()).filter(|s| !s.is_empty())
}

/// The email integration is optional: without the three EmailJS identifiers
/// the redemption flow simply skips the receipt.
fn build_email_dispatcher(args: &Args) -> Option<EmailDispatcher> {
    let service = arg_or_env(args.email_service.clone(), "EMAILJS_SERVICE_ID")?;
    let template = arg_or_env(args.email_template.clone(), "EMAILJS_TEMPLATE_ID")?;
    let key = arg_or_env(args.email_public_key.clone(), "EMAILJS_PUBLIC_KEY")?;
    match EmailDispatcher::new(&service, &template, &key) {
        Ok(dispatcher) => Some(dispatcher),
        Err(e) => {
            error!("could not build the email dispatcher: {e}");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let api_url = arg_or_env(args.api_url.clone(), "PORTAL_API_URL")
        .ok_or_else(|| anyhow::anyhow!("informe a URL da API: --api-url ou PORTAL_API_URL"))?;

    let client = ApiClient::new(&api_url)?;
    let store = match args.session_file.clone() {
        Some(path) => SessionStore::with_path(path),
        None => SessionStore::new()?,
    };
    let email = build_email_dispatcher(&args);
    let tui = Arc::new(PortalTuiModule::new());

    println!("Moeda Estudantil — cliente de terminal");
    println!("API: {}", client.base_url());

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Session gate: the dashboard only opens for a stored ALUNO session;
        // anything else goes back to the login screen first.
        let session = match store.get() {
            Ok(Some(s)) if s.role() == Role::Aluno => s,
            _ => match auth_adapter::run_login_screen(&client, &store, &mut reader).await? {
                Some(s) => s,
                None => break,
            },
        };

        match run_dashboard(&client, &store, &session, &tui, email.as_ref(), &mut reader).await? {
            DashboardSignal::Logout => {
                tui.reset_dashboard();
                continue;
            }
            _ => break,
        }
    }

    println!("Até logo!");
    Ok(())
}

/// The four initial loads are independent tasks: each fetches and renders
/// its own section, in whatever order they complete. The join only keeps the
/// prompt from appearing before the initial output is done.
async fn run_initial_loads(client: &ApiClient, session: &Session, tui: &Arc<PortalTuiModule>) {
    let id = session.id;

    let profile = {
        let client = client.clone();
        let tui = tui.clone();
        tokio::spawn(async move {
            match ProfileCommands::load(&client, id).await {
                Ok(result) => {
                    tui.remember_profile(&result.data);
                    println!("{}", render::profile_section(&result.data));
                }
                // Silent no-op: the failure is logged, the fields stay blank.
                Err(_) => {}
            }
        })
    };

    let balance = {
        let client = client.clone();
        tokio::spawn(async move {
            let line = match WalletCommands::balance(&client, id).await {
                Ok(result) => render::balance_line(Some(result.data.saldo)),
                Err(_) => render::balance_line(None),
            };
            println!("{line}");
        })
    };

    let history = {
        let client = client.clone();
        tokio::spawn(async move {
            let section = match WalletCommands::history(&client, id).await {
                Ok(result) => render::history_section(&result.data),
                Err(_) => render::HISTORY_ERROR_LINE.to_string(),
            };
            println!("{section}");
        })
    };

    let benefits = {
        let client = client.clone();
        let tui = tui.clone();
        tokio::spawn(async move {
            let section = match BenefitCommands::catalog(&client).await {
                Ok(result) => {
                    tui.remember_benefits(&result.data);
                    render::catalog_section(&result.data, |bid| client.benefit_image_url(bid))
                }
                Err(_) => render::CATALOG_ERROR_LINE.to_string(),
            };
            println!("{section}");
        })
    };

    let _ = tokio::join!(profile, balance, history, benefits);
}

async fn run_dashboard(
    client: &ApiClient,
    store: &SessionStore,
    session: &Session,
    tui: &Arc<PortalTuiModule>,
    email: Option<&EmailDispatcher>,
    reader: &mut InputLines,
) -> anyhow::Result<DashboardSignal> {
    println!(
        "\nBem-vindo(a), {}!\n",
        session.nome.as_deref().unwrap_or("aluno")
    );

    run_initial_loads(client, session, tui).await;

    println!("\nDigite 'help' para ver os comandos.\n");

    loop {
        print!("aluno> ");
        stdout().flush()?;

        let line = match reader.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => return Ok(DashboardSignal::Quit),
        };
        if line.is_empty() {
            continue;
        }

        let (signal, output) =
            dispatch(&line, client, store, session, tui, email, reader).await;

        if let Some(msg) = output {
            println!("{msg}");
        }

        match signal {
            DashboardSignal::Continue => {}
            other => return Ok(other),
        }
    }
}
