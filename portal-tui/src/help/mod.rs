//! Central help module that provides a single entry point (`show_command_help`)
//! to display usage or subcommand details for any recognized TUI command.

pub mod help_auth;
pub mod help_benefit;
pub mod help_profile;
pub mod help_wallet;

fn show_general_help() -> String {
    let text = r#"Moeda Estudantil — comandos do painel do aluno:

  help [comando]
    Mostra esta ajuda, ou a ajuda detalhada de um comando.

  perfil
    Recarrega e mostra os dados do perfil (nome, curso, e-mail).

  salvar
    Edita e salva os dados do perfil.

  excluir
    Exclui a conta (pede confirmação). Ação irreversível.

  saldo
    Recarrega e mostra o saldo de moedas.

  historico
    Recarrega e mostra o histórico de lançamentos.

  beneficios
    Recarrega e mostra o catálogo de benefícios.

  resgatar <id>
    Resgata o benefício listado com esse id (gera código, QR e e-mail).

  sair
    Encerra a sessão e volta para a tela de login.

  quit
    Fecha o cliente.
"#;
    text.to_owned()
}

fn show_login_help() -> String {
    let text = r#"Moeda Estudantil — comandos da tela de login:

  login
    Inicia o login (tipo de usuário, e-mail e senha).

  reset
    Redefine a senha (tipo de usuário, e-mail, nova senha e confirmação).

  help
    Mostra esta ajuda.

  quit
    Fecha o cliente.
"#;
    text.to_owned()
}

pub fn show_command_help(command: &str) -> String {
    match command {
        "" => show_general_help(),
        "login" | "reset" => help_auth::AUTH_HELP_TEXT.to_owned(),
        "perfil" | "salvar" | "excluir" => help_profile::PROFILE_HELP_TEXT.to_owned(),
        "saldo" | "historico" => help_wallet::WALLET_HELP_TEXT.to_owned(),
        "beneficios" | "resgatar" => help_benefit::BENEFIT_HELP_TEXT.to_owned(),

        "sair" => {
            r#"Comando sair:
  Uso: sair
    Remove a sessão armazenada e volta para a tela de login.
"#
            .to_owned()
        }

        "quit" => {
            r#"Comando quit:
  Uso: quit
    Fecha o cliente de terminal.
"#
            .to_owned()
        }

        other => format!("Sem ajuda detalhada para '{}'. Digite 'help' para a visão geral.", other),
    }
}

pub fn show_login_screen_help() -> String {
    show_login_help()
}
