// File: portal-tui/src/help/help_auth.rs
//
// Help text for the login-screen commands: login, reset.

pub const AUTH_HELP_TEXT: &str = r#"
Autenticação
============

  login
    Pergunta o tipo de usuário (ALUNO, PROFESSOR ou EMPRESA), o e-mail e a
    senha, e envia as credenciais. O destino após o login segue o papel
    retornado pelo servidor, não o papel informado. Credenciais inválidas
    mostram uma mensagem genérica.

  reset
    Pergunta o tipo de usuário, o e-mail, a nova senha e a confirmação.
    As duas senhas precisam ser iguais; nenhum campo pode ficar vazio.
"#;
