// File: portal-tui/src/help/help_profile.rs

pub const PROFILE_HELP_TEXT: &str = r#"
Perfil
======

  perfil
    Recarrega os dados do aluno (nome, curso, e-mail) e mostra na tela.
    Falhas de carregamento deixam os campos em branco.

  salvar
    Edita os três campos (Enter mantém o valor atual) e envia a atualização.
    Erros do servidor são mostrados com o detalhe retornado.

  excluir
    Exclui a conta do aluno após confirmação. Em caso de sucesso a sessão é
    removida e o cliente volta para a tela de login.
"#;
