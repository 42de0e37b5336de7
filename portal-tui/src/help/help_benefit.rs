// File: portal-tui/src/help/help_benefit.rs
//
// Help text for the catalog and the redemption flow.

pub const BENEFIT_HELP_TEXT: &str = r#"
Benefícios
==========

  beneficios
    Recarrega o catálogo e mostra um cartão por benefício (título, custo,
    descrição, imagem e o id usado no resgate).

  resgatar <id>
    Resgata o benefício com esse id. Em caso de sucesso:
      - mostra o código e a validade do resgate;
      - desenha o QR code do código;
      - envia o e-mail de confirmação (se configurado e se o aluno tiver
        e-mail cadastrado);
      - remove o cartão da lista e atualiza saldo e histórico.
    QR e e-mail são opcionais: a falta deles não impede o resgate.
"#;
