// File: portal-tui/src/help/help_wallet.rs

pub const WALLET_HELP_TEXT: &str = r#"
Carteira
========

  saldo
    Mostra o saldo de moedas com duas casas decimais. Se a consulta falhar,
    mostra o marcador '—'.

  historico
    Mostra o histórico de lançamentos, um por linha:
      data • tipo • valor • motivo
    Uma resposta inválida do servidor é tratada como histórico vazio.
"#;
