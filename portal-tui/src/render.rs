// File: portal-tui/src/render.rs
//
// Pure formatting of dashboard sections. Network and state handling live in
// the adapters; everything here is string in, string out.

use chrono::{DateTime, Local, Utc};
use portal_common::models::{Benefit, LedgerEntry, StudentProfile};

pub const PLACEHOLDER: &str = "—";
pub const HISTORY_ERROR_LINE: &str = "Erro ao carregar histórico.";
pub const CATALOG_ERROR_LINE: &str = "Erro ao carregar benefícios.";
pub const CATALOG_EMPTY_LINE: &str = "Nenhum benefício disponível.";
pub const DESCRIPTION_FALLBACK: &str = "Benefício disponível para troca de moedas.";

/// Two-decimal balance, or the placeholder glyph when the load failed.
pub fn balance_line(saldo: Option<f64>) -> String {
    match saldo {
        Some(s) => format!("Saldo: {s:.2}"),
        None => format!("Saldo: {PLACEHOLDER}"),
    }
}

pub fn ledger_line(entry: &LedgerEntry) -> String {
    format!(
        "{} • {} • {} • {}",
        entry.ts,
        entry.kind,
        entry.amount,
        entry.reason.as_deref().unwrap_or("")
    )
}

pub fn history_section(entries: &[LedgerEntry]) -> String {
    let mut out = String::from("Histórico:\n");
    for entry in entries {
        out.push_str("  ");
        out.push_str(&ledger_line(entry));
        out.push('\n');
    }
    out
}

pub fn profile_section(profile: &StudentProfile) -> String {
    format!(
        "Perfil:\n  nome:  {}\n  curso: {}\n  email: {}\n",
        profile.nome, profile.curso, profile.email
    )
}

/// One catalog card: title, cost badge, description (with the stock fallback
/// text), thumbnail URL and the redeem affordance.
pub fn benefit_card(benefit: &Benefit, image_url: &str) -> String {
    let descricao = benefit
        .descricao
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DESCRIPTION_FALLBACK);
    format!(
        "[#{id}] {titulo} — {custo} moedas\n  {descricao}\n  imagem: {image_url}\n  resgate: resgatar {id}\n",
        id = benefit.id,
        titulo = benefit.titulo,
        custo = benefit.custo,
    )
}

pub fn catalog_section(benefits: &[Benefit], image_url: impl Fn(i64) -> String) -> String {
    if benefits.is_empty() {
        return format!("Benefícios:\n  {CATALOG_EMPTY_LINE}\n");
    }
    let mut out = String::from("Benefícios:\n");
    for benefit in benefits {
        for line in benefit_card(benefit, &image_url(benefit.id)).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Localized expiry timestamp (day-first, local time), or the placeholder.
pub fn format_expiry(expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_falls_back_to_placeholder() {
        assert_eq!(balance_line(Some(42.0)), "Saldo: 42.00");
        assert_eq!(balance_line(Some(10.555)), "Saldo: 10.56");
        assert_eq!(balance_line(None), "Saldo: —");
    }

    #[test]
    fn ledger_line_tolerates_missing_reason() {
        let entry = LedgerEntry {
            ts: "2026-03-01T10:00:00Z".to_string(),
            kind: "CREDITO".to_string(),
            amount: 25.0,
            reason: None,
        };
        assert_eq!(ledger_line(&entry), "2026-03-01T10:00:00Z • CREDITO • 25 • ");
    }

    #[test]
    fn benefit_card_uses_description_fallback() {
        let benefit = Benefit {
            id: 3,
            titulo: "Vale-lanche".to_string(),
            descricao: None,
            custo: 50,
            image: None,
        };
        let card = benefit_card(&benefit, "http://api/beneficios/3/image");
        assert!(card.contains("[#3] Vale-lanche — 50 moedas"));
        assert!(card.contains(DESCRIPTION_FALLBACK));
        assert!(card.contains("resgatar 3"));
    }

    #[test]
    fn empty_catalog_renders_empty_state() {
        let section = catalog_section(&[], |_| String::new());
        assert!(section.contains(CATALOG_EMPTY_LINE));
    }

    #[test]
    fn missing_expiry_renders_placeholder() {
        assert_eq!(format_expiry(None), "—");
    }

    #[test]
    fn expiry_renders_day_first() {
        let ts: DateTime<Utc> = "2026-09-01T12:00:00Z".parse().unwrap();
        let rendered = format_expiry(Some(ts));
        // Local offset shifts the time, not the day-first layout.
        assert_eq!(rendered.len(), "01/09/2026 12:00".len());
        assert_eq!(&rendered[2..3], "/");
        assert_eq!(&rendered[5..6], "/");
    }
}
