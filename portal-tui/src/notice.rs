// File: portal-tui/src/notice.rs
//
// Terminal analog of the portal's toast widget: one colored line per event,
// with the same titles and icons the web UI uses.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    fn title(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Sucesso",
            NoticeKind::Error => "Erro",
            NoticeKind::Warning => "Atenção",
            NoticeKind::Info => "Mensagem",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✔",
            NoticeKind::Error => "✖",
            NoticeKind::Warning => "⚠",
            NoticeKind::Info => "ℹ",
        }
    }
}

pub fn toast_line(kind: NoticeKind, message: &str) -> String {
    format!("[{} {}] {}", kind.icon(), kind.title(), message)
}

pub fn toast(kind: NoticeKind, message: &str) {
    let line = toast_line(kind, message);
    let colored_line = match kind {
        NoticeKind::Success => line.green(),
        NoticeKind::Error => line.red(),
        NoticeKind::Warning => line.yellow(),
        NoticeKind::Info => line.cyan(),
    };
    println!("{colored_line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_lines_carry_title_and_icon() {
        assert_eq!(
            toast_line(NoticeKind::Warning, "Preencha e-mail e senha."),
            "[⚠ Atenção] Preencha e-mail e senha."
        );
        assert_eq!(
            toast_line(NoticeKind::Success, "ok"),
            "[✔ Sucesso] ok"
        );
    }
}
