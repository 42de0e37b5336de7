// File: portal-tui/src/lib.rs

pub mod commands;
pub mod email;
pub mod help;
pub mod notice;
pub mod qr;
pub mod render;
pub mod tui_module;

pub use tui_module::PortalTuiModule;

/// Shared handle over the interactive stdin line stream; prompts deeper in
/// the flow (account deletion, login fields) borrow the same reader the main
/// loop uses.
pub type InputLines = tokio::io::Lines<tokio::io::BufReader<tokio::io::Stdin>>;
