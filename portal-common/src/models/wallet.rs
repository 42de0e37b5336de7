// File: portal-common/src/models/wallet.rs

use serde::{Deserialize, Serialize};

/// `GET /alunos/{id}/wallet` response. A missing `saldo` reads as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(default)]
    pub saldo: f64,
}

/// One coin-balance change in the append-only ledger, rendered in the order
/// the server returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_defaults_to_zero() {
        let w: WalletBalance = serde_json::from_str("{}").unwrap();
        assert_eq!(w.saldo, 0.0);
    }

    #[test]
    fn ledger_entry_tolerates_missing_reason() {
        let e: LedgerEntry =
            serde_json::from_str(r#"{"ts":"2026-03-01T10:00:00Z","kind":"CREDITO","amount":25.0}"#)
                .unwrap();
        assert_eq!(e.kind, "CREDITO");
        assert_eq!(e.reason, None);
    }
}
