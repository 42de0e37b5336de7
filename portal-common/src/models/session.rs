// File: portal-common/src/models/session.rs

use serde::{Deserialize, Serialize};

/// The three user roles known to the portal. Anything else the server may
/// send maps to `Unknown` at routing time; the raw string is preserved in
/// the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Aluno,
    Professor,
    Empresa,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn parse(s: &str) -> Role {
        match s {
            "ALUNO" => Role::Aluno,
            "PROFESSOR" => Role::Professor,
            "EMPRESA" => Role::Empresa,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Aluno => "ALUNO",
            Role::Professor => "PROFESSOR",
            Role::Empresa => "EMPRESA",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The session object returned by `POST /auth/login`, persisted verbatim on
/// the client. `role` stays a raw string so unknown fields and unknown role
/// values survive a store/load round trip; routing goes through [`Session::role`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub role: String,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values_only() {
        assert_eq!(Role::parse("ALUNO"), Role::Aluno);
        assert_eq!(Role::parse("PROFESSOR"), Role::Professor);
        assert_eq!(Role::parse("EMPRESA"), Role::Empresa);
        assert_eq!(Role::parse("ADMIN"), Role::Unknown);
        assert_eq!(Role::parse("aluno"), Role::Unknown);
    }

    #[test]
    fn session_round_trips_unknown_fields() {
        let raw = r#"{"id":7,"role":"ALUNO","nome":"Ana","email":"a@b.com","matricula":"2024-001"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.id, 7);
        assert_eq!(session.role(), Role::Aluno);

        let back: serde_json::Value = serde_json::to_value(&session).unwrap();
        assert_eq!(back["matricula"], "2024-001");
        assert_eq!(back["role"], "ALUNO");
    }

    #[test]
    fn session_tolerates_missing_optional_fields() {
        let session: Session = serde_json::from_str(r#"{"id":1,"role":"EMPRESA"}"#).unwrap();
        assert_eq!(session.nome, None);
        assert_eq!(session.email, None);
        assert_eq!(session.role(), Role::Empresa);
    }
}
