// File: portal-common/src/models/profile.rs

use serde::{Deserialize, Serialize};

/// Editable student profile, fetched from and written back to
/// `/alunos/{id}`. Absent fields come back as empty strings so the form can
/// always be populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub curso: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let p: StudentProfile = serde_json::from_str(r#"{"nome":"Ana"}"#).unwrap();
        assert_eq!(p.nome, "Ana");
        assert_eq!(p.curso, "");
        assert_eq!(p.email, "");
    }
}
