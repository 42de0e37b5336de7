// File: portal-common-ui/src/session_store.rs

use portal_common::models::Session;
use portal_common::Error;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Persisted session record, the browser-local-storage analog: one JSON
/// file under the user config dir, written on login and removed on logout
/// or account deletion. Every protected page reads it once at startup.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location (`<config dir>/moeda-portal/session.json`).
    pub fn new() -> Result<Self, Error> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Session("could not determine a config directory".to_string()))?;
        Ok(Self::with_path(base.join("moeda-portal").join("session.json")))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the stored session, or `None` when no one is logged in.
    pub fn get(&self) -> Result<Option<Session>, Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str::<Session>(&raw)
            .map_err(|e| Error::Session(format!("stored session is unreadable: {e}")))?;
        Ok(Some(session))
    }

    /// Persists the session exactly as returned by the server.
    pub fn set(&self, session: &Session) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        debug!("session stored at {}", self.path.display());
        Ok(())
    }

    /// Removes the stored session. Clearing an already-empty store is fine.
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        serde_json::from_str(r#"{"id":7,"role":"ALUNO","nome":"Ana","email":"a@b.com","turma":"B"}"#)
            .unwrap()
    }

    #[test]
    fn get_returns_none_when_no_session_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("session.json"));
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips_the_server_response() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("nested").join("session.json"));

        store.set(&sample_session()).unwrap();
        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded.id, 7);
        assert_eq!(loaded.role, "ALUNO");
        assert_eq!(loaded.extra.get("turma").and_then(|v| v.as_str()), Some("B"));
    }

    #[test]
    fn clear_removes_the_session_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("session.json"));

        store.set(&sample_session()).unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }
}
