//! Session persistence between invocations.
//!
//! The core keeps no session state, so the CLI records the logged-in user in
//! a small TOML file next to the default database. The file is tied to the
//! database it was created against; switching databases logs you out.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub user_id: String,
    pub database: String,
}

pub fn load_session(path: &Path) -> anyhow::Result<Option<SessionFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read session {}: {}", path.display(), e))?;
    match toml::from_str(&contents) {
        Ok(session) => Ok(Some(session)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable session file");
            Ok(None)
        }
    }
}

pub fn save_session(path: &Path, session: &SessionFile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create session directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(session).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write session {}: {}", path.display(), e))?;
    Ok(())
}

/// Remove the session file. Returns whether one existed.
pub fn clear_session(path: &Path) -> anyhow::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(anyhow::anyhow!(
            "Failed to remove session {}: {}",
            path.display(),
            err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tally").join("session.toml");
        let session = SessionFile {
            user_id: "alice".to_string(),
            database: "/tmp/expenses.db".to_string(),
        };

        assert_eq!(load_session(&path).unwrap(), None);
        save_session(&path, &session).unwrap();
        assert_eq!(load_session(&path).unwrap(), Some(session));

        assert!(clear_session(&path).unwrap());
        assert!(!clear_session(&path).unwrap());
        assert_eq!(load_session(&path).unwrap(), None);
    }

    #[test]
    fn test_garbage_session_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(load_session(&path).unwrap(), None);
    }
}
