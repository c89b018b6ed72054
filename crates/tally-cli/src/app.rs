use std::path::PathBuf;

use anyhow::Context;
use tally_core::{CredentialStore, Session, SqliteStorage, TallyError};

use crate::cli::Cli;
use crate::config::{
    default_config_path, default_database_path, default_session_path, read_config, TallyConfig,
};
use crate::session_file::{clear_session, load_session, save_session, SessionFile};
use crate::ui::UiContext;

/// Everything a command handler needs besides its own arguments.
pub struct AppContext {
    pub ui: UiContext,
    pub config: TallyConfig,
    pub db_path: PathBuf,
    pub session_path: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let ui = UiContext::from_env(cli.json, cli.no_color, cli.quiet);
        let config = read_config(&resolve_config_path()?)?;
        let db_path = resolve_database_path(cli.db.as_deref(), &config)?;
        let session_path = default_session_path()?;

        Ok(Self {
            ui,
            config,
            db_path,
            session_path,
        })
    }

    pub fn open_storage(&self) -> anyhow::Result<SqliteStorage> {
        SqliteStorage::open(&self.db_path)
            .with_context(|| format!("Failed to open database {}", self.db_path.display()))
    }

    fn database_key(&self) -> String {
        self.db_path.to_string_lossy().to_string()
    }

    /// The remembered session, or an anonymous one.
    ///
    /// A session file for another database, or for a user the database no
    /// longer knows, counts as logged out.
    pub fn current_session(&self, store: &dyn CredentialStore) -> anyhow::Result<Session> {
        let Some(saved) = load_session(&self.session_path)? else {
            return Ok(Session::anonymous());
        };
        if saved.database != self.database_key() {
            tracing::debug!(saved = %saved.database, "session belongs to another database");
            return Ok(Session::anonymous());
        }
        if !store.user_exists(&saved.user_id)? {
            return Ok(Session::anonymous());
        }
        Ok(Session::resume(saved.user_id))
    }

    /// The remembered session, failing with `NotAuthenticated` if there is none.
    pub fn require_session(&self, store: &dyn CredentialStore) -> anyhow::Result<Session> {
        let session = self.current_session(store)?;
        if !session.is_authenticated() {
            return Err(TallyError::NotAuthenticated.into());
        }
        Ok(session)
    }

    pub fn remember(&self, session: &Session) -> anyhow::Result<()> {
        let user_id = session.require_user()?;
        save_session(
            &self.session_path,
            &SessionFile {
                user_id: user_id.to_string(),
                database: self.database_key(),
            },
        )
    }

    pub fn forget(&self) -> anyhow::Result<bool> {
        clear_session(&self.session_path)
    }
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TALLY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// `--db`/`TALLY_DB`, then the config file, then the XDG default.
pub fn resolve_database_path(flag: Option<&str>, config: &TallyConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.database.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_database_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseSection;

    #[test]
    fn test_flag_wins_over_config() {
        let config = TallyConfig {
            database: DatabaseSection {
                path: Some("/from/config.db".to_string()),
            },
            ..TallyConfig::default()
        };
        let path = resolve_database_path(Some("/from/flag.db"), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.db"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let config = TallyConfig {
            database: DatabaseSection {
                path: Some("/from/config.db".to_string()),
            },
            ..TallyConfig::default()
        };
        let path = resolve_database_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.db"));
    }

    #[test]
    fn test_blank_flag_is_ignored() {
        let config = TallyConfig {
            database: DatabaseSection {
                path: Some("/from/config.db".to_string()),
            },
            ..TallyConfig::default()
        };
        let path = resolve_database_path(Some("  "), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.db"));
    }
}
