use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::models::Session;

/// Where the logged-in user record lives. Swipe and application state is
/// deliberately not persisted; this is the only durable state the app has.
pub trait SessionStore {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn welcome_seen(&self) -> bool;
    fn mark_welcome_seen(&self) -> Result<()>;
}

pub struct FileSessionStore {
    session_path: PathBuf,
    welcome_path: PathBuf,
}

impl FileSessionStore {
    pub fn open() -> Result<Self> {
        let dir = Self::default_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir: {}", dir.display()))?;
        Ok(Self {
            session_path: dir.join("session.json"),
            welcome_path: dir.join("welcome-seen"),
        })
    }

    fn default_dir() -> Result<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "jobswipe") {
            Ok(proj_dirs.data_dir().to_path_buf())
        } else {
            Ok(PathBuf::from(".jobswipe"))
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.session_path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.session_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context("Failed to read session file"),
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // Corrupt session data: drop it and fall back to logged out.
                eprintln!("Warning: discarding corrupt session file: {}", e);
                let _ = fs::remove_file(&self.session_path);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.session_path, raw).with_context(|| {
            format!("Failed to write session file: {}", self.session_path.display())
        })
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove session file"),
        }
    }

    fn welcome_seen(&self) -> bool {
        self.welcome_path.exists()
    }

    fn mark_welcome_seen(&self) -> Result<()> {
        fs::write(&self.welcome_path, "true").context("Failed to record welcome flag")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory store holding raw JSON, so corrupt-data handling can be
    /// exercised without touching the filesystem.
    struct MemorySessionStore {
        raw: RefCell<Option<String>>,
        welcome: RefCell<bool>,
    }

    impl MemorySessionStore {
        fn new() -> Self {
            Self {
                raw: RefCell::new(None),
                welcome: RefCell::new(false),
            }
        }

        fn with_raw(raw: &str) -> Self {
            let store = Self::new();
            *store.raw.borrow_mut() = Some(raw.to_string());
            store
        }
    }

    impl SessionStore for MemorySessionStore {
        fn load(&self) -> Result<Option<Session>> {
            let Some(raw) = self.raw.borrow().clone() else {
                return Ok(None);
            };
            match serde_json::from_str(&raw) {
                Ok(session) => Ok(Some(session)),
                Err(_) => {
                    *self.raw.borrow_mut() = None;
                    Ok(None)
                }
            }
        }

        fn save(&self, session: &Session) -> Result<()> {
            *self.raw.borrow_mut() = Some(serde_json::to_string(session)?);
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.raw.borrow_mut() = None;
            Ok(())
        }

        fn welcome_seen(&self) -> bool {
            *self.welcome.borrow()
        }

        fn mark_welcome_seen(&self) -> Result<()> {
            *self.welcome.borrow_mut() = true;
            Ok(())
        }
    }

    fn demo_session() -> Session {
        Session {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@jobswipe.ai".to_string(),
            provider: "demo".to_string(),
            has_completed_onboarding: true,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&demo_session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.email, "demo@jobswipe.ai");
        assert!(loaded.has_completed_onboarding);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_session_falls_back_to_logged_out() {
        let store = MemorySessionStore::with_raw("{not json");
        assert!(store.load().unwrap().is_none());
        // The corrupt record is gone; the next load is clean.
        assert!(store.raw.borrow().is_none());
    }

    #[test]
    fn test_welcome_flag_is_sticky() {
        let store = MemorySessionStore::new();
        assert!(!store.welcome_seen());
        store.mark_welcome_seen().unwrap();
        assert!(store.welcome_seen());
    }
}
