use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use crate::{domain::User, errors::SessionError};

const HOME_ENV: &str = "FINMAN_CLIENT_HOME";
const DEFAULT_DIR_NAME: &str = ".finman_client";
const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user";

/// Returns the application data directory, defaulting to `~/.finman_client`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Persisted auth session mirrored in memory.
///
/// The `token` file holds the raw bearer token, the `user` file the
/// JSON-serialized profile. Both are loaded once at construction and kept in
/// sync on every mutation, so the wrapper and the auth store share one view.
pub struct SessionStore {
    token_file: PathBuf,
    user_file: PathBuf,
    state: RwLock<SessionState>,
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

impl SessionStore {
    /// Opens the store under the default application data directory.
    pub fn open_default() -> Result<Self, SessionError> {
        Self::open(app_data_dir())
    }

    /// Opens the store rooted at `dir`, mirroring any persisted session.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let token_file = dir.join(TOKEN_FILE);
        let user_file = dir.join(USER_FILE);
        let state = SessionState {
            token: read_token(&token_file)?,
            user: read_user(&user_file)?,
        };
        Ok(Self {
            token_file,
            user_file,
            state: RwLock::new(state),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    /// Persists a fresh token/user pair and updates the in-memory mirror.
    pub fn set(&self, token: &str, user: &User) -> Result<(), SessionError> {
        write_atomic(&self.token_file, token)?;
        write_atomic(&self.user_file, &serde_json::to_string(user)?)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = Some(token.to_string());
        state.user = Some(user.clone());
        Ok(())
    }

    /// Refreshes only the persisted user profile, keeping the token.
    pub fn set_user(&self, user: &User) -> Result<(), SessionError> {
        write_atomic(&self.user_file, &serde_json::to_string(user)?)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.user = Some(user.clone());
        Ok(())
    }

    /// Removes both session files and the in-memory mirror; safe to repeat.
    pub fn clear(&self) -> Result<(), SessionError> {
        remove_if_exists(&self.token_file)?;
        remove_if_exists(&self.user_file)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = SessionState::default();
        Ok(())
    }
}

fn read_token(path: &Path) -> Result<Option<String>, SessionError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let token = raw.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

fn read_user(path: &Path) -> Result<Option<User>, SessionError> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    match serde_json::from_str(&data) {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
            // Corrupt profile files are dropped rather than blocking startup.
            tracing::warn!("ignoring unreadable session user file: {err}");
            Ok(None)
        }
    }
}

fn remove_if_exists(path: &Path) -> Result<(), SessionError> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => Ok(other?),
    }
}

/// Writes by staging to a temporary file and renaming over the target.
fn write_atomic(path: &Path, data: &str) -> Result<(), SessionError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "ana@example.com".into(),
            name: "Ana".into(),
            created_at: None,
        }
    }

    #[test]
    fn set_persists_and_reload_mirrors() {
        let dir = TempDir::new().expect("temp dir");
        let store = SessionStore::open(dir.path()).expect("open store");
        let user = sample_user();
        store.set("t1", &user).expect("persist session");

        assert_eq!(store.token().as_deref(), Some("t1"));
        assert_eq!(
            fs::read_to_string(dir.path().join("token")).expect("token file"),
            "t1"
        );

        let reopened = SessionStore::open(dir.path()).expect("reopen store");
        assert_eq!(reopened.token().as_deref(), Some("t1"));
        assert_eq!(reopened.user().map(|u| u.email), Some(user.email));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = SessionStore::open(dir.path()).expect("open store");
        store.set("t1", &sample_user()).expect("persist session");

        store.clear().expect("first clear");
        store.clear().expect("second clear");

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!dir.path().join("token").exists());
        assert!(!dir.path().join("user").exists());
    }

    #[test]
    fn unreadable_user_file_is_ignored() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("user"), "{not json").expect("write garbage");
        fs::write(dir.path().join("token"), "t2").expect("write token");

        let store = SessionStore::open(dir.path()).expect("open store");
        assert_eq!(store.token().as_deref(), Some("t2"));
        assert!(store.user().is_none());
    }
}
