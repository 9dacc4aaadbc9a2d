/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Cookie jar contents as a name → value mapping
pub type CookieMap = BTreeMap<String, String>;

/// At-rest persistence of a session cookie jar
pub trait CookieStore: Send + Sync {
    /// Loads the persisted jar
    ///
    /// Never fails: a missing or unreadable jar is an empty map.
    fn load(&self) -> CookieMap;

    /// Persists the jar, replacing whatever was stored before
    fn save(&self, cookies: &CookieMap) -> Result<(), AppError>;
}

/// Stores the cookie jar as a JSON object in a file
#[derive(Debug, Clone)]
pub struct FileCookieStore {
    path: PathBuf,
}

impl FileCookieStore {
    /// Creates a store backed by `path`; the file is only touched on load/save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CookieStore for FileCookieStore {
    fn load(&self) -> CookieMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No cookie jar at {}", self.path.display());
                return CookieMap::new();
            }
            Err(e) => {
                warn!("Cannot read cookie jar {}: {}", self.path.display(), e);
                return CookieMap::new();
            }
        };
        match serde_json::from_str::<CookieMap>(&raw) {
            Ok(cookies) => {
                debug!(
                    "Loaded {} cookies from {}",
                    cookies.len(),
                    self.path.display()
                );
                cookies
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable cookie jar {}: {}",
                    self.path.display(),
                    e
                );
                CookieMap::new()
            }
        }
    }

    fn save(&self, cookies: &CookieMap) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cookies)?;
        fs::write(&self.path, json)?;
        info!("Saved {} cookies to {}", cookies.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the cookie jar in memory, for tests and short-lived processes
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: Mutex<Option<CookieMap>>,
}

impl MemoryCookieStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with a jar
    pub fn with_cookies(cookies: CookieMap) -> Self {
        Self {
            cookies: Mutex::new(Some(cookies)),
        }
    }

    /// The last saved (or pre-filled) jar, `None` when nothing was ever stored
    pub fn stored(&self) -> Option<CookieMap> {
        self.cookies.lock().ok().and_then(|guard| guard.clone())
    }
}

impl CookieStore for MemoryCookieStore {
    fn load(&self) -> CookieMap {
        self.stored().unwrap_or_default()
    }

    fn save(&self, cookies: &CookieMap) -> Result<(), AppError> {
        let mut guard = self
            .cookies
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("cookie store lock poisoned")))?;
        *guard = Some(cookies.clone());
        Ok(())
    }
}
