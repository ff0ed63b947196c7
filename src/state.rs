//! Saved preferences and the target-time holder.
//!
//! Preferences live in a JSON map on disk, written under an exclusive file
//! lock. Storage failures are never surfaced: a read failure means "no
//! stored value" and a write failure is dropped, so the chart always renders
//! with whatever value the holder resolved.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::token;

pub const MINUTES_KEY: &str = "marathon-pace-minutes";
pub const UNIT_KEY: &str = "marathon-pace-unit";
pub const LANG_KEY: &str = "marathon-pace-lang";

/// Key-value persistence collaborator. Implementations swallow their own
/// failures; both operations always "succeed" from the caller's view.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and one-shot invocations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Preferences persisted as a JSON map at `<dir>/prefs.json`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(dir: &Path) -> Self {
        let path = dir.join("prefs.json");
        let lock_path = dir.join("prefs.lock");
        let entries = read_entries(&path).unwrap_or_default();
        Self {
            path,
            lock_path,
            entries,
        }
    }

    /// Locked load-modify-write: the file is re-read under the exclusive
    /// lock so a concurrent writer's keys survive this write.
    fn persist(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(parent) = self.lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.lock_path)
            .context("Failed to open lock file")?;
        file.lock_exclusive().context("Failed to acquire lock")?;

        let mut entries = read_entries(&self.path).unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        let content =
            serde_json::to_string_pretty(&entries).context("Failed to serialize prefs")?;

        // Atomic write: temp file then rename, so a crash never leaves a
        // half-written prefs file.
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        file.unlock().context("Failed to unlock")?;

        self.entries = entries;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    if content.trim().is_empty() {
        return None;
    }
    serde_json::from_str(&content).ok()
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        // Unavailable storage is treated as a no-op; the in-memory view
        // still reflects the write.
        if self.persist(key, value).is_err() {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// External override channel carrying a share token. Read once at
/// initialization; `replace` overwrites the current token rather than
/// appending to any history.
pub trait OverrideChannel {
    fn read(&self) -> Option<String>;
    fn replace(&mut self, token: &str);
}

/// CLI-side channel: the override comes in as a command-line time argument,
/// and the republished token lands in `share.token` next to the prefs file.
#[derive(Debug)]
pub struct TokenFile {
    override_token: Option<String>,
    path: PathBuf,
}

impl TokenFile {
    pub fn new(dir: &Path, override_token: Option<String>) -> Self {
        Self {
            override_token,
            path: dir.join("share.token"),
        }
    }

    pub fn last_published(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

impl OverrideChannel for TokenFile {
    fn read(&self) -> Option<String> {
        self.override_token.clone()
    }

    fn replace(&mut self, token: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&self.path, token);
    }
}

/// Single source of truth for the current target duration.
///
/// Initialization resolves, in order: a decodable override token, the
/// persisted minutes, the caller's configured default (240 in the stock
/// configuration). After that, `set_minutes` is the only mutation path; it
/// persists the value and republishes the encoded token through the
/// override channel in one step.
#[derive(Debug)]
pub struct TargetTime<S: KvStore, C: OverrideChannel> {
    store: S,
    channel: C,
    minutes: f64,
}

impl<S: KvStore, C: OverrideChannel> TargetTime<S, C> {
    pub fn init(store: S, channel: C, default_minutes: f64) -> Self {
        let minutes = match channel.read() {
            // decode is total; a bad token resolves to the codec's fixed
            // 240-minute fallback, not the configured default
            Some(tok) => token::decode(&tok),
            None => store
                .get(MINUTES_KEY)
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|m| m.is_finite() && *m >= 0.0)
                .unwrap_or(default_minutes),
        };
        Self {
            store,
            channel,
            minutes,
        }
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn total_seconds(&self) -> f64 {
        self.minutes * 60.0
    }

    /// The only mutation path. Accepts any finite value; range clamping is
    /// the input layer's job.
    pub fn set_minutes(&mut self, value: f64) {
        self.minutes = value;
        self.store.set(MINUTES_KEY, &value.to_string());
        self.channel.replace(&token::encode(value));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }
}
