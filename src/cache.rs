//! Two-tier boundary caching.
//!
//! Boundary assembly is expensive (network fetch plus stitching), so the
//! result is held in memory and mirrored to a durable store that survives
//! restarts. Storage failures are logged and swallowed: the cache degrades
//! to whatever tier still works, and at worst callers re-assemble.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::ring::ClosedRing;
use crate::traits::{BoundaryStore, StoreError};
use crate::types::Point;

/// Read-through cache for one boundary ring, keyed by region.
///
/// The durable store is consulted at most once per cache lifetime; after
/// that the memory tier is authoritative.
pub struct BoundaryCache<S: BoundaryStore> {
    key: String,
    memory: Option<ClosedRing>,
    store: S,
    store_checked: bool,
}

impl<S: BoundaryStore> BoundaryCache<S> {
    pub fn new(key: impl Into<String>, store: S) -> Self {
        Self {
            key: key.into(),
            memory: None,
            store,
            store_checked: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the cached ring, falling back to the durable store on the
    /// first miss. Returns `None` when neither tier has a usable value.
    pub fn get(&mut self) -> Option<ClosedRing> {
        if let Some(ring) = &self.memory {
            return Some(ring.clone());
        }
        if self.store_checked {
            return None;
        }
        self.store_checked = true;

        let raw = match self.store.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "boundary cache: no stored value");
                return None;
            }
            Err(err) => {
                warn!(key = %self.key, err = ?err, "boundary cache: store read failed");
                return None;
            }
        };

        match deserialize_ring(&raw) {
            Some(ring) => {
                debug!(key = %self.key, points = ring.len(), "boundary cache: loaded from store");
                self.memory = Some(ring.clone());
                Some(ring)
            }
            None => {
                warn!(key = %self.key, "boundary cache: stored value is not a valid ring, discarding");
                None
            }
        }
    }

    /// Caches a freshly assembled ring in both tiers.
    pub fn put(&mut self, ring: ClosedRing) {
        match serde_json::to_string(&ring) {
            Ok(raw) => {
                if let Err(err) = self.store.save(&self.key, &raw) {
                    warn!(key = %self.key, err = ?err, "boundary cache: store write failed");
                }
            }
            Err(err) => {
                warn!(key = %self.key, err = ?err, "boundary cache: serialize failed");
            }
        }
        self.memory = Some(ring);
        self.store_checked = true;
    }

    /// Drops the value from both tiers.
    pub fn invalidate(&mut self) {
        self.memory = None;
        self.store_checked = true;
        if let Err(err) = self.store.clear(&self.key) {
            warn!(key = %self.key, err = ?err, "boundary cache: store clear failed");
        }
    }
}

fn deserialize_ring(raw: &str) -> Option<ClosedRing> {
    let points: Vec<Point> = serde_json::from_str(raw).ok()?;
    ClosedRing::from_points(points)
}

/// Stores each key as a JSON file under a root directory.
#[derive(Debug, Clone)]
pub struct FileBoundaryStore {
    root: PathBuf,
}

impl FileBoundaryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{file}.json"))
    }
}

impl BoundaryStore for FileBoundaryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        let dest = self.path_for(key);
        // Write via a sibling temp file so a crash never leaves a torn value.
        let tmp_path = dest.with_extension("tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        writer.write_all(value.as_bytes())?;
        writer.flush()?;
        fs::rename(tmp_path, dest)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Keeps values in a plain map. Suitable for hosts that do not want disk
/// persistence, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBoundaryStore {
    values: HashMap<String, String>,
}

impl MemoryBoundaryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoundaryStore for MemoryBoundaryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
