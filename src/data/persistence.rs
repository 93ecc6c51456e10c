use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load/save for the data files kept in the data directory.
///
/// A missing, unreadable, or corrupted file loads as the type's default;
/// persisted-state failures never leave the store layer as errors.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
    fn is_json() -> bool;

    fn load_from(dir: &Path) -> Self {
        let path = dir.join(Self::filename());
        if !path.exists() {
            return Self::default();
        }
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("failed to read {}: {e} — using defaults", path.display());
                return Self::default();
            }
        };
        let parsed = if Self::is_json() {
            serde_json::from_str(&contents).map_err(anyhow::Error::from)
        } else {
            serde_norway::from_str(&contents).map_err(anyhow::Error::from)
        };
        match parsed {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to parse {}: {e} — using defaults", path.display());
                Self::default()
            }
        }
    }

    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = dir.join(Self::filename());
        let contents = if Self::is_json() {
            serde_json::to_string_pretty(self).context("failed to serialize JSON")?
        } else {
            serde_norway::to_string(self).context("failed to serialize YAML")?
        };
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
