use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::recorder::{CumulativeStats, Session};

/// Gjeldende skjemaversjon. Endringer er kun additive.
pub const SCHEMA_VERSION: u32 = 3;

/// Alt som persisteres: én versjonert post. Manglende felt får default ved lasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub version: u32,
    pub sessions: Vec<Session>,
    pub totals: CumulativeStats,
    pub unlocked_achievements: BTreeSet<String>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            sessions: Vec::new(),
            totals: CumulativeStats::default(),
            unlocked_achievements: BTreeSet::new(),
        }
    }
}

impl PersistedState {
    /// Tolerant parsing; feil rapporteres med sti til feltet (f.eks. `totals.streak`).
    pub fn from_json_str(s: &str) -> Result<Self, StorageError> {
        let de = &mut serde_json::Deserializer::from_str(s);
        let mut state: PersistedState =
            serde_path_to_error::deserialize(de).map_err(|e| StorageError::Decode {
                field: e.path().to_string(),
                message: e.inner().to_string(),
            })?;
        if state.version > SCHEMA_VERSION {
            warn!(
                "lagret tilstand har nyere skjema (v{}), leser kjente felt",
                state.version
            );
        }
        state.version = SCHEMA_VERSION;
        Ok(state)
    }

    pub fn to_json_string(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Leser inn tilstand fra disk (JSON).
/// Hvis filen ikke finnes, returneres en tom default-tilstand.
pub fn load_state(path: impl AsRef<Path>) -> Result<PersistedState, StorageError> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("fant ikke lagret tilstand på {}, starter tomt", path.display());
        return Ok(PersistedState::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let state = PersistedState::from_json_str(&contents)?;
    info!(
        "tilstand lastet fra {} (økter={}, totale reps={})",
        path.display(),
        state.sessions.len(),
        state.totals.total_reps
    );
    Ok(state)
}

/// Lagrer tilstand til disk som JSON (pretty-print).
pub fn save_state(state: &PersistedState, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json = state.to_json_string()?;
    // Søskenfil + rename: filen på `path` er alltid enten gammel eller ny, aldri halvskrevet
    let tmp = tmp_path_for(path);
    std::fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        std::fs::remove_file(&tmp).ok();
        return Err(io_error(path, e));
    }
    info!("tilstand lagret til {} (økter={})", path.display(), state.sessions.len());
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
