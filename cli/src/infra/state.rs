//! JSON file implementation of the `InstallStateStore` port.
//!
//! The whole multi-agent map is rewritten in place on every save. Writing
//! through the existing path keeps symlinks and file permissions intact.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pcinstaller_common::{Agent, STATE_FILE_VERSION, StateFile, StateMap};

use crate::application::ports::InstallStateStore;
use crate::domain::StateError;
use crate::domain::state::reconcile;

pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    /// `Ok(None)` when there is nothing usable to read. Only I/O failures
    /// land here; bad content of any kind is a parse error.
    fn read(&self) -> Result<Option<StateMap>, StateError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                let err = StateError::Read {
                    path: self.display(),
                    reason: e.to_string(),
                };
                tracing::warn!(error = %err, "starting from empty install state");
                return Ok(None);
            }
        };
        let file: StateFile =
            serde_json::from_slice(&content).map_err(|e| StateError::Parse {
                path: self.display(),
                reason: e.to_string(),
            })?;
        if file.version > STATE_FILE_VERSION {
            return Err(StateError::Parse {
                path: self.display(),
                reason: format!(
                    "version {} is newer than the supported version {STATE_FILE_VERSION}",
                    file.version
                ),
            });
        }
        Ok(Some(file.data))
    }

    fn write(&self, map: &StateMap) -> Result<(), StateError> {
        let fail = |e: &dyn std::fmt::Display| StateError::Write {
            path: self.display(),
            reason: e.to_string(),
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| fail(&e))?;
        }
        let content =
            serde_json::to_string_pretty(&StateFile::new(map.clone())).map_err(|e| fail(&e))?;
        std::fs::write(&self.path, content + "\n").map_err(|e| fail(&e))
    }
}

impl InstallStateStore for JsonStateStore {
    fn load(&self, agent: Agent, app_ids: &[String]) -> Result<StateMap> {
        let mut map = self.read()?.unwrap_or_default();
        let added = reconcile(&mut map, agent, app_ids);
        tracing::debug!(path = %self.path.display(), added, "install state loaded");
        Ok(map)
    }

    fn save(&self, map: &StateMap) -> Result<()> {
        self.write(map)?;
        tracing::debug!(path = %self.path.display(), "install state saved");
        Ok(())
    }
}
