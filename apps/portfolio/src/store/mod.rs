//! Data Store: the immutable content behind every page.
//!
//! Content comes from [`builtin::portfolio`] or, when configured, from a JSON
//! file read once at startup. Either way it is validated before the server
//! starts and shared read-only afterwards.

pub mod builtin;
pub mod loader;

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::portfolio::{Portfolio, Project};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid content file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Project id must not be empty (project '{0}')")]
    EmptyProjectId(String),

    #[error("Duplicate project id '{0}'")]
    DuplicateProjectId(String),
}

impl Portfolio {
    /// Looks up a project by its external id. An unknown id is `None`, not an error.
    pub fn find_project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Checks the invariants every page relies on: project ids are non-empty and unique.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(StoreError::EmptyProjectId(project.name.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(StoreError::DuplicateProjectId(project.id.clone()));
            }
        }
        Ok(())
    }
}
