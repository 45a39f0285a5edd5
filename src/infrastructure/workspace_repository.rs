use crate::domain::entities::{Column, CountSnapshot, Workspace};
use crate::domain::errors::FilterError;
use crate::domain::repositories::{ColumnRepository, FilterCountSource};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const WORKSPACE_ENV: &str = "COLUMN_FILTERS_WORKSPACE";

// Every operation re-reads the file; the mutex only serializes writers
// within this process.
pub struct JsonColumnRepository {
    workspace_path: PathBuf,
    lock: Mutex<()>,
}

impl JsonColumnRepository {
    pub fn new(workspace_path: impl Into<PathBuf>) -> Self {
        Self {
            workspace_path: workspace_path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn default_path() -> PathBuf {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("column-filters")
        } else {
            PathBuf::from(".")
        };

        config_dir.join("workspace.json")
    }

    pub fn path(&self) -> &Path {
        &self.workspace_path
    }

    pub fn load(&self) -> Result<Workspace> {
        if !self.workspace_path.exists() {
            tracing::debug!(
                "No workspace at {}, starting empty",
                self.workspace_path.display()
            );
            return Ok(Workspace::default());
        }

        let content = fs::read_to_string(&self.workspace_path)
            .with_context(|| format!("Failed to read {}", self.workspace_path.display()))?;

        let workspace: Workspace =
            serde_json::from_str(&content).context("Failed to parse workspace file")?;

        tracing::debug!(
            "Loaded {} columns from {}",
            workspace.columns.len(),
            self.workspace_path.display()
        );
        Ok(workspace)
    }

    pub fn save(&self, workspace: &Workspace) -> Result<()> {
        if let Some(parent) = self.workspace_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create workspace directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(workspace).context("Failed to serialize workspace")?;

        fs::write(&self.workspace_path, content)
            .with_context(|| format!("Failed to write {}", self.workspace_path.display()))?;

        tracing::debug!("Saved workspace to {}", self.workspace_path.display());
        Ok(())
    }

    fn update<T>(&self, f: impl FnOnce(&mut Workspace) -> Result<T>) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("Workspace lock poisoned"))?;

        let mut workspace = self.load()?;
        let result = f(&mut workspace)?;
        self.save(&workspace)?;
        Ok(result)
    }
}

impl ColumnRepository for JsonColumnRepository {
    fn list_columns(&self) -> Result<Vec<Column>> {
        Ok(self.load()?.columns)
    }

    fn get_column(&self, id: &str) -> Result<Column> {
        self.load()?
            .column(id)
            .cloned()
            .ok_or_else(|| FilterError::ColumnNotFound(id.to_string()).into())
    }

    fn save_column(&self, column: &Column) -> Result<()> {
        self.update(|workspace| {
            let stored = workspace
                .column_mut(&column.id)
                .ok_or_else(|| FilterError::ColumnNotFound(column.id.clone()))?;
            *stored = column.clone();
            Ok(())
        })
    }

    fn add_column(&self, column: &Column) -> Result<()> {
        self.update(|workspace| {
            if workspace.column(&column.id).is_some() {
                return Err(FilterError::DuplicateColumn(column.id.clone()).into());
            }
            workspace.columns.push(column.clone());
            Ok(())
        })
    }

    fn remove_column(&self, id: &str) -> Result<()> {
        self.update(|workspace| {
            let before = workspace.columns.len();
            workspace.columns.retain(|column| column.id != id);
            if workspace.columns.len() == before {
                return Err(FilterError::ColumnNotFound(id.to_string()).into());
            }
            workspace.counts.remove(id);
            Ok(())
        })
    }
}

impl FilterCountSource for JsonColumnRepository {
    fn counts_for(&self, column_id: &str) -> Result<CountSnapshot> {
        Ok(self
            .load()?
            .counts
            .get(column_id)
            .cloned()
            .unwrap_or_default())
    }
}
