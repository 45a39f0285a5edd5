use crate::domain::entities::{Column, CountSnapshot, Workspace};
use crate::domain::errors::FilterError;
use crate::domain::repositories::{ColumnRepository, FilterCountSource};
use anyhow::{Result, anyhow};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryColumnRepository {
    workspace: Mutex<Workspace>,
}

impl InMemoryColumnRepository {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Mutex::new(workspace),
        }
    }

    pub fn set_counts(&self, column_id: impl Into<String>, counts: CountSnapshot) -> Result<()> {
        self.workspace()?.counts.insert(column_id.into(), counts);
        Ok(())
    }

    fn workspace(&self) -> Result<MutexGuard<'_, Workspace>> {
        self.workspace
            .lock()
            .map_err(|_| anyhow!("Workspace lock poisoned"))
    }
}

impl ColumnRepository for InMemoryColumnRepository {
    fn list_columns(&self) -> Result<Vec<Column>> {
        Ok(self.workspace()?.columns.clone())
    }

    fn get_column(&self, id: &str) -> Result<Column> {
        self.workspace()?
            .column(id)
            .cloned()
            .ok_or_else(|| FilterError::ColumnNotFound(id.to_string()).into())
    }

    fn save_column(&self, column: &Column) -> Result<()> {
        let mut workspace = self.workspace()?;
        let stored = workspace
            .column_mut(&column.id)
            .ok_or_else(|| FilterError::ColumnNotFound(column.id.clone()))?;
        *stored = column.clone();
        Ok(())
    }

    fn add_column(&self, column: &Column) -> Result<()> {
        let mut workspace = self.workspace()?;
        if workspace.column(&column.id).is_some() {
            return Err(FilterError::DuplicateColumn(column.id.clone()).into());
        }
        workspace.columns.push(column.clone());
        Ok(())
    }

    fn remove_column(&self, id: &str) -> Result<()> {
        let mut workspace = self.workspace()?;
        let before = workspace.columns.len();
        workspace.columns.retain(|column| column.id != id);
        if workspace.columns.len() == before {
            return Err(FilterError::ColumnNotFound(id.to_string()).into());
        }
        workspace.counts.remove(id);
        Ok(())
    }
}

impl FilterCountSource for InMemoryColumnRepository {
    fn counts_for(&self, column_id: &str) -> Result<CountSnapshot> {
        Ok(self
            .workspace()?
            .counts
            .get(column_id)
            .cloned()
            .unwrap_or_default())
    }
}
