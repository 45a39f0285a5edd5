use crate::domain::{
    entities::{Column, OptionCategory, TriState},
    errors::FilterError,
    repositories::ColumnRepository,
    services::toggle_option,
};
use anyhow::Result;
use std::sync::Arc;

pub struct ColumnRepositoryUseCase {
    repository: Arc<dyn ColumnRepository>,
}

impl ColumnRepositoryUseCase {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> Arc<dyn ColumnRepository> {
        Arc::clone(&self.repository)
    }
}

pub struct ToggleFilterOption {
    use_case: ColumnRepositoryUseCase,
}

impl ToggleFilterOption {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(
        &self,
        column_id: &str,
        category: OptionCategory,
        option: &str,
        click: TriState,
    ) -> Result<Column> {
        let repository = self.use_case.repository();
        let mut column = repository.get_column(column_id)?;

        let filters = match toggle_option(&column, category, option, click) {
            Ok(filters) => filters,
            Err(error @ FilterError::OptionDisabled { .. }) => {
                tracing::warn!("Ignoring toggle on column {}: {}", column_id, error);
                return Err(error.into());
            }
            Err(error) => return Err(error.into()),
        };

        if filters == column.filters {
            tracing::debug!(
                "Toggle {} {}={} left column {} unchanged",
                category,
                option,
                click,
                column_id
            );
            return Ok(column);
        }

        column.filters = filters;
        repository.save_column(&column)?;
        tracing::info!(
            "Applied {} on {} / {} for column {}",
            click,
            category,
            option,
            column_id
        );

        Ok(column)
    }
}

pub struct ClearColumnFilters {
    use_case: ColumnRepositoryUseCase,
}

impl ClearColumnFilters {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(&self, column_id: &str) -> Result<Column> {
        let repository = self.use_case.repository();
        let mut column = repository.get_column(column_id)?;
        column.filters.clear();
        repository.save_column(&column)?;
        tracing::info!("Cleared filters of column {}", column_id);
        Ok(column)
    }
}
