use super::ColumnRepositoryUseCase;
use crate::domain::{
    entities::{Column, CountSnapshot, find_template},
    repositories::{ColumnRepository, FilterCountSource},
};
use anyhow::Result;
use std::sync::Arc;

pub struct ListColumns {
    use_case: ColumnRepositoryUseCase,
}

impl ListColumns {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(&self) -> Result<Vec<Column>> {
        self.use_case.repository().list_columns()
    }
}

pub struct GetColumn {
    use_case: ColumnRepositoryUseCase,
}

impl GetColumn {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(&self, column_id: &str) -> Result<Column> {
        self.use_case.repository().get_column(column_id)
    }
}

pub struct GetColumnCounts {
    source: Arc<dyn FilterCountSource>,
}

impl GetColumnCounts {
    pub fn new(source: Arc<dyn FilterCountSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, column_id: &str) -> Result<CountSnapshot> {
        self.source.counts_for(column_id)
    }
}

pub struct AddColumnFromTemplate {
    use_case: ColumnRepositoryUseCase,
}

impl AddColumnFromTemplate {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(&self, column_id: &str, template_name: &str, params: &[String]) -> Result<Column> {
        let template = find_template(template_name)?;
        let column = Column::from_template(column_id, &template, params);

        self.use_case.repository().add_column(&column)?;
        tracing::info!(
            "Added column {} from template {}",
            column_id,
            template_name
        );

        Ok(column)
    }
}

pub struct RemoveColumn {
    use_case: ColumnRepositoryUseCase,
}

impl RemoveColumn {
    pub fn new(repository: Arc<dyn ColumnRepository>) -> Self {
        Self {
            use_case: ColumnRepositoryUseCase::new(repository),
        }
    }

    pub fn execute(&self, column_id: &str) -> Result<()> {
        self.use_case.repository().remove_column(column_id)?;
        tracing::info!("Removed column {}", column_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ColumnType, CounterMetadata, OptionCategory};
    use crate::domain::errors::FilterError;
    use crate::infrastructure::InMemoryColumnRepository;

    #[test]
    fn added_columns_are_listed_and_removable() {
        let repository = Arc::new(InMemoryColumnRepository::default());

        let column = AddColumnFromTemplate::new(repository.clone())
            .execute("home", "activity/dashboard", &["octocat".to_string()])
            .unwrap();
        assert_eq!(column.column_type, ColumnType::Activity);

        let listed = ListColumns::new(repository.clone()).execute().unwrap();
        assert_eq!(listed, vec![column.clone()]);
        assert_eq!(GetColumn::new(repository.clone()).execute("home").unwrap(), column);

        RemoveColumn::new(repository.clone()).execute("home").unwrap();
        assert!(ListColumns::new(repository).execute().unwrap().is_empty());
    }

    #[test]
    fn adding_rejects_unknown_templates_and_duplicate_ids() {
        let repository = Arc::new(InMemoryColumnRepository::default());
        let add = AddColumnFromTemplate::new(repository.clone());

        let error = add.execute("x", "nope/nothing", &[]).unwrap_err();
        assert_eq!(
            error.downcast_ref::<FilterError>(),
            Some(&FilterError::UnknownTemplate("nope/nothing".to_string()))
        );
        assert!(repository.list_columns().unwrap().is_empty());

        add.execute("inbox", "notifications/all", &[]).unwrap();
        let error = add.execute("inbox", "notifications/all", &[]).unwrap_err();
        assert_eq!(
            error.downcast_ref::<FilterError>(),
            Some(&FilterError::DuplicateColumn("inbox".to_string()))
        );
    }

    #[test]
    fn counts_come_from_the_count_source() {
        let repository = Arc::new(InMemoryColumnRepository::default());
        repository
            .set_counts(
                "inbox",
                CountSnapshot::default().with_option(
                    OptionCategory::State,
                    "open",
                    CounterMetadata::total(4),
                ),
            )
            .unwrap();
        let counts = GetColumnCounts::new(repository);

        assert_eq!(
            counts.execute("inbox").unwrap().option(OptionCategory::State, "open"),
            Some(CounterMetadata::total(4))
        );
        assert_eq!(counts.execute("other").unwrap(), CountSnapshot::default());
    }
}
