use crate::application::use_cases::*;
use crate::domain::repositories::{ColumnRepository, FilterCountSource};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub list_columns: Arc<ListColumns>,
    pub get_column: Arc<GetColumn>,
    pub get_counts: Arc<GetColumnCounts>,
    pub add_column: Arc<AddColumnFromTemplate>,
    pub remove_column: Arc<RemoveColumn>,
    pub toggle_option: Arc<ToggleFilterOption>,
    pub clear_filters: Arc<ClearColumnFilters>,
}

impl UseCaseContainer {
    pub fn new(
        column_repository: Arc<dyn ColumnRepository>,
        count_source: Arc<dyn FilterCountSource>,
    ) -> Self {
        Self {
            list_columns: Arc::new(ListColumns::new(Arc::clone(&column_repository))),
            get_column: Arc::new(GetColumn::new(Arc::clone(&column_repository))),
            get_counts: Arc::new(GetColumnCounts::new(Arc::clone(&count_source))),
            add_column: Arc::new(AddColumnFromTemplate::new(Arc::clone(&column_repository))),
            remove_column: Arc::new(RemoveColumn::new(Arc::clone(&column_repository))),
            toggle_option: Arc::new(ToggleFilterOption::new(Arc::clone(&column_repository))),
            clear_filters: Arc::new(ClearColumnFilters::new(Arc::clone(&column_repository))),
        }
    }
}
