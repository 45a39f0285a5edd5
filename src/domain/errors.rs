use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column already exists: {0}")]
    DuplicateColumn(String),

    #[error("unknown option '{option}' for {category}")]
    UnknownOption { category: String, option: String },

    #[error("{category} filters are not available on {column_type} columns")]
    CategoryUnavailable {
        category: String,
        column_type: String,
    },

    #[error("repository {owner}/{repo} is disabled because its owner is excluded")]
    OptionDisabled { owner: String, repo: String },

    #[error("unknown column template: {0}")]
    UnknownTemplate(String),
}

impl FilterError {
    pub fn unknown_option(category: impl ToString, option: impl Into<String>) -> Self {
        Self::UnknownOption {
            category: category.to_string(),
            option: option.into(),
        }
    }
}
