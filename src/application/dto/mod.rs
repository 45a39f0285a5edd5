use crate::domain::entities::{Column, ColumnTemplate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummaryDto {
    pub id: String,
    pub column_type: String,
    pub title: String,
    pub filtered: bool,
}

impl From<&Column> for ColumnSummaryDto {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id.clone(),
            column_type: column.column_type.to_string(),
            title: column.display_title().to_string(),
            filtered: column.has_any_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDto {
    pub name: String,
    pub menu_title: String,
    pub params: Vec<String>,
}

impl From<&ColumnTemplate> for TemplateDto {
    fn from(template: &ColumnTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            menu_title: template.menu_title.to_string(),
            params: template.params.iter().map(|param| param.to_string()).collect(),
        }
    }
}
