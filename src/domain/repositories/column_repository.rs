use crate::domain::entities::Column;
use anyhow::Result;

pub trait ColumnRepository: Send + Sync {
    fn list_columns(&self) -> Result<Vec<Column>>;
    fn get_column(&self, id: &str) -> Result<Column>;
    fn save_column(&self, column: &Column) -> Result<()>;
    fn add_column(&self, column: &Column) -> Result<()>;
    fn remove_column(&self, id: &str) -> Result<()>;
}
