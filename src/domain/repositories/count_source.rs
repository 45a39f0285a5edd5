use crate::domain::entities::CountSnapshot;
use anyhow::Result;

pub trait FilterCountSource: Send + Sync {
    fn counts_for(&self, column_id: &str) -> Result<CountSnapshot>;
}
