pub mod column_repository;
pub mod count_source;

pub use column_repository::ColumnRepository;
pub use count_source::FilterCountSource;
