pub mod memory_repository;
pub mod workspace_repository;

pub use memory_repository::InMemoryColumnRepository;
pub use workspace_repository::JsonColumnRepository;
