pub mod column_operations;
pub mod filter_operations;

pub use column_operations::*;
pub use filter_operations::*;
