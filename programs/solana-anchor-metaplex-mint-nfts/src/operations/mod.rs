pub mod metadata_operations;
pub mod token_operations;

pub use metadata_operations::*;
pub use token_operations::*;
