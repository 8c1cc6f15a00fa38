pub mod account_checks;
pub mod address;
pub mod constants;

pub use account_checks::*;
pub use address::*;
pub use constants::*;
