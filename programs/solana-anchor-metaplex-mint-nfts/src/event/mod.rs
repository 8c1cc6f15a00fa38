pub mod config;
pub mod nft_lifecycle;

pub use config::*;
pub use nft_lifecycle::*;
