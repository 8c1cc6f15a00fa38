pub mod freeze;
pub mod initialize;
pub mod mint_nft;

pub use freeze::*;
pub use initialize::*;
pub use mint_nft::*;
