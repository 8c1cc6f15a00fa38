use anchor_lang::prelude::*;

pub mod context;
pub mod error;
pub mod event;
pub mod instructions;
pub mod operations;
pub mod state;
pub mod util;

pub use context::*;
pub use error::MintNftError;
pub use state::*;

declare_id!("CgiJkL1bjbHggS4mwQMx4cJR7JYQxcRjADvAjhpmzKFe");

/// Issues a single Metaplex NFT per program deployment.
///
/// `initialize` records the authority, `mint` creates the mint, the
/// holding account and the metadata record in one instruction, and
/// `freeze` hands the mint over to a zero-supply master edition.
#[program]
pub mod solana_anchor_metaplex_mint_nfts {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize_program(ctx)
    }

    pub fn mint(ctx: Context<MintNft>, title: String, symbol: String, uri: String) -> Result<()> {
        instructions::mint_nft(ctx, title, symbol, uri)
    }

    pub fn freeze(ctx: Context<Freeze>) -> Result<()> {
        instructions::freeze_supply(ctx)
    }
}
