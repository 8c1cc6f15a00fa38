use anchor_lang::prelude::*;

/// NFT lifecycle events
#[event]
pub struct NftIssued {
    /// The mint account of the newly created NFT
    pub mint: Pubkey,
    /// NFT owner
    pub owner: Pubkey,
    /// Associated token account holding the unit
    pub holding_account: Pubkey,
    /// Metaplex metadata account
    pub metadata: Pubkey,
    pub title: String,
    pub symbol: String,
    pub uri: String,
    /// Timestamp when minted
    pub timestamp: i64,
}

#[event]
pub struct NftFrozen {
    /// The mint account whose supply was locked
    pub mint: Pubkey,
    /// Master edition now holding the mint authority
    pub master_edition: Pubkey,
    /// Authority that froze the supply
    pub authority: Pubkey,
    /// Timestamp when frozen
    pub timestamp: i64,
}
