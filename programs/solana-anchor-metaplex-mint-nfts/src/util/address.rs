//! Program-derived addresses used by the issuance.
//!
//! Nothing here is stored on chain: every instruction re-derives the
//! addresses it needs from the seeds below, so a caller can never point the
//! program at a stale or substituted account.

use anchor_lang::prelude::*;
use anchor_spl::{associated_token, token};

use crate::error::MintNftError;
use crate::util::constants::*;

/// Finds `seeds`' address and canonical bump under `program_id`.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        msg!("Address derivation exhausted every bump under {}", program_id);
        error!(MintNftError::AddressDerivationExhausted)
    })
}

pub fn mint_address(config: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(&[MINT_SEED, config.as_ref()], &crate::ID)
}

pub fn mint_authority_address(mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(&[MINT_AUTHORITY_SEED, mint.as_ref()], &crate::ID)
}

pub fn metadata_address(mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(
        &[METADATA_SEED, TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn master_edition_address(mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            MASTER_EDITION_SEED,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

/// Associated token account of `owner` for `mint`.
pub fn holding_address(owner: &Pubkey, mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(
        &[owner.as_ref(), token::ID.as_ref(), mint.as_ref()],
        &associated_token::ID,
    )
}

/// Every address hanging off the program config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NftAddresses {
    pub mint: Pubkey,
    pub mint_bump: u8,
    pub mint_authority: Pubkey,
    pub mint_authority_bump: u8,
    pub metadata: Pubkey,
    pub master_edition: Pubkey,
}

impl NftAddresses {
    pub fn derive(config: &Pubkey) -> Result<Self> {
        let (mint, mint_bump) = mint_address(config)?;
        let (mint_authority, mint_authority_bump) = mint_authority_address(&mint)?;
        let (metadata, _) = metadata_address(&mint)?;
        let (master_edition, _) = master_edition_address(&mint)?;

        Ok(Self {
            mint,
            mint_bump,
            mint_authority,
            mint_authority_bump,
            metadata,
            master_edition,
        })
    }
}
