use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::{invoke, invoke_signed};
use mpl_token_metadata::instructions::{
    CreateMasterEditionV3Builder, CreateMetadataAccountV3Builder, UpdateMetadataAccountV2Builder,
};
use mpl_token_metadata::types::DataV2;

use crate::error::MintNftError;
use crate::util::constants::*;

/// Title, symbol and URI of the NFT, checked against the Token Metadata
/// program's byte limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftMetadata {
    pub title: String,
    pub symbol: String,
    pub uri: String,
}

impl NftMetadata {
    pub fn new(title: String, symbol: String, uri: String) -> Result<Self> {
        check_length("title", &title, MAX_TITLE_LENGTH)?;
        check_length("symbol", &symbol, MAX_SYMBOL_LENGTH)?;
        check_length("uri", &uri, MAX_URI_LENGTH)?;
        Ok(Self { title, symbol, uri })
    }

    fn into_data(self) -> DataV2 {
        DataV2 {
            name: self.title,
            symbol: self.symbol,
            uri: self.uri,
            seller_fee_basis_points: DEFAULT_SELLER_FEE_BASIS_POINTS,
            creators: None,
            collection: None,
            uses: None,
        }
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        msg!("{} is {} bytes, limit is {}", field, value.len(), max);
        return err!(MintNftError::FieldTooLong);
    }
    Ok(())
}

/// Fails with `MetadataAlreadyExists` if the metadata PDA already holds a record.
pub fn ensure_metadata_vacant(metadata: &AccountInfo) -> Result<()> {
    if !metadata.data_is_empty() {
        msg!("Metadata account {} already exists", metadata.key);
        return err!(MintNftError::MetadataAlreadyExists);
    }
    Ok(())
}

/// Create metadata account using CPI to Metaplex Token Metadata program.
/// The mint authority is a PDA and signs through `authority_signer_seeds`.
pub fn create_metadata_record<'info>(
    metadata: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    update_authority: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &AccountInfo<'info>,
    fields: NftMetadata,
    authority_signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    ensure_metadata_vacant(metadata)?;

    let ix = CreateMetadataAccountV3Builder::new()
        .metadata(*metadata.key)
        .mint(*mint.key)
        .mint_authority(*mint_authority.key)
        .payer(*payer.key)
        .update_authority(*update_authority.key, true)
        .system_program(*system_program.key)
        .rent(Some(*rent.key))
        .data(fields.into_data())
        .is_mutable(DEFAULT_IS_MUTABLE)
        .instruction();

    // [metadata, mint, mint_authority, payer, update_authority, system_program, rent]
    invoke_signed(
        &ix,
        &[
            metadata.clone(),
            mint.clone(),
            mint_authority.clone(),
            payer.clone(),
            update_authority.clone(),
            system_program.clone(),
            rent.clone(),
            metadata_program.clone(),
        ],
        authority_signer_seeds,
    )
    .map_err(|e| {
        msg!("Failed to create metadata account: {:?}", e);
        e
    })?;

    Ok(())
}

/// Create the master edition with no printable supply. The Token Metadata
/// program takes over the mint and freeze authorities as part of this call.
pub fn create_master_edition<'info>(
    master_edition: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    update_authority: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    metadata: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &AccountInfo<'info>,
    authority_signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let ix = CreateMasterEditionV3Builder::new()
        .edition(*master_edition.key)
        .mint(*mint.key)
        .update_authority(*update_authority.key)
        .mint_authority(*mint_authority.key)
        .payer(*payer.key)
        .metadata(*metadata.key)
        .token_program(*token_program.key)
        .system_program(*system_program.key)
        .rent(Some(*rent.key))
        .max_supply(MASTER_EDITION_MAX_SUPPLY)
        .instruction();

    // [edition, mint, update_authority, mint_authority, payer, metadata, token_program, system_program, rent]
    invoke_signed(
        &ix,
        &[
            master_edition.clone(),
            mint.clone(),
            update_authority.clone(),
            mint_authority.clone(),
            payer.clone(),
            metadata.clone(),
            token_program.clone(),
            system_program.clone(),
            rent.clone(),
            metadata_program.clone(),
        ],
        authority_signer_seeds,
    )
    .map_err(|e| {
        msg!("Failed to create master edition: {:?}", e);
        e
    })?;

    Ok(())
}

/// Clears `is_mutable` on the metadata record. The update authority signs
/// the transaction, so no PDA seeds are needed.
pub fn lock_metadata<'info>(
    metadata: &AccountInfo<'info>,
    update_authority: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
) -> Result<()> {
    let ix = UpdateMetadataAccountV2Builder::new()
        .metadata(*metadata.key)
        .update_authority(*update_authority.key)
        .is_mutable(false)
        .instruction();

    invoke(
        &ix,
        &[
            metadata.clone(),
            update_authority.clone(),
            metadata_program.clone(),
        ],
    )
    .map_err(|e| {
        msg!("Failed to lock metadata account: {:?}", e);
        e
    })?;

    Ok(())
}
