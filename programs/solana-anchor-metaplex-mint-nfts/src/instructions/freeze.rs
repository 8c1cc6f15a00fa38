use anchor_lang::prelude::*;
use anchor_spl::token;

use crate::context::Freeze;
use crate::error::MintNftError;
use crate::event::NftFrozen;
use crate::operations::{metadata_operations, token_operations};
use crate::state::IssuanceStep;
use crate::util::address::NftAddresses;
use crate::util::account_checks::{check_account, check_accounts, AccountRule};
use crate::util::constants::{MINT_AUTHORITY_SEED, TOKEN_METADATA_PROGRAM_ID};

/// Locks the supply for good by creating a zero-supply master edition,
/// which moves the mint authority away from the program, and makes the
/// metadata record immutable.
pub fn freeze_supply(ctx: Context<Freeze>) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let authority_key = ctx.accounts.authority.key();

    let authority = ctx.accounts.authority.to_account_info();

    ctx.accounts.config.require_authority(&authority_key)?;
    check_account(&authority, &AccountRule::derived(authority_key).signed())?;
    ctx.accounts.config.state.apply(IssuanceStep::Freeze)?;

    let addresses = NftAddresses::derive(&config_key)?;

    let mint = ctx.accounts.mint.to_account_info();
    let mint_authority = ctx.accounts.mint_authority.to_account_info();
    let metadata = ctx.accounts.metadata.to_account_info();
    let master_edition = ctx.accounts.master_edition.to_account_info();
    let metadata_program = ctx.accounts.token_metadata_program.to_account_info();

    check_accounts(&[
        (&mint, AccountRule::live(addresses.mint, token::ID)),
        (&mint_authority, AccountRule::derived(addresses.mint_authority)),
        (&metadata, AccountRule::live(addresses.metadata, TOKEN_METADATA_PROGRAM_ID)),
        (&master_edition, AccountRule::vacant(addresses.master_edition, TOKEN_METADATA_PROGRAM_ID)),
    ])?;

    let authority_bump = [addresses.mint_authority_bump];
    let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, addresses.mint.as_ref(), &authority_bump];

    msg!("Creating master edition {}...", addresses.master_edition);
    metadata_operations::create_master_edition(
        &master_edition,
        &mint,
        &authority,
        &mint_authority,
        &authority,
        &metadata,
        &metadata_program,
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &ctx.accounts.rent.to_account_info(),
        &[authority_seeds],
    )?;

    if token_operations::current_mint_authority(&mint)? == Some(addresses.mint_authority) {
        msg!("Mint {} is still controlled by {}", addresses.mint, addresses.mint_authority);
        return err!(MintNftError::MintAuthorityNotRevoked);
    }

    msg!("Locking metadata {}...", addresses.metadata);
    metadata_operations::lock_metadata(&metadata, &authority, &metadata_program)?;

    let clock = Clock::get()?;
    ctx.accounts.config.mark_frozen(clock.unix_timestamp)?;

    msg!("Supply of {} frozen by {}", addresses.mint, authority_key);

    emit!(NftFrozen {
        mint: addresses.mint,
        master_edition: addresses.master_edition,
        authority: authority_key,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
