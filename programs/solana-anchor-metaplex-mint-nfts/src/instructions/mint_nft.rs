use anchor_lang::prelude::*;
use anchor_spl::token;

use crate::context::MintNft;
use crate::event::NftIssued;
use crate::operations::{metadata_operations, token_operations, NftMetadata};
use crate::state::IssuanceStep;
use crate::util::address::{holding_address, NftAddresses};
use crate::util::account_checks::{check_account, check_accounts, AccountRule};
use crate::util::constants::{MINT_AUTHORITY_SEED, MINT_SEED};

/// Issues the NFT: creates the mint, the caller's holding account and the
/// metadata record, and mints the single unit. Any failure aborts the whole
/// instruction and the config stays `Configured`.
pub fn mint_nft(ctx: Context<MintNft>, title: String, symbol: String, uri: String) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let caller_key = ctx.accounts.caller.key();

    let caller = ctx.accounts.caller.to_account_info();

    ctx.accounts.config.state.apply(IssuanceStep::Issue)?;
    ctx.accounts.config.require_authority(&caller_key)?;
    check_account(&caller, &AccountRule::derived(caller_key).signed())?;

    // Bounds are checked before anything is written
    let fields = NftMetadata::new(title, symbol, uri)?;

    msg!("1. Deriving issuance addresses...");
    let addresses = NftAddresses::derive(&config_key)?;
    let (holding, _) = holding_address(&caller_key, &addresses.mint)?;

    let mint = ctx.accounts.mint.to_account_info();
    let mint_authority = ctx.accounts.mint_authority.to_account_info();
    let metadata = ctx.accounts.metadata.to_account_info();
    let holding_account = ctx.accounts.holding_account.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    msg!("2. Validating accounts...");
    check_accounts(&[
        (&mint, AccountRule::vacant(addresses.mint, token::ID)),
        (&mint_authority, AccountRule::derived(addresses.mint_authority)),
        (&metadata, AccountRule::derived(addresses.metadata)),
        (&holding_account, AccountRule::vacant(holding, token::ID)),
    ])?;
    metadata_operations::ensure_metadata_vacant(&metadata)?;

    let mint_bump = [addresses.mint_bump];
    let mint_seeds: &[&[u8]] = &[MINT_SEED, config_key.as_ref(), &mint_bump];
    let authority_bump = [addresses.mint_authority_bump];
    let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, addresses.mint.as_ref(), &authority_bump];

    msg!("3. Initializing mint {}...", addresses.mint);
    token_operations::initialize_nft_mint(
        &mint,
        &addresses.mint_authority,
        &caller,
        &system_program,
        &token_program,
        mint_seeds,
    )?;

    msg!("4. Creating holding account {}...", holding);
    token_operations::create_holding_account(
        &holding_account,
        &caller,
        &mint,
        &caller,
        &system_program,
        &token_program,
        &ctx.accounts.associated_token_program.to_account_info(),
    )?;

    msg!("5. Minting the single unit...");
    token_operations::mint_single_unit(
        &mint,
        &holding_account,
        &mint_authority,
        &token_program,
        &[authority_seeds],
    )?;
    token_operations::verify_single_supply(&mint)?;

    msg!("6. Creating metadata account {}...", addresses.metadata);
    metadata_operations::create_metadata_record(
        &metadata,
        &mint,
        &mint_authority,
        &caller,
        &caller,
        &ctx.accounts.token_metadata_program.to_account_info(),
        &system_program,
        &ctx.accounts.rent.to_account_info(),
        fields.clone(),
        &[authority_seeds],
    )?;

    let clock = Clock::get()?;
    ctx.accounts.config.mark_issued(clock.unix_timestamp)?;

    emit!(NftIssued {
        mint: addresses.mint,
        owner: caller_key,
        holding_account: holding,
        metadata: addresses.metadata,
        title: fields.title,
        symbol: fields.symbol,
        uri: fields.uri,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
