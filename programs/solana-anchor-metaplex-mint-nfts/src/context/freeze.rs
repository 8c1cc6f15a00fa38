use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use crate::error::MintNftError;
use crate::state::ProgramConfig;
use crate::util::constants::*;

#[derive(Accounts)]
pub struct Freeze<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// CHECK: Must match the config authority and sign; checked in the handler
    /// so a missing signature reports MissingSigner. Also the metadata update authority.
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: Derived from the config and validated in the handler
    #[account(mut)]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: PDA signer for the mint, validated against its seeds
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: Derived from the mint and validated in the handler
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: Derived from the mint and validated before Metaplex creates it
    #[account(mut)]
    pub master_edition: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,

    /// CHECK: mpl-token-metadata program - validated by address constraint
    #[account(address = TOKEN_METADATA_PROGRAM_ID @ MintNftError::AddressMismatch)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
