use anchor_lang::prelude::*;
use anchor_spl::{associated_token::AssociatedToken, token::Token};
use crate::error::MintNftError;
use crate::state::ProgramConfig;
use crate::util::constants::*;

#[derive(Accounts)]
pub struct MintNft<'info> {
    // Created on demand so minting before initialize reaches the state
    // check and fails with NotConfigured; the failed instruction rolls it back.
    #[account(
        init_if_needed,
        payer = caller,
        space = ProgramConfig::SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// CHECK: Authority minting the NFT, paying for it and receiving it.
    /// Signature is checked in the handler so a missing one reports MissingSigner.
    #[account(mut)]
    pub caller: UncheckedAccount<'info>,

    /// CHECK: Derived from the config and validated before it is created
    #[account(mut)]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: PDA signer for the mint, validated against its seeds
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: Derived from the mint and validated before Metaplex creates it
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: Caller's associated token account, validated before it is created
    #[account(mut)]
    pub holding_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// CHECK: mpl-token-metadata program - validated by address constraint
    #[account(address = TOKEN_METADATA_PROGRAM_ID @ MintNftError::AddressMismatch)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
