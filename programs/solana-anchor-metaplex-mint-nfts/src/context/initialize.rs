use anchor_lang::prelude::*;
use crate::state::ProgramConfig;
use crate::util::constants::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    // Created on demand so a repeated call reaches the state check
    // and fails with AlreadyConfigured.
    #[account(
        init_if_needed,
        payer = authority,
        space = ProgramConfig::SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
