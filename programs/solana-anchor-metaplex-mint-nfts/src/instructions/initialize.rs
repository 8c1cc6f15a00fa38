use anchor_lang::prelude::*;

use crate::context::Initialize;
use crate::event::ProgramConfigured;

/// Moves the program from `Unconfigured` to `Configured` and records the
/// signer as its authority.
pub fn initialize_program(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let clock = Clock::get()?;

    ctx.accounts
        .config
        .configure(authority, ctx.bumps.config, clock.unix_timestamp)?;

    msg!("Program configured. Authority set to {}", authority);

    emit!(ProgramConfigured {
        authority,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
