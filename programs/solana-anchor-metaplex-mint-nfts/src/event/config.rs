use anchor_lang::prelude::*;

/// Program configuration events
#[event]
pub struct ProgramConfigured {
    /// Program authority
    pub authority: Pubkey,
    /// Timestamp of configuration
    pub timestamp: i64,
}
