use anchor_lang::prelude::*;

use crate::error::MintNftError;

/// Lifecycle of the program's single issuance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum IssuanceState {
    /// Account allocated but never configured. Must stay the first variant:
    /// a zeroed account deserializes to it.
    #[default]
    Unconfigured,
    Configured,
    Issued,
    Frozen,
}

/// Transitions driven by the program's instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssuanceStep {
    Configure,
    Issue,
    Freeze,
}

impl IssuanceState {
    /// Returns the state reached by applying `step`, or the error that
    /// classifies why the step is not allowed from here.
    pub fn apply(self, step: IssuanceStep) -> Result<IssuanceState> {
        match (self, step) {
            (IssuanceState::Unconfigured, IssuanceStep::Configure) => Ok(IssuanceState::Configured),
            (IssuanceState::Configured, IssuanceStep::Issue) => Ok(IssuanceState::Issued),
            (IssuanceState::Issued, IssuanceStep::Freeze) => Ok(IssuanceState::Frozen),
            (state, step) => {
                msg!("Cannot apply {:?} while {:?}", step, state);
                match step {
                    IssuanceStep::Configure => err!(MintNftError::AlreadyConfigured),
                    IssuanceStep::Issue => err!(MintNftError::NotConfigured),
                    IssuanceStep::Freeze => err!(MintNftError::NotIssued),
                }
            }
        }
    }
}

/// Program configuration account
/// Stores the authority and where the issuance stands
#[account]
#[derive(Debug, InitSpace)]
pub struct ProgramConfig {
    /// Identity allowed to mint and freeze
    pub authority: Pubkey,
    /// Current lifecycle state
    pub state: IssuanceState,
    /// Bump seed for PDA
    pub bump: u8,
    /// Timestamp when configured
    pub configured_at: i64,
    /// Timestamp when the NFT was issued, zero before
    pub issued_at: i64,
    /// Timestamp when the supply was frozen, zero before
    pub frozen_at: i64,
}

impl ProgramConfig {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn configure(&mut self, authority: Pubkey, bump: u8, now: i64) -> Result<()> {
        self.state = self.state.apply(IssuanceStep::Configure)?;
        self.authority = authority;
        self.bump = bump;
        self.configured_at = now;
        Ok(())
    }

    pub fn mark_issued(&mut self, now: i64) -> Result<()> {
        self.state = self.state.apply(IssuanceStep::Issue)?;
        self.issued_at = now;
        Ok(())
    }

    pub fn mark_frozen(&mut self, now: i64) -> Result<()> {
        self.state = self.state.apply(IssuanceStep::Freeze)?;
        self.frozen_at = now;
        Ok(())
    }

    /// Fails with `MissingSigner` unless `signer` is the recorded authority.
    pub fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.authority, MintNftError::MissingSigner);
        Ok(())
    }
}
