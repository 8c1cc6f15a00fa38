use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::MintNftError;

/// State an account is expected to be in when an instruction starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Only the address is checked; used for signing PDAs that never hold data.
    Derived,
    /// Not created yet. `owner` is the program that will own it.
    Vacant { owner: Pubkey },
    /// Created and owned by `owner`.
    Live { owner: Pubkey },
}

/// What one account passed to an instruction has to satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountRule {
    pub address: Pubkey,
    pub expected: Expected,
    pub signer: bool,
}

impl AccountRule {
    pub fn derived(address: Pubkey) -> Self {
        Self { address, expected: Expected::Derived, signer: false }
    }

    pub fn vacant(address: Pubkey, owner: Pubkey) -> Self {
        Self { address, expected: Expected::Vacant { owner }, signer: false }
    }

    pub fn live(address: Pubkey, owner: Pubkey) -> Self {
        Self { address, expected: Expected::Live { owner }, signer: false }
    }

    pub fn signed(mut self) -> Self {
        self.signer = true;
        self
    }
}

/// Checks address, then owner, then signer, then initialization state.
pub fn check_account(info: &AccountInfo, rule: &AccountRule) -> Result<()> {
    require_keys_eq!(*info.key, rule.address, MintNftError::AddressMismatch);

    match rule.expected {
        Expected::Derived => {}
        Expected::Live { owner } => {
            require_keys_eq!(*info.owner, owner, MintNftError::NotOwner);
        }
        Expected::Vacant { owner } => {
            if *info.owner != owner {
                require_keys_eq!(*info.owner, system_program::ID, MintNftError::NotOwner);
            }
        }
    }

    if rule.signer {
        require!(info.is_signer, MintNftError::MissingSigner);
    }

    if let Expected::Vacant { owner } = rule.expected {
        if *info.owner == owner || !info.data_is_empty() {
            msg!("Account {} is already initialized", info.key);
            return err!(MintNftError::AlreadyInitialized);
        }
    }

    Ok(())
}

/// Runs every check in order and stops at the first rejected account.
pub fn check_accounts(checks: &[(&AccountInfo, AccountRule)]) -> Result<()> {
    for (info, rule) in checks {
        check_account(info, rule)?;
    }
    Ok(())
}
